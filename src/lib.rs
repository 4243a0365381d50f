//! # notihub
//!
//! **Notihub** is a synchronous notification hub for Rust.
//!
//! It maps event names (optionally hierarchical, segmented by a configurable
//! delimiter) to ordered lists of listeners, and dispatches emissions in-line
//! on the caller's thread. The crate is designed as a building block for
//! higher-level components that need decoupled in-process notification
//! without an async runtime in the hot path.
//!
//! ## Architecture
//! ```text
//!  on / once / many            emit(name, &payload)
//!        │                           │
//!        ▼                           ▼
//! ┌──────────────────────────────────────────────────────┐
//! │ NotificationHub<P>                                   │
//! │  - wildcard / delimiter (fixed at construction)      │
//! │  - ceiling (advisory, mutable, seeded from the       │
//! │    process-wide default when not given explicitly)   │
//! │  - Registry: bucket per subscription name            │
//! │  - any-listeners: run for every emission             │
//! └──────┬───────────────────────────────────────────────┘
//!        ▼
//!   Pattern match over delimiter segments (`*`, `**`)
//!        ▼
//!   snapshot ─► live-check ─► invoke in registration order
//! ```
//!
//! ## Dispatch rules
//! - Listeners run synchronously, in registration order, on the emitter's
//!   thread. `emit` returns whether at least one listener ran.
//! - The matching entries are snapshotted when `emit` starts; listeners
//!   registered during an emission are not invoked by it.
//! - An entry removed mid-emission (by an earlier listener) is skipped.
//! - One-shot and counted entries are retired *before* their callback runs,
//!   so recursive emissions cannot invoke them twice.
//! - Listener panics are not caught; they propagate to `emit`'s caller.
//!
//! ## Features
//! | Area              | Description                                               | Key types                    |
//! |-------------------|-----------------------------------------------------------|------------------------------|
//! | **Subscription**  | Exact and wildcard registration, one-shot and counted.    | [`NotificationHub`]          |
//! | **Patterns**      | Delimiter-segmented matching with `*` and `**`.           | [`Pattern`]                  |
//! | **Configuration** | Per-hub config plus a process-wide default ceiling.       | [`HubConfig`]                |
//! | **Errors**        | Typed errors for the async bridge.                        | [`HubError`]                 |
//!
//! ## Optional features
//! - `bridge`: async adapters (`wait_for`, `stream`) over tokio sync channels.
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use notihub::{HubConfig, NotificationHub};
//!
//! let hub: NotificationHub<String> = NotificationHub::with_config(HubConfig {
//!     wildcard: true,
//!     delimiter: ".".into(),
//!     max_listeners: Some(20),
//! });
//!
//! hub.on("job.done", |name: &String| println!("finished: {name}"));
//! hub.once("job.*", |name: &String| println!("first job event: {name}"));
//!
//! let delivered = hub.emit("job.done", &"backup".to_string());
//! assert!(delivered);
//! ```
mod error;
mod hub;
mod pattern;

// ---- Public re-exports ----

pub use error::HubError;
pub use hub::{default_max_listeners, set_default_max_listeners, HubConfig, ListenerId, NotificationHub};
pub use pattern::Pattern;

// Optional: async adapters over the synchronous hub.
// Enable with: `--features bridge`
#[cfg(feature = "bridge")]
mod bridge;

// Optional: expose a simple built-in log listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod writers;
#[cfg(feature = "logging")]
pub use writers::LogWriter;
