//! # Hub configuration and the process-wide default ceiling.
//!
//! [`HubConfig`] defines a hub's behavior at construction: wildcard mode,
//! the delimiter used to segment hierarchical event names, and the advisory
//! listener ceiling. When `max_listeners` is left unset, the ceiling is
//! seeded from the process-wide default **at construction time**; writing
//! the default later never changes hubs that already exist.
//!
//! # Example
//! ```
//! use notihub::{HubConfig, NotificationHub};
//!
//! let cfg = HubConfig {
//!     wildcard: true,
//!     delimiter: "::".into(),
//!     max_listeners: Some(20),
//! };
//! let hub: NotificationHub<()> = NotificationHub::with_config(cfg);
//!
//! assert!(hub.wildcard());
//! assert_eq!(hub.delimiter(), "::");
//! assert_eq!(hub.max_listeners(), 20);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Initial value of the process-wide default listener ceiling.
pub(crate) const INITIAL_DEFAULT_CEILING: usize = 10;

/// Process-wide default ceiling, read at hub construction.
static DEFAULT_MAX_LISTENERS: AtomicUsize = AtomicUsize::new(INITIAL_DEFAULT_CEILING);

/// Returns the current process-wide default listener ceiling.
#[must_use]
pub fn default_max_listeners() -> usize {
    DEFAULT_MAX_LISTENERS.load(Ordering::Relaxed)
}

/// Sets the process-wide default listener ceiling.
///
/// Affects only hubs constructed afterward without an explicit
/// `max_listeners`; already-constructed hubs keep their captured value.
pub fn set_default_max_listeners(n: usize) {
    DEFAULT_MAX_LISTENERS.store(n, Ordering::Relaxed);
}

/// Construction-time configuration for a [`NotificationHub`](crate::NotificationHub).
///
/// Controls wildcard mode, name segmentation and the advisory listener
/// ceiling. `wildcard` and `delimiter` are fixed for the hub's lifetime;
/// the ceiling stays mutable via
/// [`set_max_listeners`](crate::NotificationHub::set_max_listeners).
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Enables wildcard subscriptions (`*`, `**`) over segmented names.
    pub wildcard: bool,
    /// Separator used to segment hierarchical event names.
    pub delimiter: String,
    /// Per-event listener ceiling; `None` seeds from
    /// [`default_max_listeners`] at construction.
    pub max_listeners: Option<usize>,
}

impl Default for HubConfig {
    /// Provides a default configuration:
    /// - `wildcard = false`
    /// - `delimiter = "."`
    /// - `max_listeners = None` (seed from the process-wide default)
    fn default() -> Self {
        Self {
            wildcard: false,
            delimiter: ".".to_string(),
            max_listeners: None,
        }
    }
}
