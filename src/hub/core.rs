//! # NotificationHub - registration, removal and synchronous dispatch.
//!
//! The hub is a registry plus dispatch table: there is no state machine
//! beyond "entry present / absent" per subscription name. Listeners run
//! in-line on the emitter's thread, in registration order, with no
//! suspension point; a listener that itself emits re-enters the hub
//! against the live registry.
//!
//! ## Dispatch policy
//! - The set of matching entries is snapshotted when `emit` starts, so
//!   listeners registered during an emission are not invoked by it.
//! - Before each invocation the live registry is re-checked: an entry
//!   removed by an earlier listener of the same emission is skipped.
//! - Counted entries (`once`, `many`) are retired *before* their callback
//!   runs, so neither later listeners nor recursive emissions can fire
//!   them past their invocation count.
//! - Any-listeners run first, then matched per-event listeners sorted by
//!   registration id. Both count toward `emit`'s return value.
//! - Listener panics are not caught; they abort the remaining listeners of
//!   that emission and propagate to `emit`'s caller.
//!
//! # Example
//! ```
//! use notihub::NotificationHub;
//!
//! let hub = NotificationHub::new();
//! let heard = std::rc::Rc::new(std::cell::Cell::new(0u32));
//!
//! let h = std::rc::Rc::clone(&heard);
//! hub.on("tick", move |n: &u32| h.set(h.get() + *n));
//!
//! hub.emit("tick", &2);
//! hub.emit("tick", &3);
//! assert_eq!(heard.get(), 5);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::hub::config::{default_max_listeners, HubConfig};
use crate::hub::entry::ListenerId;
use crate::hub::registry::Registry;

/// Synchronous notification hub, generic over the payload type.
///
/// Single-threaded by design: the hub uses `Rc`/`RefCell` interior
/// mutability and is deliberately `!Send + !Sync`. Reentrant emissions
/// are supported; concurrent ones are not a concept here.
pub struct NotificationHub<P> {
    wildcard: bool,
    delimiter: String,
    ceiling: Cell<usize>,
    registry: RefCell<Registry<P>>,
}

impl<P> Default for NotificationHub<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> NotificationHub<P> {
    /// Creates a hub with [`HubConfig::default`]: exact matching, `.`
    /// delimiter, ceiling seeded from the process-wide default.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates a hub from an explicit configuration.
    ///
    /// A `max_listeners` of `None` captures the process-wide default at
    /// this moment; later writes to the default do not reach this hub.
    #[must_use]
    pub fn with_config(config: HubConfig) -> Self {
        let ceiling = config.max_listeners.unwrap_or_else(default_max_listeners);
        Self {
            wildcard: config.wildcard,
            delimiter: config.delimiter,
            ceiling: Cell::new(ceiling),
            registry: RefCell::new(Registry::new()),
        }
    }

    // ---------------------------
    // Registration
    // ---------------------------

    /// Registers `listener` for `event`.
    ///
    /// In wildcard mode the name may contain wildcard segments (`*`, `**`)
    /// split by the hub's delimiter. Exceeding the listener ceiling logs a
    /// warning but never rejects the registration.
    pub fn on(&self, event: &str, listener: impl Fn(&P) + 'static) -> ListenerId {
        self.register(event, None, Rc::new(listener))
    }

    /// As [`on`](Self::on), but the entry is retired after its first
    /// invocation, before any later listener of the same emission runs.
    pub fn once(&self, event: &str, listener: impl Fn(&P) + 'static) -> ListenerId {
        self.register(event, Some(1), Rc::new(listener))
    }

    /// As [`on`](Self::on), but the entry is retired after `times`
    /// invocations. A `times` of 0 is clamped to 1.
    pub fn many(&self, event: &str, times: u32, listener: impl Fn(&P) + 'static) -> ListenerId {
        self.register(event, Some(times.max(1)), Rc::new(listener))
    }

    /// Registers a listener invoked for every emission, receiving the
    /// emitted name alongside the payload.
    ///
    /// Any-listeners run before the per-event listeners of an emission and
    /// are removed only by [`off_any`](Self::off_any), never by
    /// [`remove_all_listeners`](Self::remove_all_listeners).
    pub fn on_any(&self, listener: impl Fn(&str, &P) + 'static) -> ListenerId {
        self.registry.borrow_mut().insert_any(Rc::new(listener))
    }

    fn register(&self, event: &str, times: Option<u32>, callback: Rc<dyn Fn(&P)>) -> ListenerId {
        self.registry.borrow_mut().insert(
            event,
            &self.delimiter,
            self.wildcard,
            times,
            callback,
            self.ceiling.get(),
        )
    }

    // ---------------------------
    // Removal
    // ---------------------------

    /// Removes the listener registered under the exact `event` name with
    /// this id. Returns false (no-op, not an error) when absent.
    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        self.registry.borrow_mut().remove(event, id)
    }

    /// Removes an any-listener. Returns false when absent.
    pub fn off_any(&self, id: ListenerId) -> bool {
        self.registry.borrow_mut().remove_any(id)
    }

    /// Clears every event's listener list.
    ///
    /// Configuration (`wildcard`, `delimiter`, the ceiling) survives, as do
    /// any-listeners. Idempotent.
    pub fn remove_all_listeners(&self) {
        self.registry.borrow_mut().clear();
    }

    /// Clears the listener list of one exact subscription name.
    pub fn remove_listeners(&self, event: &str) {
        self.registry.borrow_mut().clear_event(event);
    }

    // ---------------------------
    // Dispatch
    // ---------------------------

    /// Invokes, synchronously and in registration order, every listener
    /// whose subscription matches `event`. Returns whether at least one
    /// listener was invoked.
    pub fn emit(&self, event: &str, payload: &P) -> bool {
        // Snapshot under the borrow, release before invoking anything so
        // listeners can re-enter the hub.
        let (any, matched) = {
            let reg = self.registry.borrow();
            (
                reg.any_snapshot(),
                reg.matches(event, &self.delimiter, self.wildcard),
            )
        };

        let mut invoked = false;
        for entry in any {
            if !self.registry.borrow().contains_any(entry.id) {
                continue;
            }
            invoked = true;
            (entry.callback)(event, payload);
        }
        for (key, entry) in matched {
            {
                let mut reg = self.registry.borrow_mut();
                if !reg.contains(&key, entry.id) {
                    continue;
                }
                if entry.consume() {
                    reg.remove(&key, entry.id);
                }
            }
            invoked = true;
            (entry.callback)(payload);
        }
        invoked
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    /// Overrides this hub's listener ceiling.
    pub fn set_max_listeners(&self, n: usize) {
        self.ceiling.set(n);
    }

    /// Returns this hub's effective listener ceiling.
    #[must_use]
    pub fn max_listeners(&self) -> usize {
        self.ceiling.get()
    }

    /// True when wildcard subscriptions are enabled.
    #[must_use]
    pub fn wildcard(&self) -> bool {
        self.wildcard
    }

    /// Separator used to segment hierarchical event names.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Number of listeners whose subscription matches `event`
    /// (exact-bucket size when wildcard mode is off).
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry
            .borrow()
            .matches(event, &self.delimiter, self.wildcard)
            .len()
    }

    /// True when at least one subscription matches `event`.
    #[must_use]
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// Returns sorted list of subscription names with live entries.
    #[must_use]
    pub fn event_names(&self) -> Vec<String> {
        self.registry.borrow().names()
    }
}
