//! # Listener entries and registration handles.
//!
//! Every registration gets a [`ListenerId`] drawn from a per-hub monotonic
//! sequence. The sequence is shared by per-event and any-listeners, so an
//! entry's id doubles as its registration order: dispatch sorts matching
//! entries by id to invoke them in the order they were registered, even
//! when an emission matches several wildcard buckets.

use std::cell::Cell;
use std::rc::Rc;

/// Stable handle to a registered listener.
///
/// Returned by registration calls and consumed by removal calls. Ids are
/// unique per hub and monotonically increasing in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// A registered per-event listener.
///
/// `remaining` is `None` for listeners that stay until removed, or the
/// number of invocations left for counted listeners (`once` registers with
/// `Some(1)`). Counted entries are retired from the registry *before* their
/// callback runs, so a recursive emission can never invoke them twice.
pub(crate) struct ListenerEntry<P> {
    pub(crate) id: ListenerId,
    pub(crate) remaining: Cell<Option<u32>>,
    pub(crate) callback: Rc<dyn Fn(&P)>,
}

impl<P> ListenerEntry<P> {
    pub(crate) fn new(id: ListenerId, times: Option<u32>, callback: Rc<dyn Fn(&P)>) -> Self {
        Self {
            id,
            remaining: Cell::new(times),
            callback,
        }
    }

    /// Consumes one invocation; true when the entry is now exhausted.
    pub(crate) fn consume(&self) -> bool {
        match self.remaining.get() {
            None => false,
            Some(n) => {
                let left = n.saturating_sub(1);
                self.remaining.set(Some(left));
                left == 0
            }
        }
    }
}

/// A listener invoked for every emission, receiving the event name.
pub(crate) struct AnyEntry<P> {
    pub(crate) id: ListenerId,
    pub(crate) callback: Rc<dyn Fn(&str, &P)>,
}
