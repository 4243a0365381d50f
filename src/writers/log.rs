//! # LogWriter - simple emission printer
//!
//! A minimal any-listener that prints every emission to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [emit] event="job.done" payload="backup"
//! [emit] event="job.failed" payload="restore"
//! ```

use std::fmt::Debug;

use crate::hub::{ListenerId, NotificationHub};

/// Emission writer listener.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Attaches a printing any-listener to `hub`.
    ///
    /// Returns the listener's id; pass it to
    /// [`off_any`](NotificationHub::off_any) to detach.
    pub fn attach<P: Debug + 'static>(hub: &NotificationHub<P>) -> ListenerId {
        hub.on_any(|event, payload| {
            println!("[emit] event={event:?} payload={payload:?}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_registers_a_detachable_any_listener() {
        let hub: NotificationHub<u32> = NotificationHub::new();
        let id = LogWriter::attach(&hub);
        assert!(hub.emit("anything", &1), "writer counts as a listener");
        assert!(hub.off_any(id));
        assert!(!hub.emit("anything", &1));
    }
}
