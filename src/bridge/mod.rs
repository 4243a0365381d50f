//! # Async adapters over the synchronous hub.
//!
//! The hub dispatches in-line on the emitter's thread; these adapters let
//! async code observe emissions without changing that. Each adapter is a
//! plain listener that forwards cloned payloads into a tokio sync channel:
//! `emit` stays synchronous and non-blocking, the channel's receiving half
//! is what async code awaits.
//!
//! ## Contents
//! - [`NotificationHub::wait_for`] resolves on the next matching emission
//!   (one-shot, the listener retires itself);
//! - [`NotificationHub::stream`] forwards every matching emission into an
//!   unbounded channel until the returned id is removed.
//!
//! ## Rules
//! - Both adapters require `P: Clone`; the hub hands out references, the
//!   channel needs owned values.
//! - Registration happens eagerly at the call, not at first poll, so an
//!   emission between the call and the `.await` is not lost.
//! - Dropping the hub drops the forwarding listeners: a pending
//!   [`wait_for`](NotificationHub::wait_for) resolves to
//!   [`HubError::HubDropped`], a [`stream`](NotificationHub::stream)
//!   receiver starts returning `None`.
//!
//! ## Example (skeleton)
//! ```rust
//! // let hub: NotificationHub<u32> = NotificationHub::new();
//! // let done = hub.wait_for("job.done");
//! // hub.emit("job.done", &7);
//! // assert_eq!(done.await.unwrap(), 7);
//! ```

use std::cell::Cell;
use std::future::Future;

use tokio::sync::{mpsc, oneshot};

use crate::error::HubError;
use crate::hub::{ListenerId, NotificationHub};

impl<P: Clone + 'static> NotificationHub<P> {
    /// Resolves with a clone of the payload of the next emission matching
    /// `event`, or [`HubError::HubDropped`] when the hub is dropped first.
    ///
    /// The underlying listener is registered as one-shot, so it retires
    /// itself on delivery. If the event never fires and the hub lives on,
    /// the entry stays registered like any other `once` listener.
    pub fn wait_for(&self, event: &str) -> impl Future<Output = Result<P, HubError>> {
        let (tx, rx) = oneshot::channel();
        let slot = Cell::new(Some(tx));
        self.once(event, move |payload: &P| {
            if let Some(tx) = slot.take() {
                let _ = tx.send(payload.clone());
            }
        });
        async move { rx.await.map_err(|_| HubError::HubDropped) }
    }

    /// Forwards a clone of every emission matching `event` into an
    /// unbounded channel.
    ///
    /// Returns the forwarding listener's id alongside the receiver; pass
    /// the id to [`off`](NotificationHub::off) to stop forwarding once the
    /// receiver is no longer drained.
    pub fn stream(&self, event: &str) -> (ListenerId, mpsc::UnboundedReceiver<P>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.on(event, move |payload: &P| {
            let _ = tx.send(payload.clone());
        });
        (id, rx)
    }
}

#[cfg(test)]
mod tests {
    use crate::{HubConfig, HubError, NotificationHub};

    #[tokio::test(flavor = "current_thread")]
    async fn test_wait_for_resolves_on_the_next_emission() {
        let hub: NotificationHub<u32> = NotificationHub::new();
        let done = hub.wait_for("job.done");

        assert!(hub.emit("job.done", &7));
        assert_eq!(done.await.unwrap(), 7);
        assert_eq!(hub.listener_count("job.done"), 0, "wait listener retires itself");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_wait_for_ignores_later_emissions() {
        let hub: NotificationHub<u32> = NotificationHub::new();
        let done = hub.wait_for("tick");

        hub.emit("tick", &1);
        hub.emit("tick", &2);
        assert_eq!(done.await.unwrap(), 1, "only the first emission resolves the wait");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_wait_for_reports_a_dropped_hub() {
        let hub: NotificationHub<u32> = NotificationHub::new();
        let done = hub.wait_for("never");
        drop(hub);

        match done.await {
            Err(HubError::HubDropped) => {}
            other => panic!("expected HubDropped, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_stream_forwards_matching_emissions() {
        let hub: NotificationHub<u32> = NotificationHub::with_config(HubConfig {
            wildcard: true,
            ..HubConfig::default()
        });
        let (id, mut rx) = hub.stream("job.*");

        hub.emit("job.done", &1);
        hub.emit("other", &99);
        hub.emit("job.failed", &2);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));

        assert!(hub.off("job.*", id));
        hub.emit("job.done", &3);
        assert_eq!(rx.recv().await, None, "channel closes once the forwarder is removed");
    }
}
