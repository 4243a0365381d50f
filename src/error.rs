//! Error types used by the notihub crate.
//!
//! The synchronous surface is deliberately infallible: removing an absent
//! listener is a no-op, exceeding the listener ceiling warns instead of
//! rejecting, and listener panics propagate to `emit`'s caller uncaught.
//! The fallible surface is the async bridge, where a pending wait can
//! outlive the hub it was registered on.

use thiserror::Error;

/// # Errors produced by the notification hub.
///
/// These represent failures of the hub's async adapters, not of listener
/// code; listener panics are never converted into errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HubError {
    /// The hub was dropped before the awaited event fired.
    #[error("hub dropped before the awaited event fired")]
    HubDropped,
}

impl HubError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notihub::HubError;
    ///
    /// assert_eq!(HubError::HubDropped.as_label(), "hub_dropped");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::HubDropped => "hub_dropped",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HubError::HubDropped => "hub dropped while a wait was pending".to_string(),
        }
    }
}
