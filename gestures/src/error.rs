use crate::dispatch::GestureKind;

/// Errors surfaced by the dispatcher and options parsing.
///
/// Errors raised by user callbacks are not represented here: a panicking
/// callback unwinds straight through the recognizer.
#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    /// The dispatcher was asked to switch recognizers after its first activation.
    #[error("gesture type cannot change after the first activation")]
    KindChanged {
        /// Kind captured by the first activation.
        from: GestureKind,
        /// Kind requested by the rejected activation.
        to: GestureKind,
    },
    /// An options bag did not deserialize into the recognizer's options.
    #[error("invalid gesture options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    /// A gesture kind name outside the six supported kinds.
    #[error("unknown gesture kind: {0}")]
    UnknownKind(String),
    /// A swipe direction name outside the supported filters.
    #[error("unknown swipe direction: {0}")]
    UnknownDirection(String),
    /// The listener target could not be resolved (e.g. the element is not mounted).
    #[error("gesture target is not available")]
    TargetUnavailable,
    /// A handle was used after the component that owned it was torn down.
    #[error("gesture handle used after its owner was disposed")]
    Disposed,
}
