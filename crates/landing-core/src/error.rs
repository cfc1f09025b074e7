use thiserror::Error;

/// Failure reported by an audio collaborator.
///
/// The toggle machine logs these and moves on; they never roll back the
/// user-facing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("audio element unavailable")]
    Unavailable,
}
