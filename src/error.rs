//! Error types for the interactive session.

use thiserror::Error;

/// Failure of the interactive input channel.
///
/// Malformed tokens never surface here; input collaborators re-prompt until
/// a token is valid. The only unrecoverable condition is the channel itself
/// dying, which ends the game loop cleanly.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream reached end of file.
    #[error("input stream closed")]
    Closed,
    /// Reading from the input stream failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
