//! Error types for bulletin retrieval.

/// Failures of a single bulletin fetch.
///
/// Both kinds are terminal for the call that produced them; nothing below
/// the caller retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The remote answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Network { status: u16 },

    /// No response was received (DNS, refused connection, timeout, broken body).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Status code of a `Network` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Network { status } => Some(*status),
            FetchError::Transport(_) => None,
        }
    }
}
