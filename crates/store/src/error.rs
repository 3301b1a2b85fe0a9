use thiserror::Error;

use crate::core::RestoreError;

/// Errors raised at the persistence boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The stored record exists but cannot be turned back into a game.
    #[error("malformed saved state: {0}")]
    MalformedState(#[from] MalformedState),
    #[error("could not encode game state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("store I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl PersistError {
    /// True when the record should be discarded in favour of a fresh game.
    pub fn is_malformed(&self) -> bool {
        matches!(self, PersistError::MalformedState(_))
    }
}

/// Why a stored record was rejected.
#[derive(Debug, Error)]
pub enum MalformedState {
    /// Not JSON, or JSON of the wrong shape.
    #[error("not a game record: {0}")]
    Decode(#[from] serde_json::Error),
    /// Well-formed JSON that describes an impossible game.
    #[error(transparent)]
    Invalid(#[from] RestoreError),
}
