use std::path::PathBuf;

use crate::saves::MAX_STATES;

pub type Result<T> = std::result::Result<T, SaveError>;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("slot index {index} out of range (0..{max})", max = MAX_STATES)]
    InvalidSlot { index: usize },

    #[error("battery RAM is not a state category")]
    NotAState,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("background save task failed: {0}")]
    Background(String),
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.into(),
            source,
        }
    }

    /// Caller mistakes: bad slot index or a RAM category passed to a state call.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SaveError::InvalidSlot { .. } | SaveError::NotAState)
    }
}
