//! Error types for the history panel and its config files

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// Target index is past the end of the history list
    #[error("history index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    /// A jump needs undo/redo but `add_event` was never called
    #[error("no undo/redo actions bound to the history panel")]
    ActionsUnbound,
    /// Edits need an image to apply to
    #[error("no image loaded")]
    NoImage,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Json(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
