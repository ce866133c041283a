use thiserror::Error;

/// Errors reported to the caller as contract violations.
#[derive(Error, Debug)]
pub enum FilenameError {
    /// Batch sizing was requested for zero items, so there is no maximum.
    #[error("cannot size a column from an empty batch")]
    EmptyBatch,

    /// Column bounds where the end lies before the start.
    #[error("invalid column bounds: end {end_col} is before start {start_col}")]
    InvalidBounds { start_col: usize, end_col: usize },

    /// A blocking resolution task panicked or was cancelled by the runtime.
    #[cfg(feature = "tokio")]
    #[error("resolution task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FilenameError>;
