//! Error types for cleanup-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a run with a non-zero exit status
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cleanup-text
    #[error(transparent)]
    Text(#[from] cleanup_text::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
