//! Error types for cleanup-text

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] cleanup_fs::Error),

    #[error("Invalid patch plan: {field} must not be empty")]
    InvalidPlan { field: &'static str },
}
