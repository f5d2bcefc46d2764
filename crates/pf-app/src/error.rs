//! Error types for the pf-app service layer.

/// Application error type that provides a unified error interface for
/// every pipeflow frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload was structurally invalid.
    #[error("Invalid pipeline input: {0}")]
    Validation(String),

    /// Service configuration was rejected at startup.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Unexpected failure while analyzing a pipeline.
    #[error("Pipeline analysis failed: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;
