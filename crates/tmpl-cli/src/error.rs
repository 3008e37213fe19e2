//! Error types for tmpl-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tmpl-core
    #[error(transparent)]
    Core(#[from] tmpl_core::Error),

    /// The log subscriber could not be installed
    #[error("Failed to set up logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
