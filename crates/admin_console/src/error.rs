//! Error types for the console.

use thiserror::Error;

/// Console error type
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Backend request error
    #[error(transparent)]
    Client(#[from] admin_client::ClientError),

    /// Dashboard operation error
    #[error(transparent)]
    Dashboard(#[from] admin_core::error::DashboardError),

    /// Error from a backend reached through `AdminBackend`
    #[error("{0}")]
    Backend(#[source] admin_core::error::BoxError),

    /// Logging setup error
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConsoleError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wrap an `AdminBackend` error
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Result alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
