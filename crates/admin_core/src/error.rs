//! Error types for dashboard operations.

use crate::model::FraudStatus;
use thiserror::Error;

/// Boxed transport error from an [`AdminBackend`](crate::backend::AdminBackend)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dashboard error type
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A backend request failed; dashboard state was left as it was
    #[error("Backend request failed: {0}")]
    Backend(#[source] BoxError),

    /// Only pending flags accept a decision
    #[error("Fraud flag {entry_id} is already {status}")]
    NotPending {
        entry_id: String,
        status: FraudStatus,
    },

    /// Flag is not in the loaded list
    #[error("Unknown fraud flag: {0}")]
    UnknownFlag(String),
}

impl DashboardError {
    /// Wrap a backend error
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::NotPending {
            entry_id: "e-1".to_string(),
            status: FraudStatus::Resolved,
        };
        assert_eq!(err.to_string(), "Fraud flag e-1 is already resolved");

        let err = DashboardError::backend(std::io::Error::other("connection refused"));
        assert!(err.to_string().contains("connection refused"));
    }
}
