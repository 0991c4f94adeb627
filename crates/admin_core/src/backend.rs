//! Seam between dashboard state and the REST backend.

use crate::model::{
    AuditLogPage, CreditConfig, CreditConfigPatch, FraudFlag, FraudStatus, HealthReport,
    ResolveAction, ResolveResponse, User,
};
use async_trait::async_trait;

/// Read and write operations the console needs from the fraud-review backend.
///
/// `admin_client::ApiClient` is the production implementation; tests use
/// in-memory fakes.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// Error type surfaced by the transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fraud flags, optionally restricted to one status
    async fn fraud_flags(&self, status: Option<FraudStatus>)
        -> Result<Vec<FraudFlag>, Self::Error>;

    /// Submit a decision for a fraud flag
    async fn resolve_flag(
        &self,
        entry_id: &str,
        action: ResolveAction,
    ) -> Result<ResolveResponse, Self::Error>;

    /// One page of audit logs
    async fn audit_logs(&self, limit: u32, offset: u32) -> Result<AuditLogPage, Self::Error>;

    /// All user accounts
    async fn users(&self) -> Result<Vec<User>, Self::Error>;

    /// Current credit configuration
    async fn credit_config(&self) -> Result<CreditConfig, Self::Error>;

    /// Apply a partial credit configuration update
    async fn update_credit_config(
        &self,
        patch: &CreditConfigPatch,
    ) -> Result<CreditConfig, Self::Error>;

    /// Backend health probe
    async fn health(&self) -> Result<HealthReport, Self::Error>;
}
