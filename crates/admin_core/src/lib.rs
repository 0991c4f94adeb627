//! # Admin Core
//!
//! Shared building blocks for the wallet fraud-review console.
//!
//! ## Modules
//! - **model**: Records mirroring the backend REST contract
//! - **format**: Currency, date and status badge formatting
//! - **dashboard**: View state, derived statistics and the fetch/reconcile flow
//! - **backend**: [`AdminBackend`](backend::AdminBackend) trait implemented by the HTTP client
//!
//! Fraud scoring, balances and audit generation all live in the backend;
//! this crate only mirrors and derives from what the backend returns.

pub mod backend;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::AdminBackend;
    pub use crate::dashboard::{Dashboard, DashboardStats, FraudFilter, Tab};
    pub use crate::error::DashboardError;
    pub use crate::format::{format_currency, format_date, status_tone, StatusTone};
    pub use crate::model::{
        AuditLog, AuditLogPage, CreditConfig, CreditConfigPatch, FraudFlag, FraudStatus,
        HealthReport, Pagination, ResolveAction, ResolveResponse, User, UserStatus,
    };
}
