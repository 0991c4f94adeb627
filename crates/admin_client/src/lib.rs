//! # Admin Client
//!
//! Typed REST client for the wallet fraud-review backend.
//!
//! ### Endpoints
//! - `GET /api/fraud/flags[?status=]` - Fraud flags
//! - `POST /api/fraud/resolve` - Approve, reject or investigate a flag
//! - `GET /api/audit/logs?limit=&offset=` - Paged audit logs
//! - `GET /api/admin/users` - User accounts
//! - `GET|PUT /api/admin/config` - Credit configuration
//! - `GET /health` - Health check
//!
//! Responses wrapped as `{ "data": ... }` are unwrapped before returning.

pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, API_URL_ENV, DEFAULT_API_URL, DEFAULT_AUDIT_LIMIT};
pub use error::ClientError;
