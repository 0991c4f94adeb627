//! Backend record types.
//!
//! Every record mirrors the JSON the fraud-review backend returns. Field
//! names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a status or action string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'. Valid values: {expected}")]
pub struct ParseValueError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseValueError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Review state of a fraud flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudStatus {
    /// Awaiting manual review
    Pending,
    /// Reviewed and approved
    Resolved,
    /// Reviewed and rejected
    Rejected,
    /// Any status this console does not know about
    #[serde(other)]
    Unknown,
}

impl FraudStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FraudStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FraudStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseValueError::new(
                "fraud status",
                s,
                "pending, resolved, rejected",
            )),
        }
    }
}

/// Account state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Flagged,
    Suspended,
    /// Any status this console does not know about
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Flagged => "flagged",
            Self::Suspended => "suspended",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "flagged" => Ok(Self::Flagged),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ParseValueError::new(
                "user status",
                s,
                "active, flagged, suspended",
            )),
        }
    }
}

/// Decision an admin submits for a fraud flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveAction {
    Approve,
    Reject,
    Investigate,
}

impl ResolveAction {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Investigate => "investigate",
        }
    }
}

impl fmt::Display for ResolveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ResolveAction {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "investigate" => Ok(Self::Investigate),
            _ => Err(ParseValueError::new(
                "resolve action",
                s,
                "approve, reject, investigate",
            )),
        }
    }
}

/// A transaction or account flagged for manual review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudFlag {
    pub entry_id: String,
    pub reason: String,
    pub user_id: String,
    pub amount: f64,
    pub timestamp: String,
    pub status: FraudStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

impl FraudFlag {
    /// Whether the flag still awaits a decision
    pub fn is_pending(&self) -> bool {
        self.status == FraudStatus::Pending
    }
}

/// Record of an administrative action against a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub entry_id: String,
    pub changes: String,
    pub timestamp: String,
    pub user_id: String,
    pub admin_id: String,
    pub action: String,
}

/// Wallet account as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub balance: f64,
    pub status: UserStatus,
}

/// Credit issuance amounts and limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditConfig {
    pub contest_win: f64,
    pub referral: f64,
    pub content_submission: f64,
    pub follow: f64,
    pub purchase: f64,
    pub daily_limit: f64,
    pub max_single_transaction: f64,
}

impl CreditConfig {
    /// Labelled values in display order
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("Contest win", self.contest_win),
            ("Referral", self.referral),
            ("Content submission", self.content_submission),
            ("Follow", self.follow),
            ("Purchase", self.purchase),
            ("Daily limit", self.daily_limit),
            ("Max single transaction", self.max_single_transaction),
        ]
    }
}

/// Partial credit config update. Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contest_win: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_submission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_single_transaction: Option<f64>,
}

impl CreditConfigPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.contest_win.is_none()
            && self.referral.is_none()
            && self.content_submission.is_none()
            && self.follow.is_none()
            && self.purchase.is_none()
            && self.daily_limit.is_none()
            && self.max_single_transaction.is_none()
    }
}

/// Body sent to the resolve endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest<'a> {
    pub entry_id: &'a str,
    pub action: ResolveAction,
}

/// Body returned by the resolve endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Paging metadata for audit logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

/// One page of audit logs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuditLogPage {
    pub data: Vec<AuditLog>,
    pub pagination: Pagination,
}

/// Body returned by the health endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Response wrapper `{ "data": ... }` used by most endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fraud_flag_from_backend_json() {
        let flag: FraudFlag = serde_json::from_value(json!({
            "entryId": "e-1",
            "reason": "velocity",
            "userId": "u-1",
            "amount": 250.5,
            "timestamp": "2024-01-05T15:04:00Z",
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(flag.entry_id, "e-1");
        assert_eq!(flag.status, FraudStatus::Pending);
        assert!(flag.resolved_at.is_none());
        assert!(flag.is_pending());
    }

    #[test]
    fn test_unlisted_status_decodes_as_unknown() {
        let users: Vec<User> = serde_json::from_value(json!([
            { "userId": "u-1", "username": "alice", "balance": 10.0, "status": "active" },
            { "userId": "u-2", "username": "bob", "balance": 5.0, "status": "under_review" }
        ]))
        .unwrap();
        assert_eq!(users[0].status, UserStatus::Active);
        assert_eq!(users[1].status, UserStatus::Unknown);

        let flag: FraudFlag = serde_json::from_value(json!({
            "entryId": "e-2",
            "reason": "manual",
            "userId": "u-2",
            "amount": 1.0,
            "timestamp": "2024-01-05T15:04:00Z",
            "status": "escalated"
        }))
        .unwrap();
        assert_eq!(flag.status, FraudStatus::Unknown);
        assert!(!flag.is_pending());
    }

    #[test]
    fn test_unknown_is_not_a_cli_value() {
        assert!("unknown".parse::<FraudStatus>().is_err());
        assert!("unknown".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!("PENDING".parse::<FraudStatus>().unwrap(), FraudStatus::Pending);
        assert_eq!("Suspended".parse::<UserStatus>().unwrap(), UserStatus::Suspended);
        assert_eq!("approve".parse::<ResolveAction>().unwrap(), ResolveAction::Approve);
    }

    #[test]
    fn test_parse_error_lists_valid_values() {
        let err = "maybe".parse::<ResolveAction>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("maybe"));
        assert!(msg.contains("investigate"));
    }

    #[test]
    fn test_config_patch_serializes_only_set_fields() {
        let patch = CreditConfigPatch {
            daily_limit: Some(500.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "dailyLimit": 500.0 })
        );
        assert!(CreditConfigPatch::default().is_empty());
    }

    #[test]
    fn test_resolve_request_wire_shape() {
        let req = ResolveRequest {
            entry_id: "e-9",
            action: ResolveAction::Reject,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "entryId": "e-9", "action": "reject" })
        );
    }

    #[test]
    fn test_health_report_keeps_extra_fields() {
        let report: HealthReport = serde_json::from_value(json!({
            "status": "ok",
            "uptime": 42
        }))
        .unwrap();
        assert_eq!(report.status.as_deref(), Some("ok"));
        assert_eq!(report.details.get("uptime"), Some(&json!(42)));
    }
}
