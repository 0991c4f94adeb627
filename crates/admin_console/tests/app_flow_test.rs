//! Key handling and backend round trips through the console state.

use admin_console::app::{Action, App};
use admin_console::commands::{credit_config, health};
use admin_console::ConsoleError;
use admin_core::prelude::*;
use async_trait::async_trait;
use crossterm::event::KeyCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Offline;

struct StubBackend {
    flags: Mutex<Vec<FraudFlag>>,
    offline: bool,
    config_offline: AtomicBool,
}

impl StubBackend {
    fn new(flags: Vec<FraudFlag>) -> Self {
        Self {
            flags: Mutex::new(flags),
            offline: false,
            config_offline: AtomicBool::new(false),
        }
    }

    fn offline() -> Self {
        Self {
            flags: Mutex::new(Vec::new()),
            offline: true,
            config_offline: AtomicBool::new(true),
        }
    }

    fn check(&self) -> Result<(), Offline> {
        if self.offline {
            Err(Offline)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AdminBackend for StubBackend {
    type Error = Offline;

    async fn fraud_flags(&self, _status: Option<FraudStatus>) -> Result<Vec<FraudFlag>, Offline> {
        self.check()?;
        Ok(self.flags.lock().unwrap().clone())
    }

    async fn resolve_flag(
        &self,
        entry_id: &str,
        action: ResolveAction,
    ) -> Result<ResolveResponse, Offline> {
        self.check()?;
        let mut flags = self.flags.lock().unwrap();
        if let Some(flag) = flags.iter_mut().find(|f| f.entry_id == entry_id) {
            flag.status = match action {
                ResolveAction::Reject => FraudStatus::Rejected,
                _ => FraudStatus::Resolved,
            };
        }
        Ok(ResolveResponse::default())
    }

    async fn audit_logs(&self, limit: u32, offset: u32) -> Result<AuditLogPage, Offline> {
        self.check()?;
        Ok(AuditLogPage {
            data: Vec::new(),
            pagination: Pagination {
                total: 0,
                limit,
                offset,
                has_more: false,
            },
        })
    }

    async fn users(&self) -> Result<Vec<User>, Offline> {
        self.check()?;
        Ok(vec![User {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
            balance: 120.0,
            status: UserStatus::Active,
        }])
    }

    async fn credit_config(&self) -> Result<CreditConfig, Offline> {
        self.check()?;
        if self.config_offline.load(Ordering::SeqCst) {
            return Err(Offline);
        }
        Ok(CreditConfig {
            daily_limit: 500.0,
            ..Default::default()
        })
    }

    async fn update_credit_config(
        &self,
        patch: &CreditConfigPatch,
    ) -> Result<CreditConfig, Offline> {
        self.check()?;
        Ok(CreditConfig {
            daily_limit: patch.daily_limit.unwrap_or(500.0),
            ..Default::default()
        })
    }

    async fn health(&self) -> Result<HealthReport, Offline> {
        self.check()?;
        Ok(HealthReport {
            status: Some("ok".to_string()),
            ..Default::default()
        })
    }
}

fn pending(id: &str) -> FraudFlag {
    FraudFlag {
        entry_id: id.to_string(),
        reason: "velocity".to_string(),
        user_id: "u1".to_string(),
        amount: 75.0,
        timestamp: "2024-01-05T15:04:00Z".to_string(),
        status: FraudStatus::Pending,
        resolved_at: None,
    }
}

#[tokio::test]
async fn test_reload_then_reject_from_overview() {
    let backend = StubBackend::new(vec![pending("f1"), pending("f2")]);
    let mut app = App::new(10);

    app.perform(&backend, Action::Reload).await;
    assert!(!app.dashboard().is_loading());
    assert_eq!(app.status_message(), Some("Dashboard refreshed"));
    assert_eq!(app.dashboard().stats().pending_flags, 2);

    let action = app.handle_key(KeyCode::Char('x'));
    assert_eq!(
        action,
        Action::Resolve {
            entry_id: "f1".to_string(),
            action: ResolveAction::Reject,
        }
    );
    app.perform(&backend, action).await;

    assert_eq!(app.status_message(), Some("Flag f1 rejected"));
    assert_eq!(app.dashboard().stats().pending_flags, 1);
    assert_eq!(app.visible_flags().len(), 1);
    assert_eq!(app.selected(), 0);
}

#[tokio::test]
async fn test_reload_failure_shows_message_and_clears_loading() {
    let backend = StubBackend::offline();
    let mut app = App::new(10);

    app.perform(&backend, Action::Reload).await;

    assert!(!app.dashboard().is_loading());
    let message = app.status_message().unwrap();
    assert!(message.starts_with("Failed to fetch data"));
    assert!(app.dashboard().users().is_empty());
}

#[tokio::test]
async fn test_config_tab_loads_credit_config() {
    let backend = StubBackend::new(Vec::new());
    let mut app = App::new(10);
    app.perform(&backend, Action::Reload).await;

    let action = app.handle_key(KeyCode::Char('5'));
    assert_eq!(action, Action::LoadConfig);
    app.perform(&backend, action).await;

    let config = app.dashboard().credit_config().unwrap();
    assert_eq!(config.daily_limit, 500.0);
}

#[tokio::test]
async fn test_audit_paging_at_edges() {
    let backend = StubBackend::new(Vec::new());
    let mut app = App::new(10);
    app.perform(&backend, Action::Reload).await;

    app.perform(&backend, Action::NextAuditPage).await;
    assert_eq!(app.status_message(), Some("No more audit logs"));

    app.perform(&backend, Action::PrevAuditPage).await;
    assert_eq!(app.status_message(), Some("Already at the first page"));
}

#[tokio::test]
async fn test_reload_reports_credit_config_failure() {
    let backend = StubBackend::new(Vec::new());
    let mut app = App::new(10);
    app.perform(&backend, Action::Reload).await;
    let action = app.handle_key(KeyCode::Char('5'));
    app.perform(&backend, action).await;
    assert!(app.dashboard().credit_config().is_some());

    backend.config_offline.store(true, Ordering::SeqCst);
    app.perform(&backend, Action::Reload).await;

    assert_eq!(
        app.status_message(),
        Some("Dashboard refreshed, but failed to fetch credit config: Backend request failed: connection refused")
    );
    // Stale config stays on screen
    assert_eq!(app.dashboard().credit_config().unwrap().daily_limit, 500.0);
}

#[tokio::test]
async fn test_config_set_and_health_go_through_backend() {
    let backend = StubBackend::new(Vec::new());
    let patch = CreditConfigPatch {
        daily_limit: Some(750.0),
        ..Default::default()
    };

    let config = credit_config::apply(&backend, &patch).await.unwrap();
    assert_eq!(config.daily_limit, 750.0);

    let report = health::check(&backend).await.unwrap();
    assert_eq!(report.status.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_config_set_and_health_surface_backend_errors() {
    let backend = StubBackend::offline();
    let patch = CreditConfigPatch {
        referral: Some(5.0),
        ..Default::default()
    };

    let err = credit_config::apply(&backend, &patch).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Backend(_)));
    assert_eq!(err.to_string(), "connection refused");

    assert!(matches!(
        health::check(&backend).await,
        Err(ConsoleError::Backend(_))
    ));
}
