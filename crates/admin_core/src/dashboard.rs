//! Dashboard view state.
//!
//! Holds what the console renders: the three backend collections, the
//! active tab and the fraud filter. Collections are only ever replaced
//! wholesale by a successful fetch. A failed fetch is logged and leaves the
//! previous (stale) data in place.

use crate::backend::AdminBackend;
use crate::error::DashboardError;
use crate::model::{
    AuditLog, AuditLogPage, CreditConfig, FraudFlag, FraudStatus, Pagination, ResolveAction, User,
    UserStatus,
};
use std::fmt;

/// Audit logs fetched per page by default
pub const DEFAULT_AUDIT_PAGE_SIZE: u32 = 10;

/// Pending flags shown on the overview tab
pub const PENDING_PREVIEW_LEN: usize = 5;

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Summary statistics and pending flags
    #[default]
    Overview,
    /// User accounts
    Users,
    /// Fraud flag triage
    Fraud,
    /// Audit log
    Audit,
    /// Credit configuration
    Config,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Users, Tab::Fraud, Tab::Audit, Tab::Config];

    /// Get tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Fraud => "Fraud Flags",
            Self::Audit => "Audit Logs",
            Self::Config => "Config",
        }
    }

    /// Position in [`Tab::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status filter on the fraud tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FraudFilter {
    All,
    #[default]
    Pending,
    Resolved,
    Rejected,
}

impl FraudFilter {
    /// Filters in button order
    pub const ALL: [FraudFilter; 4] = [
        FraudFilter::All,
        FraudFilter::Pending,
        FraudFilter::Resolved,
        FraudFilter::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
        }
    }

    /// Status this filter selects, `None` for all
    pub fn status(&self) -> Option<FraudStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(FraudStatus::Pending),
            Self::Resolved => Some(FraudStatus::Resolved),
            Self::Rejected => Some(FraudStatus::Rejected),
        }
    }

    pub fn matches(&self, flag: &FraudFlag) -> bool {
        self.status().map_or(true, |status| flag.status == status)
    }

    /// Next filter, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FraudFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Summary figures for the overview cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub flagged_users: usize,
    pub pending_flags: usize,
    pub total_balance: f64,
    /// Audit log entries currently loaded
    pub recent_activity: usize,
}

/// Console view state
#[derive(Debug, Clone)]
pub struct Dashboard {
    users: Vec<User>,
    fraud_flags: Vec<FraudFlag>,
    audit_logs: Vec<AuditLog>,
    audit_pagination: Option<Pagination>,
    audit_offset: u32,
    audit_page_size: u32,
    credit_config: Option<CreditConfig>,
    loading: bool,
    active_tab: Tab,
    fraud_filter: FraudFilter,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_PAGE_SIZE)
    }
}

impl Dashboard {
    /// Create an empty dashboard in the loading state
    pub fn new(audit_page_size: u32) -> Self {
        Self {
            users: Vec::new(),
            fraud_flags: Vec::new(),
            audit_logs: Vec::new(),
            audit_pagination: None,
            audit_offset: 0,
            audit_page_size: audit_page_size.max(1),
            credit_config: None,
            loading: true,
            active_tab: Tab::default(),
            fraud_filter: FraudFilter::default(),
        }
    }

    /// Build a loaded dashboard from data that was already fetched
    pub fn with_data(users: Vec<User>, fraud_flags: Vec<FraudFlag>, audit_page: AuditLogPage) -> Self {
        let mut dashboard = Self::new(audit_page.pagination.limit);
        dashboard.users = users;
        dashboard.fraud_flags = fraud_flags;
        dashboard.audit_offset = audit_page.pagination.offset;
        dashboard.apply_audit_page(audit_page.data, audit_page.pagination);
        dashboard.loading = false;
        dashboard
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn fraud_flags(&self) -> &[FraudFlag] {
        &self.fraud_flags
    }

    pub fn audit_logs(&self) -> &[AuditLog] {
        &self.audit_logs
    }

    pub fn audit_pagination(&self) -> Option<&Pagination> {
        self.audit_pagination.as_ref()
    }

    pub fn audit_offset(&self) -> u32 {
        self.audit_offset
    }

    pub fn audit_page_size(&self) -> u32 {
        self.audit_page_size
    }

    pub fn credit_config(&self) -> Option<&CreditConfig> {
        self.credit_config.as_ref()
    }

    /// True until the first load settles
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn fraud_filter(&self) -> FraudFilter {
        self.fraud_filter
    }

    pub fn set_fraud_filter(&mut self, filter: FraudFilter) {
        self.fraud_filter = filter;
    }

    /// Advance to the next fraud filter
    pub fn cycle_fraud_filter(&mut self) {
        self.fraud_filter = self.fraud_filter.next();
    }

    /// Flags matching the current filter
    pub fn filtered_fraud_flags(&self) -> Vec<&FraudFlag> {
        self.fraud_flags
            .iter()
            .filter(|flag| self.fraud_filter.matches(flag))
            .collect()
    }

    /// Number of flags a filter button would show
    pub fn filter_count(&self, filter: FraudFilter) -> usize {
        self.fraud_flags.iter().filter(|flag| filter.matches(flag)).count()
    }

    /// First few pending flags for the overview list
    pub fn pending_preview(&self) -> Vec<&FraudFlag> {
        self.fraud_flags
            .iter()
            .filter(|flag| flag.is_pending())
            .take(PENDING_PREVIEW_LEN)
            .collect()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_users: self.users.len(),
            active_users: self.count_users(UserStatus::Active),
            flagged_users: self.count_users(UserStatus::Flagged),
            pending_flags: self.filter_count(FraudFilter::Pending),
            total_balance: self.users.iter().map(|u| u.balance).sum(),
            recent_activity: self.audit_logs.len(),
        }
    }

    fn count_users(&self, status: UserStatus) -> usize {
        self.users.iter().filter(|u| u.status == status).count()
    }

    /// Message shown when the fraud tab has nothing to list
    pub fn empty_fraud_message(&self) -> String {
        format!("No fraud flags found for \"{}\" status.", self.fraud_filter)
    }

    pub fn find_flag(&self, entry_id: &str) -> Option<&FraudFlag> {
        self.fraud_flags.iter().find(|flag| flag.entry_id == entry_id)
    }

    /// Approve/reject is only offered for pending flags
    pub fn can_resolve(flag: &FraudFlag) -> bool {
        flag.is_pending()
    }

    /// Fetch users, all fraud flags and the first audit page in parallel.
    ///
    /// State is replaced only when all three requests succeed. `loading`
    /// is cleared either way.
    pub async fn load<B: AdminBackend>(&mut self, backend: &B) -> Result<(), DashboardError> {
        let result = tokio::try_join!(
            backend.users(),
            backend.fraud_flags(None),
            backend.audit_logs(self.audit_page_size, 0),
        );
        self.loading = false;

        match result {
            Ok((users, flags, page)) => {
                tracing::info!(
                    users = users.len(),
                    fraud_flags = flags.len(),
                    audit_logs = page.data.len(),
                    "Dashboard data loaded"
                );
                self.users = users;
                self.fraud_flags = flags;
                self.audit_offset = 0;
                self.apply_audit_page(page.data, page.pagination);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch data");
                Err(DashboardError::backend(err))
            }
        }
    }

    /// Re-run the initial load
    pub async fn refresh<B: AdminBackend>(&mut self, backend: &B) -> Result<(), DashboardError> {
        self.load(backend).await
    }

    /// Submit a decision for a pending flag, then re-fetch all flags.
    pub async fn resolve<B: AdminBackend>(
        &mut self,
        backend: &B,
        entry_id: &str,
        action: ResolveAction,
    ) -> Result<(), DashboardError> {
        let flag = self
            .find_flag(entry_id)
            .ok_or_else(|| DashboardError::UnknownFlag(entry_id.to_string()))?;
        if !Self::can_resolve(flag) {
            return Err(DashboardError::NotPending {
                entry_id: entry_id.to_string(),
                status: flag.status,
            });
        }

        if let Err(err) = backend.resolve_flag(entry_id, action).await {
            tracing::error!(entry_id, %action, error = %err, "Failed to resolve fraud flag");
            return Err(DashboardError::backend(err));
        }
        tracing::info!(entry_id, %action, "Fraud flag resolved");

        self.refresh_fraud_flags(backend).await
    }

    /// Replace the fraud flag list with a fresh, unfiltered fetch
    pub async fn refresh_fraud_flags<B: AdminBackend>(
        &mut self,
        backend: &B,
    ) -> Result<(), DashboardError> {
        match backend.fraud_flags(None).await {
            Ok(flags) => {
                self.fraud_flags = flags;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to refresh fraud flags");
                Err(DashboardError::backend(err))
            }
        }
    }

    /// Fetch the credit configuration
    pub async fn load_config<B: AdminBackend>(&mut self, backend: &B) -> Result<(), DashboardError> {
        match backend.credit_config().await {
            Ok(config) => {
                self.credit_config = Some(config);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch credit config");
                Err(DashboardError::backend(err))
            }
        }
    }

    /// Move to the next audit page. Returns `false` when there is none.
    pub async fn next_audit_page<B: AdminBackend>(
        &mut self,
        backend: &B,
    ) -> Result<bool, DashboardError> {
        let has_more = self.audit_pagination.map_or(false, |p| p.has_more);
        if !has_more {
            return Ok(false);
        }
        let offset = self.audit_offset.saturating_add(self.audit_page_size);
        self.audit_page(backend, offset).await.map(|_| true)
    }

    /// Move to the previous audit page. Returns `false` on the first page.
    pub async fn prev_audit_page<B: AdminBackend>(
        &mut self,
        backend: &B,
    ) -> Result<bool, DashboardError> {
        if self.audit_offset == 0 {
            return Ok(false);
        }
        let offset = self.audit_offset.saturating_sub(self.audit_page_size);
        self.audit_page(backend, offset).await.map(|_| true)
    }

    /// Fetch the audit page starting at `offset` using the configured page size
    pub async fn audit_page<B: AdminBackend>(
        &mut self,
        backend: &B,
        offset: u32,
    ) -> Result<(), DashboardError> {
        match backend.audit_logs(self.audit_page_size, offset).await {
            Ok(page) => {
                self.audit_offset = offset;
                self.apply_audit_page(page.data, page.pagination);
                Ok(())
            }
            Err(err) => {
                tracing::error!(offset, error = %err, "Failed to fetch audit logs");
                Err(DashboardError::backend(err))
            }
        }
    }

    fn apply_audit_page(&mut self, logs: Vec<AuditLog>, pagination: Pagination) {
        self.audit_logs = logs;
        self.audit_pagination = Some(pagination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(id: &str, status: FraudStatus) -> FraudFlag {
        FraudFlag {
            entry_id: id.to_string(),
            reason: "velocity".to_string(),
            user_id: format!("user-{}", id),
            amount: 100.0,
            timestamp: "2024-01-05T15:04:00Z".to_string(),
            status,
            resolved_at: None,
        }
    }

    fn user(id: &str, balance: f64, status: UserStatus) -> User {
        User {
            user_id: id.to_string(),
            username: format!("name-{}", id),
            balance,
            status,
        }
    }

    fn sample_dashboard() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.users = vec![
            user("u1", 100.0, UserStatus::Active),
            user("u2", 50.5, UserStatus::Flagged),
            user("u3", 0.25, UserStatus::Active),
            user("u4", 10.0, UserStatus::Suspended),
        ];
        dashboard.fraud_flags = vec![
            flag("f1", FraudStatus::Pending),
            flag("f2", FraudStatus::Resolved),
            flag("f3", FraudStatus::Pending),
            flag("f4", FraudStatus::Rejected),
        ];
        dashboard
    }

    #[test]
    fn test_defaults() {
        let dashboard = Dashboard::default();
        assert!(dashboard.is_loading());
        assert_eq!(dashboard.active_tab(), Tab::Overview);
        assert_eq!(dashboard.fraud_filter(), FraudFilter::Pending);
        assert_eq!(dashboard.audit_page_size(), DEFAULT_AUDIT_PAGE_SIZE);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Overview.next(), Tab::Users);
        assert_eq!(Tab::Config.next(), Tab::Overview);
        assert_eq!(Tab::Overview.prev(), Tab::Config);
        assert_eq!(Tab::Fraud.title(), "Fraud Flags");
    }

    #[test]
    fn test_filter_cycle_order() {
        let mut filter = FraudFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                FraudFilter::Pending,
                FraudFilter::Resolved,
                FraudFilter::Rejected,
                FraudFilter::All
            ]
        );
    }

    #[test]
    fn test_filtered_fraud_flags() {
        let mut dashboard = sample_dashboard();

        let ids: Vec<_> = dashboard
            .filtered_fraud_flags()
            .iter()
            .map(|f| f.entry_id.as_str())
            .collect();
        assert_eq!(ids, vec!["f1", "f3"]);

        dashboard.set_fraud_filter(FraudFilter::All);
        assert_eq!(dashboard.filtered_fraud_flags().len(), 4);

        dashboard.set_fraud_filter(FraudFilter::Rejected);
        assert_eq!(dashboard.filtered_fraud_flags()[0].entry_id, "f4");
    }

    #[test]
    fn test_filter_counts() {
        let dashboard = sample_dashboard();
        assert_eq!(dashboard.filter_count(FraudFilter::All), 4);
        assert_eq!(dashboard.filter_count(FraudFilter::Pending), 2);
        assert_eq!(dashboard.filter_count(FraudFilter::Resolved), 1);
        assert_eq!(dashboard.filter_count(FraudFilter::Rejected), 1);
    }

    #[test]
    fn test_stats() {
        let mut dashboard = sample_dashboard();
        dashboard.audit_logs = vec![AuditLog {
            entry_id: "a1".to_string(),
            changes: "balance adjusted".to_string(),
            timestamp: "2024-01-05T15:04:00Z".to_string(),
            user_id: "u1".to_string(),
            admin_id: "admin".to_string(),
            action: "adjust".to_string(),
        }];

        let stats = dashboard.stats();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.flagged_users, 1);
        assert_eq!(stats.pending_flags, 2);
        assert!((stats.total_balance - 160.75).abs() < 1e-9);
        assert_eq!(stats.recent_activity, 1);
    }

    #[test]
    fn test_pending_preview_caps_at_five() {
        let mut dashboard = Dashboard::default();
        dashboard.fraud_flags = (0..8)
            .map(|i| flag(&format!("f{}", i), FraudStatus::Pending))
            .chain(std::iter::once(flag("done", FraudStatus::Resolved)))
            .collect();

        let preview = dashboard.pending_preview();
        assert_eq!(preview.len(), PENDING_PREVIEW_LEN);
        assert_eq!(preview[0].entry_id, "f0");
        assert!(preview.iter().all(|f| f.is_pending()));
    }

    #[test]
    fn test_empty_fraud_message() {
        let mut dashboard = Dashboard::default();
        dashboard.set_fraud_filter(FraudFilter::Resolved);
        assert_eq!(
            dashboard.empty_fraud_message(),
            "No fraud flags found for \"resolved\" status."
        );
    }

    #[test]
    fn test_can_resolve_only_pending() {
        assert!(Dashboard::can_resolve(&flag("a", FraudStatus::Pending)));
        assert!(!Dashboard::can_resolve(&flag("b", FraudStatus::Resolved)));
        assert!(!Dashboard::can_resolve(&flag("c", FraudStatus::Rejected)));
    }

    #[test]
    fn test_with_data_is_loaded() {
        let page = AuditLogPage {
            data: Vec::new(),
            pagination: Pagination {
                total: 40,
                limit: 20,
                offset: 20,
                has_more: false,
            },
        };
        let dashboard = Dashboard::with_data(vec![], vec![flag("f1", FraudStatus::Pending)], page);
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.audit_page_size(), 20);
        assert_eq!(dashboard.audit_offset(), 20);
        assert_eq!(dashboard.stats().pending_flags, 1);
    }

    #[test]
    fn test_page_size_is_at_least_one() {
        assert_eq!(Dashboard::new(0).audit_page_size(), 1);
    }
}
