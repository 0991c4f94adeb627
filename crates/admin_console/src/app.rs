//! TUI application state and event handling.

use crate::screens;
use admin_client::ApiClient;
use admin_core::backend::AdminBackend;
use admin_core::dashboard::{Dashboard, Tab};
use admin_core::model::{FraudFlag, ResolveAction};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// Work requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do beyond redrawing
    None,
    Quit,
    /// Re-fetch everything
    Reload,
    Resolve {
        entry_id: String,
        action: ResolveAction,
    },
    NextAuditPage,
    PrevAuditPage,
    LoadConfig,
}

/// Past-tense wording for status messages
fn resolved_verb(action: ResolveAction) -> &'static str {
    match action {
        ResolveAction::Approve => "approved",
        ResolveAction::Reject => "rejected",
        ResolveAction::Investigate => "marked for investigation",
    }
}

/// Console state independent of the terminal
#[derive(Debug, Clone)]
pub struct App {
    dashboard: Dashboard,
    /// Selected row in the active tab's list
    selected: usize,
    status_message: Option<String>,
}

impl App {
    /// Create an app that has not loaded anything yet
    pub fn new(audit_page_size: u32) -> Self {
        Self::from_dashboard(Dashboard::new(audit_page_size))
    }

    pub fn from_dashboard(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            selected: 0,
            status_message: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Flags that approve/reject apply to on the current tab
    pub fn visible_flags(&self) -> Vec<&FraudFlag> {
        match self.dashboard.active_tab() {
            Tab::Overview => self.dashboard.pending_preview(),
            Tab::Fraud => self.dashboard.filtered_fraud_flags(),
            _ => Vec::new(),
        }
    }

    pub fn selected_flag(&self) -> Option<&FraudFlag> {
        self.visible_flags().get(self.selected).copied()
    }

    /// Number of selectable rows on the active tab
    pub fn list_len(&self) -> usize {
        match self.dashboard.active_tab() {
            Tab::Overview | Tab::Fraud => self.visible_flags().len(),
            Tab::Users => self.dashboard.users().len(),
            Tab::Audit => self.dashboard.audit_logs().len(),
            Tab::Config => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn switch_tab(&mut self, tab: Tab) -> Action {
        self.dashboard.set_active_tab(tab);
        self.selected = 0;
        if tab == Tab::Config && self.dashboard.credit_config().is_none() {
            Action::LoadConfig
        } else {
            Action::None
        }
    }

    fn resolve_selected(&mut self, action: ResolveAction) -> Action {
        let Some(flag) = self.selected_flag() else {
            return Action::None;
        };
        if !Dashboard::can_resolve(flag) {
            let message = format!("Flag {} is already {}", flag.entry_id, flag.status);
            self.set_status(message);
            return Action::None;
        }
        Action::Resolve {
            entry_id: flag.entry_id.clone(),
            action,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            return Action::Quit;
        }
        if self.dashboard.is_loading() {
            return Action::None;
        }

        let tab = self.dashboard.active_tab();
        match key {
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.switch_tab(Tab::ALL[idx])
            }
            KeyCode::Tab => self.switch_tab(tab.next()),
            KeyCode::BackTab => self.switch_tab(tab.prev()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < self.list_len().saturating_sub(1) {
                    self.selected += 1;
                }
                Action::None
            }
            KeyCode::Char('f') if tab == Tab::Fraud => {
                self.dashboard.cycle_fraud_filter();
                self.selected = 0;
                Action::None
            }
            KeyCode::Char('a') => self.resolve_selected(ResolveAction::Approve),
            KeyCode::Char('x') => self.resolve_selected(ResolveAction::Reject),
            KeyCode::Char('n') if tab == Tab::Audit => Action::NextAuditPage,
            KeyCode::Char('p') if tab == Tab::Audit => Action::PrevAuditPage,
            KeyCode::Char('r') => Action::Reload,
            _ => Action::None,
        }
    }

    /// Carry out an action against the backend and record the outcome.
    ///
    /// Failures are already logged by the dashboard; here they only become
    /// the footer message.
    pub async fn perform<B: AdminBackend>(&mut self, backend: &B, action: Action) {
        match action {
            Action::None | Action::Quit => return,
            Action::Reload => match self.dashboard.refresh(backend).await {
                Ok(()) => {
                    let wants_config = self.dashboard.active_tab() == Tab::Config
                        || self.dashboard.credit_config().is_some();
                    let config_result = if wants_config {
                        self.dashboard.load_config(backend).await
                    } else {
                        Ok(())
                    };
                    match config_result {
                        Ok(()) => self.set_status("Dashboard refreshed"),
                        Err(err) => self.set_status(format!(
                            "Dashboard refreshed, but failed to fetch credit config: {}",
                            err
                        )),
                    }
                }
                Err(err) => self.set_status(format!("Failed to fetch data: {}", err)),
            },
            Action::Resolve { entry_id, action } => {
                match self.dashboard.resolve(backend, &entry_id, action).await {
                    Ok(()) => {
                        self.set_status(format!("Flag {} {}", entry_id, resolved_verb(action)))
                    }
                    Err(err) => self.set_status(format!("Failed to resolve fraud flag: {}", err)),
                }
            }
            Action::NextAuditPage => match self.dashboard.next_audit_page(backend).await {
                Ok(true) => {
                    self.selected = 0;
                    self.set_status(self.audit_position());
                }
                Ok(false) => self.set_status("No more audit logs"),
                Err(err) => self.set_status(format!("Failed to fetch audit logs: {}", err)),
            },
            Action::PrevAuditPage => match self.dashboard.prev_audit_page(backend).await {
                Ok(true) => {
                    self.selected = 0;
                    self.set_status(self.audit_position());
                }
                Ok(false) => self.set_status("Already at the first page"),
                Err(err) => self.set_status(format!("Failed to fetch audit logs: {}", err)),
            },
            Action::LoadConfig => {
                if let Err(err) = self.dashboard.load_config(backend).await {
                    self.set_status(format!("Failed to fetch credit config: {}", err));
                }
            }
        }
        self.clamp_selection();
    }

    fn audit_position(&self) -> String {
        let start = self.dashboard.audit_offset() as usize;
        format!(
            "Audit logs {}-{}",
            start + 1,
            start + self.dashboard.audit_logs().len()
        )
    }
}

/// Draw the whole console for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let dashboard = app.dashboard();

    if dashboard.is_loading() {
        screens::draw_loading(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let tab = dashboard.active_tab();
    screens::draw_header(frame, chunks[0], tab);

    match tab {
        Tab::Overview => screens::draw_overview(frame, chunks[1], dashboard, app.selected()),
        Tab::Users => screens::draw_users(frame, chunks[1], dashboard.users(), app.selected()),
        Tab::Fraud => screens::draw_fraud(frame, chunks[1], dashboard, app.selected()),
        Tab::Audit => screens::draw_audit(frame, chunks[1], dashboard, app.selected()),
        Tab::Config => screens::draw_config(frame, chunks[1], dashboard.credit_config()),
    }

    screens::draw_footer(frame, chunks[2], tab, app.status_message());
}

/// Terminal front end
pub struct TuiApp {
    app: App,
    /// API client
    api_client: ApiClient,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(api_client: ApiClient, audit_page_size: u32) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            app: App::new(audit_page_size),
            api_client,
            terminal,
        })
    }

    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|frame| render(frame, &self.app))?;
        Ok(())
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        self.draw()?;
        tracing::info!(api_url = self.api_client.base_url(), "Loading dashboard");
        self.app.perform(&self.api_client, Action::Reload).await;

        loop {
            self.draw()?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.app.handle_key(key.code) {
                Action::Quit => break,
                Action::None => {}
                action => {
                    tracing::debug!(?action, "Performing action");
                    self.app.perform(&self.api_client, action).await;
                }
            }
        }

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
