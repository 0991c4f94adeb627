//! Screen rendering functions for the TUI.

use admin_core::dashboard::{Dashboard, FraudFilter, Tab};
use admin_core::format::{format_currency, format_date, status_tone, StatusTone};
use admin_core::model::{AuditLog, CreditConfig, FraudFlag, User};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs,
    },
};

/// Console title shown in the header
pub const APP_TITLE: &str = "Universal Credit Wallet Admin";

/// Overview message when nothing awaits review
pub const ALL_CLEAR: &str = "No pending fraud flags! All clear.";

/// Terminal colours for a status badge
pub fn tone_style(tone: StatusTone) -> Style {
    let fg = match tone {
        StatusTone::Positive => Color::Green,
        StatusTone::Warning => Color::Yellow,
        StatusTone::Danger => Color::Red,
        StatusTone::Info => Color::Blue,
        StatusTone::Muted => Color::Gray,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

fn status_badge(status: &str) -> Span<'static> {
    Span::styled(format!(" {} ", status), tone_style(status_tone(status)))
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

/// Draw the centred loading message
pub fn draw_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let loading = Paragraph::new("Loading dashboard...")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(loading, chunks[1]);
}

/// Draw header with title and tab bar
pub fn draw_header(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("[{}] {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .title(format!(" {} ", APP_TITLE))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, area);
}

/// Draw footer with keybindings and the last status message
pub fn draw_footer(frame: &mut Frame, area: Rect, active: Tab, status: Option<&str>) {
    let keys = match active {
        Tab::Overview => " [a]Approve [x]Reject [Up/Down]Select [r]Reload [q]Quit ",
        Tab::Fraud => " [a]Approve [x]Reject [f]Filter [Up/Down]Select [r]Reload [q]Quit ",
        Tab::Audit => " [Up/Down]Scroll [n]Next page [p]Prev page [r]Reload [q]Quit ",
        Tab::Users => " [Up/Down]Select [1-5/Tab]Switch tab [r]Reload [q]Quit ",
        Tab::Config => " [1-5/Tab]Switch tab [r]Reload [q]Quit ",
    };

    let mut spans = vec![muted(keys)];
    if let Some(status) = status {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, caption: String) {
    let text = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(caption)),
    ];
    let card = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL),
    );
    frame.render_widget(card, area);
}

/// Draw overview screen: stat cards and pending flag preview
pub fn draw_overview(frame: &mut Frame, area: Rect, dashboard: &Dashboard, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[0]);

    let stats = dashboard.stats();
    stat_card(
        frame,
        cards[0],
        "Total Users",
        stats.total_users.to_string(),
        format!("{} active, {} flagged", stats.active_users, stats.flagged_users),
    );
    stat_card(
        frame,
        cards[1],
        "Pending Flags",
        stats.pending_flags.to_string(),
        "Require immediate attention".to_string(),
    );
    stat_card(
        frame,
        cards[2],
        "Total Balance",
        format_currency(stats.total_balance),
        "Across all user accounts".to_string(),
    );
    stat_card(
        frame,
        cards[3],
        "Recent Activity",
        stats.recent_activity.to_string(),
        "Actions logged today".to_string(),
    );

    let block = Block::default()
        .title(format!(" Pending Fraud Flags ({}) ", stats.pending_flags))
        .borders(Borders::ALL);

    if stats.pending_flags == 0 {
        let empty = Paragraph::new(vec![Line::from(""), Line::from(muted(ALL_CLEAR))])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = dashboard
        .pending_preview()
        .into_iter()
        .map(|flag| ListItem::new(flag_lines(flag, false)))
        .collect();
    draw_flag_list(frame, chunks[1], items, block, selected);
}

fn flag_lines(flag: &FraudFlag, detailed: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                flag.user_id.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            status_badge(flag.status.as_str()),
        ]),
        Line::from(muted(flag.reason.clone())),
    ];
    if detailed {
        lines.push(Line::from(format!("Amount: {}", format_currency(flag.amount))));
    }
    lines.push(Line::from(muted(format_date(&flag.timestamp))));
    if detailed {
        if let Some(resolved_at) = &flag.resolved_at {
            lines.push(Line::from(muted(format!(
                "Resolved: {}",
                format_date(resolved_at)
            ))));
        }
    }
    lines.push(Line::from(""));
    lines
}

fn draw_flag_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    block: Block,
    selected: usize,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw users screen, scrolled to keep `selected` in view
pub fn draw_users(frame: &mut Frame, area: Rect, users: &[User], selected: usize) {
    let header_cells = ["Username", "Status", "ID", "Balance"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = users.iter().map(|user| {
        Row::new(vec![
            Cell::from(user.username.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(Line::from(status_badge(user.status.as_str()))),
            Cell::from(format!("ID: {}", user.user_id)),
            Cell::from(format_currency(user.balance)),
        ])
    });

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" User Management ({}) ", users.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !users.is_empty() {
        state.select(Some(selected.min(users.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Draw fraud flag management screen
pub fn draw_fraud(frame: &mut Frame, area: Rect, dashboard: &Dashboard, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let current = dashboard.fraud_filter();
    let filtered = dashboard.filtered_fraud_flags();

    let mut buttons = Vec::new();
    for filter in FraudFilter::ALL {
        let style = if filter == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        buttons.push(Span::styled(
            format!(" {} ({}) ", filter.label(), dashboard.filter_count(filter)),
            style,
        ));
        buttons.push(Span::raw(" "));
    }

    let mut title = format!(" Fraud Flags Management ({}) ", filtered.len());
    if current != FraudFilter::All {
        title.push_str(&format!("[filter: {}] ", current));
    }
    let filter_bar =
        Paragraph::new(Line::from(buttons)).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(filter_bar, chunks[0]);

    let block = Block::default().borders(Borders::ALL);
    if filtered.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(muted(dashboard.empty_fraud_message())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = filtered
        .into_iter()
        .map(|flag| ListItem::new(flag_lines(flag, true)))
        .collect();
    draw_flag_list(frame, chunks[1], items, block, selected);
}

fn audit_lines(log: &AuditLog) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            muted(format_date(&log.timestamp)),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", log.action),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
        ]),
        Line::from(log.changes.clone()),
        Line::from(muted(format!("User: {} | Admin: {}", log.user_id, log.admin_id))),
        Line::from(""),
    ]
}

/// Draw audit log screen, scrolled to keep `selected` in view
pub fn draw_audit(frame: &mut Frame, area: Rect, dashboard: &Dashboard, selected: usize) {
    let logs = dashboard.audit_logs();

    let title = match dashboard.audit_pagination() {
        Some(p) if !logs.is_empty() => format!(
            " Audit Logs ({}-{} of {}) ",
            p.offset as usize + 1,
            p.offset as usize + logs.len(),
            p.total
        ),
        _ => " Audit Logs ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if logs.is_empty() {
        let empty = Paragraph::new(vec![Line::from(""), Line::from(muted("No audit logs."))])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = logs.iter().map(|log| ListItem::new(audit_lines(log))).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected.min(logs.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw credit configuration screen
pub fn draw_config(frame: &mut Frame, area: Rect, config: Option<&CreditConfig>) {
    let block = Block::default()
        .title(" Credit Configuration ")
        .borders(Borders::ALL);

    let Some(config) = config else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(muted("Credit configuration not loaded. Press [r] to reload.")),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let rows = config.entries().into_iter().map(|(label, value)| {
        Row::new(vec![
            Cell::from(label).style(Style::default().fg(Color::Yellow)),
            Cell::from(format!("{:>12}", value)),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(26), Constraint::Min(12)]).block(block);
    frame.render_widget(table, area);
}
