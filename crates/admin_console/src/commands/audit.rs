//! Audit command implementation

use admin_client::ApiClient;
use admin_core::format::format_date;
use admin_core::model::AuditLogPage;

use super::print_lines;
use crate::Result;

/// Render an audit page followed by its pagination line
pub fn render(page: &AuditLogPage) -> Vec<String> {
    let mut lines = Vec::new();
    for log in &page.data {
        lines.push(format!("{}  [{}]", format_date(&log.timestamp), log.action));
        lines.push(format!("    {}", log.changes));
        lines.push(format!("    User: {} | Admin: {}", log.user_id, log.admin_id));
    }

    let p = &page.pagination;
    if page.data.is_empty() {
        lines.push(format!("No audit logs at offset {} (total {})", p.offset, p.total));
    } else {
        lines.push(format!(
            "Showing {}-{} of {}{}",
            p.offset as usize + 1,
            p.offset as usize + page.data.len(),
            p.total,
            if p.has_more { " (more available)" } else { "" }
        ));
    }
    lines
}

/// Run the audit command
pub async fn run(client: &ApiClient, limit: u32, offset: u32) -> Result<()> {
    let page = client.get_audit_logs(limit, offset).await?;
    tracing::info!(count = page.data.len(), limit, offset, "Fetched audit logs");
    print_lines(&render(&page));
    Ok(())
}
