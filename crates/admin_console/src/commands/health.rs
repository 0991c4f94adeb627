//! Health command implementation

use admin_client::ApiClient;
use admin_core::backend::AdminBackend;
use admin_core::model::HealthReport;

use super::print_lines;
use crate::{ConsoleError, Result};

/// Probe backend health
pub async fn check<B: AdminBackend>(backend: &B) -> Result<HealthReport> {
    backend.health().await.map_err(ConsoleError::backend)
}

/// Render the status line followed by any extra fields the backend reports
pub fn render(base_url: &str, report: &HealthReport) -> Vec<String> {
    let status = report.status.as_deref().unwrap_or("unknown");
    let mut lines = vec![format!("{}: {}", base_url, status)];
    for (key, value) in &report.details {
        lines.push(format!("  {}: {}", key, value));
    }
    lines
}

/// Run the health command
pub async fn run(client: &ApiClient) -> Result<()> {
    let report = check(client).await?;
    print_lines(&render(client.base_url(), &report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_report() {
        let report: HealthReport =
            serde_json::from_value(json!({ "status": "ok", "uptime": 42 })).unwrap();
        assert_eq!(
            render("http://localhost:3001", &report),
            vec![
                "http://localhost:3001: ok".to_string(),
                "  uptime: 42".to_string()
            ]
        );
    }

    #[test]
    fn test_render_missing_status() {
        let lines = render("http://b", &HealthReport::default());
        assert_eq!(lines, vec!["http://b: unknown".to_string()]);
    }
}
