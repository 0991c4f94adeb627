//! Flags command implementation

use admin_client::ApiClient;
use admin_core::format::{format_currency, format_date};
use admin_core::model::{FraudFlag, FraudStatus};

use super::print_lines;
use crate::Result;

/// Render fraud flags, one block per flag
pub fn render(flags: &[FraudFlag], status: Option<FraudStatus>) -> Vec<String> {
    if flags.is_empty() {
        let filter = status.map_or("all", |s| s.as_str());
        return vec![format!("No fraud flags found for \"{}\" status.", filter)];
    }

    let mut lines = Vec::new();
    for flag in flags {
        lines.push(format!(
            "{}  [{}]  user {}  {}",
            flag.entry_id,
            flag.status,
            flag.user_id,
            format_currency(flag.amount)
        ));
        lines.push(format!("    {}", flag.reason));
        lines.push(format!("    Flagged: {}", format_date(&flag.timestamp)));
        if let Some(resolved_at) = &flag.resolved_at {
            lines.push(format!("    Resolved: {}", format_date(resolved_at)));
        }
    }
    lines
}

/// Run the flags command
pub async fn run(client: &ApiClient, status: Option<FraudStatus>) -> Result<()> {
    let flags = client.get_fraud_flags(status).await?;
    tracing::info!(count = flags.len(), status = ?status, "Fetched fraud flags");
    print_lines(&render(&flags, status));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&[], Some(FraudStatus::Rejected)),
            vec!["No fraud flags found for \"rejected\" status.".to_string()]
        );
        assert_eq!(
            render(&[], None),
            vec!["No fraud flags found for \"all\" status.".to_string()]
        );
    }

    #[test]
    fn test_render_resolved_flag() {
        let flag = FraudFlag {
            entry_id: "e-7".to_string(),
            reason: "device mismatch".to_string(),
            user_id: "u-3".to_string(),
            amount: 42.0,
            timestamp: "2024-01-05T15:04:00Z".to_string(),
            status: FraudStatus::Resolved,
            resolved_at: Some("2024-01-06T09:00:00Z".to_string()),
        };
        let lines = render(&[flag], None);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("e-7  [resolved]  user u-3  $42.00"));
        assert!(lines[1].contains("device mismatch"));
        assert!(lines[3].starts_with("    Resolved: "));
    }
}
