//! Users command implementation

use admin_client::ApiClient;
use admin_core::format::format_currency;
use admin_core::model::User;

use super::print_lines;
use crate::Result;

/// Render users as aligned rows
pub fn render(users: &[User]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<20} {:<10} {:<24} {:>16}",
        "USERNAME", "STATUS", "ID", "BALANCE"
    )];
    lines.extend(users.iter().map(|user| {
        format!(
            "{:<20} {:<10} {:<24} {:>16}",
            user.username,
            user.status,
            user.user_id,
            format_currency(user.balance)
        )
    }));
    lines
}

/// Run the users command
pub async fn run(client: &ApiClient) -> Result<()> {
    let users = client.get_users().await?;
    tracing::info!(count = users.len(), "Fetched users");
    print_lines(&render(&users));
    Ok(())
}
