//! Resolve command implementation

use admin_client::ApiClient;
use admin_core::model::{ResolveAction, ResolveResponse};

use crate::Result;

/// Summarise the backend's answer
pub fn summary(entry_id: &str, action: ResolveAction, response: &ResolveResponse) -> String {
    match &response.message {
        Some(message) => format!("{} ({}): {}", entry_id, action, message),
        None => format!("{} ({}): submitted", entry_id, action),
    }
}

/// Run the resolve command
pub async fn run(client: &ApiClient, entry_id: &str, action: ResolveAction) -> Result<()> {
    tracing::info!(entry_id, %action, "Resolving fraud flag");
    let response = client.resolve_flag(entry_id, action).await?;
    println!("{}", summary(entry_id, action, &response));
    Ok(())
}
