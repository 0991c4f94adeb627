//! Credit config command implementation

use admin_client::ApiClient;
use admin_core::backend::AdminBackend;
use admin_core::model::{CreditConfig, CreditConfigPatch};

use super::print_lines;
use crate::{ConsoleError, Result};

/// Render config values as aligned rows
pub fn render(config: &CreditConfig) -> Vec<String> {
    config
        .entries()
        .iter()
        .map(|(label, value)| format!("{:<24} {:>12}", label, value))
        .collect()
}

/// Run `config show`
pub async fn show(client: &ApiClient) -> Result<()> {
    let config = client.get_config().await?;
    print_lines(&render(&config));
    Ok(())
}

/// Apply a partial update through any backend. Empty patches are refused
/// before a request is made.
pub async fn apply<B: AdminBackend>(backend: &B, patch: &CreditConfigPatch) -> Result<CreditConfig> {
    if patch.is_empty() {
        return Err(ConsoleError::invalid_argument(
            "config set needs at least one field to update",
        ));
    }
    tracing::info!(?patch, "Updating credit config");
    backend
        .update_credit_config(patch)
        .await
        .map_err(ConsoleError::backend)
}

/// Run `config set`
pub async fn set(client: &ApiClient, patch: &CreditConfigPatch) -> Result<()> {
    let config = apply(client, patch).await?;
    println!("Credit config updated:");
    print_lines(&render(&config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config() {
        let config = CreditConfig {
            contest_win: 50.0,
            max_single_transaction: 2500.5,
            ..Default::default()
        };
        let lines = render(&config);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Contest win"));
        assert!(lines[0].ends_with("50"));
        assert!(lines[6].ends_with("2500.5"));
    }

    #[tokio::test]
    async fn test_set_rejects_empty_patch() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let result = set(&client, &CreditConfigPatch::default()).await;
        assert!(matches!(result, Err(ConsoleError::InvalidArgument(_))));
    }
}
