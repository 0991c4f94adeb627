//! Interactive dashboard command

use admin_client::ApiClient;

use crate::app::TuiApp;
use crate::config::ConsoleConfig;

/// Run the TUI until the user quits
pub async fn run(client: ApiClient, config: &ConsoleConfig) -> anyhow::Result<()> {
    let mut app = TuiApp::new(client, config.audit_page_size)?;
    app.run().await
}
