//! Command-line interface definition and dispatch.

use crate::commands;
use crate::config::{ConsoleConfig, DEFAULT_CONFIG_FILE};
use crate::logging::{self, LogTarget};
use admin_client::{ApiClient, DEFAULT_AUDIT_LIMIT};
use admin_core::model::{CreditConfigPatch, FraudStatus, ResolveAction};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Universal Credit Wallet admin console
#[derive(Debug, Parser)]
#[command(name = "wallet-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Backend base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Command to run; opens the dashboard when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    Tui,

    /// List user accounts
    Users,

    /// List fraud flags
    Flags {
        /// Only flags with this status (pending, resolved, rejected)
        #[arg(short, long)]
        status: Option<FraudStatus>,
    },

    /// Approve, reject or investigate a fraud flag
    Resolve {
        /// Entry ID of the flag
        entry_id: String,

        /// Decision (approve, reject, investigate)
        action: ResolveAction,
    },

    /// Show audit logs
    Audit {
        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_AUDIT_LIMIT)]
        limit: u32,

        /// Entries to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Show or update credit configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Check backend health
    Health,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ConfigCommand {
    /// Print the current credit configuration
    Show,
    /// Update one or more credit configuration values
    Set(ConfigSetArgs),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ConfigSetArgs {
    #[arg(long)]
    pub contest_win: Option<f64>,
    #[arg(long)]
    pub referral: Option<f64>,
    #[arg(long)]
    pub content_submission: Option<f64>,
    #[arg(long)]
    pub follow: Option<f64>,
    #[arg(long)]
    pub purchase: Option<f64>,
    #[arg(long)]
    pub daily_limit: Option<f64>,
    #[arg(long)]
    pub max_single_transaction: Option<f64>,
}

impl From<ConfigSetArgs> for CreditConfigPatch {
    fn from(args: ConfigSetArgs) -> Self {
        Self {
            contest_win: args.contest_win,
            referral: args.referral,
            content_submission: args.content_submission,
            follow: args.follow,
            purchase: args.purchase,
            daily_limit: args.daily_limit,
            max_single_transaction: args.max_single_transaction,
        }
    }
}

impl Cli {
    /// Resolve configuration: file or defaults, environment, then `--api-url`
    pub fn load_config(&self) -> Result<ConsoleConfig, crate::config::ConfigError> {
        let mut config = ConsoleConfig::load_or_default(&self.config)?.with_env_override();
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Run the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let target = if command == Commands::Tui {
        LogTarget::File(config.log_file.clone())
    } else {
        LogTarget::Stderr
    };
    logging::init(level, &target)?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    let client = ApiClient::new(&config.api_url).with_timeout(config.request_timeout());

    match command {
        Commands::Tui => commands::tui::run(client, &config).await?,
        Commands::Users => commands::users::run(&client).await?,
        Commands::Flags { status } => commands::flags::run(&client, status).await?,
        Commands::Resolve { entry_id, action } => {
            commands::resolve::run(&client, &entry_id, action).await?
        }
        Commands::Audit { limit, offset } => commands::audit::run(&client, limit, offset).await?,
        Commands::Config { command } => match command {
            ConfigCommand::Show => commands::credit_config::show(&client).await?,
            ConfigCommand::Set(args) => {
                commands::credit_config::set(&client, &CreditConfigPatch::from(args)).await?
            }
        },
        Commands::Health => commands::health::run(&client).await?,
    }

    Ok(())
}
