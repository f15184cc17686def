mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod telemetry;
mod workflow;

use clap::{Parser, Subcommand};
use tracing::error;

use crate::cmd::lookup::{self, LookupArgs};
use crate::cmd::validate::{self, ValidateArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::actions;
use crate::infra::notion::DEFAULT_BASE_URL;
use crate::telemetry::{LogFormat, init_tracing};

#[derive(Parser)]
#[command(
    name = "ticket-gate",
    author,
    version,
    about = "Checks that a pull request references an existing Notion ticket"
)]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Notion API base URL.
    #[arg(long, env = "NOTION_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    notion_base_url: String,
    /// Timeout for the Notion request, in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the pull request's ticket key against Notion.
    Validate(ValidateArgs),
    /// Check whether a ticket number exists in a Notion database.
    Lookup(LookupArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(err) = run(cli).await {
        let message = err.to_string();
        error!("{message}");
        if let Err(io_err) = actions::set_failed(&message) {
            eprintln!("Error: {message} ({io_err})");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::new(cli.notion_base_url, cli.timeout_secs);

    match cli.command {
        Commands::Validate(args) => {
            let request = args.into_request()?;
            let ctx = AppContext::notion(&config, request.token.clone())?;
            let ticket_id = validate::run(&ctx, &request).await?;
            actions::info(&validate::found_message(ticket_id))?;
        }
        Commands::Lookup(args) => {
            let ctx = AppContext::notion(&config, Some(args.notion_token.clone()))?;
            let record = lookup::run(&ctx, &args).await?;
            actions::info(&lookup::exists_message(&record))?;
        }
    }

    Ok(())
}
