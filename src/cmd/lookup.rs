use clap::Args;

use crate::context::AppContext;
use crate::domain::ticket::{TicketId, TicketRecord};
use crate::error::AppResult;
use crate::workflow::validation::verify_exists;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Notion integration token.
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    pub notion_token: String,
    /// Notion database to search.
    #[arg(long)]
    pub database_id: String,
    /// Name of the numeric property holding the ticket number.
    #[arg(long)]
    pub property: String,
    /// Ticket number to look up.
    pub id: u64,
}

pub fn exists_message(record: &TicketRecord) -> String {
    format!("Page exists: {}", record.url.as_deref().unwrap_or(&record.id))
}

pub async fn run(ctx: &AppContext, args: &LookupArgs) -> AppResult<TicketRecord> {
    verify_exists(
        ctx.ticket_tracker.as_ref(),
        &args.database_id,
        &args.property,
        TicketId(args.id),
    )
    .await
}
