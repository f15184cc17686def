use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::scope::Scope;
use crate::domain::ticket::{TicketId, TicketRecord, extract_from_branch, extract_from_pr_title};
use crate::error::{AppError, AppResult};
use crate::services::{NumberFilter, TicketTrackerService};

/// Inputs of one gate run.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub token: Option<String>,
    pub prefix: String,
    pub unique_id_property: String,
    pub collection_id: String,
    pub branch_name: String,
    pub pr_title: String,
    pub scope: String,
}

/// Picks the ticket id the pull request refers to under `scope`.
pub fn resolve_authoritative_id(
    scope: Scope,
    branch_name: &str,
    pr_title: &str,
    prefix: &str,
) -> AppResult<TicketId> {
    match scope {
        Scope::Branch => extract_from_branch(branch_name, prefix),
        Scope::PrTitle => extract_from_pr_title(pr_title, prefix),
        Scope::Both => {
            let branch = extract_from_branch(branch_name, prefix)?;
            let pr = extract_from_pr_title(pr_title, prefix)?;
            if branch != pr {
                return Err(AppError::IdentifierMismatch { branch, pr });
            }
            Ok(branch)
        }
    }
}

/// Confirms a page with `property == ticket_id` exists in the collection.
pub async fn verify_exists(
    tracker: &dyn TicketTrackerService,
    collection_id: &str,
    property: &str,
    ticket_id: TicketId,
) -> AppResult<TicketRecord> {
    let filter = NumberFilter {
        property: property.to_string(),
        equals: ticket_id,
    };
    tracker
        .query(collection_id, &filter, 1)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound(ticket_id))
}

pub async fn validate(ctx: &AppContext, request: &ValidationRequest) -> AppResult<TicketId> {
    debug!("checking Notion token");
    if request.token.as_deref().is_none_or(str::is_empty) {
        return Err(AppError::MissingToken);
    }

    debug!(
        scope = %request.scope,
        branch = %request.branch_name,
        title = %request.pr_title,
        "resolving ticket id"
    );
    let scope: Scope = request.scope.parse()?;
    let ticket_id = resolve_authoritative_id(
        scope,
        &request.branch_name,
        &request.pr_title,
        &request.prefix,
    )?;

    debug!(%ticket_id, collection = %request.collection_id, "checking ticket existence");
    let record = verify_exists(
        ctx.ticket_tracker.as_ref(),
        &request.collection_id,
        &request.unique_id_property,
        ticket_id,
    )
    .await?;

    info!(%ticket_id, page = %record.id, "ticket validated");
    Ok(ticket_id)
}
