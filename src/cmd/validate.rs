use std::path::PathBuf;

use clap::Args;

use crate::config::{optional_input, required_input};
use crate::context::AppContext;
use crate::domain::pull_request::PullRequest;
use crate::domain::scope::Scope;
use crate::domain::ticket::TicketId;
use crate::error::{AppError, AppResult};
use crate::workflow::validation::{ValidationRequest, validate};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Notion integration token.
    #[arg(long, env = "INPUT_NOTION_TOKEN", hide_env_values = true)]
    pub notion_token: Option<String>,
    /// Ticket key prefix, e.g. AWT for AWT-123.
    #[arg(long, env = "INPUT_PREFIX")]
    pub prefix: Option<String>,
    /// Name of the numeric Notion property holding the ticket number.
    #[arg(long, env = "INPUT_UNIQUE_ID_NAME")]
    pub unique_id_name: Option<String>,
    /// Notion database to search.
    #[arg(long, env = "INPUT_DATABASE_ID")]
    pub database_id: Option<String>,
    /// Where the ticket key must appear: branch, pr_title or both.
    #[arg(long, env = "INPUT_SCOPE")]
    pub scope: Option<String>,
    /// Branch name; read from the event payload when omitted.
    #[arg(long)]
    pub branch: Option<String>,
    /// Pull request title; read from the event payload when omitted.
    #[arg(long)]
    pub pr_title: Option<String>,
    /// Path of the triggering event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,
}

impl ValidateArgs {
    pub fn into_request(self) -> AppResult<ValidationRequest> {
        let prefix = required_input("prefix", self.prefix)?;
        let unique_id_property = required_input("unique_id_name", self.unique_id_name)?;
        let collection_id = required_input("database_id", self.database_id)?;
        let scope = optional_input(self.scope).unwrap_or_else(|| Scope::default().to_string());

        let pull_request = match (self.branch, self.pr_title) {
            (Some(branch), Some(title)) => PullRequest { branch, title },
            (branch, title) => {
                let path = self.event_path.ok_or_else(|| {
                    AppError::Configuration(
                        "no event payload; pass --branch and --pr-title or set GITHUB_EVENT_PATH"
                            .to_string(),
                    )
                })?;
                let event = PullRequest::from_event_file(&path)?;
                PullRequest {
                    branch: branch.unwrap_or(event.branch),
                    title: title.unwrap_or(event.title),
                }
            }
        };

        Ok(ValidationRequest {
            token: optional_input(self.notion_token),
            prefix,
            unique_id_property,
            collection_id,
            branch_name: pull_request.branch,
            pr_title: pull_request.title,
            scope,
        })
    }
}

pub async fn run(ctx: &AppContext, request: &ValidationRequest) -> AppResult<TicketId> {
    validate(ctx, request).await
}

pub fn found_message(ticket_id: TicketId) -> String {
    format!("Found Notion page {ticket_id}. ✅")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::extract_from_branch;

    fn args() -> ValidateArgs {
        ValidateArgs {
            notion_token: Some("secret".to_string()),
            prefix: Some("AWT".to_string()),
            unique_id_name: Some("Task ID".to_string()),
            database_id: Some("db-1".to_string()),
            scope: None,
            branch: Some("feature/AWT-1".to_string()),
            pr_title: Some("[AWT-1] Title".to_string()),
            event_path: None,
        }
    }

    #[test]
    fn scope_defaults_to_both() {
        let request = args().into_request().unwrap();
        assert_eq!(request.scope, "both");
        assert_eq!(request.branch_name, "feature/AWT-1");
    }

    #[test]
    fn empty_scope_defaults_to_both() {
        let mut args = args();
        args.scope = Some(String::new());
        let request = args.into_request().unwrap();
        assert_eq!(request.scope, "both");
    }

    #[test]
    fn token_is_left_to_the_orchestrator() {
        let mut args = args();
        args.notion_token = Some(String::new());
        let request = args.into_request().unwrap();
        assert_eq!(request.token, None);
    }

    #[test]
    fn padded_inputs_are_trimmed() {
        let mut args = args();
        args.prefix = Some("AWT ".to_string());
        args.scope = Some("branch\n".to_string());
        args.database_id = Some(" db-1\n".to_string());
        let request = args.into_request().unwrap();
        assert_eq!(request.prefix, "AWT");
        assert_eq!(request.scope, "branch");
        assert_eq!(request.collection_id, "db-1");

        let scope: Scope = request.scope.parse().unwrap();
        assert_eq!(scope, Scope::Branch);
        assert_eq!(
            extract_from_branch(&request.branch_name, &request.prefix).unwrap(),
            TicketId(1)
        );
    }

    #[test]
    fn missing_prefix_is_reported_by_name() {
        let mut args = args();
        args.prefix = None;
        let err = args.into_request().unwrap_err();
        assert_eq!(err.to_string(), "Input required and not supplied: prefix");
    }

    #[test]
    fn found_message_names_the_ticket() {
        assert_eq!(found_message(TicketId(123)), "Found Notion page 123. ✅");
    }

    #[test]
    fn missing_event_without_overrides_fails() {
        let mut args = args();
        args.pr_title = None;
        assert!(matches!(
            args.into_request().unwrap_err(),
            AppError::Configuration(_)
        ));
    }
}
