use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::infra::notion::NotionClient;
use crate::services::TicketTrackerService;

#[derive(Clone)]
pub struct AppContext {
    pub ticket_tracker: Arc<dyn TicketTrackerService>,
}

impl AppContext {
    pub fn new(ticket_tracker: Arc<dyn TicketTrackerService>) -> Self {
        Self { ticket_tracker }
    }

    /// Wires the Notion client. The token is only checked when a query is sent.
    pub fn notion(config: &AppConfig, token: Option<String>) -> AppResult<Self> {
        let client = NotionClient::new(
            config.notion_base_url.clone(),
            token,
            config.request_timeout,
        )?;
        Ok(Self::new(Arc::new(client)))
    }
}
