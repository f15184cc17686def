use async_trait::async_trait;

use crate::domain::ticket::{TicketId, TicketRecord};
use crate::error::AppResult;

/// Equality filter on a numeric property of the tracked collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFilter {
    pub property: String,
    pub equals: TicketId,
}

#[async_trait]
pub trait TicketTrackerService: Send + Sync {
    async fn query(
        &self,
        collection_id: &str,
        filter: &NumberFilter,
        limit: usize,
    ) -> AppResult<Vec<TicketRecord>>;
}
