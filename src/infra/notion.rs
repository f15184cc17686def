use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ticket::TicketRecord;
use crate::error::{AppError, AppResult};
use crate::services::{NumberFilter, TicketTrackerService};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl NotionClient {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    fn token(&self) -> AppResult<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Configuration("Notion token not configured".to_string()))
    }

    fn query_endpoint(base_url: &str, database_id: &str) -> String {
        format!(
            "{}/v1/databases/{}/query",
            base_url.trim_end_matches('/'),
            database_id.trim()
        )
    }
}

#[async_trait]
impl TicketTrackerService for NotionClient {
    async fn query(
        &self,
        collection_id: &str,
        filter: &NumberFilter,
        limit: usize,
    ) -> AppResult<Vec<TicketRecord>> {
        let token = self.token()?;
        let endpoint = Self::query_endpoint(&self.base_url, collection_id);
        let request_body = NotionQueryRequest::new(filter, limit);

        debug!(
            %endpoint,
            property = %filter.property,
            equals = %filter.equals,
            "querying Notion database"
        );

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::TicketTracker(format!("failed to call Notion: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::TicketTracker(format!(
                "Notion responded with {status}: {body}"
            )));
        }

        let payload: NotionQueryResponse = response.json().await.map_err(|err| {
            AppError::TicketTracker(format!("failed to parse Notion response: {err}"))
        })?;

        Ok(payload.into_records())
    }
}

#[derive(Serialize)]
struct NotionQueryRequest {
    filter: NotionPropertyFilter,
    page_size: usize,
}

impl NotionQueryRequest {
    fn new(filter: &NumberFilter, limit: usize) -> Self {
        Self {
            filter: NotionPropertyFilter {
                property: filter.property.clone(),
                number: NotionNumberCondition {
                    equals: filter.equals.value(),
                },
            },
            page_size: limit,
        }
    }
}

#[derive(Serialize)]
struct NotionPropertyFilter {
    property: String,
    number: NotionNumberCondition,
}

#[derive(Serialize)]
struct NotionNumberCondition {
    equals: u64,
}

#[derive(Deserialize)]
struct NotionQueryResponse {
    #[serde(default)]
    results: Vec<NotionPage>,
}

impl NotionQueryResponse {
    fn into_records(self) -> Vec<TicketRecord> {
        self.results
            .into_iter()
            .map(|page| TicketRecord {
                id: page.id,
                url: page.url,
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct NotionPage {
    id: String,
    url: Option<String>,
}
