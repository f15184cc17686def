use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// The two pull request fields the gate inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub branch: String,
    pub title: String,
}

impl PullRequest {
    /// Reads the pull request from a GitHub Actions event payload file.
    pub fn from_event_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            AppError::Configuration(format!(
                "failed to read event payload {}: {err}",
                path.display()
            ))
        })?;
        Self::from_event_json(&contents)
    }

    pub fn from_event_json(contents: &str) -> AppResult<Self> {
        let event: EventPayload = serde_json::from_str(contents)
            .map_err(|err| AppError::Configuration(format!("invalid event payload: {err}")))?;
        let pull_request = event.pull_request.ok_or_else(|| {
            AppError::Configuration(
                "event payload has no pull_request; run on pull_request events".to_string(),
            )
        })?;

        Ok(Self {
            branch: pull_request.head.branch,
            title: pull_request.title,
        })
    }
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<EventPullRequest>,
}

#[derive(Deserialize)]
struct EventPullRequest {
    title: String,
    head: EventHead,
}

#[derive(Deserialize)]
struct EventHead {
    #[serde(rename = "ref")]
    branch: String,
}
