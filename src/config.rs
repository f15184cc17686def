use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub notion_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(notion_base_url: String, timeout_secs: u64) -> Self {
        Self {
            notion_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Trims an Actions input. Unset inputs arrive as empty strings, so blank
/// values count as absent.
pub fn optional_input(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required_input(name: &str, value: Option<String>) -> AppResult<String> {
    optional_input(value).ok_or_else(|| AppError::MissingInput(name.to_string()))
}
