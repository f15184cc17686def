use std::fmt;

use regex::Regex;

use crate::error::{AppError, AppResult};

/// Numeric ticket identifier, e.g. `123` in `AWT-123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketId(pub u64);

impl TicketId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page returned by the tracking system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub id: String,
    pub url: Option<String>,
}

/// Finds `<prefix>-<digits>` anywhere in a branch name.
pub fn extract_from_branch(branch_name: &str, prefix: &str) -> AppResult<TicketId> {
    let pattern = format!(r"(?i:{})-([0-9]+)", regex::escape(prefix));
    let digits = capture_digits(&pattern, branch_name).ok_or_else(|| {
        AppError::PatternNotFound(format!(
            r#"Expected "{prefix}-<number>" in "{branch_name}""#
        ))
    })?;
    parse_id(prefix, digits)
}

/// Finds `<prefix>-<digits>` at the start of a PR title, optionally inside
/// square brackets.
pub fn extract_from_pr_title(pr_title: &str, prefix: &str) -> AppResult<TicketId> {
    let pattern = format!(r"^\[?\s*(?i:{})-([0-9]+)\s*\]?", regex::escape(prefix));
    let digits = capture_digits(&pattern, pr_title).ok_or_else(|| {
        AppError::PatternNotFound(format!(
            r#"Expected "{prefix}-<number>" at the start of "{pr_title}""#
        ))
    })?;
    parse_id(prefix, digits)
}

fn capture_digits<'t>(pattern: &str, text: &'t str) -> Option<&'t str> {
    // The prefix is escaped, so the pattern always compiles; a failure here
    // is treated like a non-match.
    let regex = Regex::new(pattern).ok()?;
    Some(regex.captures(text)?.get(1)?.as_str())
}

/// Ticket numbers must fit in a `u64`.
fn parse_id(prefix: &str, digits: &str) -> AppResult<TicketId> {
    digits
        .parse::<u64>()
        .map(TicketId)
        .map_err(|_| AppError::TicketIdOutOfRange {
            prefix: prefix.to_string(),
            digits: digits.to_string(),
        })
}
