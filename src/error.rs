use std::io;

use thiserror::Error;

use crate::domain::ticket::TicketId;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Notion token is required.")]
    MissingToken,
    #[error("Invalid scope \"{0}\". Valid values are \"branch\", \"pr_title\", or \"both\".")]
    InvalidScope(String),
    #[error("{0}")]
    PatternNotFound(String),
    #[error("Ticket number in \"{prefix}-{digits}\" is too large (maximum {max})", max = u64::MAX)]
    TicketIdOutOfRange { prefix: String, digits: String },
    #[error("Branch ID ({branch}) and PR ID ({pr}) do not match.")]
    IdentifierMismatch { branch: TicketId, pr: TicketId },
    #[error("No page found with unique_id = {0}")]
    NotFound(TicketId),
    /// Failure reported by the tracking-system client, passed through as is.
    #[error("{0}")]
    TicketTracker(String),
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
