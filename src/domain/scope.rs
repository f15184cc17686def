use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Which pull request fields must carry the ticket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    Branch,
    PrTitle,
    #[default]
    Both,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Branch => "branch",
            Scope::PrTitle => "pr_title",
            Scope::Both => "both",
        }
    }
}

impl FromStr for Scope {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "branch" => Ok(Scope::Branch),
            "pr_title" => Ok(Scope::PrTitle),
            "both" => Ok(Scope::Both),
            other => Err(AppError::InvalidScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
