//! Error types for the fantasy football league keeper

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Season not found: {year}")]
    SeasonNotFound { year: String },

    #[error("Season already exists: {year}")]
    SeasonExists { year: String },

    #[error("Week not found: {week} in season {year}")]
    WeekNotFound { year: String, week: u16 },

    #[error("Invalid input: {message}")]
    Validation { message: String },

    #[error("Failed to parse year or week number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl LeagueError {
    /// Build a validation error from anything string-like.
    pub fn validation(message: impl Into<String>) -> Self {
        LeagueError::Validation {
            message: message.into(),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LeagueError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LeagueError::Storage {
            message: err.to_string(),
        }
    }
}
