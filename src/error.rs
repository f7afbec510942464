//! Error types for the name battle engine

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, BattleError>;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Tier '{tier}' weights sum to {sum}, expected 1.0")]
    InvalidTierWeights { tier: String, sum: f64 },

    #[error("Tier '{tier}' has weight {weight} outside [0, 1]")]
    WeightOutOfRange { tier: String, weight: f64 },

    #[error("Tier thresholds out of order: growth {growth} must be below mature {mature}")]
    InvalidThresholds { growth: usize, mature: usize },

    #[error("Win probability {value} is outside [0, 1]")]
    InvalidWinProbability { value: f64 },

    #[error("Invalid source category: {source_name}")]
    InvalidSource { source_name: String },

    #[error("Invalid side: {side}")]
    InvalidSide { side: String },

    #[error("Failed to parse seed: {0}")]
    InvalidSeed(#[from] std::num::ParseIntError),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("{collaborator} collaborator failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },
}

impl From<anyhow::Error> for BattleError {
    fn from(err: anyhow::Error) -> Self {
        BattleError::Storage {
            message: err.to_string(),
        }
    }
}

impl BattleError {
    /// Convenience constructor for collaborator failures.
    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        BattleError::Collaborator {
            collaborator,
            message: message.into(),
        }
    }
}
