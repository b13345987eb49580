//! Ingestion and configuration errors.
//!
//! Simulation itself never fails; these errors are only raised while turning
//! loosely shaped records into validated engine inputs, or when a sized
//! worker pool cannot be started.

use thiserror::Error;

use super::player::PlayerId;

/// Validation failure while building engine inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("player {player}: rating {value} outside 40-99")]
    RatingOutOfRange { player: PlayerId, value: f64 },

    #[error("player {player}: attribute `{attribute}` = {value} outside 1-99")]
    AttributeOutOfRange {
        player: PlayerId,
        attribute: &'static str,
        value: f64,
    },

    #[error("player {player}: fatigue {value} outside 0-100")]
    FatigueOutOfRange { player: PlayerId, value: f64 },

    #[error("player {player}: measurable `{measurable}` = {value} must be positive")]
    InvalidMeasurable {
        player: PlayerId,
        measurable: &'static str,
        value: f64,
    },

    #[error("minutes template: {0}")]
    InvalidTemplate(String),

    #[error("tier {0} is not one of 1, 2, 3")]
    InvalidTier(u8),

    #[error("worker pool: {0}")]
    WorkerPool(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
