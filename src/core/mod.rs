//! Core engine types: players, teams, sides, RNG, configuration, errors.
//!
//! Everything here is input-side. The pipeline stages live in `rotation`,
//! `matchup`, `stats`, and `reconcile`; `engine` wires them together.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod side;
pub mod team;

pub use config::{
    CoachModifiers, FatigueModel, LinearFatigue, MinutesTemplate, SimulationOptions, SlotRange, Tier,
    TierPaceProfile, GAME_MINUTES, ROTATION_SLOTS, TEAM_MINUTES,
};
pub use error::{EngineError, Result};
pub use player::{
    AttributeRecord, Attributes, Availability, Measurables, Player, PlayerId, PlayerRecord, Position,
    NEUTRAL_ATTRIBUTE,
};
pub use rng::{SimRng, SimRngState};
pub use side::{Side, SideMap};
pub use team::Team;
