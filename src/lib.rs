//! # hoopsim
//!
//! Statistical single-game simulation core for a season-long basketball
//! management sim.
//!
//! Given two rosters it produces a final score, a full per-player box score
//! and a winner, with no play-by-play. Box scores are internally consistent:
//! makes never exceed attempts, minutes sum to 240, assists are bounded by
//! made shots, and the score is never tied.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random draw comes from an explicit seeded
//!    `SimRng`. Same inputs and seed, byte-identical `GameResult`.
//!
//! 2. **Stateless**: `simulate_game` borrows its inputs and returns a new
//!    result. Nothing persists between calls.
//!
//! 3. **Never fails mid-season**: Empty rosters and degenerate inputs degrade
//!    to zero lines instead of errors. Validation happens once, at ingestion.
//!
//! ## Pipeline
//!
//! 1. `rotation`: starters, bench and minutes, then usage shares
//! 2. `matchup`: slot-by-slot physical edges between starters
//! 3. `stats`: raw box-score lines from position archetypes
//! 4. `reconcile`: tier normalization, assist cap, tie-break
//!
//! Stages 1-3 run per team (concurrently, on separate RNG streams); only
//! reconciliation sees both teams.
//!
//! ## Modules
//!
//! - `core`: players, teams, sides, RNG, configuration, errors
//! - `engine`: `simulate_game` and parallel slates
//!
//! ```
//! use hoopsim::{simulate_game, Player, Position, SimulationOptions, Team};
//!
//! let roster = |id: u32| {
//!     Team::new(id, "Club").with_players(
//!         (0..10).map(|i| Player::new(id * 100 + i, "P", Position::ALL[i as usize % 5], 75.0)),
//!     )
//! };
//! let result = simulate_game(&roster(1), &roster(2), &SimulationOptions::default().with_seed(7));
//! assert_ne!(result.home.score, result.away.score);
//! ```

pub mod core;
pub mod engine;
pub mod matchup;
pub mod reconcile;
pub mod rotation;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    AttributeRecord, Attributes, Availability, CoachModifiers, EngineError, FatigueModel,
    LinearFatigue, Measurables, MinutesTemplate, Player, PlayerId, PlayerRecord, Position, Result,
    Side, SideMap, SimRng, SimRngState, SimulationOptions, SlotRange, Team, Tier, TierPaceProfile,
};

pub use crate::engine::{simulate_game, simulate_slate, Fixture, GameResult, TeamBox, WorkerPool};

pub use crate::rotation::{Rotation, RotationEntry};

pub use crate::stats::{PositionArchetype, StatLine, TeamTotals};

pub use crate::reconcile::TieBreak;
