//! Match entry points.
//!
//! - `game`: `simulate_game` and its `GameResult`
//! - `slate`: parallel fixtures with deterministic per-match seeds

pub mod game;
pub mod slate;

pub use game::{simulate_game, GameResult, TeamBox, RECONCILE_CONTEXT};
pub use slate::{simulate_slate, slate_seeds, Fixture, WorkerPool};
