//! Matchup evaluation (pipeline stage 3).
//!
//! Compares each team's starters against the opposing starters in the same
//! rotation slot on height, wingspan, speed, and strength. Pairing is by slot
//! index after the position-then-rating starter sort, not by position label.

pub mod evaluator;

pub use evaluator::{assign_matchups, starter_edge, BENCH_DILUTION};
