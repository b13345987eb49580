//! Rotation building and usage allocation (pipeline stages 1 and 2).
//!
//! ## Rotation Builder
//!
//! Turns a roster into ordered slots: five starters then the bench, with
//! minutes summing to exactly 240.
//!
//! ## Usage Allocator
//!
//! Derives each player's usage share from effective rating relative to the
//! team's minutes-weighted average.

pub mod builder;
pub mod usage;

pub use builder::{build_rotation, Rotation, RotationEntry, REPAIR_WINDOW, STARTERS};
pub use usage::{allocate_usage, MAX_USAGE, MIN_USAGE};
