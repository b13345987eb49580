//! Raw stat generation (pipeline stage 4).
//!
//! Every rotation slot with minutes gets a line built from its position
//! archetype, scaled by boosted rating, minutes, usage, chemistry, coaching
//! and attribute cross-effects, then perturbed with bounded noise. Shooting
//! is drawn separately: attempts, shot mix, then binomial makes.
//!
//! ## Modules
//!
//! - `archetype`: static per-position baselines
//! - `line`: `StatLine` and `TeamTotals`
//! - `draw`: binomial and noisy-count draws
//! - `shooting`: shot volume, mix, percentages, makes
//! - `generator`: per-slot and per-team generation

pub mod archetype;
pub mod draw;
pub mod generator;
pub mod line;
pub mod shooting;

pub use archetype::{PositionArchetype, StatKind};
pub use draw::{binomial, noisy_count};
pub use generator::{generate_box, generate_line, TeamContext};
pub use line::{StatLine, TeamTotals, FOUL_LIMIT};
pub use shooting::ShootingPcts;
