//! Match configuration types.
//!
//! Callers configure a match by providing:
//! - `SimulationOptions`: tier, playoffs flag, home-court bonus, seed, fatigue model
//! - `CoachModifiers`: per-team coaching constants
//! - `MinutesTemplate`: per-team 13-slot minutes distribution
//!
//! `TierPaceProfile` is static per tier and selected through `Tier`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Minutes in one regulation game for one on-court slot.
pub const GAME_MINUTES: u32 = 48;

/// Total team minutes: five on-court slots for a full game.
pub const TEAM_MINUTES: u32 = 5 * GAME_MINUTES;

/// Number of rotation slots in a minutes template.
pub const ROTATION_SLOTS: usize = 13;

/// Competitive tier. Tier 1 is the top level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    One,
    Two,
    Three,
}

impl Tier {
    /// Scoring profile for this tier.
    #[must_use]
    pub const fn pace_profile(self) -> TierPaceProfile {
        match self {
            Tier::One => TierPaceProfile {
                target_points: 107.0,
                variance: 8.0,
                min_scale: 0.85,
                max_scale: 1.15,
            },
            Tier::Two => TierPaceProfile {
                target_points: 100.0,
                variance: 9.0,
                min_scale: 0.80,
                max_scale: 1.20,
            },
            Tier::Three => TierPaceProfile {
                target_points: 94.0,
                variance: 10.0,
                min_scale: 0.75,
                max_scale: 1.25,
            },
        }
    }

    /// Numeric tier (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            other => Err(EngineError::InvalidTier(other)),
        }
    }
}

/// Target team scoring for a tier, and how far normalization may rescale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierPaceProfile {
    /// Target total team points.
    pub target_points: f64,
    /// Standard deviation of the per-game target.
    pub variance: f64,
    /// Lower bound of the team-wide attempt rescale factor.
    pub min_scale: f64,
    /// Upper bound of the team-wide attempt rescale factor.
    pub max_scale: f64,
}

/// Coaching constants for one team, fixed for the match.
///
/// Multipliers are neutral at 1.0, shifts and bonuses at 0.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoachModifiers {
    /// Multiplier on shot volume and target score.
    pub pace: f64,
    /// Shooting percentage points removed from the opponent.
    pub defense: f64,
    pub assist: f64,
    pub steal_block: f64,
    pub turnover: f64,
    pub foul: f64,
    /// Shift applied to every player's three-point attempt share.
    pub three_point_rate: f64,
    /// Rating points added to every player.
    pub overall_bonus: f64,
    /// Fraction (0-1) of a negative matchup edge that is cancelled.
    pub adaptability: f64,
}

impl Default for CoachModifiers {
    fn default() -> Self {
        Self {
            pace: 1.0,
            defense: 0.0,
            assist: 1.0,
            steal_block: 1.0,
            turnover: 1.0,
            foul: 1.0,
            three_point_rate: 0.0,
            overall_bonus: 0.0,
            adaptability: 0.0,
        }
    }
}

impl CoachModifiers {
    /// Set pace multiplier.
    #[must_use]
    pub fn with_pace(mut self, pace: f64) -> Self {
        self.pace = pace;
        self
    }

    /// Set defensive penalty applied to the opponent.
    #[must_use]
    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = defense;
        self
    }

    /// Set three-point attempt share shift.
    #[must_use]
    pub fn with_three_point_rate(mut self, shift: f64) -> Self {
        self.three_point_rate = shift;
        self
    }

    /// Set adaptability (clamped to 0-1 when used).
    #[must_use]
    pub fn with_adaptability(mut self, adaptability: f64) -> Self {
        self.adaptability = adaptability;
        self
    }
}

/// Inclusive minutes range for one rotation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    pub min: u32,
    pub max: u32,
}

impl SlotRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Rounded-down midpoint.
    #[must_use]
    pub const fn midpoint(self) -> u32 {
        (self.min + self.max) / 2
    }
}

/// Coach-provided minutes distribution over the 13 rotation slots.
///
/// Deserialization goes through [`MinutesTemplate::new`], so a decoded
/// template is always valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTemplate")]
pub struct MinutesTemplate {
    slots: [SlotRange; ROTATION_SLOTS],
}

#[derive(Deserialize)]
struct RawTemplate {
    slots: [SlotRange; ROTATION_SLOTS],
}

impl TryFrom<RawTemplate> for MinutesTemplate {
    type Error = EngineError;

    fn try_from(raw: RawTemplate) -> Result<Self> {
        Self::new(raw.slots)
    }
}

impl MinutesTemplate {
    /// Validate and build a template.
    ///
    /// Every range must satisfy `min <= max <= 48` and the maxima must not
    /// increase from one slot to the next.
    pub fn new(slots: [SlotRange; ROTATION_SLOTS]) -> Result<Self> {
        for (i, slot) in slots.iter().enumerate() {
            if slot.min > slot.max {
                return Err(EngineError::InvalidTemplate(format!(
                    "slot {i}: min {} exceeds max {}",
                    slot.min, slot.max
                )));
            }
            if slot.max > GAME_MINUTES {
                return Err(EngineError::InvalidTemplate(format!(
                    "slot {i}: max {} exceeds {GAME_MINUTES}",
                    slot.max
                )));
            }
        }
        if let Some(i) = slots.windows(2).position(|w| w[1].max > w[0].max) {
            return Err(EngineError::InvalidTemplate(format!(
                "slot {} allows more minutes than slot {i}",
                i + 1
            )));
        }
        Ok(Self { slots })
    }

    /// Ranges in slot order.
    #[must_use]
    pub fn slots(&self) -> &[SlotRange; ROTATION_SLOTS] {
        &self.slots
    }

    /// Range for a slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> SlotRange {
        self.slots[index]
    }
}

impl Default for MinutesTemplate {
    /// Standard nine-deep rotation; midpoints sum to 240.
    fn default() -> Self {
        Self {
            slots: [
                SlotRange::new(34, 38),
                SlotRange::new(33, 37),
                SlotRange::new(32, 36),
                SlotRange::new(30, 34),
                SlotRange::new(28, 32),
                SlotRange::new(22, 26),
                SlotRange::new(18, 22),
                SlotRange::new(14, 18),
                SlotRange::new(8, 12),
                SlotRange::new(0, 4),
                SlotRange::new(0, 2),
                SlotRange::new(0, 0),
                SlotRange::new(0, 0),
            ],
        }
    }
}

/// Rating penalty as a function of current fatigue.
///
/// Injected by the fatigue collaborator. Only consulted for players whose
/// effective rating was not supplied upstream.
pub trait FatigueModel: std::fmt::Debug + Send + Sync {
    /// Rating points lost at the given fatigue (0-100).
    fn penalty(&self, fatigue: f64) -> f64;
}

/// Linear penalty above a fatigue threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFatigue {
    /// Fatigue below which there is no penalty.
    pub threshold: f64,
    /// Rating points lost per fatigue point above the threshold.
    pub per_point: f64,
}

impl Default for LinearFatigue {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            per_point: 0.15,
        }
    }
}

impl FatigueModel for LinearFatigue {
    fn penalty(&self, fatigue: f64) -> f64 {
        (fatigue - self.threshold).max(0.0) * self.per_point
    }
}

/// Per-match options.
#[derive(Clone, Debug)]
pub struct SimulationOptions {
    /// Playoff game: clutch modifier on, chemistry sensitivity doubled.
    pub playoffs: bool,

    /// Competitive tier; selects pace profile and rescale band.
    pub tier: Tier,

    /// Rating points added to every home player.
    pub home_court_bonus: f64,

    /// Random seed. Same seed and inputs produce the same result.
    pub seed: u64,

    /// Fatigue penalty lookup.
    pub fatigue: Arc<dyn FatigueModel>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            playoffs: false,
            tier: Tier::One,
            home_court_bonus: 3.0,
            seed: 42,
            fatigue: Arc::new(LinearFatigue::default()),
        }
    }
}

impl SimulationOptions {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom tier.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Mark as a playoff game.
    #[must_use]
    pub fn with_playoffs(mut self, playoffs: bool) -> Self {
        self.playoffs = playoffs;
        self
    }

    /// Create a new config with custom home-court bonus.
    #[must_use]
    pub fn with_home_court_bonus(mut self, bonus: f64) -> Self {
        self.home_court_bonus = bonus;
        self
    }

    /// Inject a fatigue model.
    #[must_use]
    pub fn with_fatigue_model(mut self, model: Arc<dyn FatigueModel>) -> Self {
        self.fatigue = model;
        self
    }
}
