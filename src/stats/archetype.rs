//! Static per-position statistical baselines.
//!
//! Each archetype's shooting profile is calibrated so that, at 36 minutes,
//! average usage and a 75 rating, it reproduces the `points` baseline.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Counting stats with a per-36 baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    Fouls,
}

impl StatKind {
    /// Counting stats generated directly (points come from shooting).
    pub const COUNTING: [StatKind; 6] = [
        StatKind::Rebounds,
        StatKind::Assists,
        StatKind::Steals,
        StatKind::Blocks,
        StatKind::Turnovers,
        StatKind::Fouls,
    ];
}

/// Baseline statistical profile for a position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PositionArchetype {
    pub position: Position,

    // Per-36-minute baselines
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fouls: f64,

    /// Stats that scale aggressively with rating for this position.
    pub primary: &'static [StatKind],

    // Shooting profile
    pub field_goal_attempts: f64,
    /// Share of field-goal attempts taken from three.
    pub three_point_rate: f64,
    /// Free-throw attempts per field-goal attempt.
    pub free_throw_rate: f64,
    pub two_point_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
}

const POINT_GUARD: PositionArchetype = PositionArchetype {
    position: Position::PointGuard,
    points: 16.5,
    rebounds: 4.0,
    assists: 7.0,
    steals: 1.4,
    blocks: 0.3,
    turnovers: 2.8,
    fouls: 2.4,
    primary: &[StatKind::Points, StatKind::Assists, StatKind::Steals],
    field_goal_attempts: 13.5,
    three_point_rate: 0.40,
    free_throw_rate: 0.25,
    two_point_pct: 0.49,
    three_point_pct: 0.36,
    free_throw_pct: 0.82,
};

const SHOOTING_GUARD: PositionArchetype = PositionArchetype {
    position: Position::ShootingGuard,
    points: 18.0,
    rebounds: 4.2,
    assists: 3.8,
    steals: 1.2,
    blocks: 0.4,
    turnovers: 2.0,
    fouls: 2.5,
    primary: &[StatKind::Points, StatKind::Steals],
    field_goal_attempts: 14.5,
    three_point_rate: 0.42,
    free_throw_rate: 0.24,
    two_point_pct: 0.50,
    three_point_pct: 0.37,
    free_throw_pct: 0.83,
};

const SMALL_FORWARD: PositionArchetype = PositionArchetype {
    position: Position::SmallForward,
    points: 16.0,
    rebounds: 6.0,
    assists: 3.0,
    steals: 1.1,
    blocks: 0.6,
    turnovers: 1.8,
    fouls: 2.6,
    primary: &[StatKind::Points, StatKind::Rebounds],
    field_goal_attempts: 13.0,
    three_point_rate: 0.35,
    free_throw_rate: 0.25,
    two_point_pct: 0.51,
    three_point_pct: 0.35,
    free_throw_pct: 0.78,
};

const POWER_FORWARD: PositionArchetype = PositionArchetype {
    position: Position::PowerForward,
    points: 15.0,
    rebounds: 8.5,
    assists: 2.5,
    steals: 0.8,
    blocks: 1.0,
    turnovers: 1.7,
    fouls: 3.0,
    primary: &[StatKind::Rebounds, StatKind::Blocks],
    field_goal_attempts: 12.0,
    three_point_rate: 0.22,
    free_throw_rate: 0.28,
    two_point_pct: 0.53,
    three_point_pct: 0.33,
    free_throw_pct: 0.74,
};

const CENTER: PositionArchetype = PositionArchetype {
    position: Position::Center,
    points: 14.3,
    rebounds: 11.0,
    assists: 2.2,
    steals: 0.7,
    blocks: 1.8,
    turnovers: 1.9,
    fouls: 3.3,
    primary: &[StatKind::Rebounds, StatKind::Blocks],
    field_goal_attempts: 10.5,
    three_point_rate: 0.08,
    free_throw_rate: 0.33,
    two_point_pct: 0.58,
    three_point_pct: 0.30,
    free_throw_pct: 0.68,
};

impl PositionArchetype {
    /// Archetype for a position.
    #[must_use]
    pub fn for_position(position: Position) -> &'static PositionArchetype {
        match position {
            Position::PointGuard => &POINT_GUARD,
            Position::ShootingGuard => &SHOOTING_GUARD,
            Position::SmallForward => &SMALL_FORWARD,
            Position::PowerForward => &POWER_FORWARD,
            Position::Center => &CENTER,
        }
    }

    /// Per-36 baseline for a stat.
    #[must_use]
    pub fn base(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Points => self.points,
            StatKind::Rebounds => self.rebounds,
            StatKind::Assists => self.assists,
            StatKind::Steals => self.steals,
            StatKind::Blocks => self.blocks,
            StatKind::Turnovers => self.turnovers,
            StatKind::Fouls => self.fouls,
        }
    }

    /// Whether a stat is primary for this position.
    #[must_use]
    pub fn is_primary(&self, kind: StatKind) -> bool {
        self.primary.contains(&kind)
    }

    /// Expected points per 36 implied by the shooting profile.
    #[must_use]
    pub fn implied_points(&self) -> f64 {
        let threes = self.field_goal_attempts * self.three_point_rate;
        let twos = self.field_goal_attempts - threes;
        let free_throws = self.field_goal_attempts * self.free_throw_rate;
        threes * self.three_point_pct * 3.0
            + twos * self.two_point_pct * 2.0
            + free_throws * self.free_throw_pct
    }
}

impl Default for PositionArchetype {
    /// Small forward, the fallback for unrecognised positions.
    fn default() -> Self {
        SMALL_FORWARD
    }
}
