//! Per-player box-score lines and team totals.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Personal fouls at which a player fouls out.
pub const FOUL_LIMIT: u32 = 6;

/// One player's box score for one game.
///
/// Field goals include threes; two-point splits are derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    /// 1 if the player logged minutes, else 0.
    pub games_played: u8,
    /// 1 if the player started, else 0.
    pub games_started: u8,
    pub minutes: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
}

impl StatLine {
    /// All-zero line for a player who did not play.
    #[must_use]
    pub fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn two_pointers_made(&self) -> u32 {
        self.field_goals_made.saturating_sub(self.three_pointers_made)
    }

    #[must_use]
    pub fn two_pointers_attempted(&self) -> u32 {
        self.field_goals_attempted
            .saturating_sub(self.three_pointers_attempted)
    }

    /// Points implied by the shooting splits.
    #[must_use]
    pub fn shooting_points(&self) -> u32 {
        2 * self.two_pointers_made() + 3 * self.three_pointers_made + self.free_throws_made
    }

    /// Set `points` from the shooting splits.
    pub fn recompute_points(&mut self) {
        self.points = self.shooting_points();
    }

    /// Fold another slot's line for the same player into this one.
    pub fn merge(&mut self, other: &StatLine) {
        debug_assert_eq!(self.player_id, other.player_id);
        self.games_played = self.games_played.max(other.games_played);
        self.games_started = self.games_started.max(other.games_started);
        self.minutes += other.minutes;
        self.points += other.points;
        self.rebounds += other.rebounds;
        self.assists += other.assists;
        self.steals += other.steals;
        self.blocks += other.blocks;
        self.turnovers += other.turnovers;
        self.fouls = (self.fouls + other.fouls).min(FOUL_LIMIT);
        self.field_goals_made += other.field_goals_made;
        self.field_goals_attempted += other.field_goals_attempted;
        self.three_pointers_made += other.three_pointers_made;
        self.three_pointers_attempted += other.three_pointers_attempted;
        self.free_throws_made += other.free_throws_made;
        self.free_throws_attempted += other.free_throws_attempted;
    }

    /// Whether the shooting splits, points, and foul bound are coherent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.field_goals_made <= self.field_goals_attempted
            && self.three_pointers_made <= self.three_pointers_attempted
            && self.three_pointers_attempted <= self.field_goals_attempted
            && self.three_pointers_made <= self.field_goals_made
            && self.free_throws_made <= self.free_throws_attempted
            && self.fouls <= FOUL_LIMIT
            && self.points == self.shooting_points()
    }
}

/// Summed counting stats for one team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamTotals {
    pub minutes: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
}

impl TeamTotals {
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a StatLine>) -> Self {
        lines.into_iter().fold(Self::default(), |mut t, l| {
            t.minutes += l.minutes;
            t.points += l.points;
            t.rebounds += l.rebounds;
            t.assists += l.assists;
            t.steals += l.steals;
            t.blocks += l.blocks;
            t.turnovers += l.turnovers;
            t.fouls += l.fouls;
            t.field_goals_made += l.field_goals_made;
            t.field_goals_attempted += l.field_goals_attempted;
            t.three_pointers_made += l.three_pointers_made;
            t.three_pointers_attempted += l.three_pointers_attempted;
            t.free_throws_made += l.free_throws_made;
            t.free_throws_attempted += l.free_throws_attempted;
            t
        })
    }

    /// Field-goal percentage, 0 when no attempts.
    #[must_use]
    pub fn field_goal_pct(&self) -> f64 {
        if self.field_goals_attempted == 0 {
            0.0
        } else {
            self.field_goals_made as f64 / self.field_goals_attempted as f64
        }
    }
}
