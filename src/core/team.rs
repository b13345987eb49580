//! Team input: roster plus the coaching collaborator's constants.

use serde::{Deserialize, Serialize};

use super::config::{CoachModifiers, MinutesTemplate};
use super::player::{Player, PlayerRecord};
use super::error::Result;

/// One side of a match, as handed to the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Full roster, including unavailable players.
    pub roster: Vec<Player>,
    pub coach: CoachModifiers,
    pub minutes: MinutesTemplate,
    /// Chemistry modifier supplied by the chemistry collaborator. When absent
    /// it is derived from the roster's chemistry contributions.
    pub chemistry_override: Option<f64>,
}

impl Team {
    /// Create an empty team with default coaching.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a team by validating raw player records.
    pub fn from_records(
        id: u32,
        name: impl Into<String>,
        records: impl IntoIterator<Item = PlayerRecord>,
    ) -> Result<Self> {
        let roster = records
            .into_iter()
            .map(Player::from_record)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(id, name).with_players(roster))
    }

    /// Add a player.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.roster.push(player);
        self
    }

    /// Add several players.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.roster.extend(players);
        self
    }

    /// Set coaching modifiers.
    #[must_use]
    pub fn with_coach(mut self, coach: CoachModifiers) -> Self {
        self.coach = coach;
        self
    }

    /// Set the minutes template.
    #[must_use]
    pub fn with_minutes_template(mut self, template: MinutesTemplate) -> Self {
        self.minutes = template;
        self
    }

    /// Set an explicit chemistry modifier.
    #[must_use]
    pub fn with_chemistry(mut self, modifier: f64) -> Self {
        self.chemistry_override = Some(modifier);
        self
    }

    /// Roster indices of players that may play.
    pub fn available_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_available())
            .map(|(i, _)| i)
    }

    /// Team chemistry multiplier applied to every counting stat.
    ///
    /// Mean roster chemistry contribution, one percent per point, doubled in
    /// the playoffs and clamped to `[0.85, 1.15]`.
    #[must_use]
    pub fn chemistry_modifier(&self, playoffs: bool) -> f64 {
        if let Some(modifier) = self.chemistry_override {
            return modifier;
        }
        if self.roster.is_empty() {
            return 1.0;
        }
        let mean = self.roster.iter().map(|p| p.chemistry).sum::<f64>() / self.roster.len() as f64;
        let sensitivity = if playoffs { 0.02 } else { 0.01 };
        (1.0 + mean * sensitivity).clamp(0.85, 1.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::{Availability, Position};

    #[test]
    fn test_available_indices_skip_out_players() {
        let team = Team::new(1, "Test")
            .with_player(Player::new(1, "A", Position::PointGuard, 70.0))
            .with_player(Player::new(2, "B", Position::Center, 70.0).with_availability(Availability::Out))
            .with_player(Player::new(3, "C", Position::Center, 70.0));

        let indices: Vec<_> = team.available_indices().collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_chemistry_modifier() {
        let team = Team::new(1, "Test").with_players([
            Player::new(1, "A", Position::PointGuard, 70.0).with_chemistry(5.0),
            Player::new(2, "B", Position::Center, 70.0).with_chemistry(3.0),
        ]);

        assert!((team.chemistry_modifier(false) - 1.04).abs() < 1e-9);
        assert!((team.chemistry_modifier(true) - 1.08).abs() < 1e-9);
        assert_eq!(Team::new(2, "Empty").chemistry_modifier(true), 1.0);
        assert_eq!(team.with_chemistry(0.9).chemistry_modifier(true), 0.9);
    }

    #[test]
    fn test_from_records() {
        let records = vec![PlayerRecord {
            id: 9,
            name: "Nine".into(),
            position: "C".into(),
            rating: 77.0,
            ..Default::default()
        }];
        let team = Team::from_records(4, "Records", records).unwrap();
        assert_eq!(team.roster.len(), 1);
        assert_eq!(team.roster[0].position, Position::Center);
    }
}
