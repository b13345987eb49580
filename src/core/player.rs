//! Player identity, ratings, and ingestion.
//!
//! ## PlayerRecord
//!
//! Loosely shaped input as handed over by the roster/fatigue collaborators.
//! Every optional field is resolved exactly once by [`Player::from_record`].
//!
//! ## Player
//!
//! Validated, fully populated player. The engine never applies "use 75 if
//! missing" style fallbacks after ingestion.

use serde::{Deserialize, Serialize};

use super::config::FatigueModel;
use super::error::{EngineError, Result};

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the five court positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// Starter fill order used by the rotation builder.
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Parse a position label. Unknown labels fall back to small forward.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "PG" | "POINT GUARD" => Position::PointGuard,
            "SG" | "SHOOTING GUARD" => Position::ShootingGuard,
            "SF" | "SMALL FORWARD" => Position::SmallForward,
            "PF" | "POWER FORWARD" => Position::PowerForward,
            "C" | "CENTER" | "CENTRE" => Position::Center,
            _ => Position::SmallForward,
        }
    }

    /// Short label ("PG", "SG", ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    fn default_height(self) -> f64 {
        match self {
            Position::PointGuard => 74.0,
            Position::ShootingGuard => 77.0,
            Position::SmallForward => 79.0,
            Position::PowerForward => 81.0,
            Position::Center => 83.0,
        }
    }

    fn default_weight(self) -> f64 {
        match self {
            Position::PointGuard => 190.0,
            Position::ShootingGuard => 205.0,
            Position::SmallForward => 220.0,
            Position::PowerForward => 235.0,
            Position::Center => 250.0,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Neutral value for every 1-99 attribute.
pub const NEUTRAL_ATTRIBUTE: f64 = 50.0;

/// Physical and mental attributes on a 1-99 scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub speed: f64,
    pub strength: f64,
    pub verticality: f64,
    pub endurance: f64,
    pub basketball_iq: f64,
    pub clutch: f64,
    pub coachability: f64,
    pub collaboration: f64,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            speed: NEUTRAL_ATTRIBUTE,
            strength: NEUTRAL_ATTRIBUTE,
            verticality: NEUTRAL_ATTRIBUTE,
            endurance: NEUTRAL_ATTRIBUTE,
            basketball_iq: NEUTRAL_ATTRIBUTE,
            clutch: NEUTRAL_ATTRIBUTE,
            coachability: NEUTRAL_ATTRIBUTE,
            collaboration: NEUTRAL_ATTRIBUTE,
        }
    }
}

impl Attributes {
    fn validate(&self, player: PlayerId) -> Result<()> {
        let fields = [
            ("speed", self.speed),
            ("strength", self.strength),
            ("verticality", self.verticality),
            ("endurance", self.endurance),
            ("basketball_iq", self.basketball_iq),
            ("clutch", self.clutch),
            ("coachability", self.coachability),
            ("collaboration", self.collaboration),
        ];
        for (attribute, value) in fields {
            if !(1.0..=99.0).contains(&value) {
                return Err(EngineError::AttributeOutOfRange {
                    player,
                    attribute,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Partially specified attributes as they arrive from upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub speed: Option<f64>,
    pub strength: Option<f64>,
    pub verticality: Option<f64>,
    pub endurance: Option<f64>,
    pub basketball_iq: Option<f64>,
    pub clutch: Option<f64>,
    pub coachability: Option<f64>,
    pub collaboration: Option<f64>,
}

impl AttributeRecord {
    fn resolve(&self) -> Attributes {
        let or = |v: Option<f64>| v.unwrap_or(NEUTRAL_ATTRIBUTE);
        Attributes {
            speed: or(self.speed),
            strength: or(self.strength),
            verticality: or(self.verticality),
            endurance: or(self.endurance),
            basketball_iq: or(self.basketball_iq),
            clutch: or(self.clutch),
            coachability: or(self.coachability),
            collaboration: or(self.collaboration),
        }
    }
}

/// Height, weight, and wingspan in inches (weight in pounds).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurables {
    pub height: f64,
    pub weight: f64,
    pub wingspan: f64,
}

impl Measurables {
    /// Typical measurables for a position.
    #[must_use]
    pub fn for_position(position: Position) -> Self {
        let height = position.default_height();
        Self {
            height,
            weight: position.default_weight(),
            wingspan: height + 2.0,
        }
    }
}

/// Availability as resolved by the fatigue/injury collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Healthy,
    Out,
    /// Plays, with the given rating penalty.
    PlayingThroughInjury { penalty: f64 },
}

impl Availability {
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, Availability::Out)
    }

    fn penalty(&self) -> f64 {
        match self {
            Availability::PlayingThroughInjury { penalty } => penalty.max(0.0),
            _ => 0.0,
        }
    }
}

/// Loosely shaped player record handed to the engine by collaborators.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: u32,
    pub name: String,
    /// Position label ("PG", "C", ...). Unknown labels become SF.
    pub position: String,
    pub rating: f64,
    /// Already-penalized rating. When absent it is derived from fatigue.
    pub effective_rating: Option<f64>,
    pub fatigue: Option<f64>,
    pub availability: Availability,
    pub attributes: Option<AttributeRecord>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub wingspan: Option<f64>,
    pub chemistry: Option<f64>,
}

/// Validated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Composite rating, 40-99.
    pub rating: f64,
    /// Upstream effective rating, if it was supplied.
    pub effective_override: Option<f64>,
    /// Fatigue, 0-100.
    pub fatigue: f64,
    pub availability: Availability,
    pub attributes: Attributes,
    pub measurables: Measurables,
    /// Contribution to team chemistry (roughly -10..10).
    pub chemistry: f64,
}

impl Player {
    /// Validate a record and fill every missing field once.
    pub fn from_record(record: PlayerRecord) -> Result<Self> {
        let id = PlayerId::new(record.id);

        if !(40.0..=99.0).contains(&record.rating) {
            return Err(EngineError::RatingOutOfRange {
                player: id,
                value: record.rating,
            });
        }
        if let Some(eff) = record.effective_rating {
            if !eff.is_finite() || eff < 0.0 {
                return Err(EngineError::RatingOutOfRange { player: id, value: eff });
            }
        }

        let fatigue = record.fatigue.unwrap_or(0.0);
        if !(0.0..=100.0).contains(&fatigue) {
            return Err(EngineError::FatigueOutOfRange {
                player: id,
                value: fatigue,
            });
        }

        let position = Position::from_label(&record.position);
        let attributes = record.attributes.map(|a| a.resolve()).unwrap_or_default();
        attributes.validate(id)?;

        let defaults = Measurables::for_position(position);
        let height = record.height.unwrap_or(defaults.height);
        let measurables = Measurables {
            height,
            weight: record.weight.unwrap_or(defaults.weight),
            wingspan: record.wingspan.unwrap_or(height + 2.0),
        };
        for (measurable, value) in [
            ("height", measurables.height),
            ("weight", measurables.weight),
            ("wingspan", measurables.wingspan),
        ] {
            if !(value > 0.0) {
                return Err(EngineError::InvalidMeasurable {
                    player: id,
                    measurable,
                    value,
                });
            }
        }

        Ok(Self {
            id,
            name: record.name,
            position,
            rating: record.rating,
            effective_override: record.effective_rating,
            fatigue,
            availability: record.availability,
            attributes,
            measurables,
            chemistry: record.chemistry.unwrap_or(0.0),
        })
    }

    /// Convenience constructor for a healthy player with neutral attributes.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, position: Position, rating: f64) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            position,
            rating,
            effective_override: None,
            fatigue: 0.0,
            availability: Availability::Healthy,
            attributes: Attributes::default(),
            measurables: Measurables::for_position(position),
            chemistry: 0.0,
        }
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set measurables.
    #[must_use]
    pub fn with_measurables(mut self, measurables: Measurables) -> Self {
        self.measurables = measurables;
        self
    }

    /// Set availability.
    #[must_use]
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Set fatigue (0-100).
    #[must_use]
    pub fn with_fatigue(mut self, fatigue: f64) -> Self {
        self.fatigue = fatigue;
        self
    }

    /// Set chemistry contribution.
    #[must_use]
    pub fn with_chemistry(mut self, chemistry: f64) -> Self {
        self.chemistry = chemistry;
        self
    }

    /// Whether the player may be placed in a rotation.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Rating the engine actually simulates with.
    ///
    /// An upstream override wins; otherwise fatigue and injury penalties are
    /// subtracted from the composite rating.
    #[must_use]
    pub fn effective_rating(&self, fatigue: &dyn FatigueModel) -> f64 {
        match self.effective_override {
            Some(eff) => eff,
            None => {
                (self.rating - fatigue.penalty(self.fatigue) - self.availability.penalty()).max(1.0)
            }
        }
    }
}
