//! Single-match pipeline: rotation, usage, matchup, stats, reconcile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Side, SideMap, SimRng, SimulationOptions, Team};
use crate::matchup::assign_matchups;
use crate::reconcile::{break_tie, cap_assists, normalize_team, TieBreak};
use crate::rotation::{allocate_usage, build_rotation, Rotation};
use crate::stats::{generate_box, StatLine, TeamContext, TeamTotals};

/// RNG context for the cross-team stage.
pub const RECONCILE_CONTEXT: &str = "reconcile";

/// One team's finished box score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBox {
    pub team_id: u32,
    pub name: String,
    /// Final score, including any unattributed tie-break point.
    pub score: u32,
    /// One line per roster player, in roster order.
    pub lines: Vec<StatLine>,
    pub totals: TeamTotals,
    /// Points awarded without a player line (degenerate tie-break only).
    pub unattributed_points: u32,
}

impl TeamBox {
    fn new(team: &Team, lines: Vec<StatLine>, unattributed_points: u32) -> Self {
        let totals = TeamTotals::from_lines(&lines);
        Self {
            team_id: team.id,
            name: team.name.clone(),
            score: totals.points + unattributed_points,
            lines,
            totals,
            unattributed_points,
        }
    }
}

/// Final, immutable outcome of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub home: TeamBox,
    pub away: TeamBox,
    pub winner: Side,
    pub loser: Side,
    /// Winning score minus losing score, always at least 1.
    pub margin: u32,
    /// Seed the match was simulated with.
    pub seed: u64,
    /// Set when the scores were level after normalization.
    pub tie_break: Option<TieBreak>,
}

impl GameResult {
    #[must_use]
    pub fn team(&self, side: Side) -> &TeamBox {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    #[must_use]
    pub fn winning_team(&self) -> &TeamBox {
        self.team(self.winner)
    }

    #[must_use]
    pub fn losing_team(&self) -> &TeamBox {
        self.team(self.loser)
    }

    /// Home score minus away score.
    #[must_use]
    pub fn home_margin(&self) -> i64 {
        i64::from(self.home.score) - i64::from(self.away.score)
    }
}

/// Stages 1-2 for one team.
fn prepare_rotation(team: &Team, options: &SimulationOptions, rng: &mut SimRng) -> Rotation {
    let mut rotation = build_rotation(team, options.fatigue.as_ref(), rng);
    allocate_usage(&mut rotation);
    rotation
}

/// Simulate one match.
///
/// Inputs are never mutated. The same teams, options and seed always produce
/// the same result, independent of how rayon schedules the two team-local
/// halves.
pub fn simulate_game(home: &Team, away: &Team, options: &SimulationOptions) -> GameResult {
    let teams = SideMap::from_pair(home, away);
    let master = SimRng::new(options.seed);
    let mut rngs = SideMap::new(|side| master.for_context(side.context()));

    // Stages 1-2, independent per team
    let SideMap {
        home: home_rng,
        away: away_rng,
    } = &mut rngs;
    let (mut home_rotation, mut away_rotation) = rayon::join(
        || prepare_rotation(home, options, home_rng),
        || prepare_rotation(away, options, away_rng),
    );

    // Stage 3 reads only the opponent's starter slots, so order does not matter.
    assign_matchups(&mut home_rotation, home, &away_rotation, away);
    assign_matchups(&mut away_rotation, away, &home_rotation, home);
    let rotations = SideMap::from_pair(home_rotation, away_rotation);

    // Stage 4, independent per team
    let contexts = SideMap::new(|side| TeamContext {
        team: teams[side],
        home_court: if side == Side::Home {
            options.home_court_bonus
        } else {
            0.0
        },
        playoffs: options.playoffs,
        chemistry: teams[side].chemistry_modifier(options.playoffs),
        opponent_defense: teams[side.opponent()].coach.defense,
    });
    let SideMap {
        home: home_rng,
        away: away_rng,
    } = &mut rngs;
    let (home_lines, away_lines) = rayon::join(
        || generate_box(&contexts.home, &rotations.home, home_rng),
        || generate_box(&contexts.away, &rotations.away, away_rng),
    );
    let mut lines = SideMap::from_pair(home_lines, away_lines);

    // Stage 5
    let mut rng = master.for_context(RECONCILE_CONTEXT);
    let profile = options.tier.pace_profile();
    for side in Side::BOTH {
        normalize_team(&mut lines[side], &profile, teams[side].coach.pace, &mut rng);
        cap_assists(&mut lines[side]);
    }

    let scores = SideMap::new(|side| lines[side].iter().map(|l| l.points).sum::<u32>());
    let tie_break = break_tie(&mut lines, scores, &mut rng);

    let mut bonus = SideMap::new(|_| 0);
    if let Some(TieBreak::FreeThrow { side }) = tie_break {
        bonus[side] = 1;
    }

    let SideMap {
        home: home_lines,
        away: away_lines,
    } = lines;
    let home_box = TeamBox::new(home, home_lines, bonus.home);
    let away_box = TeamBox::new(away, away_lines, bonus.away);

    let (winner, margin) = if home_box.score > away_box.score {
        (Side::Home, home_box.score - away_box.score)
    } else {
        (Side::Away, away_box.score - home_box.score)
    };

    debug!(
        seed = options.seed,
        home = home_box.score,
        away = away_box.score,
        %winner,
        "game simulated"
    );

    GameResult {
        home: home_box,
        away: away_box,
        winner,
        loser: winner.opponent(),
        margin,
        seed: options.seed,
        tie_break,
    }
}
