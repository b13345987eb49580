//! Raw box-score generation for one team.

use tracing::debug;

use super::archetype::{PositionArchetype, StatKind};
use super::draw::noisy_count;
use super::line::{StatLine, FOUL_LIMIT};
use super::shooting::{generate_shooting, ShotContext};
use crate::core::{Attributes, CoachModifiers, Player, SimRng, Team, NEUTRAL_ATTRIBUTE};
use crate::rotation::{Rotation, RotationEntry};

/// Rating at which archetype baselines apply unscaled.
pub const BASELINE_RATING: f64 = 75.0;

/// Relative spread of counting stats (±40% at the 2.5σ clamp).
pub const COUNTING_NOISE: f64 = 0.16;

/// Rating points per clutch point above 50, playoffs only.
pub const CLUTCH_WEIGHT: f64 = 0.08;

/// Share of the usage deviation that reaches secondary stats.
pub const SECONDARY_USAGE_WEIGHT: f64 = 0.35;

/// Match-level inputs shared by every slot of one team.
#[derive(Clone, Copy, Debug)]
pub struct TeamContext<'a> {
    pub team: &'a Team,
    /// Rating bonus for the home side, 0 for the visitors.
    pub home_court: f64,
    pub playoffs: bool,
    pub chemistry: f64,
    /// Opposing coach's defense, in percentage points.
    pub opponent_defense: f64,
}

/// Rating scale for primary and secondary stats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingScale {
    pub primary: f64,
    pub secondary: f64,
}

impl RatingScale {
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        Self {
            primary: (1.0 + 0.03 * delta).clamp(0.4, 1.9),
            secondary: (1.0 + 0.012 * delta).clamp(0.6, 1.5),
        }
    }
}

/// Coach multiplier pulled toward neutral by the player's coachability.
///
/// Coachability 1 keeps 70% of the deviation, 99 amplifies it to 130%.
#[must_use]
pub fn coached_modifier(raw: f64, coachability: f64) -> f64 {
    let receptiveness = 0.7 + 0.6 * (coachability - 1.0) / 98.0;
    1.0 + (raw - 1.0) * receptiveness
}

/// Rating after home court, coaching, matchup and clutch adjustments.
#[must_use]
pub fn boosted_rating(ctx: &TeamContext<'_>, entry: &RotationEntry, player: &Player) -> f64 {
    let coach = &ctx.team.coach;
    let matchup = if entry.matchup < 0.0 {
        entry.matchup * (1.0 - coach.adaptability.clamp(0.0, 1.0))
    } else {
        entry.matchup
    };
    let clutch = if ctx.playoffs {
        (player.attributes.clutch - NEUTRAL_ATTRIBUTE) * CLUTCH_WEIGHT
    } else {
        0.0
    };
    entry.effective_rating + ctx.home_court + coach.overall_bonus + matchup + clutch
}

fn coach_trait(coach: &CoachModifiers, kind: StatKind) -> f64 {
    match kind {
        StatKind::Assists => coach.assist,
        StatKind::Steals | StatKind::Blocks => coach.steal_block,
        StatKind::Turnovers => coach.turnover,
        StatKind::Fouls => coach.foul,
        StatKind::Points | StatKind::Rebounds => 1.0,
    }
}

/// Per-36 attribute nudge for a stat.
fn cross_effect(attrs: &Attributes, kind: StatKind) -> f64 {
    let n = NEUTRAL_ATTRIBUTE;
    match kind {
        StatKind::Rebounds => 0.02 * (attrs.verticality - n) + 0.015 * (attrs.strength - n),
        StatKind::Assists => 0.03 * (attrs.basketball_iq - n),
        StatKind::Turnovers => -0.015 * (attrs.basketball_iq - n),
        StatKind::Blocks => 0.012 * (attrs.verticality - n),
        StatKind::Steals => 0.01 * (attrs.speed - n),
        StatKind::Points | StatKind::Fouls => 0.0,
    }
}

fn usage_effect(usage: f64, primary: bool) -> f64 {
    if primary {
        usage
    } else {
        1.0 + SECONDARY_USAGE_WEIGHT * (usage - 1.0)
    }
}

/// Raw line for one rotation slot with nonzero minutes.
pub fn generate_line(ctx: &TeamContext<'_>, entry: &RotationEntry, rng: &mut SimRng) -> StatLine {
    let player = &ctx.team.roster[entry.roster_index];
    let arch = PositionArchetype::for_position(player.position);
    let coach = &ctx.team.coach;
    let attrs = &player.attributes;

    let delta = boosted_rating(ctx, entry, player) - BASELINE_RATING;
    let scale = RatingScale::from_delta(delta);
    let minutes = f64::from(entry.minutes);
    let per_36 = minutes / 36.0;

    let mut line = StatLine {
        player_id: player.id,
        games_played: 1,
        games_started: u8::from(entry.starter),
        minutes: entry.minutes,
        ..StatLine::default()
    };

    for kind in StatKind::COUNTING {
        let primary = arch.is_primary(kind);
        let rating_scale = if primary { scale.primary } else { scale.secondary };
        let expected = arch.base(kind)
            * rating_scale
            * per_36
            * ctx.chemistry
            * coached_modifier(coach_trait(coach, kind), attrs.coachability)
            * usage_effect(entry.usage, primary)
            + cross_effect(attrs, kind) * per_36;

        let value = noisy_count(expected, COUNTING_NOISE, rng);
        match kind {
            StatKind::Rebounds => line.rebounds = value,
            StatKind::Assists => line.assists = value,
            StatKind::Steals => line.steals = value,
            StatKind::Blocks => line.blocks = value,
            StatKind::Turnovers => line.turnovers = value,
            StatKind::Fouls => line.fouls = value.min(FOUL_LIMIT),
            StatKind::Points => {}
        }
    }

    let shots = ShotContext {
        minutes,
        volume: usage_effect(entry.usage, arch.is_primary(StatKind::Points)),
        rating_delta: delta,
        pace: coach.pace,
        three_point_shift: coach.three_point_rate,
        strength: attrs.strength,
        opponent_defense: ctx.opponent_defense,
    };
    generate_shooting(arch, &shots, &mut line, rng);

    line
}

/// Box score for the whole roster, in roster order.
///
/// Players without minutes (out, unused, or beyond the 13th slot) get an
/// all-zero line. A player filling several slots gets one merged line.
pub fn generate_box(ctx: &TeamContext<'_>, rotation: &Rotation, rng: &mut SimRng) -> Vec<StatLine> {
    let mut lines: Vec<StatLine> = ctx.team.roster.iter().map(|p| StatLine::empty(p.id)).collect();

    for entry in rotation.entries().iter().filter(|e| e.minutes > 0) {
        let line = generate_line(ctx, entry, rng);
        lines[entry.roster_index].merge(&line);
    }

    debug!(
        team = ctx.team.id,
        raw_points = lines.iter().map(|l| l.points).sum::<u32>(),
        "raw box generated"
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Availability, LinearFatigue, PlayerId, Position, TEAM_MINUTES};
    use crate::rotation::{allocate_usage, build_rotation};
    use crate::stats::TeamTotals;

    fn roster(id: u32, rating: f64, count: u32) -> Team {
        Team::new(id, "T").with_players(
            (0..count).map(|i| Player::new(id * 100 + i, "P", Position::ALL[i as usize % 5], rating)),
        )
    }

    fn context(team: &Team) -> TeamContext<'_> {
        TeamContext {
            team,
            home_court: 0.0,
            playoffs: false,
            chemistry: 1.0,
            opponent_defense: 0.0,
        }
    }

    fn simulate_with(ctx: &TeamContext<'_>, seed: u64) -> Vec<StatLine> {
        let mut rng = SimRng::new(seed);
        let mut rotation = build_rotation(ctx.team, &LinearFatigue::default(), &mut rng);
        allocate_usage(&mut rotation);
        generate_box(ctx, &rotation, &mut rng)
    }

    fn simulate(team: &Team, seed: u64) -> Vec<StatLine> {
        simulate_with(&context(team), seed)
    }

    /// Totals over 40 seeded games.
    fn totals(ctx: &TeamContext<'_>) -> TeamTotals {
        let lines: Vec<StatLine> = (0..40).flat_map(|seed| simulate_with(ctx, seed)).collect();
        TeamTotals::from_lines(&lines)
    }

    fn with_attributes(attributes: Attributes) -> Team {
        let mut team = roster(1, 75.0, 10);
        for player in &mut team.roster {
            player.attributes = attributes;
        }
        team
    }

    // ==========================================================================
    // Scaling helpers
    // ==========================================================================

    #[test]
    fn test_rating_scale() {
        let neutral = RatingScale::from_delta(0.0);
        assert_eq!(neutral, RatingScale { primary: 1.0, secondary: 1.0 });

        let strong = RatingScale::from_delta(20.0);
        assert!((strong.primary - 1.6).abs() < 1e-12);
        assert!((strong.secondary - 1.24).abs() < 1e-12);

        let extreme = RatingScale::from_delta(-60.0);
        assert_eq!(extreme.primary, 0.4);
        assert_eq!(extreme.secondary, 0.6);
    }

    #[test]
    fn test_coachability_pull() {
        assert!((coached_modifier(1.2, 1.0) - 1.14).abs() < 1e-12);
        assert!((coached_modifier(1.2, 99.0) - 1.26).abs() < 1e-12);
        assert!((coached_modifier(1.2, 50.0) - 1.2).abs() < 1e-12);
        assert_eq!(coached_modifier(1.0, 20.0), 1.0);
    }

    #[test]
    fn test_adaptability_shrinks_negative_edge() {
        let team = roster(1, 75.0, 5).with_coach(CoachModifiers::default().with_adaptability(0.5));
        let ctx = context(&team);
        let mut entry = RotationEntry {
            slot: 0,
            roster_index: 0,
            player_id: PlayerId(100),
            position: Position::PointGuard,
            minutes: 30,
            starter: true,
            effective_rating: 75.0,
            usage: 1.0,
            matchup: -4.0,
        };
        assert_eq!(boosted_rating(&ctx, &entry, &team.roster[0]), 73.0);

        entry.matchup = 4.0;
        assert_eq!(boosted_rating(&ctx, &entry, &team.roster[0]), 79.0);
    }

    #[test]
    fn test_clutch_only_in_playoffs() {
        let mut team = roster(1, 75.0, 5);
        team.roster[0].attributes.clutch = 90.0;
        let entry = RotationEntry {
            slot: 0,
            roster_index: 0,
            player_id: PlayerId(100),
            position: Position::PointGuard,
            minutes: 30,
            starter: true,
            effective_rating: 75.0,
            usage: 1.0,
            matchup: 0.0,
        };
        let mut ctx = context(&team);
        assert_eq!(boosted_rating(&ctx, &entry, &team.roster[0]), 75.0);
        ctx.playoffs = true;
        assert!((boosted_rating(&ctx, &entry, &team.roster[0]) - 78.2).abs() < 1e-9);
    }

    // ==========================================================================
    // Box generation
    // ==========================================================================

    #[test]
    fn test_box_covers_roster_in_order() {
        let team = roster(1, 75.0, 15);
        let lines = simulate(&team, 3);

        assert_eq!(lines.len(), 15);
        for (line, player) in lines.iter().zip(&team.roster) {
            assert_eq!(line.player_id, player.id);
            assert!(line.is_consistent(), "{line:?}");
        }
        assert_eq!(lines.iter().map(|l| l.minutes).sum::<u32>(), TEAM_MINUTES);
        assert_eq!(lines.iter().map(|l| u32::from(l.games_started)).sum::<u32>(), 5);
    }

    #[test]
    fn test_out_players_get_zero_lines() {
        let mut team = roster(1, 75.0, 10);
        team.roster[2].availability = Availability::Out;
        let lines = simulate(&team, 8);
        assert_eq!(lines[2], StatLine::empty(team.roster[2].id));
    }

    #[test]
    fn test_short_roster_merges_reused_slots() {
        let team = roster(1, 75.0, 3);
        let lines = simulate(&team, 2);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().map(|l| l.minutes).sum::<u32>(), TEAM_MINUTES);
        for line in &lines {
            assert_eq!(line.games_played, 1);
            assert_eq!(line.games_started, 1);
            assert!(line.is_consistent(), "{line:?}");
        }
    }

    #[test]
    fn test_rating_drives_production() {
        let strong = roster(1, 90.0, 10);
        let weak = roster(2, 60.0, 10);

        let total = |team: &Team| -> u32 {
            (0..40)
                .map(|seed| simulate(team, seed).iter().map(|l| l.points).sum::<u32>())
                .sum()
        };
        assert!(total(&strong) > total(&weak));
    }

    #[test]
    fn test_chemistry_scales_counting_stats() {
        let team = roster(1, 75.0, 10);
        let rebounds = |chemistry: f64| -> u32 {
            let mut ctx = context(&team);
            ctx.chemistry = chemistry;
            totals(&ctx).rebounds
        };
        assert!(rebounds(1.15) > rebounds(0.85));
    }

    // ==========================================================================
    // Attribute cross-effects
    // ==========================================================================

    #[test]
    fn test_cross_effect_signs() {
        let high = Attributes {
            speed: 95.0,
            strength: 95.0,
            verticality: 95.0,
            basketball_iq: 95.0,
            ..Attributes::default()
        };
        assert!(cross_effect(&high, StatKind::Rebounds) > 0.0);
        assert!(cross_effect(&high, StatKind::Assists) > 0.0);
        assert!(cross_effect(&high, StatKind::Turnovers) < 0.0);
        assert!(cross_effect(&high, StatKind::Blocks) > 0.0);
        assert!(cross_effect(&high, StatKind::Steals) > 0.0);
        assert_eq!(cross_effect(&high, StatKind::Fouls), 0.0);
        assert!(StatKind::COUNTING
            .iter()
            .all(|&kind| cross_effect(&Attributes::default(), kind) == 0.0));
    }

    #[test]
    fn test_size_drives_rebounds_and_blocks() {
        let tall = with_attributes(Attributes {
            verticality: 95.0,
            strength: 95.0,
            ..Attributes::default()
        });
        let small = with_attributes(Attributes {
            verticality: 5.0,
            strength: 5.0,
            ..Attributes::default()
        });
        let (tall, small) = (totals(&context(&tall)), totals(&context(&small)));
        assert!(tall.rebounds > small.rebounds, "{} vs {}", tall.rebounds, small.rebounds);
        assert!(tall.blocks > small.blocks, "{} vs {}", tall.blocks, small.blocks);
    }

    #[test]
    fn test_basketball_iq_moves_assists_and_turnovers() {
        let sharp = with_attributes(Attributes {
            basketball_iq: 95.0,
            ..Attributes::default()
        });
        let raw = with_attributes(Attributes {
            basketball_iq: 5.0,
            ..Attributes::default()
        });
        let (sharp, raw) = (totals(&context(&sharp)), totals(&context(&raw)));
        assert!(sharp.assists > raw.assists, "{} vs {}", sharp.assists, raw.assists);
        assert!(sharp.turnovers < raw.turnovers, "{} vs {}", sharp.turnovers, raw.turnovers);
    }

    #[test]
    fn test_speed_drives_steals() {
        let quick = with_attributes(Attributes {
            speed: 95.0,
            ..Attributes::default()
        });
        let slow = with_attributes(Attributes {
            speed: 5.0,
            ..Attributes::default()
        });
        let (quick, slow) = (totals(&context(&quick)), totals(&context(&slow)));
        assert!(quick.steals > slow.steals, "{} vs {}", quick.steals, slow.steals);
    }

    // ==========================================================================
    // Coach multipliers
    // ==========================================================================

    #[test]
    fn test_coach_multipliers_reach_lines() {
        let plain = roster(1, 75.0, 10);
        let coached = roster(1, 75.0, 10).with_coach(CoachModifiers {
            assist: 1.3,
            steal_block: 1.3,
            turnover: 0.7,
            foul: 0.7,
            ..CoachModifiers::default()
        });
        let (plain, coached) = (totals(&context(&plain)), totals(&context(&coached)));

        assert!(coached.assists > plain.assists, "{} vs {}", coached.assists, plain.assists);
        assert!(coached.steals > plain.steals, "{} vs {}", coached.steals, plain.steals);
        assert!(coached.blocks > plain.blocks, "{} vs {}", coached.blocks, plain.blocks);
        assert!(coached.turnovers < plain.turnovers, "{} vs {}", coached.turnovers, plain.turnovers);
        assert!(coached.fouls < plain.fouls, "{} vs {}", coached.fouls, plain.fouls);
        // Shooting is untouched by these traits.
        assert_eq!(coached.points, plain.points);
    }

    #[test]
    fn test_coach_trait_mapping() {
        let coach = CoachModifiers {
            assist: 1.1,
            steal_block: 1.2,
            turnover: 0.9,
            foul: 0.8,
            ..CoachModifiers::default()
        };
        assert_eq!(coach_trait(&coach, StatKind::Assists), 1.1);
        assert_eq!(coach_trait(&coach, StatKind::Steals), 1.2);
        assert_eq!(coach_trait(&coach, StatKind::Blocks), 1.2);
        assert_eq!(coach_trait(&coach, StatKind::Turnovers), 0.9);
        assert_eq!(coach_trait(&coach, StatKind::Fouls), 0.8);
        assert_eq!(coach_trait(&coach, StatKind::Rebounds), 1.0);
    }
}
