//! Shot volume, shot mix, and makes for one rotation slot.

use super::archetype::PositionArchetype;
use super::draw::{binomial, noisy_count, NOISE_CLAMP};
use super::line::StatLine;
use crate::core::{SimRng, NEUTRAL_ATTRIBUTE};

/// Relative spread of field-goal attempts.
pub const ATTEMPT_NOISE: f64 = 0.12;
/// Relative spread of free-throw attempts.
pub const FREE_THROW_NOISE: f64 = 0.20;
/// Percentage points per standard deviation of shooting heat.
pub const HEAT_SCALE: f64 = 0.03;

pub const THREE_RATE_BOUNDS: (f64, f64) = (0.05, 0.60);
pub const TWO_PCT_BOUNDS: (f64, f64) = (0.30, 0.72);
pub const THREE_PCT_BOUNDS: (f64, f64) = (0.15, 0.55);
pub const FREE_THROW_PCT_BOUNDS: (f64, f64) = (0.45, 0.95);

/// Everything shooting depends on besides the archetype.
#[derive(Clone, Copy, Debug)]
pub struct ShotContext {
    pub minutes: f64,
    /// Usage effect on shot volume (full usage when points are primary).
    pub volume: f64,
    /// Boosted rating minus 75.
    pub rating_delta: f64,
    pub pace: f64,
    pub three_point_shift: f64,
    pub strength: f64,
    /// Opposing coach's defense, in percentage points.
    pub opponent_defense: f64,
}

/// Shooting percentages after rating, heat, and defense adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingPcts {
    pub two: f64,
    pub three: f64,
    pub free_throw: f64,
}

impl ShootingPcts {
    #[must_use]
    pub fn adjusted(arch: &PositionArchetype, rating_delta: f64, heat: f64, opponent_defense: f64) -> Self {
        let defense = opponent_defense / 100.0;
        Self {
            two: (arch.two_point_pct + 0.003 * rating_delta + heat - defense)
                .clamp(TWO_PCT_BOUNDS.0, TWO_PCT_BOUNDS.1),
            three: (arch.three_point_pct + 0.0025 * rating_delta + heat - defense)
                .clamp(THREE_PCT_BOUNDS.0, THREE_PCT_BOUNDS.1),
            free_throw: (arch.free_throw_pct + 0.002 * rating_delta + heat / 2.0)
                .clamp(FREE_THROW_PCT_BOUNDS.0, FREE_THROW_PCT_BOUNDS.1),
        }
    }
}

/// Share of attempts taken from three, after the coach's shift.
#[must_use]
pub fn three_point_rate(arch: &PositionArchetype, shift: f64) -> f64 {
    (arch.three_point_rate + shift).clamp(THREE_RATE_BOUNDS.0, THREE_RATE_BOUNDS.1)
}

/// Fill the shooting fields and points of `line`.
pub fn generate_shooting(arch: &PositionArchetype, ctx: &ShotContext, line: &mut StatLine, rng: &mut SimRng) {
    let efficiency = (1.0 + 0.006 * ctx.rating_delta).clamp(0.7, 1.3);
    let expected_fga =
        arch.field_goal_attempts * ctx.minutes / 36.0 * ctx.volume * ctx.pace * efficiency;
    let fga = noisy_count(expected_fga, ATTEMPT_NOISE, rng);

    let tpa = binomial(fga, three_point_rate(arch, ctx.three_point_shift), rng);

    let strength_factor = 1.0 + 0.004 * (ctx.strength - NEUTRAL_ATTRIBUTE);
    let fta = noisy_count(
        f64::from(fga) * arch.free_throw_rate * strength_factor,
        FREE_THROW_NOISE,
        rng,
    );

    let heat = rng.bounded_normal(NOISE_CLAMP) * HEAT_SCALE;
    let pcts = ShootingPcts::adjusted(arch, ctx.rating_delta, heat, ctx.opponent_defense);

    let two_made = binomial(fga - tpa, pcts.two, rng);
    let three_made = binomial(tpa, pcts.three, rng);
    let ft_made = binomial(fta, pcts.free_throw, rng);

    line.field_goals_attempted = fga;
    line.three_pointers_attempted = tpa;
    line.free_throws_attempted = fta;
    line.field_goals_made = two_made + three_made;
    line.three_pointers_made = three_made;
    line.free_throws_made = ft_made;
    line.recompute_points();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Position};

    fn neutral(minutes: f64) -> ShotContext {
        ShotContext {
            minutes,
            volume: 1.0,
            rating_delta: 0.0,
            pace: 1.0,
            three_point_shift: 0.0,
            strength: NEUTRAL_ATTRIBUTE,
            opponent_defense: 0.0,
        }
    }

    #[test]
    fn test_lines_are_consistent() {
        let mut rng = SimRng::new(5);
        for position in Position::ALL {
            let arch = PositionArchetype::for_position(position);
            for _ in 0..200 {
                let mut line = StatLine::empty(PlayerId(1));
                generate_shooting(arch, &neutral(34.0), &mut line, &mut rng);
                assert!(line.is_consistent(), "{line:?}");
            }
        }
    }

    #[test]
    fn test_zero_minutes_take_no_shots() {
        let mut rng = SimRng::new(5);
        let mut line = StatLine::empty(PlayerId(1));
        generate_shooting(
            PositionArchetype::for_position(Position::Center),
            &neutral(0.0),
            &mut line,
            &mut rng,
        );
        assert_eq!(line, StatLine::empty(PlayerId(1)));
    }

    #[test]
    fn test_average_points_track_archetype() {
        let arch = PositionArchetype::for_position(Position::ShootingGuard);
        let mut rng = SimRng::new(9);
        let games = 2000;
        let total: u32 = (0..games)
            .map(|_| {
                let mut line = StatLine::empty(PlayerId(1));
                generate_shooting(arch, &neutral(36.0), &mut line, &mut rng);
                line.points
            })
            .sum();
        let mean = f64::from(total) / f64::from(games);
        assert!((mean - arch.points).abs() < 1.0, "mean {mean}");
    }

    #[test]
    fn test_percentages_clamp() {
        let arch = PositionArchetype::for_position(Position::Center);
        let hot = ShootingPcts::adjusted(arch, 200.0, 0.1, 0.0);
        assert_eq!(hot.two, TWO_PCT_BOUNDS.1);
        assert_eq!(hot.three, THREE_PCT_BOUNDS.1);
        assert_eq!(hot.free_throw, FREE_THROW_PCT_BOUNDS.1);

        let cold = ShootingPcts::adjusted(arch, -200.0, -0.1, 10.0);
        assert_eq!(cold.two, TWO_PCT_BOUNDS.0);
        assert_eq!(cold.three, THREE_PCT_BOUNDS.0);
        assert_eq!(cold.free_throw, FREE_THROW_PCT_BOUNDS.0);
    }

    #[test]
    fn test_three_point_rate_clamps() {
        let arch = PositionArchetype::for_position(Position::ShootingGuard);
        assert_eq!(three_point_rate(arch, 0.0), arch.three_point_rate);
        assert!((three_point_rate(arch, 0.05) - arch.three_point_rate - 0.05).abs() < 1e-12);
        assert_eq!(three_point_rate(arch, 1.0), THREE_RATE_BOUNDS.1);
        assert_eq!(three_point_rate(arch, -1.0), THREE_RATE_BOUNDS.0);
    }

    #[test]
    fn test_three_point_share_follows_clamped_rate() {
        let arch = PositionArchetype::for_position(Position::SmallForward);
        let share = |shift: f64| -> f64 {
            let mut rng = SimRng::new(13);
            let ctx = ShotContext {
                three_point_shift: shift,
                ..neutral(36.0)
            };
            let (mut tpa, mut fga) = (0, 0);
            for _ in 0..500 {
                let mut line = StatLine::empty(PlayerId(1));
                generate_shooting(arch, &ctx, &mut line, &mut rng);
                tpa += line.three_pointers_attempted;
                fga += line.field_goals_attempted;
            }
            f64::from(tpa) / f64::from(fga)
        };

        assert!((share(1.0) - THREE_RATE_BOUNDS.1).abs() < 0.02, "{}", share(1.0));
        assert!((share(-1.0) - THREE_RATE_BOUNDS.0).abs() < 0.02, "{}", share(-1.0));
    }

    #[test]
    fn test_defense_lowers_field_goal_pct() {
        let arch = PositionArchetype::for_position(Position::PointGuard);
        let open = ShootingPcts::adjusted(arch, 0.0, 0.0, 0.0);
        let guarded = ShootingPcts::adjusted(arch, 0.0, 0.0, 3.0);
        assert!((open.two - guarded.two - 0.03).abs() < 1e-12);
        assert_eq!(open.free_throw, guarded.free_throw);
    }
}
