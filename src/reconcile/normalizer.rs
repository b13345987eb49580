//! Team score normalization and assist capping.

use tracing::trace;

use crate::core::{SimRng, TierPaceProfile};
use crate::stats::draw::NOISE_CLAMP;
use crate::stats::StatLine;

/// Fraction of the raw score's distance from the tier target that survives.
pub const TARGET_REGRESSION: f64 = 0.35;

/// Team assists may not exceed this share of team made field goals.
pub const ASSIST_SHARE_PERCENT: u32 = 65;

/// What normalization did to one team.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    pub raw_points: u32,
    pub target_points: f64,
    /// Attempt multiplier after the tier clamp.
    pub factor: f64,
}

/// Target team score for a raw score.
///
/// A share of the gap between the raw score and the tier target is kept as
/// team strength, then pace and a clamped normal draw are applied.
pub fn target_score(raw_points: u32, profile: &TierPaceProfile, pace: f64, rng: &mut SimRng) -> f64 {
    let raw = f64::from(raw_points);
    let strength_adjusted = profile.target_points + (raw - profile.target_points) * TARGET_REGRESSION;
    let noise = profile.variance * rng.bounded_normal(NOISE_CLAMP);
    (strength_adjusted * pace + noise).max(0.0)
}

/// Rescale a team's attempts toward a tier-appropriate score and redraw makes.
///
/// Returns `None` without touching the lines (or drawing) when the raw score
/// is zero.
pub fn normalize_team(
    lines: &mut [StatLine],
    profile: &TierPaceProfile,
    pace: f64,
    rng: &mut SimRng,
) -> Option<Normalization> {
    let raw_points: u32 = lines.iter().map(|l| l.points).sum();
    if raw_points == 0 {
        trace!("raw score is zero; normalization skipped");
        return None;
    }

    let target_points = target_score(raw_points, profile, pace, rng);
    let factor = (target_points / f64::from(raw_points)).clamp(profile.min_scale, profile.max_scale);

    for line in lines.iter_mut() {
        rescale_line(line, factor, rng);
    }

    trace!(raw_points, target_points, factor, "team normalized");
    Some(Normalization {
        raw_points,
        target_points,
        factor,
    })
}

fn ratio(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempted)
    }
}

fn scale(count: u32, factor: f64) -> u32 {
    (f64::from(count) * factor).round().max(0.0) as u32
}

/// Makes at an observed percentage, stochastically rounded.
///
/// Lands within one make of `pct * attempts`, so the rescaled score follows
/// the factor instead of picking up fresh binomial spread.
fn proportional_makes(attempts: u32, pct: f64, rng: &mut SimRng) -> u32 {
    let expected = pct.clamp(0.0, 1.0) * f64::from(attempts);
    let whole = expected.floor();
    let made = whole as u32 + u32::from(rng.gen_bool(expected - whole));
    made.min(attempts)
}

/// Rescale one line's attempts and redraw makes at its observed percentages.
fn rescale_line(line: &mut StatLine, factor: f64, rng: &mut SimRng) {
    if line.field_goals_attempted == 0 && line.free_throws_attempted == 0 {
        return;
    }

    let two_pct = ratio(line.two_pointers_made(), line.two_pointers_attempted());
    let three_pct = ratio(line.three_pointers_made, line.three_pointers_attempted);
    let ft_pct = ratio(line.free_throws_made, line.free_throws_attempted);

    let fga = scale(line.field_goals_attempted, factor);
    let tpa = scale(line.three_pointers_attempted, factor).min(fga);
    let fta = scale(line.free_throws_attempted, factor);

    let two_made = proportional_makes(fga - tpa, two_pct, rng);
    let three_made = proportional_makes(tpa, three_pct, rng);

    line.field_goals_attempted = fga;
    line.three_pointers_attempted = tpa;
    line.free_throws_attempted = fta;
    line.field_goals_made = two_made + three_made;
    line.three_pointers_made = three_made;
    line.free_throws_made = proportional_makes(fta, ft_pct, rng);
    line.recompute_points();
}

/// Cap team assists at 65% of team made field goals (floored).
///
/// Every player's assists shrink by the same ratio, rounding down, so the
/// team total ends at or under the cap. Returns the cap.
pub fn cap_assists(lines: &mut [StatLine]) -> u32 {
    let made: u32 = lines.iter().map(|l| l.field_goals_made).sum();
    let cap = made * ASSIST_SHARE_PERCENT / 100;
    let total: u32 = lines.iter().map(|l| l.assists).sum();

    if total > cap {
        for line in lines.iter_mut() {
            line.assists = (u64::from(line.assists) * u64::from(cap) / u64::from(total)) as u32;
        }
        trace!(total, cap, "assists capped");
    }
    cap
}
