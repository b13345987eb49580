//! Starter-versus-starter physical edges.

use tracing::trace;

use crate::core::{Player, Team};
use crate::rotation::{Rotation, STARTERS};

/// Per-component weights and clamps, in rating points.
pub const HEIGHT_WEIGHT: f64 = 0.15;
pub const HEIGHT_CLAMP: f64 = 2.0;
pub const WINGSPAN_WEIGHT: f64 = 0.12;
pub const WINGSPAN_CLAMP: f64 = 1.5;
pub const SPEED_WEIGHT: f64 = 0.02;
pub const SPEED_CLAMP: f64 = 1.5;
pub const STRENGTH_WEIGHT: f64 = 0.015;
pub const STRENGTH_CLAMP: f64 = 1.5;
pub const TOTAL_CLAMP: f64 = 4.0;

/// Share of the mean starter edge that bench slots inherit.
pub const BENCH_DILUTION: f64 = 0.3;

/// Signed edge of `own` over `opponent`.
#[must_use]
pub fn starter_edge(own: &Player, opponent: &Player) -> f64 {
    let component = |diff: f64, weight: f64, limit: f64| (diff * weight).clamp(-limit, limit);

    let height = component(
        own.measurables.height - opponent.measurables.height,
        HEIGHT_WEIGHT,
        HEIGHT_CLAMP,
    );
    let wingspan = component(
        own.measurables.wingspan - opponent.measurables.wingspan,
        WINGSPAN_WEIGHT,
        WINGSPAN_CLAMP,
    );
    let speed = component(
        own.attributes.speed - opponent.attributes.speed,
        SPEED_WEIGHT,
        SPEED_CLAMP,
    );
    let strength = component(
        own.attributes.strength - opponent.attributes.strength,
        STRENGTH_WEIGHT,
        STRENGTH_CLAMP,
    );

    (height + wingspan + speed + strength).clamp(-TOTAL_CLAMP, TOTAL_CLAMP)
}

/// Fill `matchup` for every entry of `rotation`.
///
/// Starters are paired by slot index with the opponent's starters; a missing
/// opposing starter yields zero. Bench slots get 0.3 × the mean of the five
/// starter edges.
pub fn assign_matchups(rotation: &mut Rotation, team: &Team, opponent: &Rotation, opponent_team: &Team) {
    let mut edges = [0.0_f64; STARTERS];

    for (slot, edge) in edges.iter_mut().enumerate() {
        let own = rotation.slot(slot).filter(|e| e.starter);
        let opp = opponent.slot(slot).filter(|e| e.starter);
        if let (Some(own), Some(opp)) = (own, opp) {
            *edge = starter_edge(
                &team.roster[own.roster_index],
                &opponent_team.roster[opp.roster_index],
            );
        }
    }

    let bench_edge = BENCH_DILUTION * edges.iter().sum::<f64>() / STARTERS as f64;

    for entry in rotation.entries_mut() {
        entry.matchup = if entry.starter {
            edges[entry.slot]
        } else {
            bench_edge
        };
    }

    trace!(team = team.id, ?edges, bench_edge, "matchups assigned");
}
