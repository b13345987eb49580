//! Starter selection, bench ordering, and minutes assignment.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{
    FatigueModel, PlayerId, Position, SimRng, SlotRange, Team, GAME_MINUTES, ROTATION_SLOTS,
    TEAM_MINUTES,
};

/// Number of starters.
pub const STARTERS: usize = 5;

/// Leading slots the repair pass may nudge.
pub const REPAIR_WINDOW: usize = 8;

/// Maximum jitter applied to a slot's template midpoint, in minutes.
pub const MINUTES_JITTER: i32 = 2;

/// One rotation slot for one match.
///
/// Refers back to the roster by index; the player itself is never copied.
/// Later stages fill `usage` and `matchup` in place.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationEntry {
    pub slot: usize,
    pub roster_index: usize,
    pub player_id: PlayerId,
    pub position: Position,
    pub minutes: u32,
    pub starter: bool,
    pub effective_rating: f64,
    /// Usage share, 0.4-1.8 when playing, 0 otherwise.
    pub usage: f64,
    /// Signed matchup edge in rating points.
    pub matchup: f64,
}

/// Fixed-capacity rotation buffer for one team.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    entries: SmallVec<[RotationEntry; ROTATION_SLOTS]>,
}

impl Rotation {
    /// Entries in slot order.
    #[must_use]
    pub fn entries(&self) -> &[RotationEntry] {
        &self.entries
    }

    /// Mutable entries in slot order.
    pub fn entries_mut(&mut self) -> &mut [RotationEntry] {
        &mut self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of assigned minutes.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.minutes).sum()
    }

    /// Starter slots (at most five).
    pub fn starters(&self) -> impl Iterator<Item = &RotationEntry> {
        self.entries.iter().filter(|e| e.starter)
    }

    /// Entry in a given slot.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&RotationEntry> {
        self.entries.get(slot)
    }
}

/// Build the rotation for one team.
///
/// Starters are chosen position by position (PG, SG, SF, PF, C): the best
/// unused player at the position, else the best unused player anywhere, else
/// (short roster) the next player in a rating-ordered cycle of those available. Remaining players fill the
/// bench by effective rating. Minutes come from the template with jitter and
/// are repaired to exactly 240.
pub fn build_rotation(team: &Team, fatigue: &dyn FatigueModel, rng: &mut SimRng) -> Rotation {
    let ratings: Vec<f64> = team
        .roster
        .iter()
        .map(|p| p.effective_rating(fatigue))
        .collect();
    let available: Vec<usize> = team.available_indices().collect();

    if available.is_empty() {
        warn!(team = team.id, "no available players; team records no minutes");
        return Rotation::default();
    }

    let mut used = vec![false; team.roster.len()];
    let mut order: Vec<usize> = Vec::with_capacity(ROTATION_SLOTS);

    // Short rosters refill starter slots from the best players down.
    let mut by_rating = available.clone();
    by_rating.sort_by(|&a, &b| ratings[b].total_cmp(&ratings[a]).then(a.cmp(&b)));
    let mut reuse = by_rating.iter().copied().cycle();

    for position in Position::ALL {
        let at_position = best_of(
            available
                .iter()
                .copied()
                .filter(|&i| !used[i] && team.roster[i].position == position),
            &ratings,
        );
        let pick = at_position
            .or_else(|| best_of(available.iter().copied().filter(|&i| !used[i]), &ratings))
            .or_else(|| reuse.next());

        if let Some(index) = pick {
            used[index] = true;
            order.push(index);
        }
    }

    let mut bench: Vec<usize> = available.iter().copied().filter(|&i| !used[i]).collect();
    bench.sort_by(|&a, &b| ratings[b].total_cmp(&ratings[a]).then(a.cmp(&b)));
    order.extend(bench.into_iter().take(ROTATION_SLOTS - STARTERS));

    let mut entries: SmallVec<[RotationEntry; ROTATION_SLOTS]> = order
        .into_iter()
        .enumerate()
        .map(|(slot, roster_index)| {
            let player = &team.roster[roster_index];
            RotationEntry {
                slot,
                roster_index,
                player_id: player.id,
                position: player.position,
                minutes: jittered_minutes(team.minutes.slot(slot), rng),
                starter: slot < STARTERS,
                effective_rating: ratings[roster_index],
                usage: 0.0,
                matchup: 0.0,
            }
        })
        .collect();

    repair_minutes(&mut entries);

    debug!(
        team = team.id,
        slots = entries.len(),
        minutes = entries.iter().map(|e| e.minutes).sum::<u32>(),
        "rotation built"
    );

    Rotation { entries }
}

/// Highest effective rating; ties go to the earlier roster index.
fn best_of(candidates: impl Iterator<Item = usize>, ratings: &[f64]) -> Option<usize> {
    candidates.max_by(|&a, &b| ratings[a].total_cmp(&ratings[b]).then(b.cmp(&a)))
}

/// Template midpoint plus jitter, kept inside the slot range.
///
/// Bounds are ordered first so an inverted range cannot panic.
fn jittered_minutes(range: SlotRange, rng: &mut SimRng) -> u32 {
    let low = range.min.min(range.max) as i32;
    let high = range.min.max(range.max) as i32;
    let jitter = rng.gen_range_inclusive(-MINUTES_JITTER..=MINUTES_JITTER);
    (range.midpoint() as i32 + jitter).clamp(low, high).max(0) as u32
}

/// Nudge single minutes across the leading slots until the total is 240.
///
/// Each sweep moves at most one minute per slot, never above 48 or below 0.
/// Terminates because five slots can always absorb 240 minutes; a sweep that
/// moves nothing ends the pass.
pub(crate) fn repair_minutes(entries: &mut [RotationEntry]) {
    let window = entries.len().min(REPAIR_WINDOW);
    let total: u32 = entries.iter().map(|e| e.minutes).sum();
    let mut remaining = TEAM_MINUTES as i64 - total as i64;

    while remaining != 0 {
        let mut moved = false;
        for entry in entries[..window].iter_mut() {
            if remaining > 0 && entry.minutes < GAME_MINUTES {
                entry.minutes += 1;
                remaining -= 1;
                moved = true;
            } else if remaining < 0 && entry.minutes > 0 {
                entry.minutes -= 1;
                remaining += 1;
                moved = true;
            }
            if remaining == 0 {
                break;
            }
        }
        if !moved {
            warn!(remaining, slots = entries.len(), "minutes repair could not reach team total");
            break;
        }
    }
}
