//! Usage allocation: how much each player's primary stats are amplified.

use super::builder::Rotation;

/// Rating points per unit of usage above or below the team mean.
pub const USAGE_RATING_SPAN: f64 = 40.0;

pub const MIN_USAGE: f64 = 0.4;
pub const MAX_USAGE: f64 = 1.8;

/// Fill `usage` for every entry.
///
/// `usage = clamp(1 + (rating - weighted_mean) / 40, 0.4, 1.8)` where the mean
/// is weighted by minutes over entries that play. Zero-minute entries get 0.
pub fn allocate_usage(rotation: &mut Rotation) {
    let (weighted, minutes) = rotation
        .entries()
        .iter()
        .filter(|e| e.minutes > 0)
        .fold((0.0, 0.0), |(w, m), e| {
            (w + e.effective_rating * e.minutes as f64, m + e.minutes as f64)
        });

    if minutes == 0.0 {
        for entry in rotation.entries_mut() {
            entry.usage = 0.0;
        }
        return;
    }
    let mean = weighted / minutes;

    for entry in rotation.entries_mut() {
        entry.usage = if entry.minutes == 0 {
            0.0
        } else {
            (1.0 + (entry.effective_rating - mean) / USAGE_RATING_SPAN).clamp(MIN_USAGE, MAX_USAGE)
        };
    }
}
