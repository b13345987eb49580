//! Tie resolution: the engine never returns an even score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Side, SideMap, SimRng};
use crate::stats::StatLine;

/// Chance the coin flip favours the home side.
pub const HOME_TIE_WEIGHT: f64 = 0.55;

/// Converted basket awarded to break a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bump {
    Two,
    Three,
    TwoAndFreeThrows,
    ThreeAndFreeThrows,
}

impl Bump {
    const ALL: [Bump; 4] = [Bump::Two, Bump::Three, Bump::TwoAndFreeThrows, Bump::ThreeAndFreeThrows];

    /// Points the bump adds (2-5).
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Bump::Two => 2,
            Bump::Three => 3,
            Bump::TwoAndFreeThrows => 4,
            Bump::ThreeAndFreeThrows => 5,
        }
    }

    fn apply(self, line: &mut StatLine) {
        line.field_goals_made += 1;
        line.field_goals_attempted += 1;
        if matches!(self, Bump::Three | Bump::ThreeAndFreeThrows) {
            line.three_pointers_made += 1;
            line.three_pointers_attempted += 1;
        }
        if matches!(self, Bump::TwoAndFreeThrows | Bump::ThreeAndFreeThrows) {
            line.free_throws_made += 2;
            line.free_throws_attempted += 2;
        }
        line.recompute_points();
    }
}

/// How a tie was broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// A starter's line received a converted basket.
    Basket {
        side: Side,
        roster_index: usize,
        bump: Bump,
    },
    /// Neither side has a starter; one point with no line attached.
    FreeThrow { side: Side },
}

impl TieBreak {
    #[must_use]
    pub fn side(&self) -> Side {
        match *self {
            TieBreak::Basket { side, .. } | TieBreak::FreeThrow { side } => side,
        }
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        match self {
            TieBreak::Basket { bump, .. } => bump.points(),
            TieBreak::FreeThrow { .. } => 1,
        }
    }
}

fn starters(lines: &[StatLine]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.games_started > 0)
        .map(|(i, _)| i)
        .collect()
}

/// Break a tie between `scores`, editing `lines` when a starter scores.
///
/// Draws nothing and returns `None` when the scores already differ. A
/// `FreeThrow` result must be added to that side's score by the caller.
pub fn break_tie(
    lines: &mut SideMap<Vec<StatLine>>,
    scores: SideMap<u32>,
    rng: &mut SimRng,
) -> Option<TieBreak> {
    if scores.home != scores.away {
        return None;
    }

    let flipped = if rng.gen_bool(HOME_TIE_WEIGHT) {
        Side::Home
    } else {
        Side::Away
    };

    let result = [flipped, flipped.opponent()]
        .into_iter()
        .find_map(|side| {
            let candidates = starters(&lines[side]);
            let &roster_index = rng.choose(&candidates)?;
            let &bump = rng.choose(&Bump::ALL)?;
            bump.apply(&mut lines[side][roster_index]);
            Some(TieBreak::Basket {
                side,
                roster_index,
                bump,
            })
        })
        .unwrap_or(TieBreak::FreeThrow { side: flipped });

    debug!(score = scores.home, ?result, "tie broken");
    Some(result)
}
