//! Home/away identification and per-side data storage.
//!
//! ## Side
//!
//! Which bench a team sits on. Home court affects ratings and tie-breaks.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used wherever the pipeline keeps
//! one value per team (rotations, matchup edges, box scores).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Home or away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides, home first.
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// RNG context label for this side's team-local stream.
    #[must_use]
    pub const fn context(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

/// One value per side.
///
/// ```
/// use hoopsim::core::{Side, SideMap};
///
/// let mut score = SideMap::new(|_| 0u32);
/// score[Side::Away] = 101;
/// assert_eq!(score[Side::Home], 0);
/// assert_eq!(score[Side::Away], 101);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub home: T,
    pub away: T,
}

impl<T> SideMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            home: factory(Side::Home),
            away: factory(Side::Away),
        }
    }

    /// Create from an explicit pair.
    pub fn from_pair(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// Iterate over (Side, &T) pairs, home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Away, &self.away)].into_iter()
    }

    /// Transform each value, keeping the side.
    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> SideMap<U> {
        SideMap {
            home: f(Side::Home, self.home),
            away: f(Side::Away, self.away),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
    }

    #[test]
    fn test_map_and_iter() {
        let sides = SideMap::new(|side| side.context().len());
        let doubled = sides.clone().map(|_, v| v * 2);

        assert_eq!(doubled[Side::Home], 8);
        let collected: Vec<_> = sides.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(collected, vec![(Side::Home, 4), (Side::Away, 4)]);
    }
}
