//! Parallel simulation of many independent fixtures.
//!
//! Matches share no state, so a day's slate can be spread across threads.
//! Per-fixture seeds are forked sequentially from the base seed before any
//! work is scheduled, which keeps results identical to running the same
//! fixtures one by one.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use super::game::{simulate_game, GameResult};
use crate::core::{EngineError, Result, SimRng, SimulationOptions, Team};

/// One scheduled match.
#[derive(Clone, Copy, Debug)]
pub struct Fixture<'a> {
    pub home: &'a Team,
    pub away: &'a Team,
}

impl<'a> Fixture<'a> {
    #[must_use]
    pub fn new(home: &'a Team, away: &'a Team) -> Self {
        Self { home, away }
    }
}

/// Seeds for `count` fixtures derived from `base_seed`.
#[must_use]
pub fn slate_seeds(base_seed: u64, count: usize) -> Vec<u64> {
    let mut master = SimRng::new(base_seed);
    (0..count).map(|_| master.fork().seed()).collect()
}

/// Simulate every fixture, in parallel, on the current rayon pool.
///
/// `options.seed` is the base seed; each result records its own derived seed.
pub fn simulate_slate(fixtures: &[Fixture<'_>], options: &SimulationOptions) -> Vec<GameResult> {
    let seeds = slate_seeds(options.seed, fixtures.len());
    debug!(fixtures = fixtures.len(), base_seed = options.seed, "simulating slate");

    fixtures
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(fixture, &seed)| {
            let options = options.clone().with_seed(seed);
            simulate_game(fixture.home, fixture.away, &options)
        })
        .collect()
}

/// Thread pool sizing for slate simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    /// Worker threads; 0 means rayon's global pool.
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    #[must_use]
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run `f` on a pool of this size.
    pub fn install<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return Ok(f());
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| EngineError::WorkerPool(e.to_string()))?;
        Ok(pool.install(f))
    }

    /// [`simulate_slate`] on this pool.
    pub fn simulate_slate(
        &self,
        fixtures: &[Fixture<'_>],
        options: &SimulationOptions,
    ) -> Result<Vec<GameResult>> {
        self.install(|| simulate_slate(fixtures, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Position};

    fn team(id: u32, rating: f64) -> Team {
        Team::new(id, format!("Team {id}")).with_players(
            (0..11).map(|i| Player::new(id * 100 + i, "P", Position::ALL[i as usize % 5], rating)),
        )
    }

    #[test]
    fn test_seeds_are_distinct_and_stable() {
        let seeds = slate_seeds(7, 20);
        assert_eq!(seeds, slate_seeds(7, 20));
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 20);
        assert_eq!(slate_seeds(7, 5), seeds[..5]);
    }

    #[test]
    fn test_slate_matches_sequential() {
        let teams: Vec<Team> = (1..=6).map(|i| team(i, 65.0 + 3.0 * i as f64)).collect();
        let fixtures: Vec<Fixture<'_>> = teams
            .chunks(2)
            .map(|pair| Fixture::new(&pair[0], &pair[1]))
            .collect();
        let options = SimulationOptions::default().with_seed(2024);

        let parallel = simulate_slate(&fixtures, &options);
        let sequential: Vec<GameResult> = fixtures
            .iter()
            .zip(slate_seeds(2024, fixtures.len()))
            .map(|(f, seed)| simulate_game(f.home, f.away, &options.clone().with_seed(seed)))
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_sized_pool() {
        let home = team(1, 75.0);
        let away = team(2, 75.0);
        let fixtures = vec![Fixture::new(&home, &away); 4];
        let options = SimulationOptions::default();

        let pooled = WorkerPool::with_workers(2).simulate_slate(&fixtures, &options).unwrap();
        let global = WorkerPool::default().simulate_slate(&fixtures, &options).unwrap();
        assert_eq!(pooled, global);
        assert_eq!(pooled.len(), 4);
    }
}
