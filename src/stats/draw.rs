//! Bounded random draws for counting stats and makes.

use crate::core::SimRng;

/// Normal draws are clamped to this many standard deviations.
pub const NOISE_CLAMP: f64 = 2.5;

/// Largest attempt count simulated shot by shot.
pub const EXACT_BINOMIAL_LIMIT: u32 = 20;

/// Number of successes in `n` trials at probability `p`.
///
/// Exact Bernoulli trials up to 20 attempts, a rounded normal approximation
/// above. The result always lies in `[0, n]`.
pub fn binomial(n: u32, p: f64, rng: &mut SimRng) -> u32 {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    if n == 0 || p == 0.0 {
        return 0;
    }
    if p == 1.0 {
        return n;
    }

    if n <= EXACT_BINOMIAL_LIMIT {
        return (0..n).filter(|_| rng.gen_bool(p)).count() as u32;
    }

    let trials = f64::from(n);
    let mean = trials * p;
    let sd = (trials * p * (1.0 - p)).sqrt();
    let draw = (mean + sd * rng.standard_normal()).round();
    draw.clamp(0.0, trials) as u32
}

/// Non-negative integer near `expected`, with relative spread `relative_sd`.
///
/// The normal term is clamped to ±2.5σ, so a 0.16 spread never moves the
/// value more than 40% from expectation before rounding.
pub fn noisy_count(expected: f64, relative_sd: f64, rng: &mut SimRng) -> u32 {
    let z = rng.bounded_normal(NOISE_CLAMP);
    if !expected.is_finite() || expected <= 0.0 {
        return 0;
    }
    (expected * (1.0 + relative_sd * z)).round().max(0.0) as u32
}
