use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces an illustrative price path starting at a given price.
pub trait PriceSimulator {
    fn simulate(&mut self, start: f64, points: usize) -> Vec<f64>;
}

/// Multiplicative random walk: each step moves the last price by a uniform
/// fraction in `[-volatility, volatility)`.
pub struct RandomWalk<R: Rng> {
    rng: R,
    volatility: f64,
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(rng: R, volatility: f64) -> Self {
        Self { rng, volatility }
    }
}

impl RandomWalk<StdRng> {
    pub fn from_entropy(volatility: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), volatility)
    }

    /// Deterministic walk for tests and reproducible output.
    pub fn seeded(seed: u64, volatility: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), volatility)
    }
}

impl<R: Rng> PriceSimulator for RandomWalk<R> {
    fn simulate(&mut self, start: f64, points: usize) -> Vec<f64> {
        let mut path = Vec::with_capacity(points);
        if points == 0 {
            return path;
        }
        path.push(start);
        for _ in 1..points {
            let last = path[path.len() - 1];
            let u: f64 = self.rng.gen();
            let change = (u - 0.5) * 2.0 * self.volatility * last;
            path.push(last + change);
        }
        path
    }
}
