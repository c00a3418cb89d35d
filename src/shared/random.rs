use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws in [0, 1). Every random decision in the engine goes through
/// one of these so a day can be replayed exactly.
pub trait RandomSource {
    fn roll(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.roll() < p
    }

    /// Index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        ((self.roll() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Integer in `low..=high`.
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let span = high.saturating_sub(low) as usize + 1;
        low + self.pick_index(span) as u32
    }
}

/// `rand`-backed source used outside of tests.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Every roll returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RandomSource for FixedRolls {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}
