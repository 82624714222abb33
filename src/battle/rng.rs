use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness threaded through move selection, damage rolls and
/// turn ordering.
///
/// Implementations only provide fractions in `[0, 1)`; every other draw is
/// derived from them so a scripted sequence can force any outcome. The
/// `reason` is for tracing which part of the simulation consumed a value.
pub trait BattleRng: Send {
    fn next_fraction(&mut self, reason: &str) -> f64;

    /// Seed that reproduces this sequence, if there is one.
    fn seed(&self) -> Option<u64>;

    /// Uniform integer in `[min, max]`.
    fn roll_inclusive(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u64 + 1;
        let offset = (self.clamped_fraction(reason) * span as f64) as u64;
        min + offset.min(span - 1) as u32
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        if len <= 1 {
            return 0;
        }
        let index = (self.clamped_fraction(reason) * len as f64) as usize;
        index.min(len - 1)
    }

    /// Uniform real in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64, reason: &str) -> f64 {
        low + self.clamped_fraction(reason) * (high - low)
    }

    #[doc(hidden)]
    fn clamped_fraction(&mut self, reason: &str) -> f64 {
        self.next_fraction(reason).clamp(0.0, 1.0)
    }
}

/// Seedable generator used for real battles.
pub struct SeededRng {
    seed: u64,
    inner: StdRng,
}

impl SeededRng {
    /// Creates a new generator. Without a seed, a fresh one is drawn from the
    /// thread RNG and can be read back through [`BattleRng::seed`].
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl BattleRng for SeededRng {
    fn next_fraction(&mut self, reason: &str) -> f64 {
        let value: f64 = self.inner.random();
        trace!("rng {value:.4} for {reason}");
        value
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// Replays a fixed list of fractions, wrapping around when exhausted.
///
/// Values outside `[0, 1]` are clamped by the derived helpers.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// How many values have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl BattleRng for ScriptedRng {
    fn next_fraction(&mut self, reason: &str) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let outcome = self.outcomes[self.index % self.outcomes.len()];
        trace!("scripted rng {outcome} for {reason}");
        self.index += 1;
        outcome
    }

    fn seed(&self) -> Option<u64> {
        None
    }
}
