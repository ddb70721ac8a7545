// picker.rs - Source of the walk's random choices

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index in `[0, upper)`. Callers never pass `upper == 0`.
pub trait Picker {
    fn pick(&mut self, upper: usize) -> usize;
}

/// Uniform choices drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of choices, then keeps picking the first candidate.
///
/// Each scripted value is reduced modulo `upper`, so a script can never
/// select outside the candidate set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, upper: usize) -> usize {
        let value = self.script.pop_front().unwrap_or(0);
        if upper == 0 { 0 } else { value % upper }
    }
}
