//! Clock and random implementations.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - a single generator seeded from OS entropy.
///
/// Not cryptographically meaningful for this use; it only has to be uniform.
pub struct SystemRandom {
    rng: Mutex<StdRng>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(min..=max)
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scripted random for testing: replays the given values in order, then
/// starts over.
#[cfg(test)]
pub struct SequenceRandom {
    values: Vec<u32>,
    next: Mutex<usize>,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: Mutex::new(0),
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_range(&self, _min: u32, _max: u32) -> u32 {
        let mut next = self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = self.values[*next % self.values.len()];
        *next += 1;
        value
    }
}
