//! Number generators for ticket issuing

use std::collections::VecDeque;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Source of ticket numbers.
///
/// Implementations must return `count` distinct values in `min..=max`;
/// anything else is rejected by the ticket machine as a defect.
pub trait NumberGenerator {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8>;
}

impl<G: NumberGenerator + ?Sized> NumberGenerator for Box<G> {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        (**self).pick_unique(min, max, count)
    }
}

/// Uniform generator backed by ChaCha8
pub struct RandomNumberGenerator {
    rng: ChaCha8Rng,
}

impl RandomNumberGenerator {
    /// Create a generator with optional seed (None = OS entropy)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        let span = (max - min) as usize + 1;
        rand::seq::index::sample(&mut self.rng, span, count.min(span))
            .into_iter()
            .map(|offset| min + offset as u8)
            .collect()
    }
}

/// Replays prepared number sets in order, then yields nothing.
///
/// Lets tests and demos decide exactly which tickets get issued.
#[derive(Debug, Clone, Default)]
pub struct FixedNumberGenerator {
    queue: VecDeque<Vec<u8>>,
}

impl FixedNumberGenerator {
    pub fn new<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self {
            queue: sets.into_iter().map(Into::into).collect(),
        }
    }

    /// Queue another set
    pub fn push(&mut self, numbers: impl Into<Vec<u8>>) {
        self.queue.push_back(numbers.into());
    }

    /// Sets not yet handed out
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl NumberGenerator for FixedNumberGenerator {
    fn pick_unique(&mut self, _min: u8, _max: u8, _count: usize) -> Vec<u8> {
        self.queue.pop_front().unwrap_or_default()
    }
}
