//! Random draws for shots and blocks.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of percentile rolls in `0..100`.
pub trait Roller {
    fn roll(&mut self) -> u32;

    /// Roll once and succeed when the roll lands under `percent`.
    fn chance(&mut self, percent: u32) -> bool {
        let roll = self.roll();
        log::debug!("rolled {} against {}%", roll, percent);
        roll < percent
    }
}

pub struct RandomRoller<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRoller<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Roller for RandomRoller<R> {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(0..100)
    }
}

/// Replays queued rolls, then keeps returning `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRoller {
    pub fn new(rolls: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Every roll is 0: every shot goes in and every dunk is blocked.
    pub fn always_low() -> Self {
        Self::new(std::iter::empty(), 0)
    }

    /// Every roll is 99: every shot misses and no dunk is blocked.
    pub fn always_high() -> Self {
        Self::new(std::iter::empty(), 99)
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}
