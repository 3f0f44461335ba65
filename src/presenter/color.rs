//! Cosmetic accent colors for recipe cards.
//!
//! Colors carry no meaning and are never stored; a card's color is a pure
//! function of the seed it was rendered with.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentColor {
    /// Card background
    pub background: &'static str,
    /// Badge on top of the background
    pub badge: &'static str,
}

pub const PALETTE: [AccentColor; 6] = [
    AccentColor {
        background: "#ecf7d4",
        badge: "#d6f497",
    },
    AccentColor {
        background: "#f9efe1",
        badge: "#f7e0b6",
    },
    AccentColor {
        background: "#e5f2fd",
        badge: "#d0e7f9",
    },
    AccentColor {
        background: "#f8f0f0",
        badge: "#fbdede",
    },
    AccentColor {
        background: "#faf1fc",
        badge: "#f0d8f7",
    },
    AccentColor {
        background: "#fef9e7",
        badge: "#fbeeb8",
    },
];

/// Picks a palette entry for `seed`.
pub fn accent_color(seed: u64) -> AccentColor {
    PALETTE[(mix(seed) % PALETTE.len() as u64) as usize]
}

/// Per-card seeds for one render.
pub trait SeedSource {
    fn seed_for(&mut self, index: usize) -> u64;
}

/// Fresh random seeds on every render.
pub struct RandomSeeds(RandomState);

impl RandomSeeds {
    pub fn new() -> Self {
        Self(RandomState::new())
    }
}

impl Default for RandomSeeds {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for RandomSeeds {
    fn seed_for(&mut self, index: usize) -> u64 {
        self.0.hash_one(index)
    }
}

/// Reproducible seeds derived from a base value.
pub struct FixedSeeds(pub u64);

impl SeedSource for FixedSeeds {
    fn seed_for(&mut self, index: usize) -> u64 {
        mix(self.0 ^ index as u64)
    }
}

// splitmix64 finalizer
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
