//! Color generator seam.
//!
//! The core never inspects colors; it asks a [`ColorSource`] for a token when
//! a pill is drawn and copies that token onto every piece split from it.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::doc::Color;

/// Supplies a color token for each newly drawn pill.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Random pastel colors as CSS `hsl()` tokens.
#[derive(Debug, Clone)]
pub struct PastelColors<R = StdRng> {
    rng: R,
}

impl PastelColors<StdRng> {
    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Sequence seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> PastelColors<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for PastelColors<R> {
    fn next_color(&mut self) -> Color {
        let hue = self.rng.random_range(0..360);
        let saturation = 60 + self.rng.random_range(0..20);
        let lightness = 55 + self.rng.random_range(0..8);
        Color::new(format!("hsl({hue} {saturation}% {lightness}%)"))
    }
}

/// Always hands out the same token.
#[derive(Debug, Clone)]
pub struct FixedColor(pub Color);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Color {
        self.0.clone()
    }
}
