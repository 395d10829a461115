//! Apparent magnitude assigned to newly placed stars.
//!
//! Stars placed early are treated as the brightest ones, so the magnitude
//! grows (dims) roughly as the 4.6th root of the number of stars already
//! placed, plus a small uniform jitter:
//!
//! ```text
//! mag(n) = 1.6 · n^(1/4.6) − 1.7 + U[0, 0.1)
//! ```

use rand::RngExt;

/// Parameters of the ordinal → magnitude curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudePolicy {
    /// Multiplier on the root term. Default 1.6.
    pub scale: f64,
    /// Exponent applied to the ordinal. Default 1/4.6.
    pub exponent: f64,
    /// Magnitude of the very first star before jitter. Default -1.7.
    pub offset: f64,
    /// Width of the uniform jitter interval `[0, jitter)`. Default 0.1.
    pub jitter: f64,
}

impl Default for MagnitudePolicy {
    fn default() -> Self {
        Self {
            scale: 1.6,
            exponent: 1.0 / 4.6,
            offset: -1.7,
            jitter: 0.1,
        }
    }
}

impl MagnitudePolicy {
    /// Jitter-free magnitude for the given ordinal. `ordinal = 0` gives `offset`.
    pub fn base_magnitude(&self, ordinal: usize) -> f64 {
        self.scale * (ordinal as f64).powf(self.exponent) + self.offset
    }

    /// Magnitude for the given ordinal with jitter drawn from `rng`.
    pub fn magnitude_with<R: RngExt>(&self, ordinal: usize, rng: &mut R) -> f64 {
        self.base_magnitude(ordinal) + rng.random::<f64>() * self.jitter
    }
}

/// Magnitude for the given ordinal under the default policy, jittered by the thread rng.
pub fn magnitude(ordinal: usize) -> f64 {
    MagnitudePolicy::default().magnitude_with(ordinal, &mut rand::rng())
}
