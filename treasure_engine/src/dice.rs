//! Dice -- the random source behind every probabilistic decision.
//!
//! All game rules draw through these helpers using a caller-supplied [`Rng`], so a
//! session can run on an OS-seeded generator, a fixed seed, or a [`ScriptedRng`]
//! that replays exact unit draws in tests.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Generator used by a live session.
pub type GameRng = StdRng;

/// Generator seeded from the operating system.
pub fn from_entropy() -> GameRng {
    StdRng::from_os_rng()
}

/// Generator with a fixed seed, for reproducible runs.
pub fn seeded(seed: u64) -> GameRng {
    StdRng::seed_from_u64(seed)
}

/// One uniform draw in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let value: f64 = rng.random();
    debug!("dice: unit draw {value:.4}");
    value
}

/// True with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit(rng) < p
}

/// Uniform integer in `1..=max`, scaled from a single unit draw. A `max` of 0 rolls 0 without drawing.
#[allow(clippy::cast_possible_truncation)]
pub fn roll_up_to<R: Rng + ?Sized>(rng: &mut R, max: u32) -> i32 {
    if max == 0 {
        return 0;
    }
    let max = i32::try_from(max).unwrap_or(i32::MAX);
    let scaled = (unit(rng) * f64::from(max)).floor() as i32;
    scaled.clamp(0, max - 1) + 1
}

/// Index of the equal-width partition of `[0, 1)` a unit draw falls into.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn partition<R: Rng + ?Sized>(rng: &mut R, parts: usize) -> usize {
    if parts == 0 {
        return 0;
    }
    let index = (unit(rng) * parts as f64).floor() as usize;
    index.min(parts - 1)
}

/// Deterministic generator replaying a fixed list of unit draws, cycling when exhausted.
///
/// Each value is encoded so that a single `rng.random::<f64>()` yields it back
/// (to 53 bits of precision).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
    calls: usize,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().map(|d| d.clamp(0.0, 1.0 - f64::EPSILON)).collect(),
            cursor: 0,
            calls: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn next_encoded(&mut self) -> u64 {
        self.calls += 1;
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        // rand builds an f64 from the top 53 bits of a u64
        let mantissa = (value * (1u64 << 53) as f64) as u64;
        mantissa << 11
    }
}

impl RngCore for ScriptedRng {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_encoded() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_encoded()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_encoded().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_rng_replays_unit_draws() {
        let mut rng = ScriptedRng::new(&[0.25, 0.75]);
        assert!((unit(&mut rng) - 0.25).abs() < 1e-12);
        assert!((unit(&mut rng) - 0.75).abs() < 1e-12);
        // cycles
        assert!((unit(&mut rng) - 0.25).abs() < 1e-12);
        assert_eq!(rng.calls(), 3);
    }

    #[test]
    fn roll_up_to_stays_in_range() {
        let mut low = ScriptedRng::new(&[0.0]);
        assert_eq!(roll_up_to(&mut low, 20), 1);
        let mut high = ScriptedRng::new(&[0.999_999]);
        assert_eq!(roll_up_to(&mut high, 20), 20);
        let mut mid = ScriptedRng::new(&[0.5]);
        assert_eq!(roll_up_to(&mut mid, 10), 6);
    }

    #[test]
    fn partition_maps_equal_widths() {
        let mut rng = ScriptedRng::new(&[0.0, 0.17, 0.5, 0.99]);
        assert_eq!(partition(&mut rng, 6), 0);
        assert_eq!(partition(&mut rng, 6), 1);
        assert_eq!(partition(&mut rng, 6), 3);
        assert_eq!(partition(&mut rng, 6), 5);
    }

    #[test]
    fn chance_compares_strictly_below() {
        let mut rng = ScriptedRng::new(&[0.5, 0.49]);
        assert!(!chance(&mut rng, 0.5));
        assert!(chance(&mut rng, 0.5));
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..16 {
            assert_eq!(roll_up_to(&mut a, 20), roll_up_to(&mut b, 20));
        }
    }

    #[test]
    fn seeded_rolls_cover_reward_range() {
        let mut rng = seeded(99);
        for _ in 0..500 {
            let roll = roll_up_to(&mut rng, 20);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn rolling_up_to_zero_draws_nothing() {
        let mut rng = ScriptedRng::new(&[0.99]);
        assert_eq!(roll_up_to(&mut rng, 0), 0);
        assert_eq!(rng.calls(), 0);
        assert_eq!(roll_up_to(&mut rng, 1), 1);
    }
}
