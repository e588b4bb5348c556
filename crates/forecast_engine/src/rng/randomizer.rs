//! Slope randomizer implementations.
//!
//! The production randomizer draws from `rand`'s thread-local
//! generator: one generator per OS thread, seeded once from OS entropy
//! and never reseeded, so concurrent trajectories neither serialise on
//! shared state nor correlate their draws.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use forecast_core::Slope;

/// Source of independent, uniformly distributed slope draws.
///
/// Each call must return one of {UP, DOWN, FLAT} with equal probability,
/// statistically independent of every other call, including calls made
/// concurrently from parallel trajectories. Implementations take `&self`
/// so a single randomizer can be shared across a Monte Carlo batch.
pub trait SlopeRandomizer {
    /// Draws one slope, uniform over the three values.
    fn random_slope(&self) -> Slope;
}

impl<T: SlopeRandomizer + ?Sized> SlopeRandomizer for &T {
    fn random_slope(&self) -> Slope {
        (**self).random_slope()
    }
}

/// Maps a uniform draw in `0..3` to a slope.
#[inline]
fn slope_from_index(index: u8) -> Slope {
    match index {
        0 => Slope::Down,
        1 => Slope::Flat,
        _ => Slope::Up,
    }
}

/// Production randomizer backed by the thread-local generator.
///
/// `rand::thread_rng()` hands each OS thread its own generator, seeded
/// once from OS entropy when the thread first draws. Concurrent callers
/// therefore never contend on a lock and never share a seed, which is
/// exactly the contract parallel Monte Carlo trajectories need.
///
/// # Examples
///
/// ```
/// use forecast_engine::rng::{SlopeRandomizer, ThreadRngSlopeRandomizer};
///
/// let randomizer = ThreadRngSlopeRandomizer;
/// let _slope = randomizer.random_slope();
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadRngSlopeRandomizer;

impl SlopeRandomizer for ThreadRngSlopeRandomizer {
    #[inline]
    fn random_slope(&self) -> Slope {
        slope_from_index(rand::thread_rng().gen_range(0..3))
    }
}

/// Seeded randomizer for reproducible runs.
///
/// The same seed always produces the same draw sequence. The generator
/// is shared behind a mutex, so concurrent callers serialise; use
/// [`ThreadRngSlopeRandomizer`] for parallel Monte Carlo batches and
/// this type when a run must be replayable.
///
/// # Examples
///
/// ```
/// use forecast_engine::rng::{SeededSlopeRandomizer, SlopeRandomizer};
///
/// let a = SeededSlopeRandomizer::from_seed(42);
/// let b = SeededSlopeRandomizer::from_seed(42);
/// for _ in 0..16 {
///     assert_eq!(a.random_slope(), b.random_slope());
/// }
/// ```
#[derive(Debug)]
pub struct SeededSlopeRandomizer {
    inner: Mutex<StdRng>,
}

impl SeededSlopeRandomizer {
    /// Creates a randomizer initialised with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SlopeRandomizer for SeededSlopeRandomizer {
    fn random_slope(&self) -> Slope {
        let mut rng = self.inner.lock().expect("slope randomizer lock poisoned");
        slope_from_index(rng.gen_range(0..3))
    }
}

/// Deterministic randomizer returning the same slope on every draw.
///
/// A stand-in for tests and dry runs: with [`Slope::Flat`] a forecast
/// reproduces the reference price exactly; with [`Slope::Up`] it walks
/// the all-up bound of the trajectory envelope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedSlopeRandomizer(Slope);

impl FixedSlopeRandomizer {
    /// Creates a randomizer that always returns `slope`.
    pub fn new(slope: Slope) -> Self {
        Self(slope)
    }
}

impl SlopeRandomizer for FixedSlopeRandomizer {
    #[inline]
    fn random_slope(&self) -> Slope {
        self.0
    }
}
