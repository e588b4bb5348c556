//! Slope randomness: uniform, independent, concurrency-safe draws.

pub mod randomizer;

pub use randomizer::{
    FixedSlopeRandomizer, SeededSlopeRandomizer, SlopeRandomizer, ThreadRngSlopeRandomizer,
};
