//! Type-safe wrappers and enums for fighters and battles.

pub mod ids;
pub mod source;
pub mod stats;

pub use ids::{Seed, WinProbability};
pub use source::{Side, Source};
pub use stats::{StatBlock, STAT_NAMES};
