//! Shared helpers.

pub mod stats;
pub use stats::SolveStats;
