//! Benchmark support crate for spanswap.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks for MST construction and reconnection.

pub mod error;
pub mod params;
pub mod source;
