//! Command implementations

pub mod autoplay;
pub mod benchmark;
pub mod simple;

pub use autoplay::{AutoplayConfig, AutoplayResult, run_autoplay};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
