//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameOutcome, run_benchmark};
pub use play::{PlayOutcome, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
