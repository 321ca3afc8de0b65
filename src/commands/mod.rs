//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, compare_strategies, random_secrets, run_benchmark};
pub use interactive::{Session, run_interactive};
pub use solve::{GuessStep, SolveResult, solve_code};
