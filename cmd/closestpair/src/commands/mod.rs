//! CLI commands module.

mod bench;
mod generate;
mod solve;
mod trace;
mod util;

pub use bench::BenchCommand;
pub use generate::GenerateCommand;
pub use solve::SolveCommand;
pub use trace::TraceCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
