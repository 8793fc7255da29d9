//! closestpair CLI - solve, generate, benchmark and trace closest-pair runs.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{BenchCommand, GenerateCommand, SolveCommand, TraceCommand};

/// closestpair CLI - closest pair of points in k dimensions.
///
/// Points are read from JSON or YAML files holding an array of coordinate
/// arrays (e.g. `[[0, 1], [1, 0]]`), or from text files with one point per
/// line.
#[derive(Parser)]
#[command(name = "closestpair")]
#[command(about = "Closest pair of points: solve, generate, bench and trace")]
#[command(version)]
pub struct Cli {
    /// Bench config file (YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest pair in a point file
    Solve(SolveCommand),
    /// Generate a random point set with unique coordinates
    Generate(GenerateCommand),
    /// Measure solver running time over growing input sizes
    Bench(BenchCommand),
    /// Print every divide-and-conquer step of a solve
    Trace(TraceCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Solve(cmd) => cmd.run(&cli),
        Commands::Generate(cmd) => cmd.run(&cli),
        Commands::Bench(cmd) => cmd.run(&cli),
        Commands::Trace(cmd) => cmd.run(&cli),
    }
}
