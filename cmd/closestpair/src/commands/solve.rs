//! Solve command.

use clap::Args;
use closestpair::{PairResult, Point, Solver, closest_pair_kd_with_dim};
use serde::Serialize;
use tracing::{debug, warn};

use super::{load_points, output_result, print_verbose, require_dim};
use crate::Cli;

/// Find the closest pair in a point file.
#[derive(Args)]
pub struct SolveCommand {
    /// Point file (JSON, YAML or text; '-' for stdin)
    #[arg(short = 'f', long)]
    file: String,

    /// Solver: brute-force, planar, planar-opt or kd
    #[arg(short, long, default_value = "kd")]
    solver: Solver,

    /// Point dimension (default: dimension of the first point)
    #[arg(long)]
    dim: Option<usize>,

    /// Run every solver that supports the dimension and compare
    #[arg(long)]
    all: bool,
}

/// The answer of one solver.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub solver: Solver,
    pub n: usize,
    pub dim: usize,
    pub distance: f64,
    pub pair: (Point, Point),
}

impl SolveCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let points = load_points(&self.file)?;
        print_verbose(cli, &format!("Loaded {} points from {}", points.len(), self.file));

        if self.all {
            let reports = solve_all(&points, self.dim)?;
            return output_result(&reports, cli.output.as_deref(), cli.json);
        }

        let report = solve_one(self.solver, &points, self.dim)?;
        output_result(&report, cli.output.as_deref(), cli.json)
    }
}

/// Runs one solver, checking the point dimension first when `dim` is given.
pub fn solve_one(solver: Solver, points: &[Point], dim: Option<usize>) -> anyhow::Result<SolveReport> {
    let result = match (solver, dim) {
        (Solver::Kd, Some(dim)) => closest_pair_kd_with_dim(points, dim)?,
        (_, Some(dim)) => {
            require_dim(points, dim)?;
            if !solver.supports_dim(dim) {
                anyhow::bail!("solver {solver} does not support dimension {dim}");
            }
            solver.solve(points)?
        }
        (_, None) => solver.solve(points)?,
    };
    debug!(%solver, distance = result.distance, "solved");
    Ok(report(solver, points, result))
}

/// Runs every solver supporting the input's dimension.
///
/// # Errors
/// Fails when the solvers disagree on the closest distance.
pub fn solve_all(points: &[Point], dim: Option<usize>) -> anyhow::Result<Vec<SolveReport>> {
    let dim = match (dim, points.first()) {
        (Some(d), _) => d,
        (None, Some(p)) => p.dim(),
        (None, None) => 0,
    };
    let solvers = Solver::for_dim(dim);
    if solvers.is_empty() {
        anyhow::bail!("no solver supports dimension {dim}");
    }

    let reports = solvers
        .into_iter()
        .map(|s| solve_one(s, points, Some(dim)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if let Some(first) = reports.first() {
        for r in &reports[1..] {
            if r.distance != first.distance {
                warn!(a = %first.solver, b = %r.solver, "solvers disagree");
                anyhow::bail!(
                    "{} found {}, {} found {}",
                    first.solver,
                    first.distance,
                    r.solver,
                    r.distance
                );
            }
        }
    }
    Ok(reports)
}

fn report(solver: Solver, points: &[Point], result: PairResult) -> SolveReport {
    SolveReport {
        solver,
        n: points.len(),
        dim: result.pair.0.dim(),
        distance: result.distance,
        pair: result.pair,
    }
}
