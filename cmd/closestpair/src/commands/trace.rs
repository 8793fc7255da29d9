//! Trace command: prints each divide-and-conquer step of one solve.

use std::fmt::Write as _;

use clap::Args;
use closestpair::{PairResult, Point, Solver, StepEvent, all_pairs, unique_points};
use serde::Serialize;

use super::{load_points, make_rng, output_result, output_text, print_verbose};
use crate::Cli;

/// Largest input `--pairs` will enumerate.
const MAX_PAIR_LISTING: usize = 64;

/// Print every divide-and-conquer step of a solve.
#[derive(Args)]
pub struct TraceCommand {
    /// Point file (JSON, YAML or text; '-' for stdin)
    #[arg(short = 'f', long, conflicts_with = "count")]
    file: Option<String>,

    /// Generate this many points instead of reading a file
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Dimension of generated points
    #[arg(long, default_value_t = 2)]
    dim: usize,

    /// RNG seed for generated points
    #[arg(long)]
    seed: Option<u64>,

    /// Solver to trace
    #[arg(short, long, default_value = "planar-opt")]
    solver: Solver,

    /// Also list the distance of every pair (small inputs only)
    #[arg(long)]
    pairs: bool,
}

/// One entry of the pair listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairEntry {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub solver: Solver,
    pub points: Vec<Point>,
    pub steps: Vec<StepEvent>,
    pub result: PairResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<PairEntry>>,
}

impl TraceCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let points = match (&self.file, self.count) {
            (Some(path), _) => load_points(path)?,
            (None, Some(n)) => unique_points(n, self.dim, &mut make_rng(self.seed)),
            (None, None) => anyhow::bail!("either --file or --count is required"),
        };
        print_verbose(cli, &format!("Tracing {} on {} points", self.solver, points.len()));

        let report = trace(self.solver, points, self.pairs)?;

        if cli.json {
            output_result(&report, cli.output.as_deref(), true)
        } else {
            output_text(&render_report(&report), cli.output.as_deref())
        }
    }
}

/// Solves with `solver`, collecting every step.
pub fn trace(solver: Solver, points: Vec<Point>, with_pairs: bool) -> anyhow::Result<TraceReport> {
    if with_pairs && points.len() > MAX_PAIR_LISTING {
        anyhow::bail!(
            "pair listing is limited to {MAX_PAIR_LISTING} points, got {}",
            points.len()
        );
    }

    let mut steps: Vec<StepEvent> = Vec::new();
    let result = solver.solve_traced(&points, &mut steps)?;

    let pairs = if with_pairs {
        let entries = all_pairs(&points)?
            .into_iter()
            .map(|(i, j, distance)| PairEntry { i, j, distance })
            .collect();
        Some(entries)
    } else {
        None
    };

    Ok(TraceReport {
        solver,
        points,
        steps,
        result,
        pairs,
    })
}

/// One line per step, indented by recursion depth.
pub fn render_steps(steps: &[StepEvent]) -> String {
    let mut out = String::new();
    for s in steps {
        let _ = writeln!(
            out,
            "{:indent$}[{}] n={} mid={} left={} right={} delta={} strip={} best={}",
            "",
            axis_name(s.level),
            s.size,
            s.midpoint,
            s.left,
            s.right,
            s.delta,
            s.strip,
            s.best,
            indent = s.depth * 2,
        );
    }
    out
}

fn render_report(report: &TraceReport) -> String {
    let mut out = format!("{} on {} points\n", report.solver, report.points.len());
    out.push_str(&render_steps(&report.steps));
    let _ = writeln!(out, "result: {}", report.result);

    if let Some(pairs) = &report.pairs {
        out.push_str("pairs:\n");
        for p in pairs {
            let _ = writeln!(
                out,
                "  {} {} <-> {} {}: {}",
                p.i, report.points[p.i], p.j, report.points[p.j], p.distance
            );
        }
    }
    out
}

fn axis_name(level: usize) -> String {
    match level {
        0 => "x".to_string(),
        1 => "y".to_string(),
        2 => "z".to_string(),
        n => format!("axis {n}"),
    }
}
