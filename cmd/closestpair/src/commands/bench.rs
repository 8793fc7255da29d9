//! Growth-rate benchmark over generated point sets.

use std::time::Instant;

use clap::Args;
use closestpair::{Point, Solver, unique_points, vertical_points};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::{make_rng, output_result, output_text, print_verbose};
use crate::Cli;
use crate::config::{BenchConfig, load_config};

/// Measure solver running time over growing input sizes.
///
/// Every size gets one freshly generated point set shared by all solvers,
/// and the solvers must agree on its closest distance.
#[derive(Args)]
pub struct BenchCommand {
    /// Input sizes (comma-separated; default 2,4,...,8192)
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Solvers to run (comma-separated; default all supporting --dim)
    #[arg(short, long, value_delimiter = ',')]
    solvers: Vec<Solver>,

    /// Point dimension
    #[arg(long)]
    dim: Option<usize>,

    /// Timed runs per solver and size
    #[arg(long)]
    repeat: Option<usize>,

    /// RNG seed for point generation
    #[arg(long)]
    seed: Option<u64>,

    /// Use vertical point sets (every x = 0)
    #[arg(long)]
    vertical: bool,
}

/// Timing of one solver on one input size.
#[derive(Debug, Clone, Serialize)]
pub struct SolverTiming {
    pub solver: Solver,
    pub seconds: f64,
    pub distance: f64,
}

/// All timings for one input size.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub n: usize,
    pub timings: Vec<SolverTiming>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub rows: Vec<BenchRow>,
}

impl BenchCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        // Load config: start with defaults, merge file config, then apply flag overrides
        let mut cfg = BenchConfig::default();
        if let Some(ref path) = cli.config {
            cfg.merge(&load_config(path)?);
            print_verbose(cli, &format!("Loaded config from: {}", path));
        }
        cfg.merge(&self.overrides());
        let cfg = cfg.with_defaults();
        cfg.validate()?;
        debug!(?cfg, "bench config");

        let report = run_bench(cfg)?;

        if cli.json {
            output_result(&report, cli.output.as_deref(), true)
        } else {
            output_text(&render_table(&report), cli.output.as_deref())
        }
    }

    fn overrides(&self) -> BenchConfig {
        BenchConfig {
            sizes: self.sizes.clone(),
            repeat: self.repeat.unwrap_or(0),
            seed: self.seed,
            dim: self.dim.unwrap_or(0),
            solvers: self.solvers.clone(),
            vertical: self.vertical,
        }
    }
}

/// Runs every configured solver on every size.
///
/// # Errors
/// Fails if a solver errors or if solvers report different distances for
/// the same point set.
pub fn run_bench(cfg: BenchConfig) -> anyhow::Result<BenchReport> {
    let mut rng = make_rng(cfg.seed);
    let mut rows = Vec::with_capacity(cfg.sizes.len());

    for &n in &cfg.sizes {
        let points = generate(n, &cfg, &mut rng);
        let mut timings = Vec::with_capacity(cfg.solvers.len());

        for &solver in &cfg.solvers {
            let (seconds, distance) = time_solver(solver, &points, cfg.repeat)?;
            info!(n, %solver, seconds, "timed");
            timings.push(SolverTiming {
                solver,
                seconds,
                distance,
            });
        }

        if let Some(first) = timings.first() {
            if let Some(other) = timings.iter().find(|t| t.distance != first.distance) {
                anyhow::bail!(
                    "solvers disagree at n={n}: {} found {}, {} found {}",
                    first.solver,
                    first.distance,
                    other.solver,
                    other.distance
                );
            }
        }

        rows.push(BenchRow { n, timings });
    }

    Ok(BenchReport { config: cfg, rows })
}

fn generate<R: Rng>(n: usize, cfg: &BenchConfig, rng: &mut R) -> Vec<Point> {
    if cfg.vertical {
        vertical_points(n, rng)
    } else {
        unique_points(n, cfg.dim, rng)
    }
}

/// Mean wall-clock seconds over `repeat` runs, and the distance found.
fn time_solver(solver: Solver, points: &[Point], repeat: usize) -> anyhow::Result<(f64, f64)> {
    let mut total = 0.0;
    let mut distance = 0.0;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        let result = solver.solve(points)?;
        total += start.elapsed().as_secs_f64();
        distance = result.distance;
    }
    Ok((total / repeat.max(1) as f64, distance))
}

/// Renders the report as an aligned table, one column per solver.
pub fn render_table(report: &BenchReport) -> String {
    const N_HEADING: &str = "n input";

    let n_width = report
        .rows
        .iter()
        .map(|r| r.n.to_string().len())
        .max()
        .unwrap_or(0)
        .max(N_HEADING.len());

    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| row.timings.iter().map(|t| format!("{:.6}", t.seconds)).collect())
        .collect();
    let widths: Vec<usize> = report
        .config
        .solvers
        .iter()
        .enumerate()
        .map(|(i, s)| {
            cells
                .iter()
                .filter_map(|row| row.get(i).map(String::len))
                .max()
                .unwrap_or(0)
                .max(s.name().len())
        })
        .collect();

    let mut out = String::new();
    let title = if report.config.vertical {
        format!("TIMINGS (seconds), dim {}, vertical points\n\n", report.config.dim)
    } else {
        format!("TIMINGS (seconds), dim {}\n\n", report.config.dim)
    };
    out.push_str(&title);

    out.push_str(&format!("{:<n_width$}", N_HEADING));
    for (s, w) in report.config.solvers.iter().zip(&widths) {
        out.push_str(&format!(" {:>w$}", s.name()));
    }
    out.push('\n');

    out.push_str(&"-".repeat(n_width));
    for w in &widths {
        out.push(' ');
        out.push_str(&"-".repeat(*w));
    }
    out.push('\n');

    for (row, row_cells) in report.rows.iter().zip(&cells) {
        out.push_str(&format!("{:<n_width$}", row.n));
        for (cell, w) in row_cells.iter().zip(&widths) {
            out.push_str(&format!(" {:>w$}", cell));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(vertical: bool) -> BenchConfig {
        BenchConfig {
            sizes: vec![2, 16, 100],
            repeat: 2,
            seed: Some(5),
            vertical,
            ..Default::default()
        }
        .with_defaults()
    }

    #[test]
    fn bench_runs_all_solvers() {
        let report = run_bench(small_config(false)).unwrap();
        assert_eq!(report.rows.len(), 3);
        for row in &report.rows {
            assert_eq!(row.timings.len(), 4);
            assert!(row.timings.iter().all(|t| t.seconds >= 0.0 && t.distance > 0.0));
        }
    }

    #[test]
    fn bench_vertical_points() {
        let report = run_bench(small_config(true)).unwrap();
        assert_eq!(report.rows.last().unwrap().n, 100);
    }

    #[test]
    fn bench_three_dimensions() {
        let cfg = BenchConfig {
            sizes: vec![50],
            dim: 3,
            seed: Some(1),
            ..Default::default()
        }
        .with_defaults();
        let report = run_bench(cfg).unwrap();
        let solvers: Vec<Solver> = report.rows[0].timings.iter().map(|t| t.solver).collect();
        assert_eq!(solvers, vec![Solver::BruteForce, Solver::Kd]);
    }

    #[test]
    fn table_layout() {
        let report = BenchReport {
            config: BenchConfig {
                sizes: vec![2, 1024],
                solvers: vec![Solver::Planar, Solver::Kd],
                ..Default::default()
            }
            .with_defaults(),
            rows: vec![
                BenchRow {
                    n: 2,
                    timings: vec![
                        SolverTiming {
                            solver: Solver::Planar,
                            seconds: 0.000001,
                            distance: 1.0,
                        },
                        SolverTiming {
                            solver: Solver::Kd,
                            seconds: 0.000002,
                            distance: 1.0,
                        },
                    ],
                },
                BenchRow {
                    n: 1024,
                    timings: vec![
                        SolverTiming {
                            solver: Solver::Planar,
                            seconds: 0.25,
                            distance: 1.0,
                        },
                        SolverTiming {
                            solver: Solver::Kd,
                            seconds: 1.5,
                            distance: 1.0,
                        },
                    ],
                },
            ],
        };

        let table = render_table(&report);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "TIMINGS (seconds), dim 2");
        assert_eq!(lines[2], "n input   planar       kd");
        assert_eq!(lines[3], "------- -------- --------");
        assert_eq!(lines[4], "2       0.000001 0.000002");
        assert_eq!(lines[5], "1024    0.250000 1.500000");
    }
}
