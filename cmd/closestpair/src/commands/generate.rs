//! Generate command.

use clap::Args;
use closestpair::{Point, unique_points, vertical_points, with_duplicate};

use super::{make_rng, output_result, print_verbose};
use crate::Cli;

/// Generate a random point set with unique coordinates.
#[derive(Args)]
pub struct GenerateCommand {
    /// Number of points
    #[arg(short = 'n', long)]
    count: usize,

    /// Point dimension
    #[arg(long, default_value_t = 2)]
    dim: usize,

    /// RNG seed (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Put every point on the line x = 0
    #[arg(long)]
    vertical: bool,

    /// Append a copy of the first point
    #[arg(long)]
    duplicate: bool,
}

impl GenerateCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let points = self.generate()?;
        print_verbose(cli, &format!("Generated {} points of dimension {}", points.len(), self.dim));
        output_result(&points, cli.output.as_deref(), cli.json)
    }

    fn generate(&self) -> anyhow::Result<Vec<Point>> {
        if self.dim == 0 {
            anyhow::bail!("dimension must be at least 1");
        }
        if self.vertical && self.dim != 2 {
            anyhow::bail!("vertical point sets are planar, got dim {}", self.dim);
        }

        let mut rng = make_rng(self.seed);
        let points = if self.vertical {
            vertical_points(self.count, &mut rng)
        } else {
            unique_points(self.count, self.dim, &mut rng)
        };

        Ok(if self.duplicate { with_duplicate(points) } else { points })
    }
}
