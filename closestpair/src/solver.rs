use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::brute::brute_force;
use crate::error::Result;
use crate::kd::{closest_pair_kd, closest_pair_kd_traced};
use crate::observer::Observer;
use crate::pair::PairResult;
use crate::planar::{
    closest_pair_2d, closest_pair_2d_opt, closest_pair_2d_opt_traced, closest_pair_2d_traced,
};
use crate::point::Point;

/// Selects one of the closest-pair algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Solver {
    /// O(n²) exhaustive search, any dimension.
    BruteForce,
    /// Planar divide and conquer with the 6-neighbor strip scan.
    Planar,
    /// Planar divide and conquer with the hopscotch strip merge.
    PlanarOpt,
    /// k-dimensional divide and conquer.
    Kd,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::BruteForce, Solver::Planar, Solver::PlanarOpt, Solver::Kd];

    pub fn name(self) -> &'static str {
        match self {
            Solver::BruteForce => "brute-force",
            Solver::Planar => "planar",
            Solver::PlanarOpt => "planar-opt",
            Solver::Kd => "kd",
        }
    }

    /// Whether the solver accepts points of dimension `dim`.
    pub fn supports_dim(self, dim: usize) -> bool {
        match self {
            Solver::Planar | Solver::PlanarOpt => dim == 2,
            Solver::BruteForce | Solver::Kd => dim >= 1,
        }
    }

    /// Solvers that accept points of dimension `dim`, in [`Solver::ALL`] order.
    pub fn for_dim(dim: usize) -> Vec<Solver> {
        Self::ALL.into_iter().filter(|s| s.supports_dim(dim)).collect()
    }

    pub fn solve(self, points: &[Point]) -> Result<PairResult> {
        match self {
            Solver::BruteForce => brute_force(points),
            Solver::Planar => closest_pair_2d(points),
            Solver::PlanarOpt => closest_pair_2d_opt(points),
            Solver::Kd => closest_pair_kd(points),
        }
    }

    /// Solves while reporting recursion steps. Brute force has no recursion
    /// and reports nothing.
    pub fn solve_traced(self, points: &[Point], observer: &mut dyn Observer) -> Result<PairResult> {
        match self {
            Solver::BruteForce => brute_force(points),
            Solver::Planar => closest_pair_2d_traced(points, observer),
            Solver::PlanarOpt => closest_pair_2d_opt_traced(points, observer),
            Solver::Kd => closest_pair_kd_traced(points, observer),
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown solver name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown solver {0:?}: expected one of brute-force, planar, planar-opt, kd")]
pub struct UnknownSolverError(pub String);

impl FromStr for Solver {
    type Err = UnknownSolverError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brute-force" | "brute" | "bf" => Ok(Solver::BruteForce),
            "planar" | "2d" => Ok(Solver::Planar),
            "planar-opt" | "2d-opt" | "opt" => Ok(Solver::PlanarOpt),
            "kd" => Ok(Solver::Kd),
            _ => Err(UnknownSolverError(s.to_string())),
        }
    }
}
