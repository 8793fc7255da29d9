//! k-dimensional divide and conquer.
//!
//! The recursion carries a split level ℓ (an axis). A call splits the level-ℓ
//! projection at its median, solves both halves at the same level, then
//! builds the strip of points within δ of the median along ℓ. If a next axis
//! exists the strip is solved again as a fresh problem at level ℓ+1, which
//! prunes it along that axis before a bounded window scan. At the last axis
//! the strip is scanned directly, walking successors until the gap along the
//! axis reaches δ.
//!
//! Recurrence T(n, k) = 2T(n/2, k) + T(m, k-1) + O(n), where the sparse strip
//! keeps T(m, k-1) within O(n); O(n log n) for fixed k.

use tracing::{debug, trace};

use crate::brute::{BASE_CASE_MAX, closest_in};
use crate::error::Result;
use crate::observer::{NoopObserver, Observer, StepEvent};
use crate::pair::{Candidate, PairResult};
use crate::point::{Point, validate};
use crate::projection::{Projections, split, strip};
use crate::strip::{STRIP_WINDOW, gap_scan, window_scan};

const SOLVER: &str = "kd";

/// Closest pair of k-dimensional points; k is taken from the first point.
///
/// # Errors
/// Fails on fewer than 2 points, on points of differing dimension, on
/// zero-dimensional points, and on non-finite coordinates.
pub fn closest_pair_kd(points: &[Point]) -> Result<PairResult> {
    run(points, None, &mut NoopObserver)
}

/// [`closest_pair_kd`] with an explicit dimension every point must have.
pub fn closest_pair_kd_with_dim(points: &[Point], dim: usize) -> Result<PairResult> {
    run(points, Some(dim), &mut NoopObserver)
}

/// [`closest_pair_kd`], reporting each recursion step to `observer`.
pub fn closest_pair_kd_traced(points: &[Point], observer: &mut dyn Observer) -> Result<PairResult> {
    run(points, None, observer)
}

fn run(points: &[Point], dim: Option<usize>, observer: &mut dyn Observer) -> Result<PairResult> {
    let dim = validate(points, dim)?;
    debug!(solver = SOLVER, n = points.len(), dim, "solve");

    let proj = Projections::new(points, dim);
    let mut solver = KdSolver {
        points,
        ranks: &proj.ranks,
        dim,
        observer,
    };
    let best = solver.closest(&proj.orders, 0, 0)?;

    debug!(solver = SOLVER, distance = best.distance(), "solved");
    Ok(best.into_result(points))
}

struct KdSolver<'a> {
    points: &'a [Point],
    /// Global rank tables; every local projection is ordered consistently
    /// with them.
    ranks: &'a [Vec<usize>],
    dim: usize,
    observer: &'a mut dyn Observer,
}

impl KdSolver<'_> {
    /// Closest pair of the point set held by `proj` (one projection per axis,
    /// all over the same points), splitting along `level`.
    fn closest(&mut self, proj: &[Vec<usize>], level: usize, depth: usize) -> Result<Candidate> {
        let order = &proj[level];
        let n = order.len();
        if n <= BASE_CASE_MAX {
            return closest_in(self.points, order);
        }

        // Left half is the first n/2 points along `level`; the median is its last.
        let mid = n / 2;
        let median = order[mid - 1];
        let median_rank = self.ranks[level][median];

        let mut left = Vec::with_capacity(self.dim);
        let mut right = Vec::with_capacity(self.dim);
        for (axis, axis_order) in proj.iter().enumerate() {
            if axis == level {
                left.push(axis_order[..mid].to_vec());
                right.push(axis_order[mid..].to_vec());
            } else {
                let (l, r) = split(axis_order, &self.ranks[level], median_rank);
                left.push(l);
                right.push(r);
            }
        }

        let best_left = self.closest(&left, level, depth + 1)?;
        let best_right = self.closest(&right, level, depth + 1)?;
        let mut best = best_left.min(best_right);

        let delta_sq = best.dist_sq;
        let center = self.points[median].coord(level);
        let band: Vec<Vec<usize>> = proj
            .iter()
            .map(|axis_order| strip(self.points, axis_order, level, center, delta_sq))
            .collect();

        let next = level + 1;
        let scanned = if next < self.dim {
            if band[next].len() > 1 {
                let deeper = self.closest(&band, next, depth + 1)?;
                best = best.min(deeper);
            }
            window_scan(self.points, &band[next], STRIP_WINDOW, &mut best);
            band[next].len()
        } else {
            gap_scan(self.points, &band[level], level, &mut best);
            band[level].len()
        };
        trace!(depth, level, n, strip = scanned, "merged strip");

        if self.observer.enabled() {
            self.observer.on_step(&StepEvent {
                solver: SOLVER,
                depth,
                level,
                size: n,
                midpoint: self.points[median].clone(),
                left: best_left.distance(),
                right: best_right.distance(),
                delta: delta_sq.sqrt(),
                strip: scanned,
                best: best.into_result(self.points),
            });
        }

        Ok(best)
    }
}
