//! Planar divide and conquer.
//!
//! Both solvers share one recursion over the x-sorted projection and differ
//! only in how the strip around the split line is merged:
//!
//! - [`closest_pair_2d`] scans one y-ordered strip, comparing each point with
//!   at most its next 6 neighbors.
//! - [`closest_pair_2d_opt`] keeps the two half-strips apart and walks them
//!   with a two-pointer "hopscotch" merge, at most 2 comparisons per step.
//!
//! Recurrence T(n) = 2T(n/2) + O(n), so O(n log n) overall, dominated by the
//! initial sorts.

use tracing::{debug, trace};

use crate::brute::{BASE_CASE_MAX, closest_in};
use crate::error::Result;
use crate::observer::{NoopObserver, Observer, StepEvent};
use crate::pair::{Candidate, PairResult};
use crate::point::{Point, validate};
use crate::projection::{Projections, split, strip};
use crate::strip::{STRIP_WINDOW, hopscotch, window_scan};

const X: usize = 0;
const Y: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Window,
    Hopscotch,
}

impl Merge {
    fn solver_name(self) -> &'static str {
        match self {
            Merge::Window => "planar",
            Merge::Hopscotch => "planar-opt",
        }
    }
}

/// Closest pair of 2-D points, baseline strip scan.
///
/// # Errors
/// Fails on fewer than 2 points, on any point that is not 2-D, and on
/// non-finite coordinates.
pub fn closest_pair_2d(points: &[Point]) -> Result<PairResult> {
    run(points, Merge::Window, &mut NoopObserver)
}

/// [`closest_pair_2d`], reporting each recursion step to `observer`.
pub fn closest_pair_2d_traced(points: &[Point], observer: &mut dyn Observer) -> Result<PairResult> {
    run(points, Merge::Window, observer)
}

/// Closest pair of 2-D points, hopscotch strip merge.
///
/// Reports the same distance as [`closest_pair_2d`]; under ties the
/// reported pair may differ.
pub fn closest_pair_2d_opt(points: &[Point]) -> Result<PairResult> {
    run(points, Merge::Hopscotch, &mut NoopObserver)
}

/// [`closest_pair_2d_opt`], reporting each recursion step to `observer`.
pub fn closest_pair_2d_opt_traced(points: &[Point], observer: &mut dyn Observer) -> Result<PairResult> {
    run(points, Merge::Hopscotch, observer)
}

fn run(points: &[Point], merge: Merge, observer: &mut dyn Observer) -> Result<PairResult> {
    validate(points, Some(2))?;
    debug!(solver = merge.solver_name(), n = points.len(), "solve");

    let proj = Projections::new(points, 2);
    let mut solver = Planar {
        points,
        xs: &proj.orders[X],
        x_ranks: &proj.ranks[X],
        merge,
        observer,
    };
    let best = solver.closest(0, points.len(), &proj.orders[Y], 0)?;

    debug!(solver = merge.solver_name(), distance = best.distance(), "solved");
    Ok(best.into_result(points))
}

struct Planar<'a> {
    points: &'a [Point],
    xs: &'a [usize],
    x_ranks: &'a [usize],
    merge: Merge,
    observer: &'a mut dyn Observer,
}

impl Planar<'_> {
    /// Closest pair among `xs[lo..hi]`; `ys` holds the same points by y.
    fn closest(&mut self, lo: usize, hi: usize, ys: &[usize], depth: usize) -> Result<Candidate> {
        let n = hi - lo;
        if n <= BASE_CASE_MAX {
            return closest_in(self.points, &self.xs[lo..hi]);
        }

        // Left half is xs[lo..=mid].
        let mid = lo + (n - 1) / 2;
        let median = self.xs[mid];
        let (ys_left, ys_right) = split(ys, self.x_ranks, self.x_ranks[median]);

        let left = self.closest(lo, mid + 1, &ys_left, depth + 1)?;
        let right = self.closest(mid + 1, hi, &ys_right, depth + 1)?;
        let mut best = left.min(right);

        let delta_sq = best.dist_sq;
        let center = self.points[median].coord(X);
        let strip_len = match self.merge {
            Merge::Window => {
                let band = strip(self.points, ys, X, center, delta_sq);
                window_scan(self.points, &band, STRIP_WINDOW, &mut best);
                band.len()
            }
            Merge::Hopscotch => {
                let band_left = strip(self.points, &ys_left, X, center, delta_sq);
                let band_right = strip(self.points, &ys_right, X, center, delta_sq);
                hopscotch(self.points, &band_left, &band_right, Y, &mut best);
                band_left.len() + band_right.len()
            }
        };
        trace!(depth, n, strip = strip_len, "merged strip");

        if self.observer.enabled() {
            self.observer.on_step(&StepEvent {
                solver: self.merge.solver_name(),
                depth,
                level: X,
                size: n,
                midpoint: self.points[median].clone(),
                left: left.distance(),
                right: right.distance(),
                delta: delta_sq.sqrt(),
                strip: strip_len,
                best: best.into_result(self.points),
            });
        }

        Ok(best)
    }
}
