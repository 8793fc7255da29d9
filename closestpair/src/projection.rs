//! Axis-sorted projections shared by the divide-and-conquer solvers.
//!
//! A projection is a list of indices into the caller's point slice, ordered
//! by one coordinate. Sorting happens once per solve; recursion only ever
//! filters projections, so every local projection is a subsequence of the
//! top-level one and keeps its order.

use crate::point::Point;

/// Per-axis sorted index lists and the matching rank tables.
pub(crate) struct Projections {
    /// `orders[axis]` lists point indices by ascending coordinate on `axis`.
    pub orders: Vec<Vec<usize>>,
    /// `ranks[axis][i]` is the position of point `i` in `orders[axis]`.
    pub ranks: Vec<Vec<usize>>,
}

impl Projections {
    pub fn new(points: &[Point], dim: usize) -> Self {
        let orders: Vec<Vec<usize>> = (0..dim).map(|axis| sort_by_axis(points, axis)).collect();
        let ranks = orders.iter().map(|order| rank_table(order)).collect();
        Self { orders, ranks }
    }
}

/// Indices of `points` ordered by the `axis` coordinate. The sort is stable,
/// so equal coordinates keep input order.
pub(crate) fn sort_by_axis(points: &[Point], axis: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].coord(axis).total_cmp(&points[b].coord(axis)));
    order
}

fn rank_table(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (pos, &i) in order.iter().enumerate() {
        ranks[i] = pos;
    }
    ranks
}

/// Splits `order` into the points ranked at or below `median_rank` on the
/// split axis and the rest, preserving order within each half.
///
/// Comparing ranks instead of coordinates sends points that share the
/// median's coordinate to the same side they occupy in the split-axis
/// projection.
pub(crate) fn split(order: &[usize], split_ranks: &[usize], median_rank: usize) -> (Vec<usize>, Vec<usize>) {
    order.iter().partition(|&&i| split_ranks[i] <= median_rank)
}

/// Points of `order` whose `axis` coordinate lies strictly within
/// `sqrt(delta_sq)` of `center`, in `order` order.
pub(crate) fn strip(points: &[Point], order: &[usize], axis: usize, center: f64, delta_sq: f64) -> Vec<usize> {
    order
        .iter()
        .copied()
        .filter(|&i| {
            let d = points[i].coord(axis) - center;
            d * d < delta_sq
        })
        .collect()
}
