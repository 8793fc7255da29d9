//! Strip merges: the step that catches pairs straddling a split.
//!
//! Every function scans index lists already sorted along `axis` and lowers
//! `best` when it meets a strictly closer pair.

use crate::pair::Candidate;
use crate::point::Point;

/// Neighbors checked per strip point by the window scan.
///
/// In a δ × 2δ box above a strip point, each δ/2 × δ/2 cell holds at most one
/// point of either half, so at most 7 points share the box: the point itself
/// and 6 successors.
pub(crate) const STRIP_WINDOW: usize = 6;

/// Compares each strip point with at most the next `window` points.
pub(crate) fn window_scan(points: &[Point], strip: &[usize], window: usize, best: &mut Candidate) {
    for i in 0..strip.len().saturating_sub(1) {
        let end = (i + 1 + window).min(strip.len());
        for j in i + 1..end {
            best.offer(points, strip[i], strip[j]);
        }
    }
}

/// Compares each strip point with its successors until the gap along `axis`
/// reaches the current best distance.
pub(crate) fn gap_scan(points: &[Point], strip: &[usize], axis: usize, best: &mut Candidate) {
    for i in 0..strip.len().saturating_sub(1) {
        let pi = points[strip[i]].coord(axis);
        for j in i + 1..strip.len() {
            let gap = points[strip[j]].coord(axis) - pi;
            if gap * gap >= best.dist_sq {
                break;
            }
            best.offer(points, strip[i], strip[j]);
        }
    }
}

/// Compares consecutive strip points only.
pub(crate) fn neighbor_scan(points: &[Point], strip: &[usize], best: &mut Candidate) {
    for w in strip.windows(2) {
        best.offer(points, w[0], w[1]);
    }
}

/// Two-pointer merge of the half-strips on either side of a split.
///
/// Both halves are ordered along `axis`. The pointer that is behind (lower
/// coordinate, left half on ties) is compared with the other half's current
/// point and that point's successor, then advances. Points on the same side
/// are never compared: their distance is already at least δ.
///
/// With one half empty there is nothing to straddle the split, and the
/// non-empty half falls back to a consecutive-neighbor scan.
pub(crate) fn hopscotch(points: &[Point], left: &[usize], right: &[usize], axis: usize, best: &mut Candidate) {
    if left.is_empty() || right.is_empty() {
        let side = if left.is_empty() { right } else { left };
        neighbor_scan(points, side, best);
        return;
    }

    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        best.offer(points, left[l], right[r]);

        if points[left[l]].coord(axis) <= points[right[r]].coord(axis) {
            if r + 1 < right.len() {
                best.offer(points, left[l], right[r + 1]);
            }
            l += 1;
        } else {
            if l + 1 < left.len() {
                best.offer(points, left[l + 1], right[r]);
            }
            r += 1;
        }
    }
}
