use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// The closest pair found by a solver.
///
/// `distance` is the Euclidean distance between the two points of `pair`.
/// The order inside `pair` follows the order in which the solver met the two
/// points, which is deterministic for a given input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub distance: f64,
    pub pair: (Point, Point),
}

impl fmt::Display for PairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}: {}", self.pair.0, self.pair.1, self.distance)
    }
}

/// Returns the better of two results, keeping `a` when the distances tie.
pub fn combine(a: PairResult, b: PairResult) -> PairResult {
    if a.distance <= b.distance { a } else { b }
}

/// A pair under consideration during a solve: two indices into the input
/// slice and their squared distance. Square roots are taken once, in
/// [`Candidate::into_result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub dist_sq: f64,
    pub a: usize,
    pub b: usize,
}

impl Candidate {
    pub fn between(points: &[Point], a: usize, b: usize) -> Self {
        Self {
            dist_sq: points[a].distance_sq(&points[b]),
            a,
            b,
        }
    }

    /// Replaces `self` with the pair `(a, b)` if it is strictly closer.
    /// Returns true if the candidate changed.
    pub fn offer(&mut self, points: &[Point], a: usize, b: usize) -> bool {
        let dist_sq = points[a].distance_sq(&points[b]);
        if dist_sq < self.dist_sq {
            *self = Self { dist_sq, a, b };
            return true;
        }
        false
    }

    /// Left-biased minimum; same rule as [`combine`].
    pub fn min(self, other: Self) -> Self {
        if self.dist_sq <= other.dist_sq { self } else { other }
    }

    pub fn distance(&self) -> f64 {
        self.dist_sq.sqrt()
    }

    pub fn into_result(self, points: &[Point]) -> PairResult {
        PairResult {
            distance: self.distance(),
            pair: (points[self.a].clone(), points[self.b].clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(d: f64) -> PairResult {
        PairResult {
            distance: d,
            pair: (Point::xy(0.0, 0.0), Point::xy(d, 0.0)),
        }
    }

    #[test]
    fn combine_picks_smaller() {
        assert_eq!(combine(result(2.0), result(1.0)).distance, 1.0);
        assert_eq!(combine(result(1.0), result(2.0)).distance, 1.0);
    }

    #[test]
    fn combine_is_left_biased() {
        let a = PairResult {
            distance: 1.0,
            pair: (Point::xy(0.0, 0.0), Point::xy(1.0, 0.0)),
        };
        let b = PairResult {
            distance: 1.0,
            pair: (Point::xy(5.0, 5.0), Point::xy(5.0, 6.0)),
        };
        assert_eq!(combine(a.clone(), b.clone()), a);
        assert_eq!(combine(b.clone(), a), b);
    }

    #[test]
    fn candidate_offer_strict() {
        let pts = vec![
            Point::xy(0.0, 0.0),
            Point::xy(1.0, 0.0),
            Point::xy(0.0, 1.0),
            Point::xy(0.0, 0.5),
        ];
        let mut c = Candidate::between(&pts, 0, 1);
        assert!(!c.offer(&pts, 0, 2), "equal distance must not replace");
        assert_eq!((c.a, c.b), (0, 1));
        assert!(c.offer(&pts, 0, 3));
        assert_eq!((c.a, c.b), (0, 3));
        assert_eq!(c.dist_sq, 0.25);
    }

    #[test]
    fn candidate_min_is_left_biased() {
        let pts = vec![Point::xy(0.0, 0.0), Point::xy(1.0, 0.0), Point::xy(2.0, 0.0)];
        let left = Candidate::between(&pts, 0, 1);
        let right = Candidate::between(&pts, 1, 2);
        assert_eq!(left.min(right), left);
        assert_eq!(right.min(left), right);
    }

    #[test]
    fn into_result_takes_root() {
        let pts = vec![Point::xy(0.0, 0.0), Point::xy(3.0, 4.0)];
        let r = Candidate::between(&pts, 0, 1).into_result(&pts);
        assert_eq!(r.distance, 5.0);
        assert_eq!(r.pair, (pts[0].clone(), pts[1].clone()));
        assert_eq!(r.to_string(), "(0, 0) <-> (3, 4): 5");
    }
}
