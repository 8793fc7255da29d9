//! Exhaustive O(n²) search. Reference solver and the base case of every
//! divide-and-conquer variant.

use tracing::debug;

use crate::error::{ClosestPairError, Result};
use crate::pair::{Candidate, PairResult};
use crate::point::{Point, validate};

/// Partitions of at most this many points are solved by brute force inside
/// the divide-and-conquer solvers.
pub(crate) const BASE_CASE_MAX: usize = 3;

/// Finds the closest pair by comparing every unordered pair once.
///
/// Pairs are enumerated `i` ascending, then `j > i` ascending; on equal
/// distances the first pair found wins.
///
/// # Errors
/// [`ClosestPairError::InvalidInputSize`] for fewer than 2 points, and the
/// dimension / finiteness errors of input validation.
pub fn brute_force(points: &[Point]) -> Result<PairResult> {
    let dim = validate(points, None)?;
    debug!(n = points.len(), dim, "brute force");

    let idx: Vec<usize> = (0..points.len()).collect();
    let best = closest_in(points, &idx)?;

    debug!(distance = best.distance(), "brute force done");
    Ok(best.into_result(points))
}

/// Brute force over the points named by `idx`, in `idx` order.
pub(crate) fn closest_in(points: &[Point], idx: &[usize]) -> Result<Candidate> {
    if idx.len() < 2 {
        return Err(ClosestPairError::InvalidInputSize { got: idx.len() });
    }

    let mut best = Candidate::between(points, idx[0], idx[1]);
    for i in 0..idx.len() - 1 {
        for j in i + 1..idx.len() {
            best.offer(points, idx[i], idx[j]);
        }
    }
    Ok(best)
}

/// Lists every unordered pair `(i, j, distance)` with `i < j`, in brute-force
/// enumeration order. Intended for small inputs (tracing and display).
pub fn all_pairs(points: &[Point]) -> Result<Vec<(usize, usize, f64)>> {
    validate(points, None)?;

    let n = points.len();
    let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n - 1 {
        for j in i + 1..n {
            pairs.push((i, j, points[i].distance(&points[j])));
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::xy(x, y)).collect()
    }

    #[test]
    fn two_points() {
        let p = pts(&[(0.0, 1.0), (1.0, 0.0)]);
        let r = brute_force(&p).unwrap();
        assert_eq!(r.distance, 2f64.sqrt());
        assert_eq!(r.pair, (p[0].clone(), p[1].clone()));
    }

    #[test]
    fn first_found_wins_on_tie() {
        // (0,0)-(1,0) and (5,0)-(6,0) are both at distance 1.
        let p = pts(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0), (6.0, 0.0)]);
        let r = brute_force(&p).unwrap();
        assert_eq!(r.distance, 1.0);
        assert_eq!(r.pair, (p[0].clone(), p[2].clone()));
    }

    #[test]
    fn duplicate_is_zero() {
        let p = pts(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0), (0.0, 1.0)]);
        let r = brute_force(&p).unwrap();
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.pair, (p[0].clone(), p[3].clone()));
    }

    #[test]
    fn any_dimension() {
        let p = vec![
            Point::new(vec![0.0, 0.0, 0.0]),
            Point::new(vec![10.0, 0.0, 0.0]),
            Point::new(vec![1.0, 1.0, 1.0]),
        ];
        let r = brute_force(&p).unwrap();
        assert_eq!(r.distance, 3f64.sqrt());
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            brute_force(&[]),
            Err(ClosestPairError::InvalidInputSize { got: 0 })
        );
        assert_eq!(
            brute_force(&pts(&[(1.0, 1.0)])),
            Err(ClosestPairError::InvalidInputSize { got: 1 })
        );
        let p = pts(&[(1.0, 1.0), (2.0, 2.0)]);
        assert!(closest_in(&p, &[1]).is_err());
    }

    #[test]
    fn closest_in_follows_index_order() {
        let p = pts(&[(0.0, 0.0), (1.0, 0.0), (9.0, 9.0)]);
        let c = closest_in(&p, &[1, 2, 0]).unwrap();
        assert_eq!((c.a, c.b), (1, 0));
        assert_eq!(c.dist_sq, 1.0);
    }

    #[test]
    fn all_pairs_listing() {
        let p = pts(&[(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)]);
        let pairs = all_pairs(&p).unwrap();
        assert_eq!(pairs, vec![(0, 1, 5.0), (0, 2, 1.0), (1, 2, 18f64.sqrt())]);
    }
}
