//! Random point sets for tests, benchmarks and the CLI.

use rand::Rng;
use rand::seq::index;

use crate::point::Point;

/// Generates `n` points of dimension `dim` with integer coordinates drawn
/// from `[-10n, 10n)`, unique along every axis. No two points coincide, so
/// the closest distance is never 0.
pub fn unique_points<R: Rng + ?Sized>(n: usize, dim: usize, rng: &mut R) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }

    let span = n * 20;
    let offset = (n * 10) as f64;
    let axes: Vec<Vec<usize>> = (0..dim).map(|_| index::sample(rng, span, n).into_vec()).collect();

    (0..n)
        .map(|i| Point::new(axes.iter().map(|axis| axis[i] as f64 - offset).collect()))
        .collect()
}

/// Generates `n` planar points on the line x = 0 with unique y.
pub fn vertical_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    unique_points(n, 1, rng)
        .into_iter()
        .map(|p| Point::xy(0.0, p.coord(0)))
        .collect()
}

/// Appends a copy of the first point, forcing a closest distance of 0.
pub fn with_duplicate(mut points: Vec<Point>) -> Vec<Point> {
    if let Some(first) = points.first().cloned() {
        points.push(first);
    }
    points
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn unique_along_each_axis() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 200;
        let points = unique_points(n, 3, &mut rng);
        assert_eq!(points.len(), n);
        for axis in 0..3 {
            let seen: HashSet<i64> = points.iter().map(|p| p.coord(axis) as i64).collect();
            assert_eq!(seen.len(), n, "axis {axis} has repeats");
            assert!(points.iter().all(|p| {
                let c = p.coord(axis);
                c >= -2000.0 && c < 2000.0
            }));
        }
    }

    #[test]
    fn same_seed_same_points() {
        let a = unique_points(50, 2, &mut StdRng::seed_from_u64(9));
        let b = unique_points(50, 2, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_request() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(unique_points(0, 2, &mut rng).is_empty());
    }

    #[test]
    fn vertical_shares_x() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = vertical_points(30, &mut rng);
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(|p| p.dim() == 2 && p.coord(0) == 0.0));
    }

    #[test]
    fn duplicate_appended() {
        let points = with_duplicate(vec![Point::xy(1.0, 2.0), Point::xy(3.0, 4.0)]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point::xy(1.0, 2.0));
        assert!(with_duplicate(Vec::new()).is_empty());
    }
}
