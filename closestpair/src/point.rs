use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClosestPairError, Result};

/// An immutable coordinate vector of fixed dimension.
///
/// Two points are equal iff every coordinate is equal, so coordinate-equal
/// duplicates compare equal and sit at distance 0.
///
/// Serializes as a plain array of numbers, e.g. `[0.0, 1.0]`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Creates a planar point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { coords: vec![x, y] }
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along `axis`. Panics if `axis >= self.dim()`.
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Squared Euclidean distance. Cheaper than [`Point::distance`] and
    /// orders pairs the same way.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        distance_sq(&self.coords, &other.coords)
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Squared Euclidean distance between two coordinate slices of equal length.
pub(crate) fn distance_sq(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (ai, bi) in a.iter().zip(b) {
        let d = ai - bi;
        sum += d * d;
    }
    sum
}

/// Checks an input set before solving and returns its dimension.
///
/// `expected` pins the dimension (planar solvers pass 2, the k-d solver may
/// pass an explicit k); otherwise the first point decides.
pub(crate) fn validate(points: &[Point], expected: Option<usize>) -> Result<usize> {
    if points.len() < 2 {
        return Err(ClosestPairError::InvalidInputSize { got: points.len() });
    }

    let dim = match expected {
        Some(k) => k,
        None => points[0].dim(),
    };
    if dim == 0 {
        return Err(ClosestPairError::ZeroDimension);
    }

    for (index, p) in points.iter().enumerate() {
        if p.dim() != dim {
            return Err(ClosestPairError::DimensionMismatch {
                index,
                expected: dim,
                got: p.dim(),
            });
        }
        if let Some(axis) = p.coords.iter().position(|c| !c.is_finite()) {
            return Err(ClosestPairError::NonFiniteCoordinate { index, axis });
        }
    }

    Ok(dim)
}
