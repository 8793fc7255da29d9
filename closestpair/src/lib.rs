//! Closest pair of points.
//!
//! Given a finite set of points in k-dimensional space, finds the two points
//! at minimum Euclidean distance and reports that distance with the pair.
//!
//! # Solvers
//!
//! | Function | Dimension | Strip merge |
//! |---|---|---|
//! | [`brute_force`] | any | none, O(n²) |
//! | [`closest_pair_2d`] | 2 | scan each strip point against its next 6 neighbors |
//! | [`closest_pair_2d_opt`] | 2 | two-pointer "hopscotch" over the two half-strips |
//! | [`closest_pair_kd`] | any | recurse into the strip along the next axis |
//!
//! All divide-and-conquer solvers run in O(n log n), use brute force for
//! partitions of 3 points or fewer, and report the same distance as brute
//! force on every input.
//!
//! # Usage
//!
//! ```
//! use closestpair::{Point, closest_pair_kd};
//!
//! let points = vec![
//!     Point::xy(0.0, 1.0),
//!     Point::xy(2.0, 3.0),
//!     Point::xy(4.0, 5.0),
//!     Point::xy(1.0, 0.0),
//! ];
//! let best = closest_pair_kd(&points).unwrap();
//! assert_eq!(best.distance, 2f64.sqrt());
//! assert_eq!(best.pair, (Point::xy(0.0, 1.0), Point::xy(1.0, 0.0)));
//! ```
//!
//! # Determinism
//!
//! Sorts are stable and every merge keeps the earlier candidate on equal
//! distances ([`combine`]), so solving the same input sequence twice yields
//! identical results, pair included.

mod brute;
mod error;
mod generate;
mod kd;
mod observer;
mod pair;
mod planar;
mod point;
mod projection;
mod solver;
mod strip;


pub use brute::{all_pairs, brute_force};
pub use error::{ClosestPairError, Result};
pub use generate::{unique_points, vertical_points, with_duplicate};
pub use kd::{closest_pair_kd, closest_pair_kd_traced, closest_pair_kd_with_dim};
pub use observer::{Callback, NoopObserver, Observer, StepEvent};
pub use pair::{PairResult, combine};
pub use planar::{closest_pair_2d, closest_pair_2d_opt, closest_pair_2d_opt_traced, closest_pair_2d_traced};
pub use point::Point;
pub use solver::{Solver, UnknownSolverError};
