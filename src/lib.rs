//! 2D Convex Hull Strategy Suite
//!
//! This library implements seven interchangeable strategies for computing the
//! convex hull of a 2D point set: brute-force point elimination, brute-force
//! edge testing, Graham scan, Jarvis march (gift wrapping), Quickhull,
//! divide and conquer with tangent merge, and an incremental construction
//! over a cyclic linked boundary.
//!
//! Every strategy implements the same [`HullAlgorithm`] contract and routes
//! its orientation and incidence decisions through one shared set of
//! geometric predicates, so degenerate inputs (duplicates, collinear runs,
//! tiny sizes) behave consistently across the suite.
//!
//! # Example
//! ```
//! use math_convex_hull_2d::{GrahamScan, HullAlgorithm, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 2.0),
//! ];
//!
//! let hull = GrahamScan.hull(&points);
//! assert_eq!(hull.len(), 4); // the interior point is dropped
//! ```

mod divide_and_conquer;
mod extreme_points;
mod extreme_segments;
pub mod geometry;
mod graham_scan;
mod incremental;
mod jarvis_march;
mod quickhull;
mod strategy;
mod types;

// Make testdata publicly available for tests and benches
pub mod testdata;

pub use divide_and_conquer::DivideAndConquer;
pub use extreme_points::ExtremePoints;
pub use extreme_segments::ExtremeSegments;
pub use graham_scan::GrahamScan;
pub use incremental::Incremental;
pub use jarvis_march::JarvisMarch;
pub use quickhull::QuickHull;
pub use strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm, all_strategies, strategy_by_name};
pub use types::{Line, Point, PointInPolygon, Polygon, TurnType};

/// Error types for convex hull operations
#[derive(Debug, thiserror::Error)]
pub enum ConvexHullError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, ConvexHullError>;

/// Numerical tolerance for floating-point comparisons
/// Used throughout the library for:
/// - Turn classification
/// - Duplicate detection
/// - Boundary classification
pub(crate) const EPSILON: f64 = 1e-9;

/// Check that every coordinate is finite.
///
/// The strategies assume well-formed input and leave NaN or infinite
/// coordinates undefined; callers that cannot guarantee their input run this
/// first.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (index, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(ConvexHullError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_points_accepts_finite() {
        let points = vec![Point::new(0.0, 0.0), Point::new(-1000.0, 1000.0)];
        assert!(validate_points(&points).is_ok());
    }

    #[test]
    fn test_validate_points_rejects_nan() {
        let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        match validate_points(&points) {
            Err(ConvexHullError::NonFiniteCoordinate { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_points_rejects_infinite() {
        let points = vec![Point::new(f64::INFINITY, 0.0)];
        assert!(validate_points(&points).is_err());
    }
}
