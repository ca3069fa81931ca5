//! The common contract every hull strategy implements
//!
//! A driver hands a strategy an unordered scene of points, lines, and
//! polygons. Hull strategies read only the point set and produce the hull
//! boundary in the output point set, leaving the other output containers
//! empty.

use serde::{Deserialize, Serialize};

use crate::types::{Line, Point, Polygon};
use crate::{ConvexHullError, Result};

/// Input handed to an algorithm by a driver
///
/// Hull strategies read only `points`; `lines` and `polygons` exist for
/// algorithms outside this suite that share the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmInput {
    pub points: Vec<Point>,
    pub lines: Vec<Line>,
    pub polygons: Vec<Polygon>,
}

impl AlgorithmInput {
    /// Input carrying only a point set
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }
}

/// Result of an algorithm invocation
///
/// Hull strategies fill only `points`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmOutput {
    pub points: Vec<Point>,
    pub lines: Vec<Line>,
    pub polygons: Vec<Polygon>,
}

impl AlgorithmOutput {
    /// Output carrying only a point sequence
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }
}

/// A convex hull construction strategy
///
/// Implementations are stateless: every invocation is independent and
/// re-entrant, and all mutable state lives in locals. Input coordinates are
/// assumed finite; see [`validate_points`](crate::validate_points).
pub trait HullAlgorithm {
    /// Human-readable name used by selection UIs
    fn display_name(&self) -> &'static str;

    /// Compute the hull of `input.points`; `lines` and `polygons` are ignored
    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput;

    /// Points-only convenience wrapper around [`run`](Self::run)
    fn hull(&self, points: &[Point]) -> Vec<Point> {
        self.run(&AlgorithmInput::from_points(points.to_vec())).points
    }
}

/// Every strategy in the suite, in documentation order
pub fn all_strategies() -> Vec<Box<dyn HullAlgorithm>> {
    vec![
        Box::new(crate::ExtremePoints),
        Box::new(crate::ExtremeSegments),
        Box::new(crate::GrahamScan),
        Box::new(crate::JarvisMarch),
        Box::new(crate::QuickHull),
        Box::new(crate::DivideAndConquer),
        Box::new(crate::Incremental),
    ]
}

/// Look up a strategy by its display name
pub fn strategy_by_name(name: &str) -> Result<Box<dyn HullAlgorithm>> {
    all_strategies()
        .into_iter()
        .find(|s| s.display_name() == name)
        .ok_or_else(|| ConvexHullError::UnknownStrategy(name.to_string()))
}
