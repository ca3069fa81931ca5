//! Brute-force hull by point elimination
//!
//! A point is non-extreme iff it lies inside, or on the edge of, a triangle
//! formed by three other points. Eliminated points are marked and compacted
//! in a single pass instead of removed mid-iteration.

use crate::geometry::{dedup_exact, point_in_triangle, sort_counter_clockwise};
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Point, PointInPolygon};

/// Baseline O(n^4) elimination strategy; a reference implementation, not a
/// fast one.
///
/// Retention policy: collinear boundary points are dropped, since they sit on
/// the edge of a flat triangle of their neighbors. Survivors are returned
/// wound counter-clockwise.
pub struct ExtremePoints;

impl HullAlgorithm for ExtremePoints {
    fn display_name(&self) -> &'static str {
        "Extreme Points"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let points = dedup_exact(&input.points);
        if points.len() <= 3 {
            return AlgorithmOutput::from_points(points);
        }

        let n = points.len();
        let mut eliminated = vec![false; n];

        for i in 0..n {
            'triangles: for j in 0..n {
                for k in (j + 1)..n {
                    for m in (k + 1)..n {
                        if j == i || k == i || m == i {
                            continue;
                        }
                        let class =
                            point_in_triangle(&points[i], &points[j], &points[k], &points[m]);
                        if class != PointInPolygon::Outside {
                            eliminated[i] = true;
                            break 'triangles;
                        }
                    }
                }
            }
        }

        let mut hull: Vec<Point> = Vec::with_capacity(n);
        for (p, &dropped) in points.iter().zip(eliminated.iter()) {
            if !dropped {
                hull.push(*p);
            }
        }
        sort_counter_clockwise(&mut hull);
        AlgorithmOutput::from_points(hull)
    }
}
