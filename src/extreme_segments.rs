//! Brute-force hull by edge testing
//!
//! A directed pair of points is a hull edge iff every other point lies
//! strictly on a single side of it. Edge endpoints are collected
//! duplicate-free; a final pass prunes any collected point sitting on a
//! segment between two other collected points, so collinear boundary points
//! do not survive.

use crate::geometry::{check_turn, dedup_exact, point_on_segment, sort_counter_clockwise};
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Line, Point, TurnType};

/// Baseline O(n^3) edge-testing strategy.
///
/// Output is wound counter-clockwise. Fully collinear input has no
/// one-sided pair at all and degenerates to the two lexicographic extremes.
pub struct ExtremeSegments;

impl HullAlgorithm for ExtremeSegments {
    fn display_name(&self) -> &'static str {
        "Extreme Segments"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let points = dedup_exact(&input.points);
        if points.len() <= 2 {
            return AlgorithmOutput::from_points(points);
        }

        let n = points.len();
        let mut collected: Vec<Point> = Vec::new();

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let edge = Line::new(points[i], points[j]);
                let mut left = 0usize;
                let mut right = 0usize;
                for (k, p) in points.iter().enumerate() {
                    if k == i || k == j {
                        continue;
                    }
                    match check_turn(&edge, p) {
                        TurnType::Left => left += 1,
                        TurnType::Right => right += 1,
                        TurnType::Colinear => {}
                    }
                }
                if (left == 0 && right > 0) || (right == 0 && left > 0) {
                    if !collected.contains(&points[i]) {
                        collected.push(points[i]);
                    }
                    if !collected.contains(&points[j]) {
                        collected.push(points[j]);
                    }
                }
            }
        }

        // Every triple collinear: no pair has a strictly one-sided
        // complement, so fall back to the two lexicographic extremes.
        if collected.is_empty() {
            let mut sorted = points;
            sorted.sort_by(|a, b| a.cmp_xy(b));
            let last = sorted[sorted.len() - 1];
            return AlgorithmOutput::from_points(vec![sorted[0], last]);
        }

        let mut hull = prune_points_on_segments(collected);
        sort_counter_clockwise(&mut hull);
        AlgorithmOutput::from_points(hull)
    }
}

/// Drop collected points lying on a segment between two other collected
/// points, rebuilding the sequence instead of removing in place.
fn prune_points_on_segments(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    let mut on_segment = vec![false; n];
    for i in 0..n {
        'pairs: for j in 0..n {
            for k in (j + 1)..n {
                if j == i || k == i {
                    continue;
                }
                if point_on_segment(&points[i], &points[j], &points[k]) {
                    on_segment[i] = true;
                    break 'pairs;
                }
            }
        }
    }
    let mut kept = Vec::with_capacity(n);
    for (p, &dropped) in points.iter().zip(on_segment.iter()) {
        if !dropped {
            kept.push(*p);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hull_of(points: &[Point]) -> Vec<Point> {
        let mut hull = ExtremeSegments.hull(points);
        hull.sort_by(|a, b| a.cmp_xy(b));
        hull
    }

    #[test]
    fn test_interior_point_dropped() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
        ];
        let hull = hull_of(&points);
        assert_eq!(
            hull,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_collinear_edge_point_pruned() {
        // (2,0) is collected by the edge scan but pruned as on-segment.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let hull = hull_of(&points);
        assert!(!hull.contains(&Point::new(2.0, 0.0)));
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn test_fully_collinear_degenerates_to_extremes() {
        let points = vec![
            Point::new(2.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let hull = hull_of(&points);
        assert_eq!(hull, vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_small_inputs_pass_through() {
        assert!(ExtremeSegments.hull(&[]).is_empty());
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(ExtremeSegments.hull(&two), two);
    }

    #[test]
    fn test_duplicates_do_not_survive() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 3.0),
        ];
        let hull = hull_of(&points);
        assert_eq!(hull.len(), 3);
    }
}
