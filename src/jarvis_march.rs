//! Jarvis march: gift wrapping
//!
//! From the lexicographically smallest point, repeatedly pick the candidate
//! such that no other point lies strictly right of the directed line from
//! the current point, until the walk returns to its start. Collinear ties
//! resolve to the farther point, so collinear runs are skipped rather than
//! collected.

use crate::geometry::check_turn;
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Line, Point, TurnType};

/// O(n * h) gift wrapping. Output is counter-clockwise, starting at the
/// lexicographic minimum.
pub struct JarvisMarch;

impl HullAlgorithm for JarvisMarch {
    fn display_name(&self) -> &'static str {
        "Jarvis March"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let points = crate::geometry::dedup_exact(&input.points);
        let n = points.len();
        if n < 3 {
            return AlgorithmOutput::from_points(points);
        }

        // The lexicographically smallest point is always extreme.
        let mut start = 0;
        for i in 1..n {
            if points[i].cmp_xy(&points[start]) == std::cmp::Ordering::Less {
                start = i;
            }
        }

        let mut hull = Vec::new();
        let mut current = start;
        loop {
            hull.push(points[current]);

            let mut next = (current + 1) % n;
            for i in 0..n {
                if i == current {
                    continue;
                }
                let edge = Line::new(points[current], points[next]);
                match check_turn(&edge, &points[i]) {
                    TurnType::Right => next = i,
                    TurnType::Colinear => {
                        if points[current].squared_distance(&points[i])
                            > points[current].squared_distance(&points[next])
                        {
                            next = i;
                        }
                    }
                    TurnType::Left => {}
                }
            }

            current = next;
            if current == start {
                break;
            }
        }

        AlgorithmOutput::from_points(hull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::turn;

    #[test]
    fn test_square_with_interior_point() {
        let points = vec![
            Point::new(4.0, 4.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 0.0),
        ];
        let hull = JarvisMarch.hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(2.0, 2.0)));
        for i in 0..hull.len() {
            let t = turn(&hull[i], &hull[(i + 1) % 4], &hull[(i + 2) % 4]);
            assert_eq!(t, TurnType::Left);
        }
    }

    #[test]
    fn test_collinear_input_keeps_extremes() {
        let points = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let hull = JarvisMarch.hull(&points);
        assert_eq!(hull, vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_collinear_run_on_edge_skipped() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(1.5, 3.0),
        ];
        let hull = JarvisMarch.hull(&points);
        assert_eq!(hull.len(), 3);
        assert!(hull.contains(&Point::new(0.0, 0.0)));
        assert!(hull.contains(&Point::new(3.0, 0.0)));
        assert!(hull.contains(&Point::new(1.5, 3.0)));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(JarvisMarch.hull(&[]).is_empty());
        let one = vec![Point::new(0.5, 0.5)];
        assert_eq!(JarvisMarch.hull(&one), one);
        let two = vec![Point::new(0.0, 0.0), Point::new(-1.0, 4.0)];
        assert_eq!(JarvisMarch.hull(&two), two);
    }

    #[test]
    fn test_duplicates_do_not_stall_the_walk() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        let hull = JarvisMarch.hull(&points);
        assert_eq!(hull.len(), 3);
    }
}
