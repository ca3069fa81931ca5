//! Graham scan: angular sweep around a bottom pivot
//!
//! Points are sorted by angle around the minimum-y pivot and folded onto a
//! growing boundary stack. A candidate that fails the left-turn test pops
//! the stack and is retried; a collinear top is replaced by whichever of the
//! two points lies farther out, so collinear runs keep only their outer
//! point.

use crate::geometry::check_turn;
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Line, Point, TurnType};

/// O(n log n) angular sweep.
///
/// Output is counter-clockwise, pivot first. All-collinear input yields a
/// 1-2 point result.
pub struct GrahamScan;

impl HullAlgorithm for GrahamScan {
    fn display_name(&self) -> &'static str {
        "Graham Scan"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let mut points = input.points.clone();
        points.sort_by(|a, b| a.cmp_xy(b));
        points.dedup();

        if points.len() <= 2 {
            return AlgorithmOutput::from_points(points);
        }

        // Pivot: minimum y, first occurrence wins ties.
        let mut pivot = 0;
        for (i, p) in points.iter().enumerate().skip(1) {
            if p.y < points[pivot].y {
                pivot = i;
            }
        }

        // Angle of every other point against a rightward ray from the pivot,
        // normalized to [0, 360); ties keep sorted-index order.
        let rightward = Point::new(1.0, 0.0);
        let mut by_angle: Vec<(f64, usize)> = Vec::with_capacity(points.len() - 1);
        for (i, p) in points.iter().enumerate() {
            if i == pivot {
                continue;
            }
            let v = points[pivot].vector_to(p);
            let mut angle = rightward.cross(&v).atan2(rightward.dot(&v)).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            by_angle.push((angle, i));
        }
        by_angle.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut stack: Vec<usize> = vec![pivot, by_angle[0].1];

        let mut idx = 1;
        while idx < by_angle.len() && stack.len() >= 2 {
            let candidate = by_angle[idx].1;
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            let edge = Line::new(points[below], points[top]);
            match check_turn(&edge, &points[candidate]) {
                TurnType::Left => {
                    stack.push(candidate);
                    idx += 1;
                }
                TurnType::Colinear => {
                    // Keep whichever of the two collinear points is farther
                    // from the stack point below them.
                    if points[below].squared_distance(&points[candidate])
                        >= points[below].squared_distance(&points[top])
                    {
                        stack.pop();
                        stack.push(candidate);
                    }
                    idx += 1;
                }
                TurnType::Right => {
                    stack.pop();
                }
            }
        }

        // The stack in insertion order is the hull, counter-clockwise.
        let hull = stack.into_iter().map(|i| points[i]).collect();
        AlgorithmOutput::from_points(hull)
    }
}
