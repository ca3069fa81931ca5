//! Quickhull: recursive farthest-point splitting
//!
//! Seeded with the min-x and max-x points, each side of the seed line is
//! refined by locating the farthest strictly-on-side point and splitting the
//! line at it. A line with no on-side point is a hull edge and finalizes
//! both endpoints.
//!
//! The recursion runs over an explicit work stack, so adversarial collinear
//! or clustered inputs cannot exhaust the call stack. Raw output is an
//! unordered, duplicate-free vertex set; callers that need a wound boundary
//! apply [`sort_counter_clockwise`](crate::geometry::sort_counter_clockwise).

use crate::geometry::{check_turn, distance_point_line};
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Line, Point, TurnType};

/// O(n log n) expected farthest-point recursion.
pub struct QuickHull;

/// One side of one splitting line, awaiting refinement.
#[derive(Debug, Clone, Copy)]
struct SplitTask {
    a: Point,
    b: Point,
    side: i8,
}

impl HullAlgorithm for QuickHull {
    fn display_name(&self) -> &'static str {
        "Quick Hull"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let points = &input.points;
        let n = points.len();
        if n < 3 {
            return AlgorithmOutput::from_points(points.clone());
        }

        let mut min_x = 0;
        let mut max_x = 0;
        for i in 1..n {
            if points[i].x < points[min_x].x {
                min_x = i;
            }
            if points[i].x > points[max_x].x {
                max_x = i;
            }
        }

        let mut hull: Vec<Point> = Vec::new();

        // One pass per side of the seed line covers the full hull.
        let mut work = vec![
            SplitTask {
                a: points[min_x],
                b: points[max_x],
                side: -1,
            },
            SplitTask {
                a: points[min_x],
                b: points[max_x],
                side: 1,
            },
        ];

        while let Some(task) = work.pop() {
            let line = Line::new(task.a, task.b);

            // Farthest point strictly on the requested side.
            let mut farthest: Option<(usize, f64)> = None;
            for (i, p) in points.iter().enumerate() {
                if side_of(&line, p) != task.side {
                    continue;
                }
                let d = distance_point_line(p, &line);
                match farthest {
                    Some((_, best)) if d <= best => {}
                    _ => farthest = Some((i, d)),
                }
            }

            match farthest {
                None => {
                    // The line is a hull edge; both endpoints are final.
                    if !hull.contains(&task.a) {
                        hull.push(task.a);
                    }
                    if !hull.contains(&task.b) {
                        hull.push(task.b);
                    }
                }
                Some((f, _)) => {
                    // Split at the farthest point, flipping each sub-task's
                    // side to face away from the other endpoint.
                    let fp = points[f];
                    work.push(SplitTask {
                        a: fp,
                        b: task.a,
                        side: -side_of(&Line::new(fp, task.a), &task.b),
                    });
                    work.push(SplitTask {
                        a: fp,
                        b: task.b,
                        side: -side_of(&Line::new(fp, task.b), &task.a),
                    });
                }
            }
        }

        log::debug!("quickhull reduced {} points to {} hull vertices", n, hull.len());
        AlgorithmOutput::from_points(hull)
    }
}

fn side_of(line: &Line, point: &Point) -> i8 {
    match check_turn(line, point) {
        TurnType::Left => 1,
        TurnType::Right => -1,
        TurnType::Colinear => 0,
    }
}
