//! Divide and conquer: sorted split with tangent merge
//!
//! Points are sorted lexicographically, split at the midpoint, hulled
//! recursively, and each pair of disjoint sub-hulls is merged by locating
//! their upper and lower tangent lines and stitching the outer arcs
//! together. The upper and lower tangent searches are mirrored, not
//! identical: their turn directions and colinear-absorption steps must stay
//! in lockstep or collinear-heavy inputs merge into a non-convex boundary.

use crate::geometry::check_turn;
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::{Line, Point, TurnType};

/// O(n log n) recursive split-and-merge. Output is in consistent
/// (counter-clockwise) rotational order.
pub struct DivideAndConquer;

impl HullAlgorithm for DivideAndConquer {
    fn display_name(&self) -> &'static str {
        "Divide & Conquer"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        let mut points = input.points.clone();
        points.sort_by(|a, b| a.cmp_xy(b));
        // Adjacent exact duplicates would land in both halves of a split.
        points.dedup();

        if points.len() <= 2 {
            return AlgorithmOutput::from_points(points);
        }
        AlgorithmOutput::from_points(divide(&points))
    }
}

/// Hull of a lexicographically sorted, duplicate-free slice.
fn divide(points: &[Point]) -> Vec<Point> {
    if points.len() <= 1 {
        return points.to_vec();
    }
    let mid = points.len() / 2;
    let left = divide(&points[..mid]);
    let right = divide(&points[mid..]);
    merge(left, right)
}

/// Merge two disjoint, consistently wound hulls.
///
/// Correctness assumes both inputs are already valid hulls; the recursion
/// maintains that invariant.
fn merge(left: Vec<Point>, right: Vec<Point>) -> Vec<Point> {
    let l_len = left.len();
    let r_len = right.len();

    let anchor_left = rightmost_index(&left);
    let anchor_right = leftmost_index(&right);

    // Upper tangent: advance the left index forward and retreat the right
    // index to a fixed point. A Colinear supporting point is absorbed by
    // sliding the anchor one further step, keeping the nearer tangent point
    // so degenerate merges cannot duplicate it.
    let mut upper_l = anchor_left;
    let mut upper_r = anchor_right;
    loop {
        let mut moved = false;
        while check_turn(
            &Line::new(right[upper_r], left[upper_l]),
            &left[(upper_l + 1) % l_len],
        ) == TurnType::Right
        {
            upper_l = (upper_l + 1) % l_len;
            moved = true;
        }
        if check_turn(
            &Line::new(right[upper_r], left[upper_l]),
            &left[(upper_l + 1) % l_len],
        ) == TurnType::Colinear
        {
            upper_l = (upper_l + 1) % l_len;
        }
        while check_turn(
            &Line::new(left[upper_l], right[upper_r]),
            &right[(upper_r + r_len - 1) % r_len],
        ) == TurnType::Left
        {
            upper_r = (upper_r + r_len - 1) % r_len;
            moved = true;
        }
        if check_turn(
            &Line::new(left[upper_l], right[upper_r]),
            &right[(upper_r + r_len - 1) % r_len],
        ) == TurnType::Colinear
        {
            upper_r = (upper_r + r_len - 1) % r_len;
        }
        if !moved {
            break;
        }
    }

    // Lower tangent: same search with the turn directions reversed.
    let mut lower_l = anchor_left;
    let mut lower_r = anchor_right;
    loop {
        let mut moved = false;
        while check_turn(
            &Line::new(right[lower_r], left[lower_l]),
            &left[(lower_l + l_len - 1) % l_len],
        ) == TurnType::Left
        {
            lower_l = (lower_l + l_len - 1) % l_len;
            moved = true;
        }
        if check_turn(
            &Line::new(right[lower_r], left[lower_l]),
            &left[(lower_l + l_len - 1) % l_len],
        ) == TurnType::Colinear
        {
            lower_l = (lower_l + l_len - 1) % l_len;
        }
        while check_turn(
            &Line::new(left[lower_l], right[lower_r]),
            &right[(lower_r + 1) % r_len],
        ) == TurnType::Right
        {
            lower_r = (lower_r + 1) % r_len;
            moved = true;
        }
        if check_turn(
            &Line::new(left[lower_l], right[lower_r]),
            &right[(lower_r + 1) % r_len],
        ) == TurnType::Colinear
        {
            lower_r = (lower_r + 1) % r_len;
        }
        if !moved {
            break;
        }
    }

    log::debug!(
        "merging hulls of {} and {} vertices; tangents L[{}..{}] R[{}..{}]",
        l_len,
        r_len,
        upper_l,
        lower_l,
        lower_r,
        upper_r
    );

    // Stitch: walk the left hull forward from the upper to the lower
    // tangent, then the right hull forward from the lower to the upper.
    let mut hull = vec![left[upper_l]];
    let mut i = upper_l;
    while i != lower_l {
        i = (i + 1) % l_len;
        if !hull.contains(&left[i]) {
            hull.push(left[i]);
        }
    }
    if !hull.contains(&right[lower_r]) {
        hull.push(right[lower_r]);
    }
    let mut j = lower_r;
    while j != upper_r {
        j = (j + 1) % r_len;
        if !hull.contains(&right[j]) {
            hull.push(right[j]);
        }
    }
    hull
}

/// Rightmost vertex by x, ties broken toward larger y.
fn rightmost_index(points: &[Point]) -> usize {
    let mut best = 0;
    for i in 1..points.len() {
        if points[i].x > points[best].x
            || (points[i].x == points[best].x && points[i].y > points[best].y)
        {
            best = i;
        }
    }
    best
}

/// Leftmost vertex by x, ties broken toward smaller y.
fn leftmost_index(points: &[Point]) -> usize {
    let mut best = 0;
    for i in 1..points.len() {
        if points[i].x < points[best].x
            || (points[i].x == points[best].x && points[i].y < points[best].y)
        {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::turn;

    #[test]
    fn test_square_with_interior_point() {
        let points = vec![
            Point::new(4.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ];
        let hull = DivideAndConquer.hull(&points);
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
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let hull = DivideAndConquer.hull(&points);
        let mut hull_sorted = hull;
        hull_sorted.sort_by(|a, b| a.cmp_xy(b));
        assert_eq!(hull_sorted, vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_vertical_collinear_column() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 3.0),
        ];
        let mut hull = DivideAndConquer.hull(&points);
        hull.sort_by(|a, b| a.cmp_xy(b));
        assert_eq!(hull, vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0)]);
    }

    #[test]
    fn test_collinear_heavy_grid_merge() {
        // A 3x3 grid exercises the colinear-absorption branches of both
        // tangent searches.
        let mut points = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                points.push(Point::new(x as f64, y as f64));
            }
        }
        let mut hull = DivideAndConquer.hull(&points);
        hull.sort_by(|a, b| a.cmp_xy(b));
        assert_eq!(
            hull,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 2.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(DivideAndConquer.hull(&[]).is_empty());
        let one = vec![Point::new(7.0, -7.0)];
        assert_eq!(DivideAndConquer.hull(&one), one);
        let two = vec![Point::new(1.0, 1.0), Point::new(0.0, 0.0)];
        let mut hull = DivideAndConquer.hull(&two);
        hull.sort_by(|a, b| a.cmp_xy(b));
        assert_eq!(hull, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_duplicates_merge_cleanly() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 3.0),
        ];
        let hull = DivideAndConquer.hull(&points);
        assert_eq!(hull.len(), 3);
        for (i, p) in hull.iter().enumerate() {
            assert!(!hull[i + 1..].contains(p));
        }
    }
}
