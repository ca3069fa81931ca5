//! Shared geometric predicates
//!
//! Every hull strategy routes its orientation and incidence decisions through
//! this module. A single implementation keeps degenerate-case behavior (exact
//! and near-collinear input) consistent across the whole suite.

use crate::EPSILON;
use crate::types::{Line, Point, PointInPolygon, TurnType};

/// Classify `point` against a directed line
///
/// The sign of `cross(end - start, point - start)`: positive is Left,
/// negative is Right, magnitudes below the crate tolerance are Colinear.
pub fn check_turn(line: &Line, point: &Point) -> TurnType {
    let cross = line.direction().cross(&line.start.vector_to(point));
    if cross.abs() < EPSILON {
        TurnType::Colinear
    } else if cross > 0.0 {
        TurnType::Left
    } else {
        TurnType::Right
    }
}

/// Turn formed by the path `a -> b -> c`
pub fn turn(a: &Point, b: &Point, c: &Point) -> TurnType {
    check_turn(&Line::new(*a, *b), c)
}

/// True if `point` lies on the segment between `a` and `b`
///
/// Collinear with the segment and inside its (tolerance-slack) bounding box;
/// the segment endpoints themselves count as on.
pub fn point_on_segment(point: &Point, a: &Point, b: &Point) -> bool {
    if turn(a, b, point) != TurnType::Colinear {
        return false;
    }
    point.x <= a.x.max(b.x) + EPSILON
        && point.x >= a.x.min(b.x) - EPSILON
        && point.y <= a.y.max(b.y) + EPSILON
        && point.y >= a.y.min(b.y) - EPSILON
}

/// Classify `point` against the triangle `abc`
///
/// Sign consistency across the three directed edges decides Inside/Outside;
/// a boundary case within tolerance that lies on the corresponding segment
/// classifies as OnEdge.
pub fn point_in_triangle(point: &Point, a: &Point, b: &Point, c: &Point) -> PointInPolygon {
    let t1 = turn(a, b, point);
    let t2 = turn(b, c, point);
    let t3 = turn(c, a, point);

    if (t1 == TurnType::Colinear && point_on_segment(point, a, b))
        || (t2 == TurnType::Colinear && point_on_segment(point, b, c))
        || (t3 == TurnType::Colinear && point_on_segment(point, c, a))
    {
        return PointInPolygon::OnEdge;
    }
    if t1 != TurnType::Colinear && t1 == t2 && t2 == t3 {
        return PointInPolygon::Inside;
    }
    PointInPolygon::Outside
}

/// Perpendicular distance from `point` to the infinite line through `line`
///
/// A degenerate zero-length line falls back to the point distance.
pub fn distance_point_line(point: &Point, line: &Line) -> f64 {
    let direction = line.direction();
    let length = direction.dot(&direction).sqrt();
    if length < EPSILON {
        return line.start.distance(point);
    }
    direction.cross(&line.start.vector_to(point)).abs() / length
}

/// Remove exact duplicates, preserving first-occurrence order
pub fn dedup_exact(points: &[Point]) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.contains(p) {
            unique.push(*p);
        }
    }
    unique
}

/// Sort a vertex set counter-clockwise around its centroid
///
/// The ordering pass for unordered hull vertex sets (Quickhull raw output);
/// also used to wind the brute-force strategies' surviving points into a
/// boundary loop. Angle ties keep the nearer point first.
pub fn sort_counter_clockwise(points: &mut [Point]) {
    if points.len() < 3 {
        return;
    }
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;
    let centroid = Point::new(cx, cy);
    points.sort_by(|a, b| {
        let angle_a = (a.y - cy).atan2(a.x - cx);
        let angle_b = (b.y - cy).atan2(b.x - cx);
        angle_a
            .total_cmp(&angle_b)
            .then_with(|| centroid.squared_distance(a).total_cmp(&centroid.squared_distance(b)))
    });
}
