//! Core data types shared by every hull strategy

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::geometry::{check_turn, point_on_segment};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`
    pub fn vector_to(&self, other: &Point) -> Point {
        Point::new(other.x - self.x, other.y - self.y)
    }

    /// Dot product, treating both points as vectors
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, treating both points as vectors
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Squared Euclidean distance; cheaper when only comparisons are needed
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Near-equality within `eps` on both coordinates, used for duplicate
    /// detection (exact equality goes through `PartialEq`)
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// Lexicographic (x, then y) ordering
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then(self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A directed line segment; direction matters for orientation tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Create a new line from start to end
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end
    pub fn direction(&self) -> Point {
        self.start.vector_to(&self.end)
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// Relation of a query point to a directed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnType {
    Left,
    Right,
    Colinear,
}

/// Classification of a point against a triangle or polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointInPolygon {
    Inside,
    Outside,
    OnEdge,
}

/// A polygon as an ordered sequence of directed lines
///
/// The vertex sequence is each line's start point in order. Construction from
/// a vertex loop closes the boundary back to the first vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    lines: Vec<Line>,
}

impl Polygon {
    /// Create a polygon from an explicit line sequence
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Build a closed polygon from a vertex loop
    ///
    /// Produces one line per vertex, the last returning to the first. Fewer
    /// than two vertices yield an empty line set.
    pub fn from_vertex_loop(vertices: &[Point]) -> Self {
        if vertices.len() < 2 {
            return Self::default();
        }
        let lines = (0..vertices.len())
            .map(|i| Line::new(vertices[i], vertices[(i + 1) % vertices.len()]))
            .collect();
        Self { lines }
    }

    /// The boundary lines in order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The vertex sequence: each line's start point in order
    pub fn vertices(&self) -> Vec<Point> {
        self.lines.iter().map(|l| l.start).collect()
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.lines.len()
    }

    /// Enclosed area via the shoelace formula (absolute value)
    pub fn area(&self) -> f64 {
        let mut twice_area = 0.0;
        for line in &self.lines {
            twice_area += line.start.cross(&line.end);
        }
        (twice_area / 2.0).abs()
    }

    /// Total boundary length
    pub fn perimeter(&self) -> f64 {
        self.lines.iter().map(|l| l.length()).sum()
    }

    /// Classify a point against a convex polygon
    ///
    /// Boundary cases within the crate tolerance classify as `OnEdge`. The
    /// polygon may be wound in either direction; the test only requires
    /// convexity.
    pub fn classify(&self, point: &Point) -> PointInPolygon {
        if self.lines.is_empty() {
            return PointInPolygon::Outside;
        }

        let mut has_left = false;
        let mut has_right = false;
        let mut colinear_off_segment = false;
        for line in &self.lines {
            match check_turn(line, point) {
                TurnType::Left => has_left = true,
                TurnType::Right => has_right = true,
                TurnType::Colinear => {
                    if point_on_segment(point, &line.start, &line.end) {
                        return PointInPolygon::OnEdge;
                    }
                    // On an edge's supporting line but beyond the segment;
                    // for a convex boundary that is outside.
                    colinear_off_segment = true;
                }
            }
        }

        if (has_left && has_right) || colinear_off_segment {
            PointInPolygon::Outside
        } else {
            PointInPolygon::Inside
        }
    }
}
