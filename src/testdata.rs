//! Test data for convex hull tests
//!
//! Point-cloud generators shared by the unit tests, the integration tests,
//! and the benches.

use crate::types::Point;
use rand::Rng;

/// Uniform random points in the square `[-half, half] x [-half, half]`
pub fn random_square_points(n: usize, half: f64) -> Vec<Point> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.random::<f64>() * 2.0 * half - half;
        let y = rng.random::<f64>() * 2.0 * half - half;
        points.push(Point::new(x, y));
    }
    points
}

/// Evenly spaced points on a circle; every point is a hull vertex
pub fn circle_points(n: usize, radius: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
        points.push(Point::new(radius * theta.cos(), radius * theta.sin()));
    }
    points
}

/// Evenly spaced collinear points along the x axis
pub fn collinear_points(n: usize, spacing: f64) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64 * spacing, 0.0)).collect()
}

/// A full grid of lattice points; heavy on collinear triples
pub fn grid_points(side: usize, spacing: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(side * side);
    for x in 0..side {
        for y in 0..side {
            points.push(Point::new(x as f64 * spacing, y as f64 * spacing));
        }
    }
    points
}

/// The four corners of an axis-aligned square plus random interior points
pub fn square_with_interior_points(size: f64, n_interior: usize) -> Vec<Point> {
    let s = size / 2.0;
    let mut points = vec![
        Point::new(-s, -s),
        Point::new(s, -s),
        Point::new(s, s),
        Point::new(-s, s),
    ];
    let mut rng = rand::rng();
    for _ in 0..n_interior {
        // Strictly interior so the corners stay the exact hull.
        let x = (rng.random::<f64>() - 0.5) * 0.9 * size;
        let y = (rng.random::<f64>() - 0.5) * 0.9 * size;
        points.push(Point::new(x, y));
    }
    points
}

/// Two overlapping axis-aligned squares sharing a duplicated pair of corner
/// coordinates; 8 points total
pub fn overlapping_squares() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
        Point::new(4.0, 0.0),
        Point::new(8.0, 0.0),
        Point::new(8.0, 4.0),
        Point::new(4.0, 4.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_square_points() {
        let points = random_square_points(100, 1000.0);
        assert_eq!(points.len(), 100);
        for p in &points {
            assert!(p.x.abs() <= 1000.0 && p.y.abs() <= 1000.0);
        }
    }

    #[test]
    fn test_circle_points_on_radius() {
        let points = circle_points(36, 5.0);
        assert_eq!(points.len(), 36);
        for p in &points {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 5.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_grid_points_count() {
        assert_eq!(grid_points(5, 1.0).len(), 25);
    }

    #[test]
    fn test_overlapping_squares_have_duplicates() {
        let points = overlapping_squares();
        assert_eq!(points.len(), 8);
        let duplicated = points
            .iter()
            .filter(|p| points.iter().filter(|q| q == p).count() > 1)
            .count();
        assert_eq!(duplicated, 4);
    }
}
