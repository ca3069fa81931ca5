//! Incremental hull over a cyclic linked boundary
//!
//! Points are inserted in lexicographic order into a cyclic doubly linked
//! boundary stored as parallel successor/predecessor index arrays. The
//! arena-plus-index representation gives O(1) splice and removal with no
//! per-node ownership. After each splice, two removal walks peel reflex
//! points off the boundary on either side of the new point.

use crate::EPSILON;
use crate::geometry::turn;
use crate::strategy::{AlgorithmInput, AlgorithmOutput, HullAlgorithm};
use crate::types::TurnType;

/// O(n log n) sorted-insertion construction.
///
/// Output is counter-clockwise, starting at the lexicographic minimum (index
/// 0 after sorting), which is always extreme and is never removed. Fully
/// collinear input reduces to the two lexicographic extremes.
pub struct Incremental;

impl HullAlgorithm for Incremental {
    fn display_name(&self) -> &'static str {
        "Incremental"
    }

    fn run(&self, input: &AlgorithmInput) -> AlgorithmOutput {
        if input.points.len() <= 1 {
            return AlgorithmOutput::from_points(input.points.clone());
        }

        let mut points = input.points.clone();
        points.sort_by(|a, b| a.cmp_xy(b));
        points.dedup_by(|a, b| a.approx_eq(b, EPSILON));

        let n = points.len();
        if n <= 2 {
            return AlgorithmOutput::from_points(points);
        }

        // Cyclic doubly linked boundary over point indices, seeded with the
        // first two distinct points.
        let mut next = vec![0usize; n];
        let mut prev = vec![0usize; n];
        next[0] = 1;
        prev[0] = 1;
        next[1] = 0;
        prev[1] = 0;

        let start = 0usize;
        // Sorted insertion keeps the previously spliced point rightmost.
        let mut rightmost = 1usize;
        let mut live = 2usize;

        for k in 2..n {
            // Choose the insertion side. A two-point boundary carries no
            // orientation yet, so the splice that grows it to three fixes
            // counter-clockwise winding with a turn test; afterwards the
            // y-comparison against the rightmost point decides the side.
            let successor_side = if live == 2 {
                turn(&points[start], &points[rightmost], &points[k]) != TurnType::Right
            } else {
                points[k].y >= points[rightmost].y
            };

            if successor_side {
                let after = next[rightmost];
                next[k] = after;
                prev[k] = rightmost;
                prev[after] = k;
                next[rightmost] = k;
            } else {
                let before = prev[rightmost];
                prev[k] = before;
                next[k] = rightmost;
                next[before] = k;
                prev[rightmost] = k;
            }
            live += 1;

            // Walk the successor chain, removing boundary points until the
            // triple turns left; a Colinear candidate is absorbed and the
            // walk stops. The start index is extreme and never removed.
            loop {
                let a = next[k];
                let b = next[a];
                if a == start || b == k {
                    break;
                }
                let t = turn(&points[k], &points[a], &points[b]);
                if t == TurnType::Left {
                    break;
                }
                next[k] = b;
                prev[b] = k;
                live -= 1;
                if t == TurnType::Colinear {
                    break;
                }
            }

            // Mirror walk along the predecessor chain, stopping on a right
            // turn.
            loop {
                let a = prev[k];
                let b = prev[a];
                if a == start || b == k {
                    break;
                }
                let t = turn(&points[k], &points[a], &points[b]);
                if t == TurnType::Right {
                    break;
                }
                prev[k] = b;
                next[b] = k;
                live -= 1;
                if t == TurnType::Colinear {
                    break;
                }
            }

            rightmost = k;
        }

        // The hull is the successor traversal from the fixed start index.
        let mut hull = vec![points[start]];
        let mut i = next[start];
        while i != start {
            hull.push(points[i]);
            i = next[i];
        }
        AlgorithmOutput::from_points(hull)
    }
}
