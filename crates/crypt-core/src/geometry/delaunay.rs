//! Delaunay triangulation by incremental Bowyer-Watson insertion
//!
//! Points are inserted one at a time into a triangulation seeded with a
//! single super-triangle. Each insertion removes the triangles whose
//! circumcircle contains the new point and re-fans the hole boundary.
//! Triangles still touching the super-triangle are dropped at the end.

use hashbrown::{HashMap, HashSet};

use super::{Edge, Graph, Point, Triangle};
use crate::consts::{CIRCUMCIRCLE_EPSILON, COLINEAR_EPSILON};

/// Super-triangle size relative to the bounding box
const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// Check whether `p` lies inside (or on) the circumcircle of `a, b, c`
///
/// Colinear triangles (|d| below [`COLINEAR_EPSILON`]) contain nothing.
pub fn circumcircle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLINEAR_EPSILON {
        return false;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    let r2 = (a.x - ux).powi(2) + (a.y - uy).powi(2);
    let dist2 = (p.x - ux).powi(2) + (p.y - uy).powi(2);
    dist2 <= r2 + CIRCUMCIRCLE_EPSILON
}

/// Three vertices strictly enclosing every input point
fn super_triangle(points: &[Point]) -> [Point; 3] {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let delta = (max_x - min_x).max(max_y - min_y).max(1.0);
    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    [
        Point::new(mid_x - SUPER_TRIANGLE_SCALE * delta, mid_y - delta),
        Point::new(mid_x, mid_y + SUPER_TRIANGLE_SCALE * delta),
        Point::new(mid_x + SUPER_TRIANGLE_SCALE * delta, mid_y - delta),
    ]
}

/// Triangulate a point set
///
/// Returns a graph over the input points whose edges are the
/// deduplicated triangle sides. `triangles` is always populated.
/// Fewer than three points produce no edges.
pub fn triangulate(points: &[Point]) -> Graph {
    let n = points.len();
    if n < 3 {
        return Graph {
            points: points.to_vec(),
            edges: Vec::new(),
            triangles: Some(Vec::new()),
        };
    }

    // Super-triangle vertices live at indices n, n+1, n+2
    let mut vertices = points.to_vec();
    vertices.extend(super_triangle(points));
    let mut triangles = vec![Triangle::new(n, n + 1, n + 2)];

    for (idx, &p) in points.iter().enumerate() {
        let bad: Vec<bool> = triangles
            .iter()
            .map(|t| circumcircle_contains(vertices[t.a], vertices[t.b], vertices[t.c], p))
            .collect();

        // Shared edges appear twice and cancel; the hole boundary appears once
        let mut counts: HashMap<Edge, u32> = HashMap::new();
        for (t, _) in triangles.iter().zip(&bad).filter(|(_, b)| **b) {
            for e in t.edges() {
                *counts.entry(e).or_insert(0) += 1;
            }
        }

        // Walk bad triangles in order so the new fan is deterministic
        let mut boundary = Vec::new();
        for (t, _) in triangles.iter().zip(&bad).filter(|(_, b)| **b) {
            for e in t.edges() {
                if counts.get(&e) == Some(&1) {
                    boundary.push(e);
                }
            }
        }

        let mut keep = bad.iter().map(|b| !b);
        triangles.retain(|_| keep.next().unwrap_or(true));
        triangles.extend(boundary.into_iter().map(|e| Triangle::new(e.a, e.b, idx)));
    }

    triangles.retain(|t| !t.uses_vertex_from(n));

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for t in &triangles {
        for e in t.edges() {
            if seen.insert(e) {
                edges.push(e);
            }
        }
    }

    log::debug!(
        "triangulated {} points into {} triangles / {} edges",
        n,
        triangles.len(),
        edges.len()
    );

    Graph {
        points: points.to_vec(),
        edges,
        triangles: Some(triangles),
    }
}

/// Indices of input points that no triangulation edge reaches
pub fn untriangulated_points(graph: &Graph) -> Vec<usize> {
    if graph.points.len() < 3 {
        return Vec::new();
    }
    let mut touched = vec![false; graph.points.len()];
    for e in &graph.edges {
        touched[e.a] = true;
        touched[e.b] = true;
    }
    touched
        .iter()
        .enumerate()
        .filter(|(_, t)| !**t)
        .map(|(i, _)| i)
        .collect()
}
