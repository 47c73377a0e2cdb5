//! Planar graph primitives
//!
//! Contains the point/edge/triangle types shared by the triangulation,
//! spanning tree, and loop augmentation stages.

mod delaunay;
mod loops;
mod mst;

pub use delaunay::{circumcircle_contains, triangulate, untriangulated_points};
pub use loops::augment_with_loops;
pub use mst::minimum_spanning_tree;

use serde::{Deserialize, Serialize};

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An undirected edge between two point indices
///
/// Always stored in canonical order (`a < b`), so `Edge` itself is the
/// deduplication key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create a canonical edge. `a` and `b` must differ.
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "self-loop edge");
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    /// Check if the edge touches the given index
    pub fn touches(&self, idx: usize) -> bool {
        self.a == idx || self.b == idx
    }

    /// Length of the edge over the given point set
    pub fn weight(&self, points: &[Point]) -> f64 {
        points[self.a].distance(&points[self.b])
    }
}

/// A triangle over three point indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three edges of the triangle
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Check if any vertex is at or beyond `first` (used for super-triangle vertices)
    pub fn uses_vertex_from(&self, first: usize) -> bool {
        self.a >= first || self.b >= first || self.c >= first
    }
}

/// Points plus edges (and optionally the triangles they came from)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub points: Vec<Point>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangles: Option<Vec<Triangle>>,
}

impl Graph {
    pub fn new(points: Vec<Point>, edges: Vec<Edge>) -> Self {
        Self {
            points,
            edges,
            triangles: None,
        }
    }

    /// Sum of all edge lengths
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight(&self.points)).sum()
    }

    /// Number of edges touching each point
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.points.len()];
        for edge in &self.edges {
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
        }
        degrees
    }
}
