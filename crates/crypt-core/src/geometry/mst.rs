//! Minimum spanning tree over candidate edges (Prim)
//!
//! The tree grows from point 0. Each step scans every candidate edge and
//! takes the shortest one crossing the tree boundary; the first edge seen
//! wins ties. When no candidate crosses (disconnected candidates), the
//! closest tree/non-tree point pair is joined instead.

use super::{Edge, Graph, Point};

/// Best pair across the tree boundary by brute force
fn nearest_crossing_pair(points: &[Point], in_tree: &[bool]) -> Option<Edge> {
    let mut best: Option<(Edge, f64)> = None;
    for (i, _) in in_tree.iter().enumerate().filter(|(_, t)| **t) {
        for (j, _) in in_tree.iter().enumerate().filter(|(_, t)| !**t) {
            let w = points[i].distance(&points[j]);
            if best.is_none_or(|(_, bw)| w < bw) {
                best = Some((Edge::new(i, j), w));
            }
        }
    }
    best.map(|(e, _)| e)
}

/// Prim's algorithm over `graph.edges`, weighted by Euclidean length
///
/// Returns a graph with the same points and `N - 1` edges in the order
/// they were added. O(V * E), which is fine for tens of rooms.
pub fn minimum_spanning_tree(graph: &Graph) -> Graph {
    let n = graph.points.len();
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    if n == 0 {
        return Graph::new(Vec::new(), tree);
    }

    let mut in_tree = vec![false; n];
    in_tree[0] = true;
    let mut tree_size = 1;

    while tree_size < n {
        let mut best: Option<(Edge, f64)> = None;
        for edge in &graph.edges {
            if in_tree[edge.a] == in_tree[edge.b] {
                continue;
            }
            let w = edge.weight(&graph.points);
            // Strict comparison keeps the first minimum
            if best.is_none_or(|(_, bw)| w < bw) {
                best = Some((*edge, w));
            }
        }

        let next = match best {
            Some((edge, _)) => Some(edge),
            None => nearest_crossing_pair(&graph.points, &in_tree),
        };
        let Some(edge) = next else {
            break;
        };

        in_tree[edge.a] = true;
        in_tree[edge.b] = true;
        tree_size += 1;
        tree.push(edge);
    }

    log::debug!("spanning tree: {} edges over {} points", tree.len(), n);
    Graph::new(graph.points.clone(), tree)
}
