//! Loop augmentation
//!
//! A bare spanning tree makes for a dungeon with exactly one route between
//! any two rooms. Re-adding a few candidate edges creates cycles.

use hashbrown::HashSet;

use super::{Edge, Graph};
use crate::rng::DungeonRng;

/// Extend `tree` with randomly chosen non-tree `candidates`
///
/// Each non-tree candidate consumes exactly one draw. It is accepted when
/// the draw passes `chance` and both endpoints currently have degree
/// `<= max_connections`. Degrees update as edges are accepted, so the
/// result depends on candidate order.
///
/// Returns the tree edges followed by the accepted extras.
pub fn augment_with_loops(
    tree: &Graph,
    candidates: &[Edge],
    chance: f64,
    max_connections: usize,
    rng: &mut DungeonRng,
) -> Vec<Edge> {
    let in_tree: HashSet<Edge> = tree.edges.iter().copied().collect();
    let mut degrees = tree.degrees();
    let mut edges = tree.edges.clone();

    for edge in candidates {
        if in_tree.contains(edge) {
            continue;
        }
        let roll = rng.chance(chance);
        if roll && degrees[edge.a] <= max_connections && degrees[edge.b] <= max_connections {
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
            edges.push(*edge);
        }
    }

    log::debug!(
        "loop augmentation added {} edges to a {}-edge tree",
        edges.len() - tree.edges.len(),
        tree.edges.len()
    );
    edges
}
