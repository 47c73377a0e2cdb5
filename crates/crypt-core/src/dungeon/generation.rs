//! Dungeon generation pipeline
//!
//! rooms -> triangulation -> spanning tree -> loops -> corridors.
//! Each stage only reads the output of the previous one; the grid is the
//! only state shared between placement and routing.

use serde::{Deserialize, Serialize};

use super::corridor::{
    CandidateGenerator, CarvedCorridor, CorridorRules, StandardCandidates, route_corridors,
};
use super::placement::place_rooms;
use super::{CellType, Dungeon, Grid};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::geometry::{
    Edge, Graph, Point, augment_with_loops, minimum_spanning_tree, triangulate,
    untriangulated_points,
};
use crate::rng::DungeonRng;

/// What happened during one run
///
/// Generation never fails; shortfalls show up here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Seed that reproduces this run
    ///
    /// `None` when the RNG had already been drawn from before the run, since
    /// its seed alone would not replay the same stream.
    pub seed: Option<u64>,
    pub rooms_requested: usize,
    pub rooms_placed: usize,
    pub placement_attempts: usize,
    /// Triangulation edges offered to the spanning tree
    pub candidate_edges: usize,
    /// Rooms the triangulation left without any edge
    pub untriangulated_points: Vec<usize>,
    pub mst_edges: usize,
    /// Loop edges accepted on top of the tree
    pub extra_edges: usize,
    pub routed_edges: usize,
    /// Accepted edges that had no valid corridor
    pub dropped_edges: Vec<Edge>,
    pub corridor_cells: usize,
}

impl GenerationReport {
    pub fn unplaced_rooms(&self) -> usize {
        self.rooms_requested.saturating_sub(self.rooms_placed)
    }

    /// Check if any stage fell short of its target
    pub fn is_degraded(&self) -> bool {
        self.unplaced_rooms() > 0
            || !self.untriangulated_points.is_empty()
            || !self.dropped_edges.is_empty()
    }
}

/// A dungeon together with its report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub dungeon: Dungeon,
    pub report: GenerationReport,
}

/// Validated configuration plus the corridor shape policy
#[derive(Debug, Clone)]
pub struct Generator<C = StandardCandidates> {
    config: GeneratorConfig,
    candidates: C,
}

impl Generator<StandardCandidates> {
    /// Create a generator with the standard corridor candidates
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let candidates = StandardCandidates {
            jitter: config.pivot_jitter,
        };
        Self::with_candidates(config, candidates)
    }
}

impl<C: CandidateGenerator> Generator<C> {
    /// Create a generator with a custom corridor candidate policy
    pub fn with_candidates(config: GeneratorConfig, candidates: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, candidates })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn rules(&self) -> CorridorRules {
        CorridorRules {
            room_gap: self.config.room_corridor_gap,
            corridor_gap: self.config.corridor_corridor_gap,
        }
    }

    /// Run the whole pipeline once
    ///
    /// Placement and loop augmentation draw from `rng`; nothing else is
    /// random, so the same seed always yields the same dungeon.
    pub fn generate(&self, rng: &mut DungeonRng) -> Generation {
        let config = &self.config;
        let seed = rng.is_fresh().then(|| rng.seed());
        let mut grid = Grid::new(config.width, config.height);

        let placement = place_rooms(&mut grid, config, rng);
        let rooms = placement.rooms;

        let centers: Vec<Point> = rooms.iter().map(|r| r.center.to_point()).collect();
        let triangulation = triangulate(&centers);
        let untriangulated = untriangulated_points(&triangulation);

        let tree = minimum_spanning_tree(&triangulation);
        let accepted = augment_with_loops(
            &tree,
            &triangulation.edges,
            config.extra_edge_chance,
            config.max_connections,
            rng,
        );

        let rules = self.rules();
        let routing = route_corridors(&mut grid, &rooms, &accepted, &rules, &self.candidates);

        let report = GenerationReport {
            seed,
            rooms_requested: config.max_rooms,
            rooms_placed: rooms.len(),
            placement_attempts: placement.attempts,
            candidate_edges: triangulation.edges.len(),
            untriangulated_points: untriangulated,
            mst_edges: tree.edges.len(),
            extra_edges: accepted.len() - tree.edges.len(),
            routed_edges: routing.corridors.len(),
            dropped_edges: routing.dropped,
            corridor_cells: grid.count(CellType::Corridor),
        };
        log::debug!(
            "generated {} rooms, {}/{} corridors routed (seed {:?})",
            report.rooms_placed,
            report.routed_edges,
            accepted.len(),
            report.seed
        );

        let room_graph = Graph {
            points: centers,
            edges: routing.corridors.iter().map(|c| c.edge).collect(),
            triangles: triangulation.triangles,
        };
        let corridors: Vec<CarvedCorridor> = routing.corridors;

        Generation {
            dungeon: Dungeon {
                cells: grid.cells().to_vec(),
                rooms,
                room_graph,
                corridors,
            },
            report,
        }
    }
}
