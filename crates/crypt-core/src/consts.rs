//! Default generation constants
//!
//! These are the values [`crate::GeneratorConfig::default`] starts from.
//! Every one of them can be overridden through the config.

/// Grid dimensions (square)
pub const DUNGEON_SIZE: i32 = 30;

/// Room side length limits (inclusive)
pub const MIN_ROOM_SIZE: i32 = 3;
pub const MAX_ROOM_SIZE: i32 = 6;

/// Target number of rooms; fewer may be placed
pub const MAX_ROOMS: usize = 8;

/// Placement gives up after `MAX_ROOMS * PLACEMENT_ATTEMPT_FACTOR` draws
pub const PLACEMENT_ATTEMPT_FACTOR: usize = 8;

/// Empty cells required around every room before another may be placed
///
/// One more than [`ROOM_CORRIDOR_GAP`], so a corridor fits between two
/// neighbouring rooms.
pub const ROOM_SEPARATION: i32 = ROOM_CORRIDOR_GAP + 1;

/// Minimum Chebyshev distance from a corridor cell to any room
/// (connector cells excepted)
pub const ROOM_CORRIDOR_GAP: i32 = 2;

/// Minimum Chebyshev distance between corridors of different paths
/// (shared cells and junctions excepted)
pub const CORRIDOR_CORRIDOR_GAP: i32 = 2;

/// Probability that a non-tree triangulation edge becomes a loop
pub const EXTRA_EDGE_CHANCE: f64 = 0.15;

/// Degree limit checked before adding a loop edge
pub const MAX_ALLOWED_CONNECTIONS: usize = 2;

/// Pivot offset range for three-segment corridor candidates
pub const PIVOT_JITTER: i32 = 2;

/// Candidates with more vertices than this are discarded (3 segments)
pub const MAX_POLYLINE_VERTICES: usize = 4;

/// Circumcircle determinant below which a triangle is treated as colinear
pub const COLINEAR_EPSILON: f64 = 1e-12;

/// Slack added to the squared circumradius; biases toward "contained"
pub const CIRCUMCIRCLE_EPSILON: f64 = 1e-8;
