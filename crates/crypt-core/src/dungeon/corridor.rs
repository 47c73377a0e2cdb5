//! Corridor routing
//!
//! For every accepted edge the router:
//! 1. Finds a connector cell just outside each room, walking from the room
//!    center toward the other room's center
//! 2. Builds a short, prioritized list of axis-aligned polylines between
//!    the two connectors (direct, two L shapes, a fan of Z shapes)
//! 3. Rasterizes each candidate and checks it against [`CorridorRules`]
//! 4. Carves the first candidate that passes
//!
//! Edges with no valid candidate are dropped. Edges are routed in order
//! and never revisited, so early corridors can block later ones.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CellType, Grid, GridPos, Room};
use crate::consts::MAX_POLYLINE_VERTICES;
use crate::geometry::Edge;

/// Polyline vertices; consecutive vertices share a row or a column
pub type Polyline = Vec<GridPos>;

/// Source of corridor shapes, in priority order
pub trait CandidateGenerator {
    fn candidates(&self, start: GridPos, end: GridPos) -> Vec<Polyline>;
}

/// Direct segment, both L routes, then Z routes pivoting up to `jitter`
/// cells either side of the midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCandidates {
    pub jitter: i32,
}

impl CandidateGenerator for StandardCandidates {
    fn candidates(&self, start: GridPos, end: GridPos) -> Vec<Polyline> {
        let mut raw: Vec<Polyline> = Vec::new();

        if start.x == end.x || start.y == end.y {
            raw.push(vec![start, end]);
        }
        raw.push(vec![start, GridPos::new(end.x, start.y), end]);
        raw.push(vec![start, GridPos::new(start.x, end.y), end]);

        let mid_x = (start.x + end.x).div_euclid(2);
        for offset in -self.jitter..=self.jitter {
            let px = mid_x + offset;
            raw.push(vec![start, GridPos::new(px, start.y), GridPos::new(px, end.y), end]);
        }
        let mid_y = (start.y + end.y).div_euclid(2);
        for offset in -self.jitter..=self.jitter {
            let py = mid_y + offset;
            raw.push(vec![start, GridPos::new(start.x, py), GridPos::new(end.x, py), end]);
        }

        let mut out: Vec<Polyline> = Vec::with_capacity(raw.len());
        for line in raw {
            let line = simplify(line);
            if line.len() <= MAX_POLYLINE_VERTICES && !out.contains(&line) {
                out.push(line);
            }
        }
        out
    }
}

/// Check if `b` lies on the segment from `a` to `c` (all on one line)
fn lies_between(a: GridPos, b: GridPos, c: GridPos) -> bool {
    if a.x == b.x && b.x == c.x {
        (a.y.min(c.y)..=a.y.max(c.y)).contains(&b.y)
    } else if a.y == b.y && b.y == c.y {
        (a.x.min(c.x)..=a.x.max(c.x)).contains(&b.x)
    } else {
        false
    }
}

/// Drop repeated vertices and vertices in the middle of a straight run
pub fn simplify(mut line: Polyline) -> Polyline {
    line.dedup();
    let mut i = 1;
    while i + 1 < line.len() {
        if lies_between(line[i - 1], line[i], line[i + 1]) {
            line.remove(i);
            i = i.saturating_sub(1).max(1);
        } else {
            i += 1;
        }
    }
    line
}

/// Every cell along the polyline, one axis step at a time
pub fn rasterize(line: &[GridPos]) -> Vec<GridPos> {
    let Some(&first) = line.first() else {
        return Vec::new();
    };
    let mut cells = vec![first];
    let mut cur = first;
    for target in &line[1..] {
        while cur != *target {
            if cur.x != target.x {
                cur.x += (target.x - cur.x).signum();
            } else {
                cur.y += (target.y - cur.y).signum();
            }
            cells.push(cur);
        }
    }
    cells
}

/// The connector cell of `room` for an edge heading to `toward`
///
/// Walks from the center one cell at a time along the axis with the larger
/// remaining displacement until it leaves the room. If that fails, the
/// first cell of the room's outer ring that is inside the grid and not a
/// room cell is used instead.
pub fn exit_point(grid: &Grid, room: &Room, toward: GridPos) -> Option<GridPos> {
    let mut cur = room.center;
    for _ in 0..=(room.width + room.height) {
        if !room.contains(cur) {
            if grid.in_bounds(cur) && grid.get(cur) != CellType::Room {
                return Some(cur);
            }
            break;
        }
        let dx = toward.x - cur.x;
        let dy = toward.y - cur.y;
        if dx == 0 && dy == 0 {
            break;
        }
        if dx.abs() >= dy.abs() {
            cur.x += dx.signum();
        } else {
            cur.y += dy.signum();
        }
    }

    room.perimeter()
        .into_iter()
        .find(|p| grid.in_bounds(*p) && grid.get(*p) != CellType::Room)
}

/// One edge to route: room indices and their connector cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: usize,
    pub to: usize,
    pub start: GridPos,
    pub end: GridPos,
}

/// Why a candidate path was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("{0} is inside room {1}")]
    InsideRoom(GridPos, usize),

    #[error("{0} is too close to room {1}")]
    TooCloseToRoom(GridPos, usize),

    #[error("{0} is too close to another corridor")]
    TooCloseToCorridor(GridPos),

    #[error("{0} would complete a 2x2 block of corridor")]
    Blob(GridPos),
}

/// Spatial constraints every carved path must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorRules {
    /// Minimum Chebyshev distance to any room, connectors excepted
    pub room_gap: i32,
    /// Minimum distance to corridors outside a junction zone
    pub corridor_gap: i32,
}

impl CorridorRules {
    /// Check a rasterized path against the current grid
    ///
    /// Path cells that are already corridor are merges. Existing corridor
    /// cells within `corridor_gap` of a merge belong to the junction and
    /// do not count against clearance.
    pub fn validate(
        &self,
        grid: &Grid,
        rooms: &[Room],
        request: &RouteRequest,
        path: &[GridPos],
    ) -> Result<(), Rejection> {
        let on_path: HashSet<GridPos> = path.iter().copied().collect();
        let merges: Vec<GridPos> = path
            .iter()
            .copied()
            .filter(|p| grid.get(*p) == CellType::Corridor)
            .collect();

        for &pos in path {
            if !grid.in_bounds(pos) {
                return Err(Rejection::OutOfBounds(pos));
            }
            self.check_rooms(rooms, request, pos)?;
            if grid.get(pos) != CellType::Corridor {
                self.check_corridors(grid, &merges, pos)?;
            }
            check_blob(grid, &on_path, pos)?;
        }
        Ok(())
    }

    fn check_rooms(
        &self,
        rooms: &[Room],
        request: &RouteRequest,
        pos: GridPos,
    ) -> Result<(), Rejection> {
        for (idx, room) in rooms.iter().enumerate() {
            let connector = (pos == request.start && idx == request.from)
                || (pos == request.end && idx == request.to);
            if connector {
                continue;
            }
            let dist = room.distance_to(pos);
            if dist == 0 {
                return Err(Rejection::InsideRoom(pos, idx));
            }
            if dist < self.room_gap {
                return Err(Rejection::TooCloseToRoom(pos, idx));
            }
        }
        Ok(())
    }

    fn check_corridors(
        &self,
        grid: &Grid,
        merges: &[GridPos],
        pos: GridPos,
    ) -> Result<(), Rejection> {
        let reach = self.corridor_gap - 1;
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                let near = GridPos::new(pos.x + dx, pos.y + dy);
                if near == pos || grid.get(near) != CellType::Corridor {
                    continue;
                }
                let junction = merges.iter().any(|m| m.chebyshev(near) < self.corridor_gap);
                if !junction {
                    return Err(Rejection::TooCloseToCorridor(pos));
                }
            }
        }
        Ok(())
    }
}

/// Reject `pos` if any 2x2 window containing it would be all corridor
fn check_blob(grid: &Grid, on_path: &HashSet<GridPos>, pos: GridPos) -> Result<(), Rejection> {
    let is_corridor =
        |p: GridPos| on_path.contains(&p) || grid.get(p) == CellType::Corridor;
    for ox in [-1, 0] {
        for oy in [-1, 0] {
            let corner = GridPos::new(pos.x + ox, pos.y + oy);
            let full = [(0, 0), (1, 0), (0, 1), (1, 1)]
                .iter()
                .all(|(dx, dy)| is_corridor(GridPos::new(corner.x + dx, corner.y + dy)));
            if full {
                return Err(Rejection::Blob(pos));
            }
        }
    }
    Ok(())
}

/// Rasterize candidates in order and return the first valid path
pub fn first_valid(
    grid: &Grid,
    rooms: &[Room],
    request: &RouteRequest,
    rules: &CorridorRules,
    candidates: &[Polyline],
) -> Option<Vec<GridPos>> {
    candidates.iter().find_map(|line| {
        let path = rasterize(line);
        match rules.validate(grid, rooms, request, &path) {
            Ok(()) => Some(path),
            Err(why) => {
                log::trace!("room {} -> {}: candidate rejected, {}", request.from, request.to, why);
                None
            }
        }
    })
}

/// A corridor that made it onto the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarvedCorridor {
    pub edge: Edge,
    pub cells: Vec<GridPos>,
}

/// Result of routing a whole edge list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingOutcome {
    pub corridors: Vec<CarvedCorridor>,
    pub dropped: Vec<Edge>,
}

/// Route and carve every edge, in order
pub fn route_corridors(
    grid: &mut Grid,
    rooms: &[Room],
    edges: &[Edge],
    rules: &CorridorRules,
    generator: &dyn CandidateGenerator,
) -> RoutingOutcome {
    let mut outcome = RoutingOutcome::default();

    for &edge in edges {
        let path = route_edge(grid, rooms, edge, rules, generator);
        match path {
            Some(cells) => {
                for &pos in &cells {
                    // Room cells refuse the write
                    grid.set(pos, CellType::Corridor);
                }
                log::trace!("room {} -> {}: carved {} cells", edge.a, edge.b, cells.len());
                outcome.corridors.push(CarvedCorridor { edge, cells });
            }
            None => {
                log::debug!("room {} -> {}: no valid corridor, edge dropped", edge.a, edge.b);
                outcome.dropped.push(edge);
            }
        }
    }
    outcome
}

fn route_edge(
    grid: &Grid,
    rooms: &[Room],
    edge: Edge,
    rules: &CorridorRules,
    generator: &dyn CandidateGenerator,
) -> Option<Vec<GridPos>> {
    let (a, b) = (rooms.get(edge.a)?, rooms.get(edge.b)?);
    let request = RouteRequest {
        from: edge.a,
        to: edge.b,
        start: exit_point(grid, a, b.center)?,
        end: exit_point(grid, b, a.center)?,
    };
    let candidates = generator.candidates(request.start, request.end);
    first_valid(grid, rooms, &request, rules, &candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: CorridorRules = CorridorRules {
        room_gap: 2,
        corridor_gap: 2,
    };

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    fn grid_with(rooms: &[Room], width: i32, height: i32) -> Grid {
        let mut grid = Grid::new(width, height);
        for room in rooms {
            grid.carve_room(room);
        }
        grid
    }

    fn carve_line(grid: &mut Grid, from: GridPos, to: GridPos) {
        for pos in rasterize(&[from, to]) {
            grid.set(pos, CellType::Corridor);
        }
    }

    fn free_request() -> RouteRequest {
        RouteRequest {
            from: 0,
            to: 1,
            start: p(0, 0),
            end: p(0, 0),
        }
    }

    #[test]
    fn test_simplify() {
        assert_eq!(simplify(vec![p(0, 0), p(0, 0), p(3, 0)]), vec![p(0, 0), p(3, 0)]);
        assert_eq!(simplify(vec![p(0, 0), p(2, 0), p(2, 0), p(5, 0)]), vec![p(0, 0), p(5, 0)]);
        // Overshoot is kept
        assert_eq!(simplify(vec![p(0, 0), p(6, 0), p(5, 0)]), vec![p(0, 0), p(6, 0), p(5, 0)]);
        assert_eq!(simplify(vec![p(0, 0), p(3, 0), p(3, 4)]), vec![p(0, 0), p(3, 0), p(3, 4)]);
    }

    #[test]
    fn test_rasterize() {
        let cells = rasterize(&[p(0, 0), p(2, 0), p(2, -2)]);
        assert_eq!(cells, vec![p(0, 0), p(1, 0), p(2, 0), p(2, -1), p(2, -2)]);
        assert_eq!(rasterize(&[p(4, 4)]), vec![p(4, 4)]);
        assert!(rasterize(&[]).is_empty());
    }

    #[test]
    fn test_collinear_candidates_start_direct() {
        let policy = StandardCandidates { jitter: 2 };
        let lines = policy.candidates(p(4, 4), p(6, 4));
        assert_eq!(lines[0], vec![p(4, 4), p(6, 4)]);
        let unique: HashSet<&Polyline> = lines.iter().collect();
        assert_eq!(unique.len(), lines.len());
    }

    #[test]
    fn test_candidate_shapes() {
        let policy = StandardCandidates { jitter: 2 };
        let (s, e) = (p(2, 3), p(9, 8));
        let lines = policy.candidates(s, e);

        assert_eq!(lines[0], vec![s, p(9, 3), e]);
        assert_eq!(lines[1], vec![s, p(2, 8), e]);
        // 2 L routes + 5 vertical-pivot Z + 4 horizontal-pivot Z
        // (the pivot on row 3 collapses into the first L route)
        assert_eq!(lines.len(), 11);
        for line in &lines {
            assert!(line.len() <= MAX_POLYLINE_VERTICES);
            assert_eq!(line.first(), Some(&s));
            assert_eq!(line.last(), Some(&e));
            for w in line.windows(2) {
                assert!(w[0].x == w[1].x || w[0].y == w[1].y);
            }
        }
        // Midpoint column pivot (2 + 9) / 2 = 5
        assert!(lines.contains(&vec![s, p(5, 3), p(5, 8), e]));
    }

    #[test]
    fn test_exit_point_walks_toward_target() {
        let room = Room::new(1, 3, 3, 3);
        let grid = grid_with(&[room], 10, 10);
        assert_eq!(exit_point(&grid, &room, p(8, 4)), Some(p(4, 4)));
        assert_eq!(exit_point(&grid, &room, p(2, 9)), Some(p(2, 6)));
        assert_eq!(exit_point(&grid, &room, p(0, 0)), Some(p(2, 2)));
    }

    #[test]
    fn test_exit_point_falls_back_to_perimeter() {
        let room = Room::new(1, 1, 3, 3);
        let grid = grid_with(&[room], 10, 10);
        // Target at the center itself: the walk never leaves
        assert_eq!(exit_point(&grid, &room, room.center), Some(p(0, 0)));
    }

    #[test]
    fn test_straight_corridor_between_aligned_rooms() {
        let rooms = [Room::new(1, 3, 3, 3), Room::new(7, 3, 3, 3)];
        let mut grid = grid_with(&rooms, 10, 10);
        let outcome = route_corridors(
            &mut grid,
            &rooms,
            &[Edge::new(0, 1)],
            &RULES,
            &StandardCandidates { jitter: 2 },
        );
        assert!(outcome.dropped.is_empty());
        assert_eq!(outcome.corridors[0].cells, vec![p(4, 4), p(5, 4), p(6, 4)]);
        assert_eq!(grid.count(CellType::Corridor), 3);
        assert_eq!(grid.count(CellType::Room), 18);
    }

    #[test]
    fn test_bent_corridor_respects_room_gap() {
        let rooms = [Room::new(1, 1, 3, 3), Room::new(12, 10, 3, 3)];
        let mut grid = grid_with(&rooms, 16, 16);
        let outcome = route_corridors(
            &mut grid,
            &rooms,
            &[Edge::new(0, 1)],
            &RULES,
            &StandardCandidates { jitter: 2 },
        );
        let corridor = &outcome.corridors[0];
        let (start, end) = (corridor.cells[0], *corridor.cells.last().unwrap());
        for &cell in &corridor.cells {
            for (idx, room) in rooms.iter().enumerate() {
                let exempt = (cell == start && idx == 0) || (cell == end && idx == 1);
                if !exempt {
                    assert!(room.distance_to(cell) >= RULES.room_gap, "{cell:?}");
                }
            }
        }
    }

    #[test]
    fn test_rejects_path_through_room() {
        let rooms = [Room::new(4, 0, 2, 2)];
        let grid = grid_with(&rooms, 10, 10);
        let path = rasterize(&[p(0, 1), p(8, 1)]);
        let request = RouteRequest {
            from: 1,
            to: 2,
            ..free_request()
        };
        assert_eq!(
            RULES.validate(&grid, &rooms, &request, &path),
            Err(Rejection::TooCloseToRoom(p(3, 1), 0))
        );
        let loose = CorridorRules {
            room_gap: 0,
            ..RULES
        };
        assert_eq!(
            loose.validate(&grid, &rooms, &request, &path),
            Err(Rejection::InsideRoom(p(4, 1), 0))
        );
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let grid = Grid::new(5, 5);
        let path = rasterize(&[p(3, 2), p(6, 2)]);
        assert_eq!(
            RULES.validate(&grid, &[], &free_request(), &path),
            Err(Rejection::OutOfBounds(p(5, 2)))
        );
    }

    #[test]
    fn test_rejects_parallel_corridor() {
        let mut grid = Grid::new(12, 12);
        carve_line(&mut grid, p(2, 5), p(8, 5));
        let path = rasterize(&[p(2, 6), p(8, 6)]);
        assert_eq!(
            RULES.validate(&grid, &[], &free_request(), &path),
            Err(Rejection::TooCloseToCorridor(p(2, 6)))
        );
    }

    #[test]
    fn test_allows_crossing_existing_corridor() {
        let mut grid = Grid::new(12, 12);
        carve_line(&mut grid, p(5, 2), p(5, 8));
        let path = rasterize(&[p(2, 5), p(8, 5)]);
        assert_eq!(RULES.validate(&grid, &[], &free_request(), &path), Ok(()));
    }

    #[test]
    fn test_allows_merging_onto_existing_corridor() {
        let mut grid = Grid::new(12, 12);
        carve_line(&mut grid, p(2, 5), p(8, 5));
        // Overlaps the first half, then turns away
        let path = rasterize(&[p(2, 5), p(5, 5), p(5, 10)]);
        assert_eq!(RULES.validate(&grid, &[], &free_request(), &path), Ok(()));
    }

    #[test]
    fn test_rejects_blob() {
        let mut grid = Grid::new(12, 12);
        carve_line(&mut grid, p(2, 5), p(8, 5));
        let no_gap = CorridorRules {
            room_gap: 2,
            corridor_gap: 1,
        };
        let path = rasterize(&[p(4, 6), p(4, 9)]);
        assert_eq!(no_gap.validate(&grid, &[], &free_request(), &path), Ok(()));
        let path = rasterize(&[p(4, 6), p(5, 6), p(5, 9)]);
        assert_eq!(
            no_gap.validate(&grid, &[], &free_request(), &path),
            Err(Rejection::Blob(p(4, 6)))
        );
    }

    #[test]
    fn test_unroutable_edge_is_dropped() {
        let rooms = [Room::new(1, 1, 3, 3), Room::new(6, 1, 3, 3)];
        let mut grid = grid_with(&rooms, 12, 12);
        let strict = CorridorRules {
            room_gap: 10,
            corridor_gap: 2,
        };
        let outcome = route_corridors(
            &mut grid,
            &rooms,
            &[Edge::new(0, 1)],
            &strict,
            &StandardCandidates { jitter: 2 },
        );
        assert_eq!(outcome.dropped, vec![Edge::new(0, 1)]);
        assert!(outcome.corridors.is_empty());
        assert_eq!(grid.count(CellType::Corridor), 0);
    }

    #[test]
    fn test_first_valid_skips_rejected_candidates() {
        let rooms = [Room::new(4, 0, 2, 3)];
        let grid = grid_with(&rooms, 10, 10);
        let request = RouteRequest {
            from: 1,
            to: 2,
            start: p(0, 1),
            end: p(8, 1),
        };
        let candidates = vec![
            vec![p(0, 1), p(8, 1)],
            vec![p(0, 1), p(0, 6), p(8, 6), p(8, 1)],
        ];
        let path = first_valid(&grid, &rooms, &request, &RULES, &candidates).unwrap();
        assert!(path.contains(&p(4, 6)));
    }
}
