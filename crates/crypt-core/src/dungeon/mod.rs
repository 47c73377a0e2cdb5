//! Dungeon system
//!
//! Contains the grid, rooms, room placement, corridor routing and the
//! generation pipeline that ties them to the room graph.

mod cell;
mod corridor;
mod generation;
mod grid;
mod placement;
mod room;

pub use cell::{Cell, CellType};
pub use corridor::{
    CandidateGenerator, CarvedCorridor, CorridorRules, Polyline, Rejection, RouteRequest,
    RoutingOutcome, StandardCandidates, exit_point, first_valid, rasterize, route_corridors,
    simplify,
};
pub use generation::{Generation, GenerationReport, Generator};
pub use grid::Grid;
pub use placement::{Placement, place_rooms};
pub use room::{GridPos, Room};

use serde::{Deserialize, Serialize};

use crate::geometry::Graph;

/// A finished layout
///
/// `room_graph` has one point per room center. Its edges are the corridors
/// that were actually carved; its triangles are the full triangulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dungeon {
    pub cells: Vec<Vec<Cell>>,
    pub rooms: Vec<Room>,
    pub room_graph: Graph,
    pub corridors: Vec<CarvedCorridor>,
}

impl Dungeon {
    /// Serialize to the JSON shape consumed by renderers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn height(&self) -> i32 {
        self.cells.first().map_or(0, |column| column.len()) as i32
    }

    /// Cell type at a position; out-of-bounds reads as empty
    pub fn cell(&self, pos: GridPos) -> CellType {
        if pos.x < 0 || pos.y < 0 {
            return CellType::Empty;
        }
        self.cells
            .get(pos.x as usize)
            .and_then(|column| column.get(pos.y as usize))
            .map_or(CellType::Empty, |c| c.typ)
    }

    /// One line per row using [`CellType::symbol`]
    pub fn to_ascii(&self) -> String {
        let (width, height) = (self.width(), self.height());
        let mut out = String::with_capacity(((width + 1) * height) as usize);
        for y in 0..height {
            for x in 0..width {
                out.push(self.cell(GridPos::new(x, y)).symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dungeon_from(grid: &Grid, rooms: Vec<Room>) -> Dungeon {
        Dungeon {
            cells: grid.cells().to_vec(),
            rooms,
            room_graph: Graph::default(),
            corridors: Vec::new(),
        }
    }

    #[test]
    fn test_ascii_dump() {
        let mut grid = Grid::new(3, 2);
        grid.set(GridPos::new(0, 0), CellType::Room);
        grid.set(GridPos::new(1, 0), CellType::Corridor);
        let dungeon = dungeon_from(&grid, Vec::new());
        assert_eq!((dungeon.width(), dungeon.height()), (3, 2));
        assert_eq!(dungeon.to_ascii(), ".# \n   \n");
    }

    #[test]
    fn test_out_of_bounds_cells_read_empty() {
        let room = Room::new(0, 0, 2, 2);
        let mut grid = Grid::new(4, 4);
        grid.carve_room(&room);
        let dungeon = dungeon_from(&grid, vec![room]);
        assert_eq!(dungeon.cell(GridPos::new(1, 1)), CellType::Room);
        assert_eq!(dungeon.cell(GridPos::new(-1, 0)), CellType::Empty);
        assert_eq!(dungeon.cell(GridPos::new(0, 4)), CellType::Empty);
    }
}
