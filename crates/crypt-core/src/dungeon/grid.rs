//! The cell grid
//!
//! Cells are stored column-major (`cells[x][y]`). Writes go through
//! [`Grid::set`], which refuses to change a room cell into anything else.

use serde::{Deserialize, Serialize};

use super::{Cell, CellType, GridPos, Room};

/// Fixed-size 2D array of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (0..width)
            .map(|x| (0..height).map(|y| Cell::empty(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position is inside the grid
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Cell type at `pos`; out-of-bounds reads as empty
    pub fn get(&self, pos: GridPos) -> CellType {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize][pos.y as usize].typ
        } else {
            CellType::Empty
        }
    }

    /// Set the type of a cell
    ///
    /// Returns false (and changes nothing) when `pos` is out of bounds or
    /// the cell is already a room.
    pub fn set(&mut self, pos: GridPos, typ: CellType) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let cell = &mut self.cells[pos.x as usize][pos.y as usize];
        if cell.typ == CellType::Room && typ != CellType::Room {
            return false;
        }
        cell.typ = typ;
        true
    }

    /// Check that every in-bounds cell of `room` grown by `margin` is empty
    pub fn area_is_empty(&self, room: &Room, margin: i32) -> bool {
        for x in room.x - margin..=room.right() + margin {
            for y in room.y - margin..=room.bottom() + margin {
                let pos = GridPos::new(x, y);
                if self.in_bounds(pos) && self.get(pos) != CellType::Empty {
                    return false;
                }
            }
        }
        true
    }

    /// Mark every cell of the room as room floor
    pub fn carve_room(&mut self, room: &Room) {
        for pos in room.cells() {
            self.set(pos, CellType::Room);
        }
    }

    /// Count cells of a given type
    pub fn count(&self, typ: CellType) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.typ == typ)
            .count()
    }

    /// Column-major view of the cells
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}
