//! Grid cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellType {
    #[default]
    Empty,
    Room,
    Corridor,
}

impl CellType {
    /// Character used by debug dumps
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Empty => ' ',
            CellType::Room => '.',
            CellType::Corridor => '#',
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub typ: CellType,
}

impl Cell {
    /// Create an empty cell
    pub const fn empty(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            typ: CellType::Empty,
        }
    }
}
