//! Rooms and grid positions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// An integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev(&self, other: GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Floor-divided midpoint, fixed at creation
    pub center: GridPos,
}

impl Room {
    /// Create a new room
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            center: GridPos::new(x + width / 2, y + height / 2),
        }
    }

    /// Rightmost x coordinate (inclusive)
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottom y coordinate (inclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Check if a position is inside the room
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }

    /// Chebyshev distance from `pos` to the nearest room cell (0 inside)
    pub fn distance_to(&self, pos: GridPos) -> i32 {
        let dx = (self.x - pos.x).max(pos.x - self.right()).max(0);
        let dy = (self.y - pos.y).max(pos.y - self.bottom()).max(0);
        dx.max(dy)
    }

    /// Chebyshev distance between the closest cells of two rooms
    pub fn distance_between(&self, other: &Room) -> i32 {
        let dx = (other.x - self.right()).max(self.x - other.right()).max(0);
        let dy = (other.y - self.bottom()).max(self.y - other.bottom()).max(0);
        dx.max(dy)
    }

    /// Check if this room overlaps another, including a margin
    pub fn overlaps(&self, other: &Room, margin: i32) -> bool {
        !(self.right() + margin < other.x
            || other.right() + margin < self.x
            || self.bottom() + margin < other.y
            || other.bottom() + margin < self.y)
    }

    /// All cells in the room, column by column
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let rows = self.y..=self.bottom();
        (self.x..=self.right()).flat_map(move |x| rows.clone().map(move |y| GridPos::new(x, y)))
    }

    /// The ring of cells just outside the room: top, bottom, left, right
    pub fn perimeter(&self) -> Vec<GridPos> {
        let mut ring = Vec::with_capacity((2 * (self.width + self.height) + 4) as usize);
        for x in self.x - 1..=self.right() + 1 {
            ring.push(GridPos::new(x, self.y - 1));
        }
        for x in self.x - 1..=self.right() + 1 {
            ring.push(GridPos::new(x, self.bottom() + 1));
        }
        for y in self.y..=self.bottom() {
            ring.push(GridPos::new(self.x - 1, y));
        }
        for y in self.y..=self.bottom() {
            ring.push(GridPos::new(self.right() + 1, y));
        }
        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_center() {
        assert_eq!(Room::new(1, 1, 3, 3).center, GridPos::new(2, 2));
        assert_eq!(Room::new(0, 0, 4, 5).center, GridPos::new(2, 2));
    }

    #[test]
    fn test_room_contains() {
        let room = Room::new(2, 3, 3, 2);
        assert!(room.contains(GridPos::new(2, 3)));
        assert!(room.contains(GridPos::new(4, 4)));
        assert!(!room.contains(GridPos::new(5, 4)));
        assert!(!room.contains(GridPos::new(2, 5)));
    }

    #[test]
    fn test_distance_to() {
        let room = Room::new(2, 2, 3, 3);
        assert_eq!(room.distance_to(GridPos::new(3, 3)), 0);
        assert_eq!(room.distance_to(GridPos::new(5, 3)), 1);
        assert_eq!(room.distance_to(GridPos::new(6, 6)), 2);
        assert_eq!(room.distance_to(GridPos::new(0, 3)), 2);
    }

    #[test]
    fn test_distance_between() {
        let a = Room::new(0, 0, 3, 3);
        let b = Room::new(5, 1, 2, 2);
        assert_eq!(a.distance_between(&b), 3);
        assert_eq!(b.distance_between(&a), 3);
        assert_eq!(a.distance_between(&Room::new(1, 1, 2, 2)), 0);
    }

    #[test]
    fn test_overlaps_with_margin() {
        let a = Room::new(0, 0, 3, 3);
        let b = Room::new(5, 0, 3, 3);
        assert!(!a.overlaps(&b, 0));
        assert!(!a.overlaps(&b, 2));
        assert!(a.overlaps(&b, 3));
    }

    #[test]
    fn test_cells_and_perimeter() {
        let room = Room::new(1, 1, 2, 3);
        assert_eq!(room.cells().count(), 6);
        let ring = room.perimeter();
        assert_eq!(ring.len(), 2 * (2 + 2) + 2 * 3);
        assert!(ring.iter().all(|p| room.distance_to(*p) == 1));
    }
}
