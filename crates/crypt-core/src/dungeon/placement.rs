//! Room placement by rejection sampling
//!
//! Each attempt draws a size and a top-left corner, then keeps the room
//! only if the room plus its separation margin is still empty. There is no
//! backtracking: once the attempt budget runs out, whatever was placed is
//! the result.

use super::{Grid, Room};
use crate::config::GeneratorConfig;
use crate::rng::DungeonRng;

/// Outcome of a placement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub rooms: Vec<Room>,
    /// Draws consumed, at most [`GeneratorConfig::placement_attempts`]
    pub attempts: usize,
}

/// Place up to `config.max_rooms` rooms on `grid`, marking their cells
pub fn place_rooms(grid: &mut Grid, config: &GeneratorConfig, rng: &mut DungeonRng) -> Placement {
    let budget = config.placement_attempts();
    let mut rooms = Vec::with_capacity(config.max_rooms);
    let mut attempts = 0;

    while attempts < budget && rooms.len() < config.max_rooms {
        attempts += 1;

        let width = rng.range_inclusive(config.min_room_size, config.max_room_size);
        let height = rng.range_inclusive(config.min_room_size, config.max_room_size);
        let x = rng.range_inclusive(0, grid.width() - width);
        let y = rng.range_inclusive(0, grid.height() - height);

        let room = Room::new(x, y, width, height);
        if !grid.area_is_empty(&room, config.room_separation) {
            continue;
        }

        grid.carve_room(&room);
        rooms.push(room);
    }

    log::debug!(
        "placed {}/{} rooms in {} attempts",
        rooms.len(),
        config.max_rooms,
        attempts
    );
    Placement { rooms, attempts }
}
