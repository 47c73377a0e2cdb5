//! Generator configuration
//!
//! Every tuning knob of the pipeline lives here. Missing JSON fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Parameters for one dungeon generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Smallest room side
    pub min_room_size: i32,
    /// Largest room side
    pub max_room_size: i32,
    /// Target room count
    pub max_rooms: usize,
    /// Placement attempts per target room
    pub placement_attempt_factor: usize,
    /// Empty cells kept around each room
    pub room_separation: i32,
    /// Minimum corridor-to-room Chebyshev distance
    pub room_corridor_gap: i32,
    /// Minimum distance between unrelated corridors
    pub corridor_corridor_gap: i32,
    /// Probability of re-adding a non-tree edge
    pub extra_edge_chance: f64,
    /// Degree limit for loop edges
    pub max_connections: usize,
    /// Pivot offset range for Z-shaped corridor candidates
    pub pivot_jitter: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_SIZE,
            height: DUNGEON_SIZE,
            min_room_size: MIN_ROOM_SIZE,
            max_room_size: MAX_ROOM_SIZE,
            max_rooms: MAX_ROOMS,
            placement_attempt_factor: PLACEMENT_ATTEMPT_FACTOR,
            room_separation: ROOM_SEPARATION,
            room_corridor_gap: ROOM_CORRIDOR_GAP,
            corridor_corridor_gap: CORRIDOR_CORRIDOR_GAP,
            extra_edge_chance: EXTRA_EDGE_CHANCE,
            max_connections: MAX_ALLOWED_CONNECTIONS,
            pivot_jitter: PIVOT_JITTER,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters describe a generatable dungeon
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidGridSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size < 1 || self.max_room_size < self.min_room_size {
            return Err(ConfigError::InvalidRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.max_room_size > self.width || self.max_room_size > self.height {
            return Err(ConfigError::RoomLargerThanGrid {
                size: self.max_room_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.max_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        for (name, value) in [
            ("room_separation", self.room_separation),
            ("room_corridor_gap", self.room_corridor_gap),
            ("corridor_corridor_gap", self.corridor_corridor_gap),
            ("pivot_jitter", self.pivot_jitter),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeDistance { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.extra_edge_chance) {
            return Err(ConfigError::InvalidProbability(self.extra_edge_chance));
        }
        Ok(())
    }

    /// Total number of placement draws before giving up
    pub fn placement_attempts(&self) -> usize {
        self.max_rooms * self.placement_attempt_factor
    }
}
