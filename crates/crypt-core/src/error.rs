//! Configuration errors
//!
//! Generation itself never fails; everything that can go wrong is caught
//! when a [`crate::GeneratorConfig`] is validated.

use thiserror::Error;

/// Errors raised while loading or validating a generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidGridSize { width: i32, height: i32 },

    #[error("Invalid room size range {min}..={max}")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("Maximum room size {size} does not fit in a {width}x{height} grid")]
    RoomLargerThanGrid { size: i32, width: i32, height: i32 },

    #[error("Room target must be at least 1")]
    NoRooms,

    #[error("'{name}' must not be negative, got {value}")]
    NegativeDistance { name: &'static str, value: i32 },

    #[error("Extra edge chance must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
