//! crypt-core: procedural dungeon layout generation
//!
//! This crate contains the whole generation pipeline with no I/O:
//! rooms are scattered by rejection sampling, their centers are
//! triangulated (Bowyer-Watson), a Prim spanning tree plus a few random
//! loop edges is extracted, and every accepted edge is routed as an
//! axis-aligned corridor on the grid.
//!
//! The result is a [`dungeon::Dungeon`] (grid + rooms + room graph) and a
//! [`GenerationReport`] describing anything that degraded along the way.

pub mod config;
pub mod dungeon;
pub mod geometry;

mod consts;
mod error;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use dungeon::{Generation, GenerationReport, Generator};
pub use error::ConfigError;
pub use rng::DungeonRng;
