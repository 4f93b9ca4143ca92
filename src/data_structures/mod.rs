//! Scene data structures: vertices and meshes, textures, instances and particles.
//!
//! - `model` contains the vertex format, GPU meshes and draw helpers
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `instance` holds per-instance transformation data
//! - `particle` holds the rain and smoke particles and their emitters

pub mod instance;
pub mod model;
pub mod particle;
pub mod texture;
