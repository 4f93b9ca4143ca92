//! Render pipelines.
//!
//! - `basic`: the shared pipeline builder and the lit, textured scene pipeline
//! - `light`: the light uniform and the lamp cube pipeline
//! - `particle`: instanced particle pipeline and emitters

pub mod basic;
pub mod light;
pub mod particle;
