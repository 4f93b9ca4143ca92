//! car-scene
//!
//! A small wgpu scene: a hand-built car with wheels, hub discs and headlights,
//! lit by a single point light, optionally in the rain with its engine
//! running. The camera flies freely with WASD, mouse-look and scroll zoom.
//!
//! High-level modules
//! - `camera`: camera types, controller and uniforms for view/projection
//! - `config`: window, camera, light and weather settings for each variant
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: vertices, meshes, instances, textures and particles
//! - `flow`: the event loop driving input, update and rendering
//! - `pipelines`: the scene, lamp and particle render pipelines
//! - `resources`: the car geometry and texture loading
//! - `scene`: part placements and per-frame drawing
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod resources;
pub mod scene;

pub use config::SceneConfig;
pub use flow::run;
