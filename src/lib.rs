//! meshpose
//!
//! A small wgpu renderer for posed OBJ model entities. The crate exposes a
//! minimal surface for loading a mesh from a Wavefront OBJ file, compiling a
//! WGSL shader, and drawing the result with a world-view-projection transform
//! derived from a mutable pose (position, Euler rotation, uniform scale).
//! Navigation helpers let an entity turn towards a point on the ground plane
//! and advance along its current heading.
//!
//! High-level modules
//! - `camera`: view and projection matrices consumed by draw calls
//! - `context`: central GPU and window context that owns device/queue/config
//! - `data_structures`: engine data models (meshes, poses, textures)
//! - `entity`: the renderable model entity (load, draw, navigation)
//! - `pipelines`: render-pipeline and bind-group-layout construction
//! - `resources`: helpers to load meshes/textures and create GPU resources
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod entity;
pub mod pipelines;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
