//! Engine data structures: models, poses and textures.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains mesh and material definitions, GPU resources for 3D models
//! - `pose` holds entity placement (position, rotation, scale) and navigation math
//! - `texture` contains GPU texture wrapper and creation utilities

pub mod model;
pub mod pose;
pub mod texture;
