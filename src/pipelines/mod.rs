//! Render-pipeline and bind-group-layout construction.

pub mod entity;
