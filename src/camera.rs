//! View and projection matrices for draw calls.
//!
//! Entities take the view and projection as plain matrices, so any camera
//! works. This module provides a simple yaw/pitch camera and a perspective
//! projection for applications that don't bring their own.

use cgmath::{Deg, InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};

/// wgpu clip space spans z in 0.0..1.0 while cgmath produces OpenGL style
/// -1.0..1.0, so the projection gets corrected with this matrix.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A free camera defined by position, yaw and pitch.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// The view matrix for the current camera placement.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();

        Matrix4::look_to_rh(
            self.position,
            Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize(),
            Vector3::unit_y(),
        )
    }
}

/// Perspective projection parameters.
///
/// Kept separate from the camera so a window resize only touches the aspect
/// ratio.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// The projection matrix, already corrected for wgpu clip space.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1280, 720, Deg(45.0), 0.1, 500.0)
    }
}
