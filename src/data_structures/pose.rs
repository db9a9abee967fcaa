//! Entity pose: position, Euler rotation and uniform scale.
//!
//! A [`Pose`] carries everything needed to place a model in the world and to
//! compute its world matrix. Rotation is stored as Euler angles in degrees,
//! applied in X then Y then Z order, which keeps the yaw component directly
//! addressable for the navigation helpers.

use cgmath::{Deg, Matrix4, Vector3};

/// World-space placement of a model entity.
///
/// The world matrix composes as scale, then the X/Y/Z rotations, then the
/// translation. `scale` is expected to be positive; this is not validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    /// Euler angles in degrees, applied X then Y then Z. The Y component is
    /// the yaw used by [`look_at_xz`](Self::look_at_xz) and
    /// [`move_forwards`](Self::move_forwards).
    pub rotation_deg: Vector3<f32>,
    pub scale: f32,
}

impl Pose {
    /// Create a pose at the default spawn point, 50 units down the z axis.
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 50.0),
            rotation_deg: Vector3::new(0.0, 0.0, 0.0),
            scale: 1.0,
        }
    }

    /// The world matrix for this pose.
    ///
    /// Applies scale first, then the X, Y and Z rotations, then the
    /// translation. cgmath uses column vectors, so the factors appear in
    /// reverse application order.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Deg(self.rotation_deg.z))
            * Matrix4::from_angle_y(Deg(self.rotation_deg.y))
            * Matrix4::from_angle_x(Deg(self.rotation_deg.x))
            * Matrix4::from_scale(self.scale)
    }

    /// Turn towards a point on the ground plane.
    ///
    /// Sets the yaw to `atan2(dx, dz)` in degrees, where `dx`/`dz` are the
    /// offsets from the current position to the target. Pitch and roll are
    /// left untouched. A target equal to the current position yields yaw 0.
    pub fn look_at_xz(&mut self, target_x: f32, target_z: f32) {
        let dx = target_x - self.position.x;
        let dz = target_z - self.position.z;
        self.rotation_deg.y = dx.atan2(dz).to_degrees();
    }

    /// Advance along the current heading.
    ///
    /// Moves `distance` units in the direction the yaw points at, on the
    /// ground plane. A negative distance moves backwards.
    pub fn move_forwards(&mut self, distance: f32) {
        let yaw = self.rotation_deg.y.to_radians();
        self.position.x += yaw.sin() * distance;
        self.position.z += yaw.cos() * distance;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Pose {
    fn from(position: Vector3<f32>) -> Self {
        Pose {
            position,
            ..Default::default()
        }
    }
}
