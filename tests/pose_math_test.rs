use approx::assert_relative_eq;
use cgmath::{Matrix4, Vector3, Vector4};
use meshpose::data_structures::pose::Pose;

fn pose_at(x: f32, y: f32, z: f32) -> Pose {
    Pose {
        position: Vector3::new(x, y, z),
        ..Default::default()
    }
}

#[test]
fn default_pose_spawns_down_the_z_axis() {
    let pose = Pose::new();
    assert_eq!(pose.position, Vector3::new(0.0, 0.0, 50.0));
    assert_eq!(pose.rotation_deg, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(pose.scale, 1.0);
}

#[test]
fn look_at_yaw_is_atan2_of_the_offsets() {
    let cases = [
        ((0.0f32, 0.0f32), (0.0f32, 1.0f32)),
        ((0.0, 0.0), (1.0, 0.0)),
        ((0.0, 0.0), (-1.0, 0.0)),
        ((2.5, -3.0), (7.5, 12.0)),
        ((-10.0, 4.0), (3.0, -8.0)),
        ((1.0, 1.0), (1.0, -1.0)),
    ];
    for ((px, pz), (tx, tz)) in cases {
        let mut pose = pose_at(px, 0.0, pz);
        pose.look_at_xz(tx, tz);
        let expected = (tx - px).atan2(tz - pz).to_degrees();
        assert_relative_eq!(pose.rotation_deg.y, expected);
    }
}

#[test]
fn look_at_touches_only_the_yaw() {
    let mut pose = pose_at(1.0, 2.0, 3.0);
    pose.rotation_deg = Vector3::new(10.0, 0.0, 20.0);
    pose.look_at_xz(5.0, 5.0);
    assert_relative_eq!(pose.rotation_deg.x, 10.0);
    assert_relative_eq!(pose.rotation_deg.z, 20.0);
    assert_eq!(pose.position, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn look_at_own_position_resets_yaw() {
    let mut pose = pose_at(4.0, 0.0, -2.0);
    pose.rotation_deg.y = 135.0;
    pose.look_at_xz(4.0, -2.0);
    assert_eq!(pose.rotation_deg.y, 0.0);
}

#[test]
fn move_forwards_round_trip_returns_to_start() {
    for yaw in [0.0f32, 33.0, 90.0, 180.0, -45.0, 250.0] {
        let mut pose = pose_at(1.0, 0.0, 2.0);
        pose.rotation_deg.y = yaw;
        pose.move_forwards(7.25);
        pose.move_forwards(-7.25);
        assert_relative_eq!(pose.position.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(pose.position.z, 2.0, epsilon = 1e-4);
    }
}

#[test]
fn move_forwards_follows_the_heading() {
    let mut pose = pose_at(0.0, 0.0, 0.0);
    // Yaw zero heads down positive z.
    pose.move_forwards(3.0);
    assert_relative_eq!(pose.position.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(pose.position.z, 3.0, epsilon = 1e-5);

    let mut pose = pose_at(0.0, 0.0, 0.0);
    pose.rotation_deg.y = 90.0;
    pose.move_forwards(3.0);
    assert_relative_eq!(pose.position.x, 3.0, epsilon = 1e-5);
    assert_relative_eq!(pose.position.z, 0.0, epsilon = 1e-4);
}

#[test]
fn look_at_then_move_reaches_the_target() {
    let mut pose = pose_at(-3.0, 0.0, 8.0);
    let (tx, tz) = (5.0f32, -6.0f32);
    pose.look_at_xz(tx, tz);
    let distance = ((tx + 3.0).powi(2) + (tz - 8.0).powi(2)).sqrt();
    pose.move_forwards(distance);
    assert_relative_eq!(pose.position.x, tx, epsilon = 1e-4);
    assert_relative_eq!(pose.position.z, tz, epsilon = 1e-4);
}

#[test]
fn world_matrix_of_pure_scale_and_translate() {
    let pose = Pose {
        position: Vector3::new(1.0, 2.0, 3.0),
        rotation_deg: Vector3::new(0.0, 0.0, 0.0),
        scale: 2.0,
    };
    let m = pose.to_matrix();
    // Columns: scaled basis vectors plus the translation.
    assert_eq!(m.x, Vector4::new(2.0, 0.0, 0.0, 0.0));
    assert_eq!(m.y, Vector4::new(0.0, 2.0, 0.0, 0.0));
    assert_eq!(m.z, Vector4::new(0.0, 0.0, 2.0, 0.0));
    assert_eq!(m.w, Vector4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn rotations_apply_x_before_y() {
    let pose = Pose {
        position: Vector3::new(0.0, 0.0, 0.0),
        rotation_deg: Vector3::new(90.0, 90.0, 0.0),
        scale: 1.0,
    };
    // X first takes the up vector to +z, then Y takes +z to +x. The reversed
    // order would leave the point at +z instead.
    let p = pose.to_matrix() * Vector4::new(0.0, 1.0, 0.0, 1.0);
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);

    let reversed = Matrix4::from_angle_x(cgmath::Deg(90.0))
        * Matrix4::from_angle_y(cgmath::Deg(90.0));
    let q = reversed * Vector4::new(0.0, 1.0, 0.0, 1.0);
    assert_relative_eq!(q.z, 1.0, epsilon = 1e-5);
}

#[test]
fn scale_applies_before_rotation_and_translation() {
    let pose = Pose {
        position: Vector3::new(10.0, 0.0, 0.0),
        rotation_deg: Vector3::new(0.0, 90.0, 0.0),
        scale: 3.0,
    };
    // (1,0,0) scales to (3,0,0), yaw 90 turns it to -z, then translate.
    let p = pose.to_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_relative_eq!(p.x, 10.0, epsilon = 1e-4);
    assert_relative_eq!(p.z, -3.0, epsilon = 1e-4);
}
