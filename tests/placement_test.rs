use car_scene::{
    data_structures::instance::Instance,
    scene::{
        body_placements, headlight_placements, lamp_placement, wheel_glass_placements,
        wheel_placements,
    },
};
use cgmath::{Deg, Matrix3, Matrix4, Point3, SquareMatrix, Transform, Vector3};

use crate::common::test_utils::{assert_mat4_near, assert_near, assert_vec3_near};

mod common;

/// World position of a disc-shaped part's centre, which sits at (0.4, 0.4) in
/// its local xy plane.
fn centre_of(instance: &Instance) -> Vector3<f32> {
    let p = instance
        .to_matrix()
        .transform_point(Point3::new(0.4, 0.4, 0.0));
    Vector3::new(p.x, p.y, p.z)
}

fn t(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(x, y, z))
}

#[test]
fn composition_should_match_the_matrix_chain() {
    let wheels = wheel_placements();
    let expected = Matrix4::from_scale(0.5)
        * Matrix4::from_angle_y(Deg(90.0))
        * t(0.1, -1.8, 1.1)
        * t(2.0, 0.0, 0.0)
        * t(0.0, 0.0, -1.9);
    assert_mat4_near(wheels[2].to_matrix(), expected, "rear left wheel");

    let hubs = wheel_glass_placements();
    let expected = Matrix4::from_scale(0.3)
        * Matrix4::from_angle_y(Deg(90.0))
        * t(0.4, -2.75, 1.85)
        * t(3.35, 0.0, 0.0)
        * t(0.0, 0.0, -3.75)
        * Matrix4::from_angle_y(Deg(180.0))
        * t(-0.8, 0.0, 0.0)
        * t(3.35, 0.0, 0.0);
    assert_mat4_near(hubs[3].to_matrix(), expected, "front left hub");
}

#[test]
fn body_should_sit_at_the_origin() {
    let [body] = body_placements();

    assert_mat4_near(body.to_matrix(), Matrix4::identity(), "body");
}

#[test]
fn wheels_should_form_a_rectangle_under_the_body() {
    let [front_right, rear_right, rear_left, front_left] = wheel_placements().map(|w| centre_of(&w));

    for centre in [front_right, rear_right, rear_left, front_left] {
        assert_near(centre.y, -0.7, "axle height");
    }
    assert_near(front_right.z, front_left.z, "front axle");
    assert_near(rear_right.z, rear_left.z, "rear axle");
    assert_near(front_right.z - rear_right.z, 1.0, "wheelbase");
    assert_near(front_right.x, rear_right.x, "right track");
    assert_near(front_left.x, rear_left.x, "left track");
    assert!(front_right.x > 0.5, "right wheels stand outside the body");
}

#[test]
fn hubs_should_cover_their_wheels() {
    let wheels = wheel_placements().map(|w| centre_of(&w));
    let hubs = wheel_glass_placements().map(|h| centre_of(&h));

    for (wheel, hub) in wheels.iter().zip(hubs.iter()) {
        assert!((wheel.y - hub.y).abs() < 0.02, "hub {hub:?} off wheel {wheel:?}");
        assert!((wheel.z - hub.z).abs() < 0.02, "hub {hub:?} off wheel {wheel:?}");
        assert_eq!(wheel.x.signum(), hub.x.signum());
    }
}

#[test]
fn hubs_should_face_away_from_the_car() {
    for hub in wheel_glass_placements() {
        let m = hub.to_matrix();
        let rotation = Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
        let facing = rotation * Vector3::unit_z();
        let centre = centre_of(&hub);

        assert!(
            facing.x * centre.x > 0.0,
            "hub at {centre:?} faces {facing:?}"
        );
    }
}

#[test]
fn headlights_should_sit_side_by_side_on_the_bumper() {
    let [right, left] = headlight_placements().map(|h| centre_of(&h));

    assert_vec3_near(right, Vector3::new(-0.3, -0.34, 0.02), "right headlight");
    assert_vec3_near(left, Vector3::new(0.3, -0.34, 0.02), "left headlight");
}

#[test]
fn lamp_should_be_a_small_cube_at_the_light() {
    let light = Vector3::new(1.2, 1.0, 2.0);
    let lamp = lamp_placement(light);

    assert_vec3_near(lamp.position, light, "lamp position");
    assert_vec3_near(lamp.scale, Vector3::new(0.2, 0.2, 0.2), "lamp scale");
}

#[test]
fn raw_instance_should_carry_model_and_normal_matrix() {
    let instance = Instance::scaled(0.5);
    let raw = instance.to_raw();

    assert_mat4_near(raw.model(), instance.to_matrix(), "model");

    assert_eq!(raw.normal(), Matrix3::from_value(2.0));
}
