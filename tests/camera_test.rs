use std::time::Duration;

use car_scene::{
    camera::{Camera, CameraController, CameraUniform, MAX_FOVY, MAX_PITCH, MIN_FOVY, Projection},
    config::CameraConfig,
};
use cgmath::{Deg, Vector3};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseScrollDelta},
    keyboard::KeyCode,
};

use crate::common::test_utils::{assert_mat4_near, assert_near, assert_vec3_near};

mod common;

fn start() -> (Camera, Projection, CameraController) {
    let config = CameraConfig::default();
    let camera = Camera::from(&config);
    let projection = Projection::new(800, 600, config.fovy, config.znear, config.zfar);
    let controller = CameraController::new(config.speed, config.sensitivity);
    (camera, projection, controller)
}

#[test]
fn should_start_looking_down_negative_z() {
    let (camera, projection, _) = start();

    assert_vec3_near(camera.front(), Vector3::new(0.0, 0.0, -1.0), "front");
    assert_vec3_near(camera.right(), Vector3::new(1.0, 0.0, 0.0), "right");
    assert_eq!(camera.position, cgmath::Point3::new(0.0, 0.0, 3.0));
    assert_near(projection.aspect(), 800.0 / 600.0, "aspect");
}

#[test]
fn should_move_by_speed_times_frame_time() {
    let (mut camera, mut projection, mut controller) = start();

    assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));
    assert_near(camera.position.z, 0.5, "after one second forward");

    controller.update(&mut camera, &mut projection, Duration::from_millis(200));
    assert_near(camera.position.z, 0.0, "after another 200ms");
}

#[test]
fn should_strafe_and_stop_on_release() {
    let (mut camera, mut projection, mut controller) = start();

    controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_secs(2));
    assert_near(camera.position.x, 5.0, "strafed right");

    controller.process_keyboard(KeyCode::KeyD, ElementState::Released);
    controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));
    assert_near(camera.position.x, 2.5, "strafed back left");
    assert_near(camera.position.z, 3.0, "no forward movement");
}

#[test]
fn should_stop_after_release_all() {
    let (mut camera, mut projection, mut controller) = start();

    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.handle_mouse(40.0, -20.0);
    controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 3.0));
    controller.release_all();
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));

    assert_eq!(camera.position, cgmath::Point3::new(0.0, 0.0, 3.0));
    assert_eq!(camera.yaw, Deg(-90.0));
    assert_eq!(camera.pitch, Deg(0.0));
    assert_eq!(projection.fovy, Deg(45.0));

    // Keys pressed after regaining focus work as before.
    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));
    assert_near(camera.position.z, 0.5, "moved after refocus");
}

#[test]
fn should_cancel_opposite_keys() {
    let (mut camera, mut projection, mut controller) = start();

    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));

    assert_vec3_near(
        Vector3::new(camera.position.x, camera.position.y, camera.position.z),
        Vector3::new(0.0, 0.0, 3.0),
        "position",
    );
}

#[test]
fn should_ignore_unbound_keys() {
    let (_, _, mut controller) = start();

    assert!(!controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
    assert!(!controller.process_keyboard(KeyCode::Escape, ElementState::Pressed));
    assert!(controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed));
}

#[test]
fn should_turn_by_mouse_motion_times_sensitivity() {
    let (mut camera, mut projection, mut controller) = start();

    controller.handle_mouse(100.0, 0.0);
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_near(camera.yaw.0, -80.0, "yaw");

    // Moving the mouse up looks up.
    controller.handle_mouse(0.0, -50.0);
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_near(camera.pitch.0, 5.0, "pitch");
    assert!(camera.front().y > 0.0);

    // Motion is consumed by an update.
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_near(camera.yaw.0, -80.0, "yaw after idle frame");
}

#[test]
fn should_clamp_pitch() {
    let (mut camera, mut projection, mut controller) = start();

    controller.handle_mouse(0.0, -10_000.0);
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_eq!(camera.pitch, MAX_PITCH);

    controller.handle_mouse(0.0, 20_000.0);
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_eq!(camera.pitch, -MAX_PITCH);
}

#[test]
fn should_zoom_within_limits() {
    let (mut camera, mut projection, mut controller) = start();

    controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 1.0));
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_eq!(projection.fovy, Deg(44.0));

    controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 100.0));
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_eq!(projection.fovy, MIN_FOVY);

    controller.handle_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -2000.0)));
    controller.update(&mut camera, &mut projection, Duration::ZERO);
    assert_eq!(projection.fovy, MAX_FOVY);
}

#[test]
fn should_follow_surface_size_on_resize() {
    let (_, mut projection, _) = start();

    projection.resize(1024, 512);
    assert_near(projection.aspect(), 2.0, "aspect");

    // A zero height must not produce an infinite aspect.
    projection.resize(300, 0);
    assert!(projection.aspect().is_finite());
}

#[test]
fn should_upload_projection_times_view() {
    let (camera, projection, _) = start();
    let mut uniform = CameraUniform::new();

    uniform.update_view_proj(&camera, &projection);

    assert_mat4_near(
        uniform.view_proj(),
        projection.calc_matrix() * camera.calc_matrix(),
        "view_proj",
    );
}
