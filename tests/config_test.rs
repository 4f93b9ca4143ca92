use car_scene::{
    SceneConfig,
    camera::Camera,
    pipelines::{light::LightUniform, particle::ParticleStyle},
};
use cgmath::{Deg, Vector3};

use crate::common::test_utils::assert_vec3_near;

mod common;

#[test]
fn night_drive_should_show_everything() {
    let config = SceneConfig::night_drive();

    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.texture_file, "car_texture.jpg");
    assert!(config.lamp);
    assert_eq!(config.light_position, [1.2, 1.0, 2.0]);
    assert_eq!(config.clear_colour.r, 0.2);
    assert_eq!(config.clear_colour.g, 0.3);
    assert_eq!(config.clear_colour.b, 0.3);

    let rain = config.rain.expect("night drive has rain");
    assert_eq!(rain.amount, 5000);
    assert_eq!(rain.fall_speed, 0.01);
    assert_eq!(rain.color, [0.0, 1.0, 1.0, 1.0]);
    assert_eq!(rain.drop_scale, [0.0025, 0.005, 0.005]);
    assert!(config.smoke.is_some());
}

#[test]
fn showroom_should_be_the_bare_car() {
    let config = SceneConfig::showroom();

    assert_eq!(config.texture_file, "metal-texture.jpg");
    assert!(!config.lamp);
    assert!(config.rain.is_none());
    assert!(config.smoke.is_none());
    // Everything else matches the night drive.
    assert_eq!(config.camera, SceneConfig::night_drive().camera);
    assert_eq!(config.clear_colour, SceneConfig::night_drive().clear_colour);
}

#[test]
fn default_should_be_the_night_drive() {
    assert_eq!(SceneConfig::default(), SceneConfig::night_drive());
}

#[test]
fn camera_should_start_from_its_config() {
    let config = SceneConfig::default().camera;
    let camera = Camera::from(&config);

    assert_eq!(camera.yaw, Deg(-90.0));
    assert_eq!(camera.pitch, Deg(0.0));
    assert_eq!(config.fovy, Deg(45.0));
    assert_eq!((config.znear, config.zfar), (0.1, 100.0));
    assert_eq!((config.speed, config.sensitivity), (2.5, 0.1));
}

#[test]
fn light_uniform_should_match_the_light_mode() {
    let white = Vector3::new(1.0, 1.0, 1.0);

    let lamp = LightUniform::at(Vector3::new(1.2, 1.0, 2.0), white);
    assert!(!lamp.follows_camera());
    assert_vec3_near(lamp.position(), Vector3::new(1.2, 1.0, 2.0), "lamp position");
    assert_vec3_near(lamp.color(), white, "lamp colour");

    let headlamp = LightUniform::headlamp(white);
    assert!(headlamp.follows_camera());
}

#[test]
fn gpu_structs_should_keep_uniform_layout() {
    // vec3 + u32, vec3 + padding
    assert_eq!(std::mem::size_of::<LightUniform>(), 32);
    // colour + scale
    assert_eq!(std::mem::size_of::<ParticleStyle>(), 32);

    let style = ParticleStyle::new([0.0, 1.0, 1.0, 1.0], [0.0025, 0.005, 0.005]);
    assert_eq!(style.scale, [0.0025, 0.005, 0.005, 1.0]);
}
