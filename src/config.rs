//! Scene configuration.
//!
//! Everything that differs between the two programs (night drive and showroom)
//! or that someone might want to tweak lives in [`SceneConfig`]. There is no
//! config file: binaries build a config in code and hand it to
//! [`crate::flow::run`].

use cgmath::Deg;

/// Settings for the rain emitter.
#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub amount: usize,
    /// Distance every drop falls per frame.
    pub fall_speed: f32,
    pub color: [f32; 4],
    /// Non-uniform scale applied to the drop prism before offsetting it.
    pub drop_scale: [f32; 3],
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            amount: 5000,
            fall_speed: 0.01,
            color: [0.0, 1.0, 1.0, 1.0],
            drop_scale: [0.0025, 0.005, 0.005],
        }
    }
}

/// Settings for the exhaust smoke emitter.
#[derive(Clone, Debug, PartialEq)]
pub struct SmokeConfig {
    pub amount: usize,
    pub color: [f32; 4],
    pub puff_scale: [f32; 3],
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            amount: 300,
            color: [0.55, 0.55, 0.55, 1.0],
            puff_scale: [0.01, 0.01, 0.01],
        }
    }
}

/// Camera start state and input tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: Deg<f32>,
    pub pitch: Deg<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per unit of raw mouse motion.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            // A yaw of zero looks along +X, so start rotated to look down -Z.
            yaw: Deg(-90.0),
            pitch: Deg(0.0),
            fovy: Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    /// Body texture, relative to `./assets/`.
    pub texture_file: String,
    pub camera: CameraConfig,
    pub light_position: [f32; 3],
    pub light_color: [f32; 3],
    /// Draw the lamp cube and light the car from it. Without a lamp the car
    /// is lit from the camera.
    pub lamp: bool,
    pub rain: Option<RainConfig>,
    pub smoke: Option<SmokeConfig>,
}

impl SceneConfig {
    /// Textured car under a lamp in the rain with a running engine.
    pub fn night_drive() -> Self {
        Self {
            title: "Night Drive".to_string(),
            width: 800,
            height: 600,
            clear_colour: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            texture_file: "car_texture.jpg".to_string(),
            camera: CameraConfig::default(),
            light_position: [1.2, 1.0, 2.0],
            light_color: [1.0, 1.0, 1.0],
            lamp: true,
            rain: Some(RainConfig::default()),
            smoke: Some(SmokeConfig::default()),
        }
    }

    /// The bare car with a metal finish, no lamp and no weather.
    pub fn showroom() -> Self {
        Self {
            title: "Showroom".to_string(),
            texture_file: "metal-texture.jpg".to_string(),
            lamp: false,
            rain: None,
            smoke: None,
            ..Self::night_drive()
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::night_drive()
    }
}
