//! The full scene: textured car under the lamp, rain and exhaust smoke.

use car_scene::SceneConfig;

fn main() {
    if let Err(e) = car_scene::run(SceneConfig::night_drive()) {
        eprintln!("night_drive failed: {e:#}");
        std::process::exit(-1);
    }
}
