//! The bare car with a metal finish, lit from the camera.

use car_scene::SceneConfig;

fn main() {
    if let Err(e) = car_scene::run(SceneConfig::showroom()) {
        eprintln!("showroom failed: {e:#}");
        std::process::exit(-1);
    }
}
