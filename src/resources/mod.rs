/**
 * This module contains the static scene geometry and all logic for loading
 * textures from external files.
 */
pub mod car;
pub mod texture;

use anyhow::Context;

/// Assets are resolved relative to the working directory, so binaries are
/// expected to run from the repository root.
pub const ASSET_DIR: &str = "assets";

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    let path = std::path::Path::new("./").join(ASSET_DIR).join(file_name);
    let data = std::fs::read(&path).with_context(|| format!("could not read {}", path.display()))?;

    Ok(data)
}
