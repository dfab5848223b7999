//! Internal asset file resolution
//!
//! Game data files are addressed by a logical path relative to the assets
//! root, e.g. `debug/debug-camera.json`.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the assets root
pub const ASSETS_DIR_ENV: &str = "OBSTACLE_ASSETS_DIR";

/// Default assets root, relative to the working directory
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Directory that internal files are resolved against
pub fn assets_root() -> PathBuf {
    match env::var_os(ASSETS_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_ASSETS_DIR),
    }
}

/// Resolve a logical asset path against the assets root
pub fn internal_file(relative: impl AsRef<Path>) -> PathBuf {
    resolve(assets_root(), relative)
}

fn resolve(root: impl AsRef<Path>, relative: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join(relative)
}
