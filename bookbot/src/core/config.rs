// src/core/config.rs
mod loader;

use anyhow::Result;
use std::path::Path;

use crate::models::Settings;

pub use loader::{find_config_file, load_config_file};

/// Name of the configuration file searched for in the working directory and
/// its parents.
pub const CONFIG_FILE_NAME: &str = ".bookbot.toml";

/// Loads settings from `explicit`, or from the nearest `.bookbot.toml` at or
/// above `start_dir`. Without either, every setting is unset.
///
/// # Errors
///
/// This function may return an error if the chosen file cannot be read or parsed.
pub fn load_settings(explicit: Option<&Path>, start_dir: &Path) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    path.map_or_else(|| Ok(Settings::default()), |path| load_config_file(&path))
}
