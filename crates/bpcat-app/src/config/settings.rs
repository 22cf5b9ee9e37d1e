//! Settings loading for bpcat/config.toml

use std::path::{Path, PathBuf};

use tracing::warn;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const BPCAT_DIR: &str = "bpcat";

/// Default config file location: `~/.config/bpcat/config.toml`
/// (platform equivalent via the `dirs` crate).
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(BPCAT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from a config file.
///
/// A missing file is normal and yields the defaults. A file that exists
/// but does not parse is reported and also yields the defaults; a typo
/// in the config must not take the tool down.
pub fn load_settings(path: &Path) -> Settings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Settings::default(),
    };
    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
            Settings::default()
        }
    }
}
