//! Configuration file parsing for the catalog
//!
//! Supports `~/.config/bpcat/config.toml` with per-field defaults, so a
//! partial file (or none at all) still yields a working setup.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings};
pub use types::{ApiSettings, ListSettings, Settings};
