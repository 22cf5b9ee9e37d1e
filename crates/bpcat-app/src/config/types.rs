//! Configuration types for the catalog

use serde::{Deserialize, Serialize};

use crate::list_state::FALLBACK_PAGE_SIZE;

/// Global application settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection settings.
    pub api: ApiSettings,

    /// Product list settings.
    pub list: ListSettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the products backend.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3002".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Product list settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListSettings {
    /// Initial page size for a freshly entered list view.
    pub page_size: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: FALLBACK_PAGE_SIZE,
        }
    }
}
