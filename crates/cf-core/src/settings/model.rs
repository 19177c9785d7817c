use serde::{Deserialize, Serialize};

/// User-facing settings as the backend stores them.
///
/// Fields missing from a stored document fall back to their defaults, so
/// older settings files keep loading after new fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub global_shortcut: String,
    /// Feed capacity and reload limit.
    pub max_history_items: usize,
    pub auto_cleanup: bool,
    pub tray_text_length: usize,
    pub store_original_image: bool,
    pub max_pinned_in_tray: usize,
    pub max_recent_in_tray: usize,
    pub custom_data_path: Option<String>,
    pub enable_autostart: bool,
    pub locale: String,
}
