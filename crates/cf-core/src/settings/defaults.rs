use super::model::*;

pub const DEFAULT_GLOBAL_SHORTCUT: &str = "CommandOrControl+Shift+V";
pub const DEFAULT_LOCALE: &str = "zh-CN";

impl Default for Settings {
    fn default() -> Self {
        Self {
            global_shortcut: DEFAULT_GLOBAL_SHORTCUT.to_string(),
            max_history_items: 100,
            auto_cleanup: true,
            tray_text_length: 50,
            store_original_image: false,
            max_pinned_in_tray: 5,
            max_recent_in_tray: 20,
            custom_data_path: None,
            enable_autostart: false,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}
