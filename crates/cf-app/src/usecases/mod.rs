pub mod clipboard;
mod get_settings;
mod update_settings;

pub use clipboard::{
    ClearHistory, ClearScope, CopyClipToSystem, DeleteClip, LoadClipboardHistory,
    SearchClipboardHistory, ToggleClipPin, MAX_LOAD_LIMIT,
};
pub use get_settings::GetSettings;
pub use update_settings::UpdateSettings;
