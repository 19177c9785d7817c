mod clear_history;
mod copy_clip;
mod delete_clip;
mod load_history;
mod search_history;
mod toggle_pin;

pub use clear_history::{ClearHistory, ClearScope};
pub use copy_clip::CopyClipToSystem;
pub use delete_clip::DeleteClip;
pub use load_history::{LoadClipboardHistory, MAX_LOAD_LIMIT};
pub use search_history::SearchClipboardHistory;
pub use toggle_pin::ToggleClipPin;
