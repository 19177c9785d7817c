use serde::Deserialize;
use cf_core::clipboard::ClipItem;
use cf_core::ids::ClipId;
use cf_core::ports::BackendError;

pub const CLIPBOARD_CHANGED: &str = "clipboard-changed";
pub const CLIPBOARD_DELETED: &str = "clipboard-deleted";
pub const HISTORY_CLEARED: &str = "history-cleared";

/// Live change pushed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A new capture, or an existing clip promoted to the top.
    ItemUpserted(ClipItem),
    ItemDeleted(ClipId),
    /// Unpinned history was cleared; the feed must reload.
    HistoryCleared,
}

/// An event as it arrives over the backend's event channel.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEvent {
    pub event: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl FeedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FeedEvent::ItemUpserted(_) => CLIPBOARD_CHANGED,
            FeedEvent::ItemDeleted(_) => CLIPBOARD_DELETED,
            FeedEvent::HistoryCleared => HISTORY_CLEARED,
        }
    }

    /// Decodes a wire event. Unknown names and malformed payloads are
    /// `DecodeFailure`.
    pub fn from_wire(wire: WireEvent) -> Result<Self, BackendError> {
        match wire.event.as_str() {
            CLIPBOARD_CHANGED => serde_json::from_value::<ClipItem>(wire.payload)
                .map(FeedEvent::ItemUpserted)
                .map_err(|e| {
                    BackendError::DecodeFailure(format!("{} payload: {}", CLIPBOARD_CHANGED, e))
                }),
            CLIPBOARD_DELETED => serde_json::from_value::<ClipId>(wire.payload)
                .map(FeedEvent::ItemDeleted)
                .map_err(|e| {
                    BackendError::DecodeFailure(format!("{} payload: {}", CLIPBOARD_DELETED, e))
                }),
            HISTORY_CLEARED => Ok(FeedEvent::HistoryCleared),
            other => Err(BackendError::DecodeFailure(format!(
                "unknown event: {}",
                other
            ))),
        }
    }
}
