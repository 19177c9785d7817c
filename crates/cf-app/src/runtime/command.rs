use serde::Serialize;
use tokio::sync::oneshot;
use cf_core::clipboard::ClipItem;
use cf_core::ids::ClipId;
use cf_core::settings::Settings;

use crate::i18n::Locale;
use crate::notify::{Toast, ToastId};

/// Local request to the feed runtime.
#[derive(Debug)]
pub enum FeedCommand {
    Reload,
    /// Sets the query and refreshes the feed from a backend search. A blank
    /// query falls back to a full reload.
    Search { query: String },
    /// Sets the query for local filtering only.
    SetQuery { query: String },
    TogglePin { id: ClipId },
    Delete { id: ClipId },
    Copy { id: ClipId },
    ClearAll,
    ClearUnpinned,
    SetCapacity { capacity: usize },
    SetLocale { locale: Locale },
    /// Saves settings, then applies their capacity and locale.
    UpdateSettings { settings: Settings },
    DismissToast { id: ToastId },
    Snapshot { reply: oneshot::Sender<FeedSnapshot> },
    Shutdown,
}

/// Point-in-time copy of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub items: Vec<ClipItem>,
    pub view: Vec<ClipItem>,
    pub pinned: Vec<ClipItem>,
    pub query: String,
    pub capacity: usize,
    pub locale: Locale,
    pub toasts: Vec<Toast>,
}

impl FeedSnapshot {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.inner().as_str()).collect()
    }

    pub fn view_ids(&self) -> Vec<&str> {
        self.view.iter().map(|item| item.id.inner().as_str()).collect()
    }

    pub fn pinned_ids(&self) -> Vec<&str> {
        self.pinned.iter().map(|item| item.id.inner().as_str()).collect()
    }
}
