use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info};
use cf_core::clipboard::{ClipItem, ContentKind, DEFAULT_CAPACITY};
use cf_core::ids::ClipId;
use cf_core::ports::{BackendError, ClipboardBackendPort, ClockPort};

use crate::runtime::{FeedEvent, FeedEventSender};

/// Matches the backend's search page size.
const SEARCH_LIMIT: usize = 50;

struct BackendState {
    /// Newest first.
    items: Vec<ClipItem>,
    events: Option<FeedEventSender>,
    /// Content last written to the system clipboard by `copy_to_system`.
    last_copied: Option<(ContentKind, String)>,
    offline: bool,
}

/// In-process clipboard history backend.
///
/// Stands in for the real capture and storage process in tests, the replay
/// tool and headless embedding. It follows the same contract: retention of
/// unpinned clips, `max + 1` pin ranks, and change announcements through the
/// attached event sender.
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
    /// Held from a capture's mutation until its event is queued, so events
    /// reach the feed in capture order.
    capture_gate: Mutex<()>,
    clock: Arc<dyn ClockPort>,
    max_items: usize,
    auto_cleanup: bool,
}

impl InMemoryBackend {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self::with_retention(clock, DEFAULT_CAPACITY, true)
    }

    pub fn with_retention(clock: Arc<dyn ClockPort>, max_items: usize, auto_cleanup: bool) -> Self {
        Self {
            state: Mutex::new(BackendState {
                items: Vec::new(),
                events: None,
                last_copied: None,
                offline: false,
            }),
            capture_gate: Mutex::new(()),
            clock,
            max_items: max_items.max(1),
            auto_cleanup,
        }
    }

    /// Starts announcing changes on `sender`.
    pub async fn attach_events(&self, sender: FeedEventSender) {
        self.state.lock().await.events = Some(sender);
    }

    /// While offline every port call fails with `BackendUnavailable`.
    pub async fn set_offline(&self, offline: bool) {
        self.state.lock().await.offline = offline;
    }

    /// Seeds history without announcing anything. `items` are newest first.
    pub async fn seed(&self, items: Vec<ClipItem>) {
        self.state.lock().await.items = items;
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.items.is_empty()
    }

    /// Records a new clipboard change, as the capture watcher would.
    ///
    /// Returns `None` when the content is what `copy_to_system` just wrote,
    /// so restoring a clip does not capture it a second time.
    ///
    /// Waits for room in the event channel, so a full feed slows capture
    /// down instead of losing the change.
    pub async fn capture(&self, kind: ContentKind, bytes: &[u8]) -> Option<ClipItem> {
        let _gate = self.capture_gate.lock().await;
        let item = ClipItem::new(ClipId::new(), kind, bytes, self.now_secs());

        let sender = {
            let mut state = self.state.lock().await;
            if state.last_copied.as_ref() == Some(&(kind, item.content.clone())) {
                state.last_copied = None;
                debug!(kind = kind.as_str(), "Skipping self-copied content");
                return None;
            }

            state.items.insert(0, item.clone());
            if self.auto_cleanup {
                let removed = trim_unpinned(&mut state.items, self.max_items);
                if removed > 0 {
                    debug!(removed, "Auto-cleanup removed old clips");
                }
            }
            state.events.clone()
        };

        info!(clip_id = %item.id, kind = kind.as_str(), "Captured clip");
        // The state lock is released: the runtime may be inside a port call.
        if let Some(sender) = sender {
            if sender
                .send(FeedEvent::ItemUpserted(item.clone()))
                .await
                .is_err()
            {
                debug!("Feed event channel closed");
            }
        }
        Some(item)
    }

    pub async fn capture_text(&self, text: &str) -> Option<ClipItem> {
        self.capture(ContentKind::Text, text.as_bytes()).await
    }

    /// Content and kind of the last clip restored to the system clipboard.
    pub async fn last_copied(&self) -> Option<(ContentKind, String)> {
        self.state.lock().await.last_copied.clone()
    }

    fn now_secs(&self) -> i64 {
        self.clock.now_ms() / 1000
    }
}

fn ensure_online(state: &BackendState) -> Result<(), BackendError> {
    if state.offline {
        return Err(BackendError::BackendUnavailable(
            "backend is offline".to_string(),
        ));
    }
    Ok(())
}

fn position(state: &BackendState, id: &ClipId) -> Result<usize, BackendError> {
    state
        .items
        .iter()
        .position(|item| &item.id == id)
        .ok_or_else(|| BackendError::NotFound(id.clone()))
}

/// Announces a change made by a port call.
///
/// Port calls come from the runtime that drains the channel, so this never
/// waits: when the channel is full the event is handed to a task that
/// delivers it once the runtime has made room.
fn emit(state: &BackendState, event: FeedEvent) {
    let Some(sender) = &state.events else {
        return;
    };
    match sender.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            debug!(event = event.name(), "Feed event channel full, deferring");
            let sender = sender.clone();
            tokio::spawn(async move {
                if sender.send(event).await.is_err() {
                    debug!("Feed event channel closed");
                }
            });
        }
        Err(TrySendError::Closed(_)) => debug!("Feed event channel closed"),
    }
}

/// Drops the oldest unpinned clips beyond `max_items`. Returns how many.
fn trim_unpinned(items: &mut Vec<ClipItem>, max_items: usize) -> usize {
    let mut kept_unpinned = 0;
    let before = items.len();
    items.retain(|item| {
        if item.is_pinned {
            return true;
        }
        kept_unpinned += 1;
        kept_unpinned <= max_items
    });
    before - items.len()
}

#[async_trait]
impl ClipboardBackendPort for InMemoryBackend {
    async fn load_all(&self, limit: usize) -> Result<Vec<ClipItem>, BackendError> {
        let state = self.state.lock().await;
        ensure_online(&state)?;
        Ok(state.items.iter().take(limit).cloned().collect())
    }

    async fn search(&self, text: &str) -> Result<Vec<ClipItem>, BackendError> {
        let state = self.state.lock().await;
        ensure_online(&state)?;

        let needle = text.to_lowercase();
        Ok(state
            .items
            .iter()
            .filter(|item| item.matches_query(&needle))
            .take(SEARCH_LIMIT)
            .cloned()
            .collect())
    }

    async fn set_pinned(&self, id: &ClipId, pinned: bool) -> Result<(), BackendError> {
        let mut state = self.state.lock().await;
        ensure_online(&state)?;
        let pos = position(&state, id)?;

        let pin_order = if pinned {
            let max_order = state
                .items
                .iter()
                .filter(|item| item.is_pinned)
                .filter_map(|item| item.pin_order)
                .max();
            Some(max_order.unwrap_or(0) + 1)
        } else {
            None
        };

        let item = &mut state.items[pos];
        item.is_pinned = pinned;
        item.pin_order = pin_order;
        Ok(())
    }

    async fn delete(&self, id: &ClipId) -> Result<(), BackendError> {
        let mut state = self.state.lock().await;
        ensure_online(&state)?;
        let pos = position(&state, id)?;
        state.items.remove(pos);
        Ok(())
    }

    async fn copy_to_system(&self, id: &ClipId) -> Result<(), BackendError> {
        let now = self.now_secs();
        let mut state = self.state.lock().await;
        ensure_online(&state)?;
        let pos = position(&state, id)?;

        let mut item = state.items.remove(pos);
        item.timestamp = now;
        state.last_copied = Some((item.content_type, item.content.clone()));
        state.items.insert(0, item.clone());

        emit(&state, FeedEvent::ItemUpserted(item));
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), BackendError> {
        let mut state = self.state.lock().await;
        ensure_online(&state)?;
        state.items.clear();
        emit(&state, FeedEvent::HistoryCleared);
        Ok(())
    }

    async fn clear_unpinned(&self) -> Result<(), BackendError> {
        let mut state = self.state.lock().await;
        ensure_online(&state)?;
        state.items.retain(|item| item.is_pinned);
        emit(&state, FeedEvent::HistoryCleared);
        Ok(())
    }
}
