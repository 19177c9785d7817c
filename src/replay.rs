//! Offline replay of a recorded backend event stream.
//!
//! Applies wire events to a bare feed in order, the way the runtime would,
//! and reports what the presentation layer would end up showing.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};
use cf_app::i18n::Locale;
use cf_app::runtime::{FeedEvent, WireEvent};
use cf_core::clipboard::{ClipFeed, ClipItem};
use cf_core::ids::ClipId;

/// Characters kept in an entry preview, as in the tray menu.
pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOptions {
    pub capacity: usize,
    pub query: Option<String>,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayEntry {
    pub id: ClipId,
    pub kind: &'static str,
    pub pinned: bool,
    pub pin_order: Option<i32>,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub applied: usize,
    /// One message per event that could not be decoded.
    pub skipped: Vec<String>,
    pub evicted: Vec<ClipId>,
    pub capacity: usize,
    pub query: String,
    pub items: Vec<ReplayEntry>,
    pub view: Vec<ReplayEntry>,
    pub pinned: Vec<ReplayEntry>,
}

/// Reads a JSON array of wire events from `path`.
pub fn read_script(path: &Path) -> anyhow::Result<Vec<WireEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script: {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse replay script as a JSON event array")
}

/// Applies `events` in order. Undecodable events are skipped and reported,
/// never fatal.
///
/// Without a backend to reload from, `history-cleared` drops the unpinned
/// items locally.
pub fn replay(events: Vec<WireEvent>, options: &ReplayOptions) -> ReplayReport {
    let mut feed = ClipFeed::new(options.capacity);
    let mut applied = 0;
    let mut skipped = Vec::new();
    let mut evicted = Vec::new();

    for (index, wire) in events.into_iter().enumerate() {
        let event = match FeedEvent::from_wire(wire) {
            Ok(event) => event,
            Err(err) => {
                warn!(index, error = %err, "Skipping undecodable event");
                skipped.push(format!("#{}: {}", index, err));
                continue;
            }
        };

        debug!(index, event = event.name(), "Replaying event");
        match event {
            FeedEvent::ItemUpserted(item) => evicted.extend(feed.apply_upsert(item)),
            FeedEvent::ItemDeleted(id) => {
                feed.apply_delete(&id);
            }
            FeedEvent::HistoryCleared => {
                feed.clear_unpinned();
            }
        }
        applied += 1;
    }

    if let Some(query) = &options.query {
        feed.set_query(query.clone());
    }

    info!(
        applied,
        skipped = skipped.len(),
        evicted = evicted.len(),
        len = feed.len(),
        "Replay finished"
    );

    let describe = |items: Vec<&ClipItem>| -> Vec<ReplayEntry> {
        items
            .into_iter()
            .map(|item| entry(item, options.locale))
            .collect()
    };

    ReplayReport {
        applied,
        skipped,
        evicted,
        capacity: feed.capacity(),
        query: feed.query().to_string(),
        items: describe(feed.items().iter().collect()),
        view: describe(feed.view()),
        pinned: describe(feed.pinned_view()),
    }
}

fn entry(item: &ClipItem, locale: Locale) -> ReplayEntry {
    ReplayEntry {
        id: item.id.clone(),
        kind: item.content_type.as_str(),
        pinned: item.is_pinned,
        pin_order: item.pin_order,
        preview: locale.messages().describe(&item.payload(), PREVIEW_CHARS),
    }
}
