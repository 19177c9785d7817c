//! End-to-end tests of the feed runtime against the in-process backend.

use std::sync::Arc;

use cf_app::adapters::{FixedClock, InMemoryBackend, InMemorySettings};
use cf_app::i18n::Locale;
use cf_app::notify::ToastKind;
use cf_app::runtime::{
    spawn_feed_runtime, FeedEvent, FeedEventSender, FeedHandle, FeedHandleError,
    FeedRuntimeOptions,
};
use cf_core::clipboard::{ClipItem, ContentKind};
use cf_core::ports::SettingsPort;
use cf_core::settings::Settings;
use tokio::task::JoinHandle;

struct Harness {
    backend: Arc<InMemoryBackend>,
    settings: Arc<InMemorySettings>,
    clock: Arc<FixedClock>,
    handle: FeedHandle,
    events: FeedEventSender,
    task: JoinHandle<()>,
}

async fn start_with_channel(
    capacity: usize,
    channel_size: usize,
    seed: Vec<ClipItem>,
) -> Harness {
    let clock = Arc::new(FixedClock::new(1_700_000_000_000));
    let backend = Arc::new(InMemoryBackend::new(clock.clone()));
    backend.seed(seed).await;
    let settings = Arc::new(InMemorySettings::default());

    let options = FeedRuntimeOptions {
        capacity,
        locale: Locale::En,
        ..FeedRuntimeOptions::default()
    };
    let (handle, events, task) = spawn_feed_runtime(
        backend.clone(),
        settings.clone(),
        clock.clone(),
        options,
        channel_size,
    );
    backend.attach_events(events.clone()).await;

    Harness {
        backend,
        settings,
        clock,
        handle,
        events,
        task,
    }
}

async fn start_with(capacity: usize, seed: Vec<ClipItem>) -> Harness {
    start_with_channel(capacity, 16, seed).await
}

async fn start(seed: Vec<ClipItem>) -> Harness {
    start_with(100, seed).await
}

#[tokio::test]
async fn test_initial_reload_adopts_backend_history() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["b", "a"]);
    assert_eq!(snapshot.capacity, 100);
    assert!(snapshot.toasts.is_empty());
}

#[tokio::test]
async fn test_live_captures_arrive_in_order() {
    let h = start(Vec::new()).await;

    let first = h.backend.capture_text("one").await.unwrap();
    let second = h.backend.capture_text("two").await.unwrap();
    let third = h.backend.capture(ContentKind::Image, b"png").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(
        snapshot.ids(),
        vec![
            third.id.inner().as_str(),
            second.id.inner().as_str(),
            first.id.inner().as_str()
        ]
    );
}

#[tokio::test]
async fn test_feed_capacity_bounds_unpinned_items() {
    let h = start_with(2, vec![ClipItem::text("p", "pinned", 0).pinned(1)]).await;

    for text in ["a", "b", "c", "d"] {
        h.backend.capture_text(text).await;
    }

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 3);
    assert_eq!(snapshot.items.iter().filter(|i| !i.is_pinned).count(), 2);
    assert_eq!(snapshot.pinned_ids(), vec!["p"]);
    assert_eq!(h.backend.len().await, 5);
}

#[tokio::test]
async fn test_small_event_channel_loses_no_captures() {
    let h = start_with_channel(100, 2, Vec::new()).await;

    for text in ["a", "b", "c", "d", "e", "f"] {
        h.backend.capture_text(text).await;
    }

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 6);
    assert_eq!(h.backend.len().await, 6);
}

#[tokio::test]
async fn test_deleted_event_removes_item() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    h.events
        .send(FeedEvent::ItemDeleted("a".into()))
        .await
        .unwrap();
    h.events
        .send(FeedEvent::ItemDeleted("missing".into()))
        .await
        .unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["b"]);
}

#[tokio::test]
async fn test_history_cleared_triggers_reload() {
    let h = start(vec![ClipItem::text("a", "first", 1)]).await;
    h.backend.seed(vec![ClipItem::text("z", "fresh", 9)]).await;

    h.events.send(FeedEvent::HistoryCleared).await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["z"]);
}

#[tokio::test]
async fn test_toggle_pin_reloads_with_backend_rank() {
    let h = start(vec![
        ClipItem::text("b", "second", 2).pinned(4),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    h.handle.toggle_pin("a").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.pinned_ids(), vec!["b", "a"]);
    let a = snapshot.items.iter().find(|i| i.id == "a").unwrap();
    assert_eq!(a.pin_order, Some(5));
}

#[tokio::test]
async fn test_failed_pin_toggle_rolls_back() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;
    let before = h.handle.snapshot().await.unwrap();

    h.backend.set_offline(true).await;
    h.handle.toggle_pin("a").await.unwrap();

    let after = h.handle.snapshot().await.unwrap();
    assert_eq!(after.items, before.items);
    assert!(after.pinned.is_empty());
    assert_eq!(after.toasts.len(), 1);
    assert_eq!(after.toasts[0].kind, ToastKind::Error);
    assert_eq!(after.toasts[0].message, "Failed to pin");
}

#[tokio::test]
async fn test_failed_delete_leaves_feed_untouched() {
    let h = start(vec![ClipItem::text("a", "first", 1)]).await;

    h.backend.set_offline(true).await;
    h.handle.delete("a").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["a"]);
    assert_eq!(snapshot.toasts[0].message, "Failed to delete");
}

#[tokio::test]
async fn test_delete_removes_after_backend_ack() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    h.handle.delete("b").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["a"]);
    assert!(snapshot.toasts.is_empty());
    assert_eq!(h.backend.len().await, 1);
}

#[tokio::test]
async fn test_copy_promotes_clip_and_posts_success_toast() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    h.handle.copy("a").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["a", "b"]);
    assert_eq!(snapshot.toasts.len(), 1);
    assert_eq!(snapshot.toasts[0].kind, ToastKind::Success);
    assert_eq!(snapshot.toasts[0].message, "Copied to clipboard");
}

#[tokio::test]
async fn test_copy_of_unknown_clip_posts_error_toast() {
    let h = start(Vec::new()).await;

    h.handle.copy("ghost").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.toasts[0].message, "Copy failed");
}

#[tokio::test]
async fn test_toasts_expire_and_can_be_dismissed() {
    let h = start(vec![ClipItem::text("a", "first", 1)]).await;

    h.handle.copy("a").await.unwrap();
    h.handle.copy("missing").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.toasts.len(), 2);

    h.handle.dismiss_toast(snapshot.toasts[0].id).await.unwrap();
    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.toasts.len(), 1);
    assert_eq!(snapshot.toasts[0].kind, ToastKind::Error);

    h.clock.advance(2_000);
    let snapshot = h.handle.snapshot().await.unwrap();
    assert!(snapshot.toasts.is_empty());
}

#[tokio::test]
async fn test_clear_unpinned_keeps_pinned() {
    let h = start(vec![
        ClipItem::text("c", "third", 3),
        ClipItem::text("b", "second", 2).pinned(1),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    h.handle.clear_unpinned().await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["b"]);
    assert_eq!(snapshot.toasts[0].message, "Cleared 2 items");
}

#[tokio::test]
async fn test_clear_all_empties_feed() {
    let h = start(vec![ClipItem::text("b", "second", 2).pinned(1)]).await;

    h.handle.clear_all().await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert!(snapshot.items.is_empty());
}

#[tokio::test]
async fn test_search_replaces_items_and_filters_view() {
    let h = start(vec![
        ClipItem::text("c", "foo bar", 3),
        ClipItem::new("img".into(), ContentKind::Image, b"foo", 2),
        ClipItem::text("a", "nothing", 1),
    ])
    .await;

    h.handle.search("FOO").await.unwrap();
    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.query, "FOO");
    assert_eq!(snapshot.ids(), vec!["c"]);
    assert_eq!(snapshot.view_ids(), vec!["c"]);

    h.handle.search("").await.unwrap();
    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["c", "img", "a"]);
    assert_eq!(snapshot.view_ids(), vec!["c", "img", "a"]);
}

#[tokio::test]
async fn test_search_trims_query_before_filtering() {
    let h = start(vec![
        ClipItem::text("b", "other", 2),
        ClipItem::text("a", "foobar", 1),
    ])
    .await;

    h.handle.search("foo ").await.unwrap();
    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.query, "foo");
    assert_eq!(snapshot.ids(), vec!["a"]);
    assert_eq!(snapshot.view_ids(), vec!["a"]);

    h.handle.search("  ").await.unwrap();
    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.query, "");
    assert_eq!(snapshot.ids(), vec!["b", "a"]);
    assert_eq!(snapshot.view_ids(), vec!["b", "a"]);
}

#[tokio::test]
async fn test_set_query_filters_locally() {
    let h = start(vec![
        ClipItem::text("c", "Foo bar", 3),
        ClipItem::text("a", "nothing", 1),
    ])
    .await;

    h.handle.set_query("foo").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.ids(), vec!["c", "a"]);
    assert_eq!(snapshot.view_ids(), vec!["c"]);
}

#[tokio::test]
async fn test_update_settings_saves_then_applies_capacity_and_locale() {
    let h = start(vec![
        ClipItem::text("c", "third", 3),
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    let settings = Settings {
        max_history_items: 2,
        locale: "zh-CN".to_string(),
        ..Settings::default()
    };
    h.handle.update_settings(settings.clone()).await.unwrap();
    h.handle.copy("missing").await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.capacity, 2);
    assert_eq!(snapshot.ids(), vec!["c", "b"]);
    assert_eq!(snapshot.locale, Locale::ZhCn);
    assert_eq!(snapshot.toasts[0].message, "复制失败");
    assert_eq!(h.settings.load().await.unwrap(), settings);
}

#[tokio::test]
async fn test_rejected_settings_keep_feed_and_post_error_toast() {
    let h = start(vec![
        ClipItem::text("b", "second", 2),
        ClipItem::text("a", "first", 1),
    ])
    .await;

    let settings = Settings {
        max_history_items: 0,
        locale: "zh-CN".to_string(),
        ..Settings::default()
    };
    h.handle.update_settings(settings).await.unwrap();

    let snapshot = h.handle.snapshot().await.unwrap();
    assert_eq!(snapshot.capacity, 100);
    assert_eq!(snapshot.ids(), vec!["b", "a"]);
    assert_eq!(snapshot.locale, Locale::En);
    assert_eq!(snapshot.toasts[0].kind, ToastKind::Error);
    assert_eq!(snapshot.toasts[0].message, "Failed to save");
    assert_eq!(h.settings.load().await.unwrap(), Settings::default());
}

#[tokio::test]
async fn test_shutdown_stops_runtime() {
    let h = start(Vec::new()).await;

    h.handle.shutdown().await.unwrap();
    h.task.await.unwrap();

    assert!(!h.handle.is_alive());
    assert_eq!(
        h.handle.snapshot().await,
        Err(FeedHandleError::ChannelClosed)
    );
}
