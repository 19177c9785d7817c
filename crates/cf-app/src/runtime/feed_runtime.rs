use std::sync::Arc;
use tracing::{debug, error, info, warn};

use cf_core::clipboard::{ClipFeed, DEFAULT_CAPACITY};
use cf_core::config::FeedConfig;
use cf_core::ids::ClipId;
use cf_core::ports::{BackendError, ClipboardBackendPort, ClockPort, SettingsPort};
use cf_core::settings::Settings;

use super::command::{FeedCommand, FeedSnapshot};
use super::event::FeedEvent;
use super::event_bus::{FeedCommandReceiver, FeedEventReceiver};
use crate::i18n::{self, Locale, Messages};
use crate::notify::{ToastKind, ToastStore, DEFAULT_TOAST_DURATION_MS};
use crate::usecases::{
    ClearHistory, ClearScope, CopyClipToSystem, DeleteClip, LoadClipboardHistory,
    SearchClipboardHistory, ToggleClipPin, UpdateSettings, MAX_LOAD_LIMIT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRuntimeOptions {
    pub capacity: usize,
    pub load_limit: usize,
    pub toast_duration_ms: u64,
    pub locale: Locale,
}

impl Default for FeedRuntimeOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_limit: DEFAULT_CAPACITY,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            locale: Locale::default(),
        }
    }
}

impl From<&FeedConfig> for FeedRuntimeOptions {
    fn from(config: &FeedConfig) -> Self {
        Self {
            capacity: config.capacity,
            load_limit: config.load_limit.clamp(1, MAX_LOAD_LIMIT),
            toast_duration_ms: config.toast_duration_ms,
            locale: Locale::resolve(&config.locale, &i18n::system_language()),
        }
    }
}

/// Use cases the runtime drives.
///
/// 运行时驱动的用例集合，共享同一个后端与设置存储。
pub struct FeedUseCases {
    load: LoadClipboardHistory,
    search: SearchClipboardHistory,
    toggle_pin: ToggleClipPin,
    delete: DeleteClip,
    copy: CopyClipToSystem,
    clear: ClearHistory,
    update_settings: UpdateSettings,
}

impl FeedUseCases {
    pub fn from_ports(
        backend: Arc<dyn ClipboardBackendPort>,
        settings: Arc<dyn SettingsPort>,
    ) -> Self {
        Self {
            load: LoadClipboardHistory::from_arc(backend.clone()),
            search: SearchClipboardHistory::from_arc(backend.clone()),
            toggle_pin: ToggleClipPin::from_arc(backend.clone()),
            delete: DeleteClip::from_arc(backend.clone()),
            copy: CopyClipToSystem::from_arc(backend.clone()),
            clear: ClearHistory::from_arc(backend),
            update_settings: UpdateSettings::new(settings),
        }
    }
}

/// Sole owner of the feed.
///
/// Backend events and local commands are applied one at a time, each to
/// completion, so the feed never sees concurrent mutation. Failures never
/// escape the loop: they are logged and surfaced as error toasts, and the
/// feed keeps the state it had before the failed call.
pub struct FeedRuntime {
    feed: ClipFeed,
    usecases: FeedUseCases,
    toasts: ToastStore,
    clock: Arc<dyn ClockPort>,
    locale: Locale,
    load_limit: usize,
    event_rx: FeedEventReceiver,
    command_rx: FeedCommandReceiver,
    shutting_down: bool,
}

impl FeedRuntime {
    pub fn new(
        usecases: FeedUseCases,
        clock: Arc<dyn ClockPort>,
        options: FeedRuntimeOptions,
        event_rx: FeedEventReceiver,
        command_rx: FeedCommandReceiver,
    ) -> Self {
        Self {
            feed: ClipFeed::new(options.capacity),
            usecases,
            toasts: ToastStore::new(options.toast_duration_ms),
            clock,
            locale: options.locale,
            load_limit: options.load_limit.clamp(1, MAX_LOAD_LIMIT),
            event_rx,
            command_rx,
            shutting_down: false,
        }
    }

    /// Loads the initial history, then serves events and commands until a
    /// `Shutdown` command arrives or both channels close.
    pub async fn start(mut self) {
        info!(
            capacity = self.feed.capacity(),
            load_limit = self.load_limit,
            "Feed runtime started"
        );
        self.reload().await;

        while !self.shutting_down {
            tokio::select! {
                // Backend events drain before local commands.
                biased;
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event).await;
                }
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => {
                    info!("Feed channels closed");
                    break;
                }
            }
        }

        info!("Feed runtime stopped");
    }

    async fn handle_event(&mut self, event: FeedEvent) {
        debug!(event = event.name(), "Backend event received");

        match event {
            FeedEvent::ItemUpserted(item) => {
                let id = item.id.clone();
                let evicted = self.feed.apply_upsert(item);
                debug!(
                    clip_id = %id,
                    evicted = evicted.len(),
                    len = self.feed.len(),
                    "Applied upsert"
                );
            }
            FeedEvent::ItemDeleted(id) => {
                if !self.feed.apply_delete(&id) {
                    debug!(clip_id = %id, "Deleted clip was not in the feed");
                }
            }
            FeedEvent::HistoryCleared => {
                self.reload().await;
            }
        }
    }

    async fn handle_command(&mut self, command: FeedCommand) {
        match command {
            FeedCommand::Reload => self.reload().await,
            FeedCommand::Search { query } => self.search(query).await,
            FeedCommand::SetQuery { query } => self.feed.set_query(query),
            FeedCommand::TogglePin { id } => self.toggle_pin(id).await,
            FeedCommand::Delete { id } => self.delete(id).await,
            FeedCommand::Copy { id } => self.copy(id).await,
            FeedCommand::ClearAll => self.clear(ClearScope::All).await,
            FeedCommand::ClearUnpinned => self.clear(ClearScope::Unpinned).await,
            FeedCommand::SetCapacity { capacity } => self.set_capacity(capacity),
            FeedCommand::SetLocale { locale } => self.set_locale(locale),
            FeedCommand::UpdateSettings { settings } => self.update_settings(settings).await,
            FeedCommand::DismissToast { id } => {
                self.toasts.remove(id);
            }
            FeedCommand::Snapshot { reply } => {
                let snapshot = self.snapshot();
                if reply.send(snapshot).is_err() {
                    debug!("Snapshot requester went away");
                }
            }
            FeedCommand::Shutdown => {
                self.shutting_down = true;
                info!("Feed runtime shutting down");
            }
        }
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    async fn reload(&mut self) {
        match self.usecases.load.execute(self.load_limit).await {
            Ok(items) => self.feed.replace_all(items),
            Err(e) => self.report_failure(self.messages().load_failed, &e),
        }
    }

    async fn search(&mut self, query: String) {
        // The view filters on the same text the backend searched for.
        let query = query.trim().to_string();
        self.feed.set_query(query.clone());

        match self.usecases.search.execute(&query).await {
            Ok(Some(items)) => self.feed.replace_all(items),
            Ok(None) => self.reload().await,
            Err(e) => self.report_failure(self.messages().search_failed, &e),
        }
    }

    async fn toggle_pin(&mut self, id: ClipId) {
        // Unpinning may trim other clips, so roll back the whole list.
        let snapshot = self.feed.items().to_vec();
        let Some(previous) = self.feed.toggle_pinned_local(&id) else {
            warn!(clip_id = %id, "Pin toggle for a clip that is not in the feed");
            return;
        };
        let pinned = !previous.is_pinned;
        debug!(
            clip_id = %id,
            pinned,
            previous_rank = ?previous.pin_order,
            "Applied pin toggle locally"
        );

        match self.usecases.toggle_pin.execute(&id, pinned).await {
            Ok(()) => self.reload().await,
            Err(e) => {
                self.feed.replace_all(snapshot);
                self.report_failure(self.messages().pin_failed, &e);
            }
        }
    }

    async fn delete(&mut self, id: ClipId) {
        match self.usecases.delete.execute(&id).await {
            Ok(()) => {
                self.feed.apply_delete(&id);
            }
            Err(e) => self.report_failure(self.messages().delete_failed, &e),
        }
    }

    async fn copy(&mut self, id: ClipId) {
        match self.usecases.copy.execute(&id).await {
            Ok(()) => {
                let message = self.messages().copied_to_clipboard;
                self.post_toast(message, ToastKind::Success);
            }
            Err(e) => self.report_failure(self.messages().copy_failed, &e),
        }
    }

    async fn clear(&mut self, scope: ClearScope) {
        match self.usecases.clear.execute(scope).await {
            Ok(()) => {
                let removed = match scope {
                    ClearScope::All => {
                        let removed = self.feed.len();
                        self.feed.replace_all(Vec::new());
                        removed
                    }
                    ClearScope::Unpinned => self.feed.clear_unpinned(),
                };
                info!(removed, "Cleared local history");
                let count = removed.to_string();
                let message = i18n::format(
                    self.messages().history_cleared,
                    &[("count", count.as_str())],
                );
                self.post_toast(&message, ToastKind::Info);
            }
            Err(e) => self.report_failure(self.messages().clear_failed, &e),
        }
    }

    fn set_capacity(&mut self, capacity: usize) {
        let evicted = self.feed.set_capacity(capacity);
        self.load_limit = capacity.clamp(1, MAX_LOAD_LIMIT);
        info!(
            capacity = self.feed.capacity(),
            evicted = evicted.len(),
            "Feed capacity changed"
        );
    }

    fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        info!(locale = locale.as_str(), "Locale changed");
    }

    /// Saves `settings`, then applies the feed-relevant fields. A failed
    /// save leaves capacity and locale as they were.
    async fn update_settings(&mut self, settings: Settings) {
        let capacity = settings.max_history_items;
        let locale = Locale::parse(&settings.locale);

        match self.usecases.update_settings.execute(settings).await {
            Ok(changes) => {
                debug!(changed = changes.len(), "Applying saved settings");
                self.set_capacity(capacity);
                if let Some(locale) = locale {
                    self.set_locale(locale);
                }
            }
            Err(e) => self.report_failure(self.messages().save_settings_failed, &e),
        }
    }

    fn report_failure(&mut self, message: &'static str, err: &anyhow::Error) {
        let transient = err
            .downcast_ref::<BackendError>()
            .is_some_and(BackendError::is_transient);
        error!(error = %format!("{:#}", err), transient, "{}", message);
        self.post_toast(message, ToastKind::Error);
    }

    fn post_toast(&mut self, message: &str, kind: ToastKind) {
        let now = self.clock.now_ms();
        self.toasts.add(message, kind, now);
    }

    fn snapshot(&mut self) -> FeedSnapshot {
        let now = self.clock.now_ms();
        FeedSnapshot {
            items: self.feed.items().to_vec(),
            view: self.feed.view().into_iter().cloned().collect(),
            pinned: self.feed.pinned_view().into_iter().cloned().collect(),
            query: self.feed.query().to_string(),
            capacity: self.feed.capacity(),
            locale: self.locale,
            toasts: self.toasts.active(now),
        }
    }
}
