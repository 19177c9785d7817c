//! Assembles a running feed from configuration and a backend.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;
use cf_app::adapters::{InMemoryBackend, InMemorySettings, SystemClock, TimeoutBackend};
use cf_app::runtime::{
    spawn_feed_runtime, FeedEventSender, FeedHandle, FeedHandleError, FeedRuntimeOptions,
};
use cf_app::theme::{Theme, ThemeState};
use cf_app::usecases::GetSettings;
use cf_core::config::FeedConfig;
use cf_core::ports::{ClipboardBackendPort, ClockPort, SettingsPort};
use cf_core::settings::Settings;

/// A spawned feed runtime plus what the host needs to drive it.
pub struct FeedApp {
    pub handle: FeedHandle,
    /// Where the host's backend event bridge pushes live changes.
    pub events: FeedEventSender,
    pub task: JoinHandle<()>,
    pub theme: ThemeState,
    settings: Arc<dyn SettingsPort>,
}

impl FeedApp {
    /// Current saved settings.
    pub async fn settings(&self) -> anyhow::Result<Settings> {
        GetSettings::new(self.settings.clone()).execute().await
    }

    /// Saves `settings` through the runtime, which then resizes the feed and
    /// switches locale. A failed save is reported as an error toast.
    pub async fn update_settings(&self, settings: Settings) -> Result<(), FeedHandleError> {
        self.handle.update_settings(settings).await
    }
}

/// Spawns the feed runtime over `backend`.
///
/// Backend calls get the configured deadline; a `backend_timeout_ms` of 0
/// disables it.
pub fn wire_feed(
    config: &FeedConfig,
    backend: Arc<dyn ClipboardBackendPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
) -> FeedApp {
    let backend: Arc<dyn ClipboardBackendPort> = if config.backend_timeout_ms > 0 {
        Arc::new(TimeoutBackend::new(
            backend,
            Duration::from_millis(config.backend_timeout_ms),
        ))
    } else {
        backend
    };

    let options = FeedRuntimeOptions::from(config);
    info!(
        capacity = options.capacity,
        load_limit = options.load_limit,
        backend_timeout_ms = config.backend_timeout_ms,
        locale = options.locale.as_str(),
        "Wiring feed runtime"
    );

    let (handle, events, task) = spawn_feed_runtime(
        backend,
        settings.clone(),
        clock,
        options,
        config.channel_size,
    );

    FeedApp {
        handle,
        events,
        task,
        theme: ThemeState::new(Theme::parse(&config.theme)),
        settings,
    }
}

/// Wires the feed to a fresh in-process backend that announces its changes
/// to the runtime. Settings start from the configured capacity and locale.
pub async fn wire_in_memory(config: &FeedConfig) -> (FeedApp, Arc<InMemoryBackend>) {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let backend = Arc::new(InMemoryBackend::with_retention(
        clock.clone(),
        config.capacity,
        true,
    ));
    let settings = Arc::new(InMemorySettings::new(Settings {
        max_history_items: config.capacity,
        locale: config.locale.clone(),
        ..Settings::default()
    }));

    let app = wire_feed(config, backend.clone(), settings, clock);
    backend.attach_events(app.events.clone()).await;
    (app, backend)
}
