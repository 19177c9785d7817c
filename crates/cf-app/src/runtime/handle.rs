use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use cf_core::ids::ClipId;
use cf_core::ports::{ClipboardBackendPort, ClockPort, SettingsPort};
use cf_core::settings::Settings;

use super::command::{FeedCommand, FeedSnapshot};
use super::event_bus::{FeedCommandSender, FeedEventSender};
use super::feed_runtime::{FeedRuntime, FeedRuntimeOptions, FeedUseCases};
use crate::i18n::Locale;
use crate::notify::ToastId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedHandleError {
    /// The runtime task has exited.
    #[error("feed runtime is not running")]
    ChannelClosed,

    #[error("feed runtime dropped the reply")]
    ReplyDropped,
}

/// Cloneable handle to a running [`FeedRuntime`].
///
/// Commands are queued in order. Mutating commands return once queued; their
/// outcome shows up in the next [`snapshot`](Self::snapshot), which is
/// answered only after every earlier command has been applied.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    sender: FeedCommandSender,
}

impl FeedHandle {
    pub fn new(sender: FeedCommandSender) -> Self {
        Self { sender }
    }

    async fn send(&self, command: FeedCommand) -> Result<(), FeedHandleError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| FeedHandleError::ChannelClosed)
    }

    pub async fn reload(&self) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::Reload).await
    }

    pub async fn search(&self, query: impl Into<String>) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::Search {
            query: query.into(),
        })
        .await
    }

    pub async fn set_query(&self, query: impl Into<String>) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::SetQuery {
            query: query.into(),
        })
        .await
    }

    pub async fn toggle_pin(&self, id: impl Into<ClipId>) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::TogglePin { id: id.into() }).await
    }

    pub async fn delete(&self, id: impl Into<ClipId>) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::Delete { id: id.into() }).await
    }

    pub async fn copy(&self, id: impl Into<ClipId>) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::Copy { id: id.into() }).await
    }

    pub async fn clear_all(&self) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::ClearAll).await
    }

    pub async fn clear_unpinned(&self) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::ClearUnpinned).await
    }

    pub async fn set_capacity(&self, capacity: usize) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::SetCapacity { capacity }).await
    }

    pub async fn set_locale(&self, locale: Locale) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::SetLocale { locale }).await
    }

    /// Saves `settings` and, once saved, applies the feed capacity and
    /// locale they carry. An unrecognised locale code leaves the current
    /// locale in place. A failed save shows up as an error toast.
    pub async fn update_settings(&self, settings: Settings) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::UpdateSettings { settings }).await
    }

    pub async fn dismiss_toast(&self, id: ToastId) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::DismissToast { id }).await
    }

    pub async fn snapshot(&self) -> Result<FeedSnapshot, FeedHandleError> {
        let (tx, rx) = oneshot::channel();
        self.send(FeedCommand::Snapshot { reply: tx }).await?;
        rx.await.map_err(|_| FeedHandleError::ReplyDropped)
    }

    pub async fn shutdown(&self) -> Result<(), FeedHandleError> {
        self.send(FeedCommand::Shutdown).await
    }

    pub fn is_alive(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Spawns a [`FeedRuntime`] on the current tokio runtime.
///
/// Returns the command handle, the sender the backend's event bridge pushes
/// live changes into, and the runtime task.
pub fn spawn_feed_runtime(
    backend: Arc<dyn ClipboardBackendPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
    options: FeedRuntimeOptions,
    channel_size: usize,
) -> (FeedHandle, FeedEventSender, JoinHandle<()>) {
    let channel_size = channel_size.max(1);
    let (event_tx, event_rx) = mpsc::channel(channel_size);
    let (command_tx, command_rx) = mpsc::channel(channel_size);

    let runtime = FeedRuntime::new(
        FeedUseCases::from_ports(backend, settings),
        clock,
        options,
        event_rx,
        command_rx,
    );
    let task = tokio::spawn(runtime.start());

    (FeedHandle::new(command_tx), event_tx, task)
}
