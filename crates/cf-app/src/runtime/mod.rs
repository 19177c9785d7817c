//! Single-owner runtime around the clip feed.

mod command;
mod event;
mod event_bus;
mod feed_runtime;
mod handle;

pub use command::{FeedCommand, FeedSnapshot};
pub use event::{FeedEvent, WireEvent, CLIPBOARD_CHANGED, CLIPBOARD_DELETED, HISTORY_CLEARED};
pub use event_bus::{FeedCommandReceiver, FeedCommandSender, FeedEventReceiver, FeedEventSender};
pub use feed_runtime::{FeedRuntime, FeedRuntimeOptions, FeedUseCases};
pub use handle::{spawn_feed_runtime, FeedHandle, FeedHandleError};
