//! # cf-app
//!
//! Application layer for clipfeed: use cases over the backend ports, the
//! single-owner feed runtime, and the small stores the presentation layer
//! reads alongside the feed (toasts, locale, theme).

pub mod adapters;
pub mod i18n;
pub mod notify;
pub mod runtime;
pub mod theme;
pub mod usecases;

pub use runtime::{spawn_feed_runtime, FeedEvent, FeedHandle, FeedRuntimeOptions, FeedSnapshot};
