//! clipfeed
//!
//! Client-side state layer for a clipboard-history manager: process
//! bootstrap (configuration, tracing, wiring) and the event replay tool.
//! The feed itself lives in `cf-core`, the runtime in `cf-app`.

pub mod bootstrap;
pub mod replay;

pub use bootstrap::{load_config, wire_feed, wire_in_memory, FeedApp};
