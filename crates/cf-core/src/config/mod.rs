//! Configuration data structures.
//!
//! TOML → DTO mapping only. Reading files is the bootstrap layer's job.

mod feed_config;

pub use feed_config::{
    FeedConfig, DEFAULT_BACKEND_TIMEOUT_MS, DEFAULT_CHANNEL_SIZE, DEFAULT_LOAD_LIMIT,
    DEFAULT_TOAST_DURATION_MS,
};
