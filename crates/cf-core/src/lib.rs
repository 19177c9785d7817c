//! # cf-core
//!
//! Core domain models for clipfeed, the client-side state layer of a
//! clipboard-history manager.
//!
//! This crate contains pure data and policy without any infrastructure
//! dependencies: the bounded item feed, the item model, settings and
//! configuration DTOs, and the ports through which the backend is reached.

pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipFeed, ClipItem, ContentKind, Payload};
pub use config::FeedConfig;
pub use ids::ClipId;
pub use ports::{BackendError, ClipboardBackendPort, ClockPort, SettingsPort};
pub use settings::Settings;
