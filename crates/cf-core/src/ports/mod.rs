//! Port interfaces for the application layer
//!
//! Ports define the contract between the feed's use cases and the backend
//! that owns clipboard capture, storage and search. Adapters live in
//! `cf-app`; the real backend lives across the process boundary.

mod clipboard_backend;
mod clock;
pub mod errors;
mod settings;


pub use clipboard_backend::ClipboardBackendPort;
pub use clock::ClockPort;
pub use errors::BackendError;
pub use settings::SettingsPort;
