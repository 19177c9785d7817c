//! In-process adapters for the core ports.

mod clock;
mod in_memory_backend;
mod in_memory_settings;
mod timeout_backend;

pub use clock::{FixedClock, SystemClock};
pub use in_memory_backend::InMemoryBackend;
pub use in_memory_settings::InMemorySettings;
pub use timeout_backend::TimeoutBackend;
