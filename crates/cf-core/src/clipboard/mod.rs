//! Clipboard domain models.
mod feed;
mod item;
mod payload;


pub use feed::{ClipFeed, PinState, DEFAULT_CAPACITY};
pub use item::{ClipItem, ContentKind};
pub use payload::{decode_payload, encode_content, Payload};
