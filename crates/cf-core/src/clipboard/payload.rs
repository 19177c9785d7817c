//! Decoding of the opaque base64 content carried by clip items.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::item::ContentKind;

/// Decoded view of a clip's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Text item whose content decoded to valid UTF-8.
    Text(String),
    /// Non-text item; the content is never decoded.
    Binary,
    /// Text item whose content is not valid base64 or not valid UTF-8.
    Undecodable,
}

pub fn encode_content(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_payload(kind: ContentKind, content: &str) -> Payload {
    if !kind.is_text() {
        return Payload::Binary;
    }

    let Ok(bytes) = STANDARD.decode(content.trim()) else {
        return Payload::Undecodable;
    };

    match String::from_utf8(bytes) {
        Ok(text) => Payload::Text(text),
        Err(_) => Payload::Undecodable,
    }
}

impl Payload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Single-line preview of a text payload, cut to `max_chars` characters
    /// with a trailing ellipsis.
    pub fn preview(&self, max_chars: usize) -> Option<String> {
        let text = self.as_text()?;
        let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if flat.chars().count() <= max_chars {
            return Some(flat);
        }

        let mut cut: String = flat.chars().take(max_chars).collect();
        cut.push('…');
        Some(cut)
    }
}
