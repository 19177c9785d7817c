use serde::{Deserialize, Deserializer, Serialize};

use super::payload::{decode_payload, encode_content, Payload};
use crate::ids::ClipId;

/// Content category of a clip. Drives display and query matching, never
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    File,
    Html,
    Rtf,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::File => "file",
            ContentKind::Html => "html",
            ContentKind::Rtf => "rtf",
        }
    }

    /// Parses the backend's content-type tag. Unknown tags fall back to
    /// `Text`, which is what the backend itself does when reading rows.
    pub fn from_wire(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "image" => ContentKind::Image,
            "file" => ContentKind::File,
            "html" => ContentKind::Html,
            "rtf" => ContentKind::Rtf,
            _ => ContentKind::Text,
        }
    }

    /// Only plain text takes part in local query matching.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentKind::Text)
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(ContentKind::from_wire(&tag))
    }
}

/// One clipboard history entry as the backend delivers it.
///
/// `content` is the opaque base64 payload; it is only decoded when a text
/// item is tested against a query or previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipItem {
    pub id: ClipId,
    pub content: String,
    pub content_type: ContentKind,
    /// Capture time, unix seconds.
    pub timestamp: i64,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub pin_order: Option<i32>,
}

impl ClipItem {
    pub fn new(id: ClipId, content_type: ContentKind, bytes: &[u8], timestamp: i64) -> Self {
        Self {
            id,
            content: encode_content(bytes),
            content_type,
            timestamp,
            is_pinned: false,
            pin_order: None,
        }
    }

    pub fn text(id: impl Into<ClipId>, text: &str, timestamp: i64) -> Self {
        Self::new(id.into(), ContentKind::Text, text.as_bytes(), timestamp)
    }

    pub fn pinned(mut self, pin_order: i32) -> Self {
        self.is_pinned = true;
        self.pin_order = Some(pin_order);
        self
    }

    pub fn payload(&self) -> Payload {
        decode_payload(self.content_type, &self.content)
    }

    /// Case-insensitive substring test against the decoded text.
    ///
    /// `needle_lower` must already be lowercased. Non-text and undecodable
    /// items never match.
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        match self.payload() {
            Payload::Text(text) => text.to_lowercase().contains(needle_lower),
            Payload::Binary | Payload::Undecodable => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_wire_format() {
        let json = r#"{
            "id": "c1",
            "content": "aGVsbG8=",
            "contentType": "text",
            "timestamp": 1700000000,
            "isPinned": true,
            "pinOrder": 2
        }"#;

        let item: ClipItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ClipId::from_str("c1"));
        assert_eq!(item.content_type, ContentKind::Text);
        assert!(item.is_pinned);
        assert_eq!(item.pin_order, Some(2));
        assert_eq!(item.payload(), Payload::Text("hello".to_string()));
    }

    #[test]
    fn test_missing_pin_fields_default_to_unpinned() {
        let json = r#"{"id":"c1","content":"","contentType":"image","timestamp":1}"#;
        let item: ClipItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_pinned);
        assert_eq!(item.pin_order, None);
    }

    #[test]
    fn test_content_kind_accepts_any_casing_and_unknown_tags() {
        assert_eq!(ContentKind::from_wire("Image"), ContentKind::Image);
        assert_eq!(ContentKind::from_wire("RTF"), ContentKind::Rtf);
        assert_eq!(ContentKind::from_wire("something-new"), ContentKind::Text);
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let item = ClipItem::text("c1", "hi", 10).pinned(1);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["contentType"], "text");
        assert_eq!(value["isPinned"], true);
        assert_eq!(value["pinOrder"], 1);
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let item = ClipItem::text("c1", "Hello World", 1);
        assert!(item.matches_query("world"));
        assert!(!item.matches_query("planet"));
    }

    #[test]
    fn test_non_text_items_never_match() {
        let item = ClipItem::new(ClipId::from_str("img"), ContentKind::Image, b"foo", 1);
        assert!(!item.matches_query("foo"));
    }
}
