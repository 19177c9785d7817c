use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one logical clipboard entry. Stable across updates, so a
/// re-copy of the same entry arrives with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl_id!(ClipId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_id_serializes_as_plain_string() {
        let id = ClipId::from_str("clip-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"clip-1\"");

        let back: ClipId = serde_json::from_str("\"clip-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ClipId::new(), ClipId::new());
    }

    #[test]
    fn test_clip_id_compares_with_str() {
        let id = ClipId::from("abc");
        assert!(id == "abc");
        assert_eq!(id.as_ref(), "abc");
        assert_eq!(String::from(id), "abc");
    }
}
