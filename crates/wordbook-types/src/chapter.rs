use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Book chapter a word is filed under.
///
/// Chapters are usually numbered, but some books use named sections, so
/// textual tags are kept as-is. Numbers sort before tags.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChapterKey {
    Number(i64),
    Tag(String),
}

impl ChapterKey {
    /// Chapter used when a record has none
    pub fn unassigned() -> Self {
        ChapterKey::Number(0)
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(n) => ChapterKey::Number(n),
                None => ChapterKey::Tag(n.to_string()),
            },
            Value::String(s) => ChapterKey::Tag(s.clone()),
            other => ChapterKey::Tag(other.to_string()),
        }
    }
}

impl Default for ChapterKey {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterKey::Number(n) => write!(f, "{n}"),
            ChapterKey::Tag(tag) => f.write_str(tag),
        }
    }
}

// Serialized bare so it can be used as a JSON map key.
impl Serialize for ChapterKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChapterKey::Number(n) => serializer.serialize_i64(*n),
            ChapterKey::Tag(tag) => serializer.serialize_str(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(ChapterKey::from_value(&json!(3)), ChapterKey::Number(3));
        assert_eq!(
            ChapterKey::from_value(&json!("appendix")),
            ChapterKey::Tag("appendix".to_string())
        );
        assert_eq!(
            ChapterKey::from_value(&json!(1.5)),
            ChapterKey::Tag("1.5".to_string())
        );
    }

    #[test]
    fn test_numbers_sort_before_tags() {
        let mut keys = vec![
            ChapterKey::Tag("appendix".into()),
            ChapterKey::Number(10),
            ChapterKey::Number(2),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ChapterKey::Number(2),
                ChapterKey::Number(10),
                ChapterKey::Tag("appendix".into()),
            ]
        );
    }

    #[test]
    fn test_serialize_as_map_key() {
        let mut counts = BTreeMap::new();
        counts.insert(ChapterKey::Number(1), 2);
        counts.insert(ChapterKey::Tag("intro".into()), 1);

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"1":2,"intro":1}"#);
    }
}
