use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use wordbook_types::Word;

/// Everything read from one vocabulary document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    pub words: Vec<Word>,
    pub metadata: Map<String, Value>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// On-disk shape of the vocabulary document
#[derive(Debug, Deserialize)]
struct VocabularyJson {
    #[serde(default)]
    vocabulary: Vec<Value>,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Load a vocabulary document from disk.
///
/// A missing file is an empty vocabulary, not an error.
pub fn load(path: &Path) -> Result<Vocabulary, LoadError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No vocabulary at {}, treating as empty", path.display());
            return Ok(Vocabulary::default());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Loading vocabulary from {}", path.display());
    let vocabulary = from_json(&json)?;
    tracing::info!("Loaded {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parse a vocabulary document
pub fn from_json(json: &str) -> Result<Vocabulary, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(LoadError::InvalidFormat(
            "top-level value must be an object".to_string(),
        ));
    }

    let data = VocabularyJson::deserialize(value).map_err(|e| {
        LoadError::InvalidFormat(format!("'vocabulary' must be an array: {e}"))
    })?;

    let words = data
        .vocabulary
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            Word::from_value(value).ok_or_else(|| {
                LoadError::InvalidFormat(format!("vocabulary entry #{} is not an object", i + 1))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Vocabulary {
        words,
        metadata: data.metadata.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let vocabulary = load(&temp.path().join("vocabulary.json")).unwrap();

        assert!(vocabulary.words.is_empty());
        assert!(vocabulary.metadata.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vocabulary.json");
        fs::write(
            &path,
            r#"{
                "vocabulary": [{ "id": 1, "word": "run" }, { "word": "walk" }],
                "metadata": { "version": "1.0" }
            }"#,
        )
        .unwrap();

        let vocabulary = load(&path).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.words[0].label(), "run");
        assert_eq!(vocabulary.words[1].label(), "walk");
        assert_eq!(vocabulary.metadata["version"], "1.0");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vocabulary.json");
        fs::write(&path, "{ \"vocabulary\": [").unwrap();

        assert!(matches!(load(&path), Err(LoadError::ParseError(_))));
    }

    #[test]
    fn test_missing_keys_default() {
        let vocabulary = from_json("{}").unwrap();
        assert!(vocabulary.is_empty());
        assert!(vocabulary.metadata.is_empty());

        let vocabulary = from_json(r#"{ "vocabulary": [], "metadata": null }"#).unwrap();
        assert!(vocabulary.metadata.is_empty());
    }

    #[test]
    fn test_incomplete_records_are_kept() {
        let vocabulary = from_json(r#"{ "vocabulary": [{}, { "level": "B2" }] }"#).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.words[0].label(), "unknown");
    }

    #[test]
    fn test_unrepresentable_documents() {
        assert!(matches!(from_json("[]"), Err(LoadError::InvalidFormat(_))));
        assert!(matches!(
            from_json(r#"{ "vocabulary": "run" }"#),
            Err(LoadError::InvalidFormat(_))
        ));
        assert!(matches!(
            from_json(r#"{ "vocabulary": ["run"] }"#),
            Err(LoadError::InvalidFormat(_))
        ));
    }
}
