use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ChapterKey;

/// A field that had to be present but was not
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing field '{0}'")]
pub struct MissingField(pub &'static str);

/// One vocabulary entry, kept as the JSON object it was loaded from.
///
/// Nothing about the record's shape is enforced on load, so incomplete
/// entries stay representable and can be reported later. Fields are read in
/// one of two modes:
///
/// - lenient lookups (`text_or`, `strings`, `tag_or`, `chapter`, ...) fall
///   back to a default when the key is absent or `null`;
/// - strict lookups (`require_text`, [`Example::sentence`], ...) fail with
///   [`MissingField`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    fields: Map<String, Value>,
}

impl Word {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a word from any JSON value, if it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Whether the key exists at all, regardless of its value
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw value of a field; `null` counts as absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Text of a field, or `default` when absent
    pub fn text_or(&self, field: &str, default: &str) -> String {
        self.get(field)
            .map(value_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Category tag such as the level or the frequency band
    pub fn tag_or(&self, field: &str, default: &str) -> String {
        self.text_or(field, default)
    }

    /// List of strings, empty when absent
    pub fn strings(&self, field: &str) -> Vec<String> {
        self.get(field).map(string_list).unwrap_or_default()
    }

    pub fn chapter(&self) -> ChapterKey {
        self.get("chapter")
            .map(ChapterKey::from_value)
            .unwrap_or_default()
    }

    pub fn definitions(&self) -> Definitions {
        let Some(defs) = self.get("definitions") else {
            return Definitions::default();
        };
        Definitions {
            chinese: defs.get("chinese").map(string_list).unwrap_or_default(),
            english: defs.get("english").map(string_list).unwrap_or_default(),
        }
    }

    pub fn examples(&self) -> Vec<Example<'_>> {
        self.records("examples")
            .iter()
            .map(|fields| Example { fields })
            .collect()
    }

    /// Number of examples; anything but an array counts as none
    pub fn example_count(&self) -> usize {
        self.records("examples").len()
    }

    pub fn derivatives(&self) -> Vec<Derivative<'_>> {
        self.records("derivatives")
            .iter()
            .map(|fields| Derivative { fields })
            .collect()
    }

    /// Memory tip, if one is given and non-empty
    pub fn memory_tip(&self) -> Option<String> {
        self.get("memory_tip")
            .map(value_text)
            .filter(|tip| !tip.is_empty())
    }

    pub fn require(&self, field: &'static str) -> Result<&Value, MissingField> {
        self.fields.get(field).ok_or(MissingField(field))
    }

    pub fn require_text(&self, field: &'static str) -> Result<String, MissingField> {
        self.require(field).map(value_text)
    }

    /// Name used in messages: the word itself, or `unknown`
    pub fn label(&self) -> String {
        self.text_or("word", "unknown")
    }

    fn records(&self, field: &str) -> &[Value] {
        match self.get(field) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }
}

impl From<Map<String, Value>> for Word {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    pub chinese: Vec<String>,
    pub english: Vec<String>,
}

/// Example sentence with its translation
#[derive(Debug, Clone, Copy)]
pub struct Example<'a> {
    fields: &'a Value,
}

impl Example<'_> {
    pub fn sentence(&self) -> Result<String, MissingField> {
        required(self.fields, "sentence")
    }

    pub fn translation(&self) -> Result<String, MissingField> {
        required(self.fields, "translation")
    }
}

/// Word derived from the entry, e.g. a noun form of a verb
#[derive(Debug, Clone, Copy)]
pub struct Derivative<'a> {
    fields: &'a Value,
}

impl Derivative<'_> {
    pub fn word(&self) -> Result<String, MissingField> {
        required(self.fields, "word")
    }

    pub fn part_of_speech(&self) -> Result<String, MissingField> {
        required(self.fields, "part_of_speech")
    }

    pub fn meaning(&self) -> Result<String, MissingField> {
        required(self.fields, "meaning")
    }
}

/// Display text of a scalar: strings verbatim, everything else as JSON
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn required(fields: &Value, field: &'static str) -> Result<String, MissingField> {
    fields
        .get(field)
        .map(value_text)
        .ok_or(MissingField(field))
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_text).collect(),
        Value::Null => vec![],
        other => vec![value_text(other)],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn word(value: Value) -> Word {
        Word::from_value(value).unwrap()
    }

    #[test]
    fn test_lenient_lookups_fall_back() {
        let w = word(json!({ "word": "run", "phonetic_uk": null }));

        assert_eq!(w.text_or("phonetic_uk", ""), "");
        assert_eq!(w.text_or("phonetic_us", ""), "");
        assert_eq!(w.tag_or("level", "unknown"), "unknown");
        assert_eq!(w.chapter(), ChapterKey::Number(0));
        assert!(w.strings("part_of_speech").is_empty());
        assert_eq!(w.definitions(), Definitions::default());
        assert_eq!(w.example_count(), 0);
        assert!(w.memory_tip().is_none());
    }

    #[test]
    fn test_presence_counts_null_keys() {
        let w = word(json!({ "phonetic_uk": null }));
        assert!(w.has("phonetic_uk"));
        assert!(w.get("phonetic_uk").is_none());
    }

    #[test]
    fn test_strict_lookups_fail() {
        let w = word(json!({
            "examples": [{ "sentence": "He runs." }],
            "derivatives": [{ "word": "runner", "meaning": "跑步者" }]
        }));

        assert_eq!(w.require_text("word"), Err(MissingField("word")));

        let examples = w.examples();
        assert_eq!(examples[0].sentence().unwrap(), "He runs.");
        assert_eq!(examples[0].translation(), Err(MissingField("translation")));

        let derivatives = w.derivatives();
        assert_eq!(derivatives[0].word().unwrap(), "runner");
        assert_eq!(
            derivatives[0].part_of_speech(),
            Err(MissingField("part_of_speech"))
        );
    }

    #[test]
    fn test_non_array_examples_count_as_none() {
        let w = word(json!({ "examples": "He runs." }));
        assert_eq!(w.example_count(), 0);
        assert!(w.examples().is_empty());
    }

    #[test]
    fn test_non_string_scalars_are_rendered_as_json() {
        let w = word(json!({ "level": 3, "chapter": "intro" }));
        assert_eq!(w.tag_or("level", "unknown"), "3");
        assert_eq!(w.chapter(), ChapterKey::Tag("intro".into()));
    }

    #[test]
    fn test_definitions() {
        let w = word(json!({
            "definitions": { "chinese": ["跑", "运行"], "english": ["to move fast"] }
        }));
        let defs = w.definitions();
        assert_eq!(defs.chinese, vec!["跑", "运行"]);
        assert_eq!(defs.english, vec!["to move fast"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(word(json!({ "word": "run" })).label(), "run");
        assert_eq!(word(json!({ "id": 1 })).label(), "unknown");
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Word::from_value(json!(["run"])).is_none());
        assert!(Word::from_value(json!("run")).is_none());
    }
}
