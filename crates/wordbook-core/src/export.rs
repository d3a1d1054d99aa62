use serde_json::Value;
use wordbook_types::{MissingField, Word, value_text};

/// Header row of the CSV export
pub const CSV_HEADER: &str = "word,phonetic_uk,phonetic_us,level,chapter";

/// Output format of a word list export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One word per line
    #[default]
    Txt,
    /// Word plus phonetics, level and chapter. Values are not quoted.
    Csv,
    /// Pretty-printed array of words
    Json,
}

impl ExportFormat {
    /// Parse a format tag; anything unrecognised falls back to JSON
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "txt" => ExportFormat::Txt,
            "csv" => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Word #{index}: {source}")]
    MissingField {
        index: usize,
        #[source]
        source: MissingField,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize the word list in the given format
pub fn export(words: &[Word], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Txt => export_txt(words),
        ExportFormat::Csv => export_csv(words),
        ExportFormat::Json => export_json(words),
    }
}

fn export_txt(words: &[Word]) -> Result<String, ExportError> {
    let lines = words
        .iter()
        .enumerate()
        .map(|(i, w)| headword(i, w).map(value_text))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

// Fields are written verbatim; a comma inside a value shifts the columns.
fn export_csv(words: &[Word]) -> Result<String, ExportError> {
    let mut lines = vec![CSV_HEADER.to_string()];
    for (i, w) in words.iter().enumerate() {
        let word = value_text(headword(i, w)?);
        lines.push(format!(
            "{},{},{},{},{}",
            word,
            w.text_or("phonetic_uk", ""),
            w.text_or("phonetic_us", ""),
            w.text_or("level", ""),
            w.text_or("chapter", ""),
        ));
    }
    Ok(lines.join("\n"))
}

fn export_json(words: &[Word]) -> Result<String, ExportError> {
    let list = words
        .iter()
        .enumerate()
        .map(|(i, w)| headword(i, w))
        .collect::<Result<Vec<&Value>, _>>()?;
    Ok(serde_json::to_string_pretty(&list)?)
}

fn headword(i: usize, word: &Word) -> Result<&Value, ExportError> {
    word.require("word")
        .map_err(|source| ExportError::MissingField {
            index: i + 1,
            source,
        })
}
