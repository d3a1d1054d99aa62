use std::collections::BTreeMap;

use chrono::Local;
use serde::Serialize;
use wordbook_types::{ChapterKey, Word};

/// Tag used when a word has no level or frequency
pub const UNKNOWN_TAG: &str = "unknown";

/// Word counts for a vocabulary
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub total_words: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_chapter: BTreeMap<ChapterKey, usize>,
    pub by_frequency: BTreeMap<String, usize>,
    /// Local time, ISO 8601
    pub generated_at: String,
}

impl Statistics {
    pub fn with_project(mut self, name: impl Into<String>) -> Self {
        self.project = Some(name.into());
        self
    }
}

/// Tally words by level, chapter and frequency band
pub fn aggregate(words: &[Word]) -> Statistics {
    let mut by_level = BTreeMap::new();
    let mut by_chapter = BTreeMap::new();
    let mut by_frequency = BTreeMap::new();

    for word in words {
        *by_level.entry(word.tag_or("level", UNKNOWN_TAG)).or_insert(0) += 1;
        *by_chapter.entry(word.chapter()).or_insert(0) += 1;
        *by_frequency
            .entry(word.tag_or("frequency", UNKNOWN_TAG))
            .or_insert(0) += 1;
    }

    Statistics {
        project: None,
        total_words: words.len(),
        by_level,
        by_chapter,
        by_frequency,
        generated_at: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    }
}
