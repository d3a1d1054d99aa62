use std::fmt;

use wordbook_types::Word;

/// Fields every finished entry must carry
pub const REQUIRED_FIELDS: [&str; 9] = [
    "id",
    "word",
    "phonetic_uk",
    "phonetic_us",
    "part_of_speech",
    "definitions",
    "examples",
    "level",
    "chapter",
];

/// Fewest example sentences an entry may have
pub const MIN_EXAMPLES: usize = 2;

/// Data-quality problem found in one word. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingField {
        /// 1-based position in the vocabulary
        index: usize,
        word: String,
        field: &'static str,
    },
    TooFewExamples {
        index: usize,
        word: String,
    },
}

impl Diagnostic {
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::MissingField { index, .. } | Diagnostic::TooFewExamples { index, .. } => {
                *index
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingField { index, word, field } => {
                write!(f, "Word #{index} ({word}): missing field '{field}'")
            }
            Diagnostic::TooFewExamples { index, word } => {
                write!(f, "Word #{index} ({word}): needs at least {MIN_EXAMPLES} examples")
            }
        }
    }
}

/// Check every word for required fields and enough examples.
///
/// All problems are reported, in vocabulary order. An empty result means the
/// data is complete.
pub fn validate(words: &[Word]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let index = i + 1;
        let label = word.label();

        for field in REQUIRED_FIELDS {
            if !word.has(field) {
                diagnostics.push(Diagnostic::MissingField {
                    index,
                    word: label.clone(),
                    field,
                });
            }
        }

        if word.example_count() < MIN_EXAMPLES {
            diagnostics.push(Diagnostic::TooFewExamples { index, word: label });
        }
    }

    tracing::debug!(
        "Validated {} words, {} problems",
        words.len(),
        diagnostics.len()
    );
    diagnostics
}
