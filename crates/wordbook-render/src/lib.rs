mod template;

pub use template::EntryTemplate;

use wordbook_types::{MissingField, Word};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Word #{index} ({word}): {source}")]
    MissingField {
        index: usize,
        word: String,
        #[source]
        source: MissingField,
    },
}

/// Render a single word with the default template
pub fn render_entry(word: &Word) -> Result<String, MissingField> {
    EntryTemplate::default_chinese().render(word)
}

/// Render every word in order and concatenate the entries.
///
/// Stops at the first word that cannot be rendered.
pub fn render_all(template: &EntryTemplate, words: &[Word]) -> Result<String, RenderError> {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let entry = template
            .render(word)
            .map_err(|source| RenderError::MissingField {
                index: i + 1,
                word: word.label(),
                source,
            })?;
        out.push_str(&entry);
    }
    Ok(out)
}
