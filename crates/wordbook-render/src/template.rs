use serde::{Deserialize, Serialize};
use wordbook_types::{MissingField, Word};

/// Section labels of a study entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTemplate {
    pub phonetics: String,
    pub part_of_speech: String,
    pub definitions: String,
    pub english: String,
    pub examples: String,
    pub collocations: String,
    pub derivatives: String,
    pub memory_tip: String,
}

impl EntryTemplate {
    /// Labels used by the Chinese edition of the book
    pub fn default_chinese() -> Self {
        Self {
            phonetics: "**音标：**".to_string(),
            part_of_speech: "**词性：**".to_string(),
            definitions: "**释义：**".to_string(),
            english: "**英文解释：**".to_string(),
            examples: "**例句：**".to_string(),
            collocations: "**常用搭配：**".to_string(),
            derivatives: "**派生词：**".to_string(),
            memory_tip: "**记忆技巧：**".to_string(),
        }
    }

    /// Render one word as a Markdown entry.
    ///
    /// Optional sections (english, collocations, derivatives, memory tip) are
    /// left out when empty. The headword and every example and derivative
    /// field must be present.
    pub fn render(&self, word: &Word) -> Result<String, MissingField> {
        let mut lines = Vec::new();

        lines.push(format!("#### {}", word.require_text("word")?));
        lines.push(String::new());
        lines.push(format!(
            "{} {} (UK) | {} (US)",
            self.phonetics,
            word.text_or("phonetic_uk", ""),
            word.text_or("phonetic_us", ""),
        ));
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            self.part_of_speech,
            word.strings("part_of_speech").join(", ")
        ));
        lines.push(String::new());

        let definitions = word.definitions();
        lines.push(self.definitions.clone());
        for definition in &definitions.chinese {
            lines.push(format!("- {definition}"));
        }
        lines.push(String::new());

        if let Some(first) = definitions.english.first() {
            lines.push(format!("{} {}", self.english, first));
            lines.push(String::new());
        }

        lines.push(self.examples.clone());
        for (i, example) in word.examples().iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, example.sentence()?));
            lines.push(format!("   *{}*", example.translation()?));
            lines.push(String::new());
        }

        let collocations = word.strings("collocations");
        if !collocations.is_empty() {
            lines.push(format!("{} {}", self.collocations, collocations.join(", ")));
            lines.push(String::new());
        }

        let derivatives = word.derivatives();
        if !derivatives.is_empty() {
            lines.push(self.derivatives.clone());
            for d in &derivatives {
                lines.push(format!(
                    "- {} ({}) - {}",
                    d.word()?,
                    d.part_of_speech()?,
                    d.meaning()?
                ));
            }
            lines.push(String::new());
        }

        if let Some(tip) = word.memory_tip() {
            lines.push(format!("{} {}", self.memory_tip, tip));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}

impl Default for EntryTemplate {
    fn default() -> Self {
        Self::default_chinese()
    }
}
