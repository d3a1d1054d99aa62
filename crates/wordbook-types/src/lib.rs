mod chapter;
mod word;

pub use chapter::ChapterKey;
pub use word::{Definitions, Derivative, Example, MissingField, Word, value_text};
