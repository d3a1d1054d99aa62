pub mod export;
pub mod stats;
pub mod store;
pub mod validate;

pub use export::{ExportError, ExportFormat, export};
pub use stats::{Statistics, aggregate};
pub use store::{LoadError, Vocabulary, load};
pub use validate::{Diagnostic, validate};
