pub mod book;
pub mod builder;
pub mod error;
pub mod index;
pub mod inline;
pub mod numbering;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use book::{Book, BookIndex, Chapter};
pub use builder::{CaptionStyle, IndexBuilder, InlineCompiler, Location};
pub use error::IndexError;
pub use index::{ChapterIndex, ColumnDetail, HeadingDetail, IndexEntry, IndexKind, IndexStore};
pub use inline::{InlineDirective, tokenize};
pub use numbering::{SectionCounter, SectionNumber};
