//! # Element Indices
//!
//! Per-kind numbering of referenceable elements.
//!
//! ## Modules
//!
//! - **`store`**: `IndexStore<T>` and `IndexEntry<T>`, an append-only sequence
//!   that hands out 1-based numbers
//! - **`chapter_index`**: `ChapterIndex`, one store per `IndexKind` plus the
//!   chapter's `SectionCounter`
//!
//! Each store owns its own number space: an image and a table appended next
//! to each other do not share a sequence.

pub mod chapter_index;
pub mod store;

pub use chapter_index::{ChapterIndex, ColumnDetail, HeadingDetail, IndexKind};
pub use store::{IndexEntry, IndexStore};
