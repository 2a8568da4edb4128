//! # Heading Numbering
//!
//! Hierarchical section numbering for headings within one chapter.
//!
//! ## Modules
//!
//! - **`section_counter`**: `SectionCounter`, a fixed-depth counter that yields
//!   an anchor (`"2.1.1"`) and a display prefix for each heading
//!
//! ## Key Invariants
//!
//! - Bumping level `L` zeroes every level deeper than `L`
//! - Levels shallower than `L` are never touched
//! - The prefix is empty below the visible depth, but the anchor still advances

pub mod section_counter;

pub use section_counter::{DEFAULT_DEPTH, PREFIX_SEPARATOR, SectionCounter, SectionNumber};
