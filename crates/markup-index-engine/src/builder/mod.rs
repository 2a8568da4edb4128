//! # Index Builder
//!
//! The facade the external compiler drives while walking a chapter.
//!
//! ## Lifecycle
//!
//! An `IndexBuilder` starts UNBOUND. `bind` attaches a chapter and creates
//! fresh per-chapter state (every store, the section counter, the document
//! status map). Binding again discards that state; numbering never carries
//! over from one chapter to the next.
//!
//! ## Modules
//!
//! - **`index_builder`**: `IndexBuilder`, one callback per structural element
//! - **`caption`**: `CaptionStyle`, the closed set of call-out block names
//! - **`location`**: `Location`, the `file:line` prefix used for diagnostics

pub mod caption;
pub mod index_builder;
pub mod location;

pub use caption::CaptionStyle;
pub use index_builder::{IndexBuilder, TARGET_NAME};
pub use location::Location;

/// Expands inline markup in caption and heading text.
///
/// Implemented by the compiler that drives the builder.
pub trait InlineCompiler {
    fn compile_inline(&self, text: &str) -> String;
}

impl<F> InlineCompiler for F
where
    F: Fn(&str) -> String,
{
    fn compile_inline(&self, text: &str) -> String {
        self(text)
    }
}
