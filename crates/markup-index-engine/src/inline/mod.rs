//! # Inline Directive Arguments
//!
//! Escape-aware parsing of comma-separated inline directive arguments.
//!
//! ## Modules
//!
//! - **`kinds`**: `ArgSyntax`, the separator and escape delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`args`**: `split_raw`, `unescape` and `tokenize`
//! - **`directives`**: per-directive post-processing (`ruby`, `kw`, `href`)
//!   and the `InlineDirective` name table
//!
//! ## Escaping
//!
//! `\,` is a literal comma. The scanner tracks a single bit (whether the
//! backslash run behind the cursor has odd length) instead of relying on a
//! regex dialect. `kw` is the exception: it splits on the first comma with
//! no escape handling.

pub mod args;
pub mod cursor;
pub mod directives;
pub mod kinds;

pub use args::{split_raw, tokenize, unescape};
pub use directives::{InlineDirective, inline_href, inline_kw, inline_ruby};
