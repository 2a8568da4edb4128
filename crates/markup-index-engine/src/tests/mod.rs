use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::builder::{IndexBuilder, InlineCompiler, Location};
use crate::inline::InlineDirective;

/// Stand-in compiler that expands `@<name>{arg}` through the index pass's
/// own directive table.
pub struct MarkupCompiler;

impl InlineCompiler for MarkupCompiler {
    fn compile_inline(&self, text: &str) -> String {
        static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
        let re = DIRECTIVE
            .get_or_init(|| Regex::new(r"@<(\w+)>\{((?:\\.|[^\\}])*)\}").unwrap());

        re.replace_all(text, |caps: &Captures| {
            InlineDirective::from_name(&caps[1])
                .map(|directive| directive.expand(&caps[2]))
                .unwrap_or_default()
        })
        .into_owned()
    }
}

/// Create a non-strict builder bound to a detached `ch01.re` at line 1
pub fn bound_builder(compiler: &MarkupCompiler) -> IndexBuilder<'_> {
    let mut builder = IndexBuilder::new(false);
    builder.bind(compiler, None, Location::new("ch01.re", 1));
    builder
}
