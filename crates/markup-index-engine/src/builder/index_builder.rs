use std::collections::HashMap;
use std::sync::OnceLock;

use markup_index_config::{DEFAULT_SECNOLEVEL, DEFAULT_SECTION_DEPTH};
use regex::Regex;

use crate::book::Chapter;
use crate::error::{IndexError, Result};
use crate::index::{ChapterIndex, ColumnDetail, HeadingDetail};
use crate::inline::{self, InlineDirective};
use crate::numbering::SectionNumber;

use super::{CaptionStyle, InlineCompiler, Location};

/// Name of the output target this builder produces.
pub const TARGET_NAME: &str = "index";

/// Per-chapter state, created by every [`IndexBuilder::bind`].
struct Binding<'a> {
    compiler: &'a dyn InlineCompiler,
    chapter: Option<&'a Chapter<'a>>,
    location: Location,
    index: ChapterIndex,
    doc_status: HashMap<String, bool>,
}

impl Binding<'_> {
    fn secnolevel(&self) -> usize {
        self.chapter
            .map_or(DEFAULT_SECNOLEVEL, |c| c.book().config().secnolevel)
    }
}

/// Records numbered structure for one chapter at a time.
///
/// The compiler calls exactly one method per structural element, in document
/// order. Nothing is rendered; the product is the [`ChapterIndex`].
///
/// ```
/// use markup_index_engine::{IndexBuilder, Location};
///
/// let compiler = |text: &str| text.to_string();
/// let mut builder = IndexBuilder::new(false);
/// builder.bind(&compiler, None, Location::new("ch01.re", 1));
///
/// assert_eq!(builder.list("l1", None).unwrap(), 1);
/// assert_eq!(builder.listnum("l2", None).unwrap(), 2);
/// ```
pub struct IndexBuilder<'a> {
    strict: bool,
    binding: Option<Binding<'a>>,
}

impl<'a> IndexBuilder<'a> {
    /// Creates an unbound builder. In strict mode unknown block and inline
    /// names are errors instead of warnings.
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            binding: None,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn target_name(&self) -> &'static str {
        TARGET_NAME
    }

    /// Attaches a chapter and starts from empty stores and a zeroed section
    /// counter. Returns the index of the previous binding, if any.
    pub fn bind(
        &mut self,
        compiler: &'a dyn InlineCompiler,
        chapter: Option<&'a Chapter<'a>>,
        location: Location,
    ) -> Option<ChapterIndex> {
        let section_depth = chapter.map_or(DEFAULT_SECTION_DEPTH, |c| {
            c.book().config().section_depth
        });
        log::debug!("binding index builder at {location}");

        let binding = Binding {
            compiler,
            chapter,
            location,
            index: ChapterIndex::new(chapter.map(|c| c.path()), section_depth),
            doc_status: HashMap::new(),
        };
        self.binding.replace(binding).map(|previous| previous.index)
    }

    pub fn chapter(&self) -> Option<&'a Chapter<'a>> {
        self.binding.as_ref().and_then(|b| b.chapter)
    }

    pub fn location(&self) -> Option<&Location> {
        self.binding.as_ref().map(|b| &b.location)
    }

    /// Moves the current location to `line`, as the compiler advances.
    pub fn set_line(&mut self, line: usize) -> Result<()> {
        self.bound_mut()?.location.line = line;
        Ok(())
    }

    /// Read access to the index being built.
    pub fn index(&self) -> Option<&ChapterIndex> {
        self.binding.as_ref().map(|b| &b.index)
    }

    /// Hands over the index of the current binding.
    pub fn into_index(self) -> Option<ChapterIndex> {
        self.binding.map(|b| b.index)
    }

    pub fn doc_status(&self) -> Result<&HashMap<String, bool>> {
        Ok(&self.bound()?.doc_status)
    }

    pub fn doc_status_mut(&mut self) -> Result<&mut HashMap<String, bool>> {
        Ok(&mut self.bound_mut()?.doc_status)
    }

    // Structural callbacks

    /// Numbers a heading and records `prefix + compiled caption`.
    pub fn headline(&mut self, level: usize, label: Option<&str>, caption: &str) -> Result<usize> {
        let binding = self.bound_mut()?;
        let secnolevel = binding.secnolevel();
        let SectionNumber { prefix, anchor } =
            binding.index.sections.increment(level, secnolevel)?;
        let text = format!("{prefix}{}", binding.compiler.compile_inline(caption));

        Ok(binding
            .index
            .headings
            .append(label, Some(text.as_str()), HeadingDetail { level, anchor }))
    }

    /// An unnumbered heading. It takes part in document order only.
    pub fn nonum_begin(
        &mut self,
        _level: usize,
        _label: Option<&str>,
        _caption: &str,
    ) -> Result<()> {
        self.bound()?;
        Ok(())
    }

    pub fn column_begin(
        &mut self,
        _level: usize,
        label: Option<&str>,
        caption: Option<&str>,
    ) -> Result<usize> {
        let index = &mut self.bound_mut()?.index;
        let list_position = index.lists.next_number();
        Ok(index
            .columns
            .append(label, caption, ColumnDetail { list_position }))
    }

    pub fn column_end(&mut self, _level: usize) -> Result<()> {
        self.bound()?;
        Ok(())
    }

    pub fn list(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.lists.append(Some(id), caption, ()))
    }

    /// A numbered-line list; shares the list sequence with [`list`](Self::list).
    pub fn listnum(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.lists.append(Some(id), caption, ()))
    }

    pub fn table(&mut self, id: Option<&str>, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.tables.append(id, caption, ()))
    }

    /// A table with merged cells; numbered in the table sequence.
    pub fn merged_table(&mut self, id: Option<&str>, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.tables.append(id, caption, ()))
    }

    /// A table supplied as an image; numbered in the table sequence.
    pub fn imgtable(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.tables.append(Some(id), caption, ()))
    }

    /// An unlabelled, uncaptioned table. Never numbered.
    pub fn emtable(&mut self, _caption: Option<&str>) -> Result<()> {
        self.bound()?;
        Ok(())
    }

    pub fn image(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.images.append(Some(id), caption, ()))
    }

    pub fn icon_image(&mut self, id: &str) -> Result<usize> {
        Ok(self.index_mut()?.icons.append(Some(id), None, ()))
    }

    pub fn indepimage(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.indep_images.append(Some(id), caption, ()))
    }

    pub fn numberless_image(&mut self, id: Option<&str>, caption: Option<&str>) -> Result<usize> {
        Ok(self
            .index_mut()?
            .numberless_images
            .append(id, caption, ()))
    }

    pub fn texequation(&mut self, id: Option<&str>, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.equations.append(id, caption, ()))
    }

    /// The footnote body belongs to the renderer and is not recorded.
    pub fn footnote(&mut self, id: &str, _body: &str) -> Result<usize> {
        Ok(self.index_mut()?.footnotes.append(Some(id), None, ()))
    }

    pub fn bibpaper(&mut self, id: &str, caption: Option<&str>) -> Result<usize> {
        Ok(self.index_mut()?.bibpapers.append(Some(id), caption, ()))
    }

    /// Shared handler for every [`CaptionStyle`] block; nothing is indexed.
    pub fn caption_block(&mut self, _style: CaptionStyle, _caption: Option<&str>) -> Result<()> {
        self.bound()?;
        Ok(())
    }

    pub fn caption_block_by_name(&mut self, name: &str, caption: Option<&str>) -> Result<()> {
        self.bound()?;
        match CaptionStyle::from_name(name) {
            Some(style) => self.caption_block(style, caption),
            None if self.strict => Err(self.error(&format!("unknown caption block: {name}"))),
            None => {
                self.warn(&format!("unknown caption block: {name}"));
                Ok(())
            }
        }
    }

    // Inline callbacks

    /// Hands `text` to the compiler for inline expansion.
    pub fn compile_inline(&self, text: &str) -> Result<String> {
        Ok(self.bound()?.compiler.compile_inline(text))
    }

    pub fn text(&self, s: &str) -> String {
        s.to_string()
    }

    pub fn inline_ruby(&self, arg: &str) -> String {
        inline::inline_ruby(arg)
    }

    pub fn inline_kw(&self, arg: &str) -> String {
        inline::inline_kw(arg)
    }

    pub fn inline_href(&self, arg: &str) -> String {
        inline::inline_href(arg)
    }

    /// Expands an inline directive by name.
    pub fn inline(&self, name: &str, arg: &str) -> Result<String> {
        match InlineDirective::from_name(name) {
            Some(directive) => Ok(directive.expand(arg)),
            None if self.strict => Err(self.error(&format!("unknown inline directive: @<{name}>"))),
            None => {
                self.warn(&format!("unknown inline directive: @<{name}>"));
                Ok(String::new())
            }
        }
    }

    // Diagnostics

    /// Builds the fatal error for the current chapter.
    ///
    /// Messages that already carry a `file:line: error: ` prefix pass through
    /// unchanged; anything else is prefixed with the current location.
    pub fn error(&self, msg: &str) -> IndexError {
        if located_error_regex().is_match(msg) {
            return IndexError::Compile(msg.to_string());
        }
        IndexError::Compile(self.located(&format!("error: {msg}")))
    }

    /// Logs a non-fatal, location-prefixed diagnostic.
    pub fn warn(&self, msg: &str) {
        log::warn!("{}", self.located(msg));
    }

    fn located(&self, msg: &str) -> String {
        match self.location() {
            Some(location) => format!("{location}: {msg}"),
            None => msg.to_string(),
        }
    }

    fn bound(&self) -> Result<&Binding<'a>> {
        self.binding.as_ref().ok_or(IndexError::Unbound)
    }

    fn bound_mut(&mut self) -> Result<&mut Binding<'a>> {
        self.binding.as_mut().ok_or(IndexError::Unbound)
    }

    fn index_mut(&mut self) -> Result<&mut ChapterIndex> {
        Ok(&mut self.bound_mut()?.index)
    }
}

fn located_error_regex() -> &'static Regex {
    static LOCATED_ERROR: OnceLock<Regex> = OnceLock::new();
    LOCATED_ERROR
        .get_or_init(|| Regex::new(r":\d+: error: ").expect("Invalid located error regex"))
}
