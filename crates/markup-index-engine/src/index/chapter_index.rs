use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::numbering::SectionCounter;

use super::store::IndexStore;

/// Extra data kept for each heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingDetail {
    pub level: usize,
    /// Hierarchical position, e.g. `"1.2"`, present even when the prefix is hidden.
    pub anchor: String,
}

/// Extra data kept for each column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDetail {
    /// The list number that would be assigned next when the column opened,
    /// tying the column's start to the list numbering stream.
    pub list_position: usize,
}

/// The referenceable kinds, one per store in a [`ChapterIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Heading,
    List,
    Table,
    Equation,
    Footnote,
    Image,
    Icon,
    NumberlessImage,
    IndepImage,
    Bibpaper,
    Column,
}

impl IndexKind {
    pub const ALL: [IndexKind; 11] = [
        IndexKind::Heading,
        IndexKind::List,
        IndexKind::Table,
        IndexKind::Equation,
        IndexKind::Footnote,
        IndexKind::Image,
        IndexKind::Icon,
        IndexKind::NumberlessImage,
        IndexKind::IndepImage,
        IndexKind::Bibpaper,
        IndexKind::Column,
    ];
}

/// Everything indexed for one chapter, handed to the rendering stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChapterIndex {
    /// Chapter this index belongs to; `None` for a detached binding.
    pub chapter: Option<RelativePathBuf>,
    pub headings: IndexStore<HeadingDetail>,
    pub lists: IndexStore,
    pub tables: IndexStore,
    pub equations: IndexStore,
    pub footnotes: IndexStore,
    pub images: IndexStore,
    pub icons: IndexStore,
    pub numberless_images: IndexStore,
    pub indep_images: IndexStore,
    pub bibpapers: IndexStore,
    pub columns: IndexStore<ColumnDetail>,
    pub sections: SectionCounter,
}

impl ChapterIndex {
    pub fn new(chapter: Option<&RelativePath>, section_depth: usize) -> Self {
        Self {
            chapter: chapter.map(RelativePath::to_relative_path_buf),
            sections: SectionCounter::new(section_depth),
            ..Self::default()
        }
    }

    /// Number of entries recorded for `kind`.
    pub fn len(&self, kind: IndexKind) -> usize {
        match kind {
            IndexKind::Heading => self.headings.len(),
            IndexKind::List => self.lists.len(),
            IndexKind::Table => self.tables.len(),
            IndexKind::Equation => self.equations.len(),
            IndexKind::Footnote => self.footnotes.len(),
            IndexKind::Image => self.images.len(),
            IndexKind::Icon => self.icons.len(),
            IndexKind::NumberlessImage => self.numberless_images.len(),
            IndexKind::IndepImage => self.indep_images.len(),
            IndexKind::Bibpaper => self.bibpapers.len(),
            IndexKind::Column => self.columns.len(),
        }
    }

    /// True when no store holds any entry.
    pub fn is_empty(&self) -> bool {
        IndexKind::ALL.iter().all(|&kind| self.len(kind) == 0)
    }
}
