use std::collections::BTreeMap;

use markup_index_config::IndexConfig;
use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::index::ChapterIndex;

/// Book-wide settings shared by every chapter.
#[derive(Debug, Clone, Default)]
pub struct Book {
    config: IndexConfig,
}

impl Book {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

/// One document unit of a [`Book`].
#[derive(Debug, Clone)]
pub struct Chapter<'b> {
    path: RelativePathBuf,
    number: Option<usize>,
    book: &'b Book,
}

impl<'b> Chapter<'b> {
    pub fn new(book: &'b Book, path: impl Into<RelativePathBuf>, number: Option<usize>) -> Self {
        Self {
            path: path.into(),
            number,
            book,
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    /// Chapter number; `None` for unnumbered parts such as a preface.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    pub fn book(&self) -> &'b Book {
        self.book
    }
}

/// Finished chapter indices keyed by chapter path.
#[derive(Debug, Default, Serialize)]
pub struct BookIndex {
    chapters: BTreeMap<RelativePathBuf, ChapterIndex>,
}

impl BookIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `index` under its chapter path, returning any index it replaces.
    /// Detached indices (no chapter) are not kept.
    pub fn insert(&mut self, index: ChapterIndex) -> Option<ChapterIndex> {
        let path = index.chapter.clone()?;
        self.chapters.insert(path, index)
    }

    pub fn get(&self, chapter: &RelativePath) -> Option<&ChapterIndex> {
        self.chapters.get(chapter)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RelativePath, &ChapterIndex)> {
        self.chapters.iter().map(|(path, index)| (path.as_relative_path(), index))
    }
}

impl FromIterator<ChapterIndex> for BookIndex {
    fn from_iter<I: IntoIterator<Item = ChapterIndex>>(iter: I) -> Self {
        let mut book_index = BookIndex::new();
        for index in iter {
            book_index.insert(index);
        }
        book_index
    }
}
