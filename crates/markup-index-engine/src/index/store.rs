use serde::Serialize;

/// One numbered element recorded in an [`IndexStore`].
///
/// `detail` carries kind-specific data; most kinds use `()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry<T = ()> {
    /// External label supplied by the author, if any.
    pub id: Option<String>,
    /// 1-based position within the store.
    pub number: usize,
    pub caption: Option<String>,
    pub detail: T,
}

/// Append-only, document-ordered record of one kind of element.
///
/// Invariant: `entries[i].number == i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndexStore<T = ()> {
    entries: Vec<IndexEntry<T>>,
}

impl<T> IndexStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a new entry at the end and returns its number.
    pub fn append(&mut self, id: Option<&str>, caption: Option<&str>, detail: T) -> usize {
        let number = self.next_number();
        self.entries.push(IndexEntry {
            id: id.map(str::to_string),
            number,
            caption: caption.map(str::to_string),
            detail,
        });
        number
    }

    /// The number the next appended entry will receive.
    pub fn next_number(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry<T>> {
        self.entries.iter()
    }

    /// Looks up an entry by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&IndexEntry<T>> {
        number.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// First entry carrying the given label. Labels are not checked for
    /// uniqueness, so later duplicates are shadowed.
    pub fn find(&self, id: &str) -> Option<&IndexEntry<T>> {
        self.entries.iter().find(|e| e.id.as_deref() == Some(id))
    }
}

impl<T> Default for IndexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a IndexStore<T> {
    type Item = &'a IndexEntry<T>;
    type IntoIter = std::slice::Iter<'a, IndexEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
