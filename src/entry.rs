//! Output data model for parsed option strings.
//!
//! This module provides [`OptList`], an ordered sequence of [`Entry`]
//! values produced by parsing. Each entry pairs a [`Tag`] with an optional
//! argument. Unlike a map, an option list preserves duplicates and order,
//! so it wraps a plain `Vec`.
//!
//! ## Deleted entries
//!
//! A tag slot can be logically deleted without resizing the list: the
//! serializer skips [`Tag::Deleted`] slots entirely, including their
//! separators. This replaces sentinel-pointer tricks with an explicit
//! variant that can never collide with real text.
//!
//! ## Examples
//!
//! ```rust
//! use optlex::parse;
//!
//! let mut opts = parse("uppercase,font=12");
//! assert_eq!(opts.len(), 2);
//! assert_eq!(opts[1].tag.text(), Some("font"));
//! assert_eq!(opts[1].arg.as_deref(), Some("12"));
//!
//! opts.delete(0);
//! assert_eq!(optlex::to_string(&opts, ',', Some('=')), "font=12");
//! ```

use serde::{Deserialize, Serialize};

/// The name slot of one option entry.
///
/// # Examples
///
/// ```rust
/// use optlex::Tag;
///
/// let tag = Tag::Active("bold".to_string());
/// assert_eq!(tag.text(), Some("bold"));
/// assert!(!tag.is_deleted());
/// assert!(Tag::Deleted.is_deleted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// A real tag with its text.
    Active(String),
    /// Logically absent; the serializer skips this slot.
    Deleted,
}

impl Tag {
    /// Returns the tag text, or `None` for a deleted slot.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Tag::Active(text) => Some(text),
            Tag::Deleted => None,
        }
    }

    /// Returns `true` if this slot is logically deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Tag::Deleted)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::Active(text.to_string())
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Tag::Active(text)
    }
}

/// One tag/argument pair.
///
/// # Examples
///
/// ```rust
/// use optlex::Entry;
///
/// let flag = Entry::new("bold");
/// assert!(flag.arg.is_none());
///
/// let sized = Entry::with_arg("font", "12");
/// assert_eq!(sized.arg.as_deref(), Some("12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub tag: Tag,
    pub arg: Option<String>,
}

impl Entry {
    /// Creates an entry with no argument.
    #[must_use]
    pub fn new(tag: impl Into<Tag>) -> Self {
        Entry {
            tag: tag.into(),
            arg: None,
        }
    }

    /// Creates an entry with an argument value.
    #[must_use]
    pub fn with_arg(tag: impl Into<Tag>, arg: impl Into<String>) -> Self {
        Entry {
            tag: tag.into(),
            arg: Some(arg.into()),
        }
    }

    /// Creates a logically deleted entry.
    #[must_use]
    pub fn deleted() -> Self {
        Entry {
            tag: Tag::Deleted,
            arg: None,
        }
    }
}

/// An ordered list of option entries.
///
/// This is a thin wrapper around `Vec<Entry>` that keeps the parse order
/// and allows duplicate tags (two `bold` entries are two entries).
///
/// # Examples
///
/// ```rust
/// use optlex::{Entry, OptList};
///
/// let mut opts = OptList::new();
/// opts.push(Entry::new("bold"));
/// opts.push(Entry::with_arg("font", "12"));
///
/// let tags: Vec<_> = opts.iter().filter_map(|e| e.tag.text()).collect();
/// assert_eq!(tags, vec!["bold", "font"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptList(Vec<Entry>);

impl OptList {
    /// Creates an empty `OptList`.
    #[must_use]
    pub fn new() -> Self {
        OptList(Vec::new())
    }

    /// Creates an empty `OptList` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OptList(Vec::with_capacity(capacity))
    }

    /// Appends an entry to the end of the list.
    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.0.get(index)
    }

    /// Returns the number of entries, deleted slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Marks the entry at `index` as deleted without resizing the list.
    ///
    /// Returns `false` if `index` is out of bounds. The serializer will
    /// skip the slot and its separator.
    pub fn delete(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(entry) => {
                entry.tag = Tag::Deleted;
                entry.arg = None;
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the entries in parse order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }
}

impl std::ops::Deref for OptList {
    type Target = [Entry];

    fn deref(&self) -> &[Entry] {
        &self.0
    }
}

impl IntoIterator for OptList {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Entry> for OptList {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        OptList(Vec::from_iter(iter))
    }
}

impl From<Vec<Entry>> for OptList {
    fn from(entries: Vec<Entry>) -> Self {
        OptList(entries)
    }
}

impl From<OptList> for Vec<Entry> {
    fn from(list: OptList) -> Self {
        list.0
    }
}
