//! Location segments attached to an [`ErrorMessage`](crate::types::ErrorMessage).
//!
//! A [`Path`] names where a failure happened: a field (`name`), a list
//! position (`[2]`), or both at once (`items[2]`).
//!
//! # Examples
//!
//! ```
//! use field_rail::types::Path;
//!
//! assert_eq!(Path::named("name").to_string(), "name");
//! assert_eq!(Path::indexed(1).to_string(), "[1]");
//! assert_eq!(Path::new("items", Some(2)).to_string(), "items[2]");
//! ```
use crate::types::alloc_type::String;
use crate::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One location segment: an optional field name and an optional list index.
///
/// An empty `text` means "no name". A path with empty text and no index
/// renders as the empty string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    text: String,
    index: Option<usize>,
}

/// Result of putting a new segment in front of an existing head segment.
///
/// See [`Path::coalesce`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Coalesced {
    /// The incoming name and the head's index were fused into one segment
    /// that replaces the head.
    Merged(Path),
    /// The incoming segment is kept as-is and becomes the new head.
    Stacked(Path),
}

impl Path {
    /// Creates a path from a name (possibly empty) and an optional index.
    #[inline]
    pub fn new(text: impl Into<String>, index: Option<usize>) -> Self {
        Self { text: text.into(), index }
    }

    /// Creates a name-only path, as used by [`Validation::at`](crate::Validation::at).
    #[inline]
    pub fn named(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// Creates an index-only path, as produced by sequencing a list.
    #[inline]
    pub fn indexed(index: usize) -> Self {
        Self { text: String::new(), index: Some(index) }
    }

    /// The field name of this segment; empty when the segment has no name.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// `true` for segments like `[3]`: no name, an index.
    #[inline]
    pub fn is_index_only(&self) -> bool {
        self.text.is_empty() && self.index.is_some()
    }

    /// `true` for segments like `name`: a name, no index.
    #[inline]
    pub fn is_name_only(&self) -> bool {
        !self.text.is_empty() && self.index.is_none()
    }

    /// Returns this segment with its index replaced, keeping the name.
    #[must_use]
    #[inline]
    pub fn with_index(self, index: usize) -> Self {
        Self { text: self.text, index: Some(index) }
    }

    /// Decides how `incoming` is placed in front of `head`.
    ///
    /// | head         | incoming   | outcome                                  |
    /// |--------------|------------|------------------------------------------|
    /// | index-only   | name-only  | `Merged` (incoming name, head index)     |
    /// | index-only   | other      | `Stacked`                                |
    /// | other        | name-only  | `Stacked`                                |
    /// | other        | other      | `Stacked`                                |
    ///
    /// The merge is what turns `[2]` followed by `at("field")` into `field[2]`
    /// rather than `field.[2]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::types::{Coalesced, Path};
    ///
    /// let merged = Path::named("field").coalesce(&Path::indexed(2));
    /// assert_eq!(merged, Coalesced::Merged(Path::new("field", Some(2))));
    ///
    /// let stacked = Path::named("root").coalesce(&Path::named("nested"));
    /// assert_eq!(stacked, Coalesced::Stacked(Path::named("root")));
    /// ```
    #[must_use]
    pub fn coalesce(self, head: &Path) -> Coalesced {
        match (head.index, head.is_index_only(), self.is_name_only()) {
            (Some(index), true, true) => Coalesced::Merged(self.with_index(index)),
            _ => Coalesced::Stacked(self),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorFormatConfig::default().format_path(self))
    }
}

impl From<&str> for Path {
    #[inline]
    fn from(text: &str) -> Self {
        Self::named(text)
    }
}

impl From<usize> for Path {
    #[inline]
    fn from(index: usize) -> Self {
        Self::indexed(index)
    }
}
