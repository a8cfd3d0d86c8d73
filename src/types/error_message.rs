//! A single validation failure: an opaque message plus where it happened.
//!
//! Paths are stored innermost-first, so prepending a new outer segment is a
//! push onto the end of the backing [`ErrorVec`]. Rendering walks them in
//! reverse, from the outermost segment to the innermost, and finishes with
//! the message:
//!
//! ```
//! use field_rail::types::{ErrorMessage, Path};
//!
//! let error = ErrorMessage::of("must.start.with.h")
//!     .at_index(1)
//!     .prepend(Path::named("name"));
//!
//! assert_eq!(error.to_string(), "name[1].must.start.with.h");
//! ```
use crate::types::alloc_type::String;
use crate::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use crate::types::path::{Coalesced, Path};
use crate::types::ErrorVec;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error message together with its location.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorMessage {
    message: String,
    /// Innermost segment first; the last element is the head.
    paths: ErrorVec<Path>,
}

impl ErrorMessage {
    /// Creates an error with explicit paths given outermost first, the order
    /// in which they render.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::types::{ErrorMessage, Path};
    ///
    /// let error = ErrorMessage::new("too.short", [Path::named("user"), Path::named("name")]);
    /// assert_eq!(error.to_string(), "user.name.too.short");
    /// ```
    pub fn new<I>(message: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = Path>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self { message: message.into(), paths: paths.into_iter().rev().collect() }
    }

    /// Creates an error with no location.
    #[inline]
    pub fn of(message: impl Into<String>) -> Self {
        Self { message: message.into(), paths: ErrorVec::new() }
    }

    /// The bare message, without any path.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterates the path segments outermost first.
    #[inline]
    pub fn paths(&self) -> impl DoubleEndedIterator<Item = &Path> + ExactSizeIterator {
        self.paths.iter().rev()
    }

    /// The most recently prepended (outermost) segment.
    #[inline]
    pub fn head(&self) -> Option<&Path> {
        self.paths.last()
    }

    /// Puts `path` in front of the existing segments.
    ///
    /// When the current head is an index-only segment and `path` is a
    /// name-only segment, the two fuse into a single `name[index]` segment
    /// instead of stacking. See [`Path::coalesce`].
    #[must_use]
    pub fn prepend(mut self, path: Path) -> Self {
        let coalesced = match self.paths.last() {
            Some(head) => path.coalesce(head),
            None => Coalesced::Stacked(path),
        };
        match coalesced {
            Coalesced::Merged(merged) => {
                if let Some(head) = self.paths.last_mut() {
                    *head = merged;
                }
            }
            Coalesced::Stacked(path) => self.paths.push(path),
        }
        self
    }

    /// Tags this error with a list position.
    ///
    /// With no paths yet, an index-only segment is added. Otherwise the head
    /// segment keeps its name and takes `index`; deeper segments are not
    /// touched.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        match self.paths.pop() {
            Some(head) => self.paths.push(head.with_index(index)),
            None => self.paths.push(Path::indexed(index)),
        }
        self
    }

    /// Renders only the location part, e.g. `items[2].name`.
    pub fn path_string(&self) -> String {
        ErrorFormatConfig::default().format_location(self)
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorFormatConfig::default().format_message(self))
    }
}

impl From<&str> for ErrorMessage {
    #[inline]
    fn from(message: &str) -> Self {
        Self::of(message)
    }
}

impl From<String> for ErrorMessage {
    #[inline]
    fn from(message: String) -> Self {
        Self::of(message)
    }
}
