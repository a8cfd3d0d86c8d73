//! Rendering of paths and error messages into strings.
//!
//! The default configuration produces the canonical form used by
//! [`Display`](core::fmt::Display): segments outermost first, then the
//! message, joined with `.`; indices in square brackets.

use crate::types::alloc_type::String;
use crate::types::error_message::ErrorMessage;
use crate::types::path::Path;
use core::fmt::Write;

/// Trait for customizing how errors are turned into text.
///
/// Only the separators need to be provided; the formatting methods have
/// defaults built on top of them.
pub trait ErrorFormatter {
    /// Separator between path segments and before the message.
    fn separator(&self) -> &str {
        "."
    }

    fn index_prefix(&self) -> &str {
        "["
    }

    fn index_suffix(&self) -> &str {
        "]"
    }

    /// Separator between whole errors in [`format_errors`](Self::format_errors).
    fn error_separator(&self) -> &str {
        "\n"
    }

    /// Renders one segment.
    ///
    /// When the index prefix equals the separator, an index-only segment
    /// renders as the bare index so joining never doubles the separator.
    fn format_path(&self, path: &Path) -> String {
        let mut out = String::from(path.text());
        if let Some(index) = path.index() {
            if !out.is_empty() || self.index_prefix() != self.separator() {
                out.push_str(self.index_prefix());
            }
            let _ = write!(out, "{index}");
            out.push_str(self.index_suffix());
        }
        out
    }

    /// Renders the location of `error` without its message.
    ///
    /// Segments that render empty are skipped so they never produce a
    /// doubled separator.
    fn format_location(&self, error: &ErrorMessage) -> String {
        let mut out = String::new();
        for segment in error.paths().map(|path| self.format_path(path)) {
            if segment.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(self.separator());
            }
            out.push_str(&segment);
        }
        out
    }

    fn format_message(&self, error: &ErrorMessage) -> String {
        let mut out = self.format_location(error);
        if !out.is_empty() {
            out.push_str(self.separator());
        }
        out.push_str(error.message());
        out
    }

    fn format_errors<'a, I>(&self, errors: I) -> String
    where
        I: IntoIterator<Item = &'a ErrorMessage>,
    {
        let mut out = String::new();
        for (position, error) in errors.into_iter().enumerate() {
            if position > 0 {
                out.push_str(self.error_separator());
            }
            out.push_str(&self.format_message(error));
        }
        out
    }
}

/// Configuration-based error formatter.
///
/// # Examples
///
/// ```
/// use field_rail::types::{ErrorFormatConfig, ErrorFormatter, ErrorMessage, Path};
///
/// let error = ErrorMessage::of("required").at_index(0).prepend(Path::named("tags"));
///
/// assert_eq!(ErrorFormatConfig::default().format_message(&error), "tags[0].required");
/// assert_eq!(ErrorFormatConfig::slash().format_message(&error), "tags/0/required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub index_prefix: String,
    pub index_suffix: String,
    pub error_separator: String,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: ".".into(),
            index_prefix: "[".into(),
            index_suffix: "]".into(),
            error_separator: "\n".into(),
        }
    }
}

impl ErrorFormatConfig {
    /// All errors on a single line, separated by `, `.
    #[inline]
    pub fn compact() -> Self {
        Self { error_separator: ", ".into(), ..Default::default() }
    }

    /// JSON-pointer-like rendering: `items/2/name/required`.
    ///
    /// Index-only segments render as the bare index, so a stacked `[0].[1]`
    /// becomes `0/1`.
    #[inline]
    pub fn slash() -> Self {
        Self {
            separator: "/".into(),
            index_prefix: "/".into(),
            index_suffix: String::new(),
            ..Default::default()
        }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn index_prefix(&self) -> &str {
        &self.index_prefix
    }

    fn index_suffix(&self) -> &str {
        &self.index_suffix
    }

    fn error_separator(&self) -> &str {
        &self.error_separator
    }
}
