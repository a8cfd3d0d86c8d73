//! Bridge from accumulated validation failures to `Result`-based error handling.
use crate::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use crate::types::error_message::ErrorMessage;
use crate::types::ErrorVec;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every error of a failed validation, raised as a single error value.
///
/// Produced by [`Validation::into_result`](crate::Validation::into_result) when
/// a caller wants to leave the accumulation world and use `?`.
///
/// # Examples
///
/// ```
/// use field_rail::{Validation, ValidationError};
///
/// fn parse(input: &str) -> Result<u32, ValidationError> {
///     let age: Validation<u32> = input
///         .parse()
///         .map_or_else(|_| Validation::invalid_message("not.a.number"), Validation::valid);
///     age.at("age").into_result()
/// }
///
/// let err = parse("abc").unwrap_err();
/// assert_eq!(err.to_string(), "age.not.a.number");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    errors: ErrorVec<ErrorMessage>,
}

impl ValidationError {
    #[inline]
    pub fn new(errors: ErrorVec<ErrorMessage>) -> Self {
        Self { errors }
    }

    #[inline]
    pub fn errors(&self) -> &[ErrorMessage] {
        &self.errors
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<ErrorMessage> {
        self.errors
    }
}

impl Display for ValidationError {
    /// One rendered error per line; `{:#}` joins them with `, ` instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = if f.alternate() {
            ErrorFormatConfig::compact()
        } else {
            ErrorFormatConfig::default()
        };
        f.write_str(&config.format_errors(&self.errors))
    }
}

impl core::error::Error for ValidationError {}

impl From<ErrorVec<ErrorMessage>> for ValidationError {
    #[inline]
    fn from(errors: ErrorVec<ErrorMessage>) -> Self {
        Self::new(errors)
    }
}
