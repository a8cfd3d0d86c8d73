//! Conversion helpers between `Result` and [`Validation`].
//!
//! These adapters make it straightforward to feed existing fallible code into
//! an accumulating validation, or to hand a failed validation back to code
//! that uses `?`.
use crate::types::alloc_type::String;
use crate::types::{ErrorMessage, ValidationError};
use crate::validation::core::Validation;
use core::fmt::{Display, Write};

#[inline]
pub fn validation_to_result<T>(validation: Validation<T>) -> Result<T, ValidationError> {
    validation.into_result()
}

/// Wraps a `Result`, rendering its error with `Display` as the message.
///
/// # Examples
///
/// ```
/// use field_rail::convert::result_to_validation;
///
/// let parsed = result_to_validation("x1".parse::<u8>());
/// assert_eq!(parsed.rendered_errors(), vec!["invalid digit found in string"]);
/// ```
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<T>
where
    E: Display,
{
    result.into_validation()
}

/// Turns any `Result` with a displayable error into a [`Validation`].
///
/// # Examples
///
/// ```
/// use field_rail::convert::IntoValidation;
/// use field_rail::map2;
///
/// let point = map2(
///     "3".parse::<i32>().into_validation().at("x"),
///     "four".parse::<i32>().into_validation().at("y"),
///     |x, y| (x, y),
/// );
/// assert_eq!(point.rendered_errors(), vec!["y.invalid digit found in string"]);
/// ```
pub trait IntoValidation<T> {
    fn into_validation(self) -> Validation<T>;
}

impl<T, E> IntoValidation<T> for Result<T, E>
where
    E: Display,
{
    fn into_validation(self) -> Validation<T> {
        match self {
            Ok(value) => Validation::Valid(value),
            Err(error) => {
                let mut message = String::new();
                let _ = write!(message, "{error}");
                Validation::invalid(ErrorMessage::of(message))
            }
        }
    }
}

impl<T> From<ValidationError> for Validation<T> {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Validation::from_errors(error.into_errors())
    }
}
