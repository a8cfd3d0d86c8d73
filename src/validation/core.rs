use crate::types::alloc_type::{String, Vec};
use crate::types::{ErrorMessage, ErrorVec, Path, ValidationError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Applicative-style validation that accumulates path-annotated errors instead of failing fast.
///
/// `Validation<T>` is either a checked value or every [`ErrorMessage`] found while
/// checking it. Unlike `Result`, combining validations with [`sequence`](Self::sequence)
/// or the [`map2`](crate::map2)..[`map8`](crate::map8) family keeps all failures, each
/// tagged with where it happened.
///
/// # Variants
///
/// * `Valid(T)` - The value passed every check
/// * `Invalid(ErrorVec<ErrorMessage>)` - The failures, in the order they were found
///
/// # Examples
///
/// ```
/// use field_rail::Validation;
///
/// let valid = Validation::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<i32>::invalid_message("must.be.positive").at("age");
/// assert_eq!(invalid.rendered_errors(), vec!["age.must.be.positive"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<T> {
    Valid(T),
    Invalid(ErrorVec<ErrorMessage>),
}

impl<T> Validation<T> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::valid("hugh");
    /// assert_eq!(v.into_value(), Some("hugh"));
    /// ```
    #[must_use]
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    #[must_use]
    #[inline]
    pub fn invalid(error: ErrorMessage) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from a bare message with no location.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::<()>::invalid_message("missing");
    /// assert_eq!(v.errors()[0].message(), "missing");
    /// assert_eq!(v.errors()[0].paths().count(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Self::invalid(ErrorMessage::of(message))
    }

    /// Creates an invalid value from any number of errors, kept in order.
    ///
    /// An empty iterator yields an `Invalid` with no errors. None of the
    /// combinators in this crate produce one, but it still counts as invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::{ErrorMessage, Validation};
    ///
    /// let v = Validation::<()>::invalid_many([ErrorMessage::of("a"), ErrorMessage::of("b")]);
    /// assert_eq!(v.errors().len(), 2);
    ///
    /// let empty = Validation::<()>::invalid_many([]);
    /// assert!(!empty.is_valid());
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorMessage>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Creates an invalid value that takes ownership of an existing error list.
    #[must_use]
    #[inline]
    pub fn from_errors(errors: ErrorVec<ErrorMessage>) -> Self {
        Self::Invalid(errors)
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The accumulated errors; empty when valid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[ErrorMessage] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Renders every error in canonical `path.message` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::sequence(vec![
    ///     Validation::valid(1),
    ///     Validation::invalid_message("e1"),
    /// ]);
    /// assert_eq!(v.rendered_errors(), vec!["[1].e1"]);
    /// ```
    #[must_use]
    pub fn rendered_errors(&self) -> Vec<String> {
        use crate::types::ErrorFormatter;

        let config = crate::types::ErrorFormatConfig::default();
        self.errors().iter().map(|error| config.format_message(error)).collect()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are carried over untouched and
    /// `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains a dependent check (flatMap).
    ///
    /// `f` runs only when this validation is valid; an invalid input is
    /// returned as-is without evaluating `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// fn even(input: i32) -> Validation<i32> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid_message("must.be.even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::valid(4).and_then(even).into_value(), Some(4));
    /// assert!(Validation::valid(3).and_then(even).is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> Validation<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Collapses both branches into one value. Exactly one closure runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::<u8>::invalid_message("boom");
    /// let summary = v.fold(|errors| errors.len(), |_| 0);
    /// assert_eq!(summary, 1);
    /// ```
    #[inline]
    pub fn fold<R, I, V>(self, on_invalid: I, on_valid: V) -> R
    where
        I: FnOnce(ErrorVec<ErrorMessage>) -> R,
        V: FnOnce(T) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Replaces the whole error list; identity on valid values.
    #[must_use]
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorVec<ErrorMessage>) -> ErrorVec<ErrorMessage>,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(f(errors)),
        }
    }

    /// Nests every error under a field name.
    ///
    /// Calls compose outward: the last `at` ends up leftmost. A name applied
    /// on top of a list index produced by [`sequence`](Self::sequence) fuses
    /// with it (`field[2]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::<()>::invalid_message("must.not.be.null")
    ///     .at("nested")
    ///     .at("root");
    /// assert_eq!(v.rendered_errors(), vec!["root.nested.must.not.be.null"]);
    /// ```
    #[must_use]
    pub fn at(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.map_errors(|errors| {
            errors.into_iter().map(|error| error.prepend(Path::named(name.clone()))).collect()
        })
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// This is the tuple form of [`map2`](crate::map2).
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let both = Validation::valid(1).zip(Validation::valid("a"));
    /// assert_eq!(both.into_value(), Some((1, "a")));
    ///
    /// let errs = Validation::<i32>::invalid_message("e1")
    ///     .zip(Validation::<i32>::invalid_message("e2"));
    /// assert_eq!(errs.rendered_errors(), vec!["e1", "e2"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Validation<U>) -> Validation<(T, U)> {
        crate::validation::applicative::map2(self, other, |a, b| (a, b))
    }

    /// Re-types the value through [`Into`], e.g. to a wider or more general
    /// type. Errors are untouched.
    ///
    /// This is the `narrow` cast between a validation and one over a related
    /// value type; the name refers to the view the caller ends up with, not
    /// to the direction of the conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let small: Validation<u8> = Validation::valid(7);
    /// let wide: Validation<u64> = small.narrow();
    /// assert_eq!(wide.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn narrow<U>(self) -> Validation<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Turns a list of validations into one validation of a list.
    ///
    /// Succeeds only if every element is valid, keeping their order. Otherwise
    /// every failing element contributes its errors, tagged with its position
    /// in the input, in ascending position order.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let all = Validation::sequence(vec![
    ///     Validation::valid(1),
    ///     Validation::invalid_message("e1"),
    ///     Validation::valid(3),
    ///     Validation::invalid_message("e2"),
    /// ]);
    /// assert_eq!(all.rendered_errors(), vec!["[1].e1", "[3].e2"]);
    /// ```
    pub fn sequence<I>(validations: I) -> Validation<Vec<T>>
    where
        I: IntoIterator<Item = Validation<T>>,
    {
        validations.into_iter().enumerate().fold(
            Validation::Valid(Vec::new()),
            |acc, (index, validation)| match (acc, validation) {
                (Validation::Valid(mut values), Validation::Valid(value)) => {
                    values.push(value);
                    Validation::Valid(values)
                }
                (Validation::Valid(_), Validation::Invalid(errors)) => {
                    Validation::Invalid(errors.into_iter().map(|e| e.at_index(index)).collect())
                }
                (acc @ Validation::Invalid(_), Validation::Valid(_)) => acc,
                (Validation::Invalid(mut acc), Validation::Invalid(errors)) => {
                    acc.extend(errors.into_iter().map(|e| e.at_index(index)));
                    Validation::Invalid(acc)
                }
            },
        )
    }

    /// Converts into a `Result`, keeping every error.
    #[inline]
    pub fn to_result(self) -> Result<T, ErrorVec<ErrorMessage>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts into a `Result` whose error implements `core::error::Error`,
    /// ready for `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, ValidationError> {
        self.to_result().map_err(ValidationError::new)
    }

    /// Wraps a `Result`, turning the error side into a single-error validation.
    #[inline]
    pub fn from_result(result: Result<T, ErrorMessage>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<ErrorMessage>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<T> From<ErrorMessage> for Validation<T> {
    #[inline]
    fn from(error: ErrorMessage) -> Self {
        Self::invalid(error)
    }
}

impl<T> From<ErrorVec<ErrorMessage>> for Validation<T> {
    #[inline]
    fn from(errors: ErrorVec<ErrorMessage>) -> Self {
        Self::Invalid(errors)
    }
}

impl<T> From<Validation<T>> for Result<T, ValidationError> {
    #[inline]
    fn from(validation: Validation<T>) -> Self {
        validation.into_result()
    }
}

/// Collecting validations is [`Validation::sequence`].
///
/// ```
/// use field_rail::Validation;
///
/// let collected: Validation<Vec<u32>> = ["1", "x", "3"]
///     .iter()
///     .map(|s| s.parse::<u32>().map_or_else(|_| Validation::invalid_message("nan"), Validation::valid))
///     .collect();
/// assert_eq!(collected.rendered_errors(), vec!["[1].nan"]);
/// ```
impl<T> FromIterator<Validation<T>> for Validation<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validation<T>>>(iter: I) -> Self {
        Validation::sequence(iter)
    }
}
