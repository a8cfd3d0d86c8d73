//! Reusable checks that turn a value into a [`Validation`] of itself.
//!
//! A [`Rule`] holds no state besides its check, so it can be built once,
//! cloned cheaply, and shared across threads.
//!
//! # Examples
//!
//! ```
//! use field_rail::Rule;
//!
//! let not_empty = Rule::of(|s: &String| !s.is_empty(), "must.not.be.empty");
//! let starts_with_h = Rule::of(|s: &String| s.starts_with('h'), "must.start.with.h");
//! let compliant = not_empty.and(starts_with_h);
//!
//! assert!(compliant.test("hugh".to_string()).is_valid());
//! assert_eq!(
//!     compliant.test("john".to_string()).rendered_errors(),
//!     vec!["must.start.with.h"]
//! );
//! ```
use crate::types::alloc_type::{Arc, String};
use crate::types::ErrorMessage;
use crate::validation::Validation;
use core::borrow::Borrow;
use core::fmt;

/// A named test `T -> Validation<T>`.
///
/// On success the tested value is handed back untouched; on failure the
/// value is dropped and only the errors remain.
///
/// Building a rule requires `T: 'static`, because the check is stored as a
/// shared `'static` closure. A rule over a borrowed type such as `&'a str`
/// therefore only accepts `'static` borrows. To check short-lived borrows,
/// write the rule over the unsized target (`Rule<str>`, `Rule<[u8]>`) and
/// call [`check`](Rule::check), or [`narrow`](Rule::narrow) it to an owning
/// type.
///
/// ```
/// use field_rail::Rule;
///
/// let not_blank: Rule<str> = Rule::of(|s: &str| !s.trim().is_empty(), "must.not.be.blank");
/// let local = String::from("  ");
///
/// assert!(not_blank.check(local.as_str()).is_invalid());
/// ```
pub struct Rule<T: ?Sized> {
    check: Arc<dyn Fn(&T) -> Validation<()> + Send + Sync>,
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self { check: Arc::clone(&self.check) }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Rule<T> {
    /// Builds a rule from a predicate and the message reported when it does
    /// not hold. The message carries no path.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Rule;
    ///
    /// let long_enough = Rule::of(|s: &&str| s.len() > 3, "too.short");
    /// assert!(long_enough.test("hello").is_valid());
    /// assert_eq!(long_enough.test("hi").rendered_errors(), vec!["too.short"]);
    /// ```
    pub fn of<P>(predicate: P, message: impl Into<String>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::from_fn(move |value| {
            if predicate(value) {
                Validation::Valid(())
            } else {
                Validation::invalid(ErrorMessage::of(message.clone()))
            }
        })
    }

    /// Builds a rule from an arbitrary check, which may report several errors
    /// or errors that already carry paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::{ErrorMessage, Rule, Validation};
    ///
    /// let in_range = Rule::from_fn(|n: &i32| {
    ///     let mut errors = Vec::new();
    ///     if *n < 0 {
    ///         errors.push(ErrorMessage::of("must.not.be.negative"));
    ///     }
    ///     if n % 2 != 0 {
    ///         errors.push(ErrorMessage::of("must.be.even"));
    ///     }
    ///     if errors.is_empty() {
    ///         Validation::valid(())
    ///     } else {
    ///         Validation::invalid_many(errors)
    ///     }
    /// });
    ///
    /// assert_eq!(in_range.test(-3).errors().len(), 2);
    /// ```
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(&T) -> Validation<()> + Send + Sync + 'static,
    {
        Self { check: Arc::new(check) }
    }

    /// Conjunction, first failure wins.
    ///
    /// `other` only runs when `self` passes, so the result reports at most one
    /// of the two rules' failures.
    #[must_use]
    pub fn and(self, other: Rule<T>) -> Rule<T> {
        let first = self.check;
        let second = other.check;
        Self::from_fn(move |value| match first(value) {
            Validation::Valid(()) => second(value),
            invalid => invalid,
        })
    }

    /// Disjunction, first success wins.
    ///
    /// `other` only runs when `self` fails. When both fail the errors of
    /// `self` come first, followed by those of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Rule;
    ///
    /// let minus_forty_two = Rule::of(|n: &i32| *n == -42, "must.be.minus.forty.two");
    /// let positive = Rule::of(|n: &i32| *n > 0, "must.be.positive");
    /// let either = minus_forty_two.or(positive);
    ///
    /// assert_eq!(
    ///     either.test(-1).rendered_errors(),
    ///     vec!["must.be.minus.forty.two", "must.be.positive"]
    /// );
    /// assert_eq!(either.test(10).into_value(), Some(10));
    /// ```
    #[must_use]
    pub fn or(self, other: Rule<T>) -> Rule<T> {
        let first = self.check;
        let second = other.check;
        Self::from_fn(move |value| match first(value) {
            Validation::Valid(()) => Validation::Valid(()),
            Validation::Invalid(mut errors) => match second(value) {
                Validation::Valid(()) => Validation::Valid(()),
                Validation::Invalid(more) => {
                    errors.extend(more);
                    Validation::Invalid(errors)
                }
            },
        })
    }

    /// Reuses a rule written for `T` on any type that can be borrowed as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::Rule;
    ///
    /// let not_blank: Rule<str> = Rule::of(|s: &str| !s.trim().is_empty(), "must.not.be.blank");
    /// let for_strings: Rule<String> = not_blank.narrow();
    ///
    /// assert_eq!(for_strings.test("  ".to_string()).rendered_errors(), vec!["must.not.be.blank"]);
    /// ```
    #[must_use]
    pub fn narrow<S>(self) -> Rule<S>
    where
        S: Borrow<T> + 'static,
    {
        let check = self.check;
        Rule::from_fn(move |value: &S| check(<S as Borrow<T>>::borrow(value)))
    }
}

impl<T: ?Sized> Rule<T> {
    /// Runs the check without taking ownership of the value.
    #[inline]
    pub fn check(&self, value: &T) -> Validation<()> {
        (self.check)(value)
    }
}

impl<T> Rule<T> {
    /// Applies the rule, handing back `value` on success.
    #[inline]
    pub fn test(&self, value: T) -> Validation<T> {
        match (self.check)(&value) {
            Validation::Valid(()) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}
