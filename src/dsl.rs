//! Entry points that start a validation from a value or a list of values.
//!
//! These are thin wrappers over [`Rule::check`] and [`Validation::sequence`].
//! The rule may be written for the value's own type or for anything the
//! value can be borrowed as.
//!
//! # Examples
//!
//! ```
//! use field_rail::dsl::{validate_all, validate_that};
//! use field_rail::Rule;
//!
//! let positive = Rule::of(|n: &i64| *n > 0, "must.be.positive");
//!
//! let age = validate_that(-3_i64).named("age").is(&positive);
//! assert_eq!(age.rendered_errors(), vec!["age.must.be.positive"]);
//!
//! let scores = validate_all(vec![0_i64, 1, 10]).are_all(&positive);
//! assert_eq!(scores.rendered_errors(), vec!["[0].must.be.positive"]);
//! ```
use crate::rule::Rule;
use crate::types::alloc_type::{String, Vec};
use crate::validation::Validation;
use core::borrow::Borrow;

/// Starts validating a single value.
#[inline]
pub fn validate_that<T>(value: T) -> ValidateThat<T> {
    ValidateThat { value, name: None }
}

/// Starts validating every element of a collection against one rule.
#[inline]
pub fn validate_all<I>(values: I) -> ValidateAll<I>
where
    I: IntoIterator,
{
    ValidateAll { values }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct ValidateThat<T> {
    value: T,
    name: Option<String>,
}

impl<T> ValidateThat<T> {
    /// Nests any error under `name`, as [`Validation::at`] does.
    #[inline]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Checks the value against `rule`.
    pub fn is<R>(self, rule: &Rule<R>) -> Validation<T>
    where
        T: Borrow<R>,
        R: ?Sized,
    {
        let ValidateThat { value, name } = self;
        let validation = match rule.check(<T as Borrow<R>>::borrow(&value)) {
            Validation::Valid(()) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        };
        match name {
            Some(name) => {
                #[cfg(feature = "tracing")]
                if validation.is_invalid() {
                    tracing::trace!(
                        field = %name,
                        errors = validation.errors().len(),
                        "value failed validation"
                    );
                }
                validation.at(name)
            }
            None => validation,
        }
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct ValidateAll<I> {
    values: I,
}

impl<I> ValidateAll<I>
where
    I: IntoIterator,
{
    /// Checks every element against `rule`; failures are tagged with their
    /// position in the collection.
    pub fn are_all<R>(self, rule: &Rule<R>) -> Validation<Vec<I::Item>>
    where
        I::Item: Borrow<R>,
        R: ?Sized,
    {
        let validation = Validation::sequence(self.values.into_iter().map(|value| {
            match rule.check(<I::Item as Borrow<R>>::borrow(&value)) {
                Validation::Valid(()) => Validation::Valid(value),
                Validation::Invalid(errors) => Validation::Invalid(errors),
            }
        }));
        #[cfg(feature = "tracing")]
        if validation.is_invalid() {
            tracing::trace!(errors = validation.errors().len(), "collection failed validation");
        }
        validation
    }
}
