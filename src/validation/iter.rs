//! Iterator adapters over the value and the errors of a [`Validation`].
//!
//! A validation is a container of zero or one value, so iterating it yields the
//! value when valid and nothing otherwise:
//!
//! ```
//! use field_rail::Validation;
//!
//! let values: Vec<i32> = Validation::valid(3).into_iter().collect();
//! assert_eq!(values, vec![3]);
//!
//! let none: Vec<i32> = Validation::invalid_message("bad").into_iter().collect();
//! assert!(none.is_empty());
//! ```
use crate::types::ErrorMessage;
use crate::validation::core::Validation;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Validation<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T> IntoIterator for &'a Validation<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Validation<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Validation<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Validation::Valid(value) => IterMut { inner: Some(value) },
            Validation::Invalid(_) => IterMut { inner: None },
        }
    }

    /// Iterates the accumulated errors in order; empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, ErrorMessage> {
        self.errors().iter()
    }
}
