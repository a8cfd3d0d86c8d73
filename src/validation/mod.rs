//! The [`Validation`] type and the operations that combine validations.
//!
//! - [`Validation`] - A checked value, or every error found while checking it
//! - [`Validation::sequence`] - Many validations into one, tagging failures with their index
//! - [`map2`]..[`map8`], [`flat_map2`]..[`flat_map8`] - Combine independent validations
//! - Iterator adapters over the value and the errors
//!
//! # Examples
//!
//! ```
//! use field_rail::validation::Validation;
//!
//! let names = Validation::sequence(vec![
//!     Validation::valid("hugh"),
//!     Validation::invalid_message("must.start.with.h"),
//! ])
//! .at("name");
//!
//! assert_eq!(names.rendered_errors(), vec!["name[1].must.start.with.h"]);
//! ```
pub mod applicative;
pub mod core;
pub mod iter;

pub use self::applicative::*;
pub use self::core::*;
pub use self::iter::*;
