//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let positive = Rule::of(|n: &i32| *n > 0, "must.be.positive");
//! let v: Validation<i32> = validate_that(5_i32).named("count").is(&positive);
//! assert!(v.is_valid());
//! ```

// Entry points
pub use crate::dsl::{validate_all, validate_that};

// Core types
pub use crate::rule::Rule;
pub use crate::types::{ErrorMessage, Path, ValidationError};
pub use crate::validation::Validation;

// Applicative family
pub use crate::validation::applicative::{
    flat_map2, flat_map3, flat_map4, flat_map5, flat_map6, flat_map7, flat_map8, map2, map3,
    map4, map5, map6, map7, map8,
};

// Traits
pub use crate::convert::IntoValidation;
#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ValidationTraceExt;
