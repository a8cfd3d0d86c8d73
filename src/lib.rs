//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `field_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Rules
//!
//! ```
//! use field_rail::Rule;
//!
//! let not_empty = Rule::of(|s: &String| !s.is_empty(), "must.not.be.empty");
//! let starts_with_h = Rule::of(|s: &String| s.starts_with('h'), "must.start.with.h");
//!
//! let name = not_empty.and(starts_with_h).test("john".to_string()).at("name");
//! assert_eq!(name.rendered_errors(), vec!["name.must.start.with.h"]);
//! ```
//!
//! ## Validating a Record
//!
//! ```
//! use field_rail::prelude::*;
//!
//! struct Order {
//!     id: u64,
//!     tags: Vec<String>,
//! }
//!
//! let positive = Rule::of(|n: &u64| *n > 0, "must.be.positive");
//! let short = Rule::of(|s: &String| s.len() <= 4, "too.long");
//!
//! let order = map2(
//!     validate_that(0_u64).named("id").is(&positive),
//!     validate_all(vec!["new".to_string(), "priority".to_string()])
//!         .are_all(&short)
//!         .at("tags"),
//!     |id, tags| Order { id, tags },
//! );
//!
//! assert_eq!(
//!     order.rendered_errors(),
//!     vec!["id.must.be.positive", "tags[1].too.long"]
//! );
//! ```
//!
//! ## Leaving Validation
//!
//! ```
//! use field_rail::{Validation, ValidationError};
//!
//! fn load() -> Result<u16, ValidationError> {
//!     let port = Validation::<u16>::invalid_message("out.of.range").at("port");
//!     let port = port.into_result()?;
//!     Ok(port)
//! }
//!
//! assert_eq!(load().unwrap_err().to_string(), "port.out.of.range");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Validation`
pub mod convert;
/// Entry points for validating a value or a list of values
pub mod dsl;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Reusable rules and their combinators
pub mod rule;
/// Paths, error messages, rendering, and the escape-hatch error type
pub mod types;
/// Validation type, sequencing, and the applicative family
pub mod validation;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::IntoValidation;
pub use rule::Rule;
pub use types::{
    error_formatter::ErrorFormatConfig, ErrorFormatter, ErrorMessage, ErrorVec, Path,
    ValidationError,
};
pub use validation::*;
