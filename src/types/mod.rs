//! Error model: location segments, messages, rendering, and the error type
//! used to leave validation for `Result`.
//!
//! # Examples
//!
//! ```
//! use field_rail::types::{ErrorMessage, Path};
//!
//! let error = ErrorMessage::of("must.not.be.null")
//!     .prepend(Path::named("nested"))
//!     .prepend(Path::named("root"));
//!
//! assert_eq!(error.to_string(), "root.nested.must.not.be.null");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_formatter;
pub mod error_message;
pub mod path;
pub mod validation_error;

pub use error_formatter::{ErrorFormatConfig, ErrorFormatter};
pub use error_message::*;
pub use path::*;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating errors and path segments.
///
/// Uses inline storage for a single element, which covers the common case of
/// one error per field and one segment per error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
