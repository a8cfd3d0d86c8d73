//! Tracing integration for field-rail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! field-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::validation::Validation;

/// Extension trait that reports failures to the current `tracing` subscriber.
pub trait ValidationTraceExt: Sized {
    /// Emits one `debug` event per error, with the rendered location and the
    /// bare message as separate fields, then returns `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use field_rail::tracing_ext::ValidationTraceExt;
    /// use field_rail::Validation;
    ///
    /// let v = Validation::<u8>::invalid_message("must.be.positive")
    ///     .at("age")
    ///     .trace_errors("signup");
    /// assert!(v.is_invalid());
    /// ```
    fn trace_errors(self, label: &str) -> Self;

    /// Like [`trace_errors`](Self::trace_errors), inside `span`.
    fn trace_errors_in(self, span: &tracing::Span, label: &str) -> Self {
        let _entered = span.enter();
        self.trace_errors(label)
    }
}

impl<T> ValidationTraceExt for Validation<T> {
    fn trace_errors(self, label: &str) -> Self {
        for error in self.iter_errors() {
            tracing::debug!(
                label,
                path = %error.path_string(),
                error_message = error.message(),
                "validation error"
            );
        }
        self
    }
}
