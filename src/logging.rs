//! Structured log view for internal diagnostics.
//!
//! # Properties
//!
//! - Borrows from `AppError` with an explicit lifetime
//! - CANNOT outlive the error that created it
//! - Accessors return borrowed data; nothing is copied until a logger
//!   decides to serialize
//! - `write_to` bounds every field so a hostile cause text cannot blow up
//!   log storage
//!
//! The logging backend itself is the caller's choice. This module only
//! decides *what* an entry contains and how it renders as a single line.

use crate::{Code, Metadata, StatusCode};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Maximum length for any individual field in formatted output (DoS prevention)
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Maximum number of nested causes rendered by `write_to`.
const MAX_CAUSE_DEPTH: usize = 8;

/// Structured log entry with borrowed data from an `AppError`.
///
/// # Example
///
/// ```rust
/// # use app_errors::{AppError, Category};
/// let err = AppError::new("duplicate key", Category::Validation, Some(23505))
///     .with_field("email");
///
/// let mut line = String::new();
/// err.internal_log().write_to(&mut line).unwrap();
/// assert_eq!(
///     line,
///     "[ValidationError#23505] status=400 cause='duplicate key' field='email'"
/// );
/// ```
#[derive(Debug)]
pub struct InternalLog<'a> {
    pub(crate) code: &'a Code,
    pub(crate) status: StatusCode,
    pub(crate) message: Option<&'a str>,
    pub(crate) cause: &'a (dyn Error + Send + Sync + 'static),
    pub(crate) metadata: &'a Metadata,
}

impl<'a> InternalLog<'a> {
    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// Unlike `write_to`, no field is truncated. Only available with BOTH the
    /// `trusted_debug` feature flag AND debug assertions enabled.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = format!("[{}] status={}", self.code, self.status);

        if let Some(message) = self.message {
            output.push_str(&format!(" message='{}'", message));
        }

        output.push_str(&format!(" cause='{}'", self.cause));
        for source in self.source_chain() {
            output.push_str(&format!(" caused_by='{}'", source));
        }

        for (key, value) in self.metadata {
            output.push_str(&format!(" {}='{}'", key, value));
        }

        output
    }

    /// Write structured log data as a single line.
    ///
    /// Format:
    /// `[{code}] status={status} [message='..'] cause='..' [caused_by='..']* [key='value']*`
    ///
    /// Every free-text field is truncated to `MAX_FIELD_OUTPUT_LEN` bytes on a
    /// UTF-8 boundary, and at most `MAX_CAUSE_DEPTH` nested causes are written.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "[{}] status={}", self.code, self.status)?;

        if let Some(message) = self.message {
            write!(f, " message='{}'", truncate_with_indicator(message))?;
        }

        let cause = self.cause.to_string();
        write!(f, " cause='{}'", truncate_with_indicator(&cause))?;

        for source in self.source_chain().take(MAX_CAUSE_DEPTH) {
            let rendered = source.to_string();
            write!(f, " caused_by='{}'", truncate_with_indicator(&rendered))?;
        }

        for (key, value) in self.metadata {
            write!(
                f,
                " {}='{}'",
                truncate_with_indicator(key),
                truncate_with_indicator(value)
            )?;
        }

        Ok(())
    }

    /// Error code.
    #[inline]
    pub const fn code(&self) -> &Code {
        self.code
    }

    /// Explicit status, or the category's conventional one.
    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Override message, if any.
    #[inline]
    pub const fn message(&self) -> Option<&str> {
        self.message
    }

    /// The wrapped cause.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause
    }

    /// Causes nested below the wrapped cause, outermost first.
    pub fn source_chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> + '_ {
        std::iter::successors(self.cause.source(), |&e| e.source())
    }

    /// Metadata fields.
    #[inline]
    pub const fn metadata(&self) -> &Metadata {
        self.metadata
    }
}

/// Truncate a string for display to prevent DoS via extremely long error messages.
///
/// If the string exceeds MAX_FIELD_OUTPUT_LEN, it's truncated with an indicator
/// to make the truncation visible to operators.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
