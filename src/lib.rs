//! # App Errors
//!
//! Categorized application errors carrying HTTP status metadata, and typed
//! UUID identifiers.
//!
//! ## Design Philosophy
//!
//! 1. **Wrap once, at the boundary** where a meaningful category is known
//! 2. **Rendering delegates to the cause** so logs keep the original text
//! 3. **Classification survives wrapping**: [`is_category`] walks the
//!    `source()` chain through foreign wrapper errors
//! 4. **Metadata is owned per value**: deriving two errors from one base
//!    never lets them see each other's fields
//!
//! ## Quick Start
//!
//! ```rust
//! use app_errors::{AppError, Category, Result, is_category};
//!
//! fn parse_age(row: i64, raw: &str) -> Result<u8> {
//!     raw.parse::<u8>().map_err(|e| {
//!         AppError::new(e, Category::Validation, None)
//!             .with_field("age")
//!             .with_row(row)
//!     })
//! }
//!
//! let err = parse_age(7, "abc").unwrap_err();
//! assert!(is_category(&err, Category::Validation));
//! assert_eq!(err.metadata().get("row"), Some("7"));
//! // Display is the cause's own text
//! assert_eq!(err.to_string(), "invalid digit found in string");
//! ```
//!
//! ## Status Shortcuts
//!
//! ```rust
//! use app_errors::{Category, not_found};
//!
//! let err = not_found("user 42 does not exist");
//! assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
//! assert_eq!(err.category(), Category::NotFound);
//! ```
//!
//! ## Identifiers
//!
//! ```rust
//! use app_errors::Id;
//!
//! let id = Id::new();
//! let parsed = Id::from_string(&id.to_string()).unwrap();
//! assert_eq!(id, parsed);
//! assert!(Id::from_string("").is_err());
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: Enable full-text log formatting for trusted environments (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;
use std::result;
use std::sync::Arc;

pub mod codes;
pub mod context;
pub mod convenience;
pub mod id;
pub mod logging;
pub mod models;

pub use codes::*;
pub use context::*;
pub use convenience::*;
pub use id::*;
pub use logging::*;
pub use models::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, AppError>;

/// Boxed cause accepted by every constructor.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Application error: a cause plus classification and metadata.
///
/// # Key Properties
///
/// - `Display` renders the cause's text; `message` is never substituted
/// - `source()` returns the cause, so generic chain walkers see through it
/// - `metadata` always exists and starts empty
/// - `status` and `code.category` are independent axes; the status
///   shortcuts in [`convenience`] set both
///
/// # Size
///
/// The inline metadata table makes `AppError` a few hundred bytes, so
/// `clippy::result_large_err` fires on functions returning [`Result`].
/// This is accepted: errors are built off the hot path, and the inline
/// table avoids an allocation for the common `field`/`row`/`info` case.
///
/// # Cloning
///
/// `Clone` deep-copies metadata and shares the immutable cause. To derive
/// several errors from a common base, clone it first:
///
/// ```rust
/// # use app_errors::{AppError, Category};
/// let base = AppError::new("bad input", Category::Validation, None);
/// let a = base.clone().with_field("name");
/// let b = base.clone().with_field("email");
/// assert!(base.metadata().is_empty());
/// assert_eq!(a.metadata().get("field"), Some("name"));
/// assert_eq!(b.metadata().get("field"), Some("email"));
/// ```
#[derive(Clone)]
#[must_use = "errors should be handled or logged"]
pub struct AppError {
    cause: Arc<dyn Error + Send + Sync + 'static>,
    status: Option<StatusCode>,
    code: Code,
    message: Option<String>,
    metadata: Metadata,
}

impl AppError {
    /// Wrap `cause` with a category and optional internal sub-code.
    ///
    /// Status and message are left unset; metadata starts empty.
    #[inline]
    pub fn new(cause: impl Into<BoxError>, category: Category, internal_code: Option<i32>) -> Self {
        let cause: BoxError = cause.into();
        Self {
            cause: Arc::from(cause),
            status: None,
            code: Code::new(category, internal_code),
            message: None,
            metadata: Metadata::new(),
        }
    }

    /// Wrap `cause` with a status and matching category.
    ///
    /// The cause's rendered text becomes the message.
    pub(crate) fn with_status_of(
        cause: impl Into<BoxError>,
        status: StatusCode,
        category: Category,
    ) -> Self {
        let cause: BoxError = cause.into();
        let message = cause.to_string();
        Self {
            cause: Arc::from(cause),
            status: Some(status),
            code: Code::new(category, None),
            message: Some(message),
            metadata: Metadata::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    /// Set the `"field"` metadata key.
    #[inline]
    pub fn with_field(self, value: impl Into<String>) -> Self {
        self.with_metadata(FIELD_KEY, value)
    }

    /// Set the `"row"` metadata key to the decimal form of `row`.
    #[inline]
    pub fn with_row(self, row: i64) -> Self {
        self.with_metadata(ROW_KEY, row.to_string())
    }

    /// Set the `"info"` metadata key.
    #[inline]
    pub fn with_info(self, info: impl Into<String>) -> Self {
        self.with_metadata(INFO_KEY, info)
    }

    /// Set an arbitrary metadata key, replacing any previous value.
    ///
    /// A replaced value is zeroized as it is dropped.
    #[inline]
    pub fn with_metadata(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Attach or replace the HTTP-style status.
    #[inline]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach or replace the human-readable message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach or replace the internal sub-code.
    #[inline]
    pub fn with_internal_code(mut self, internal: i32) -> Self {
        self.code.internal = Some(internal);
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The wrapped cause.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Explicit status, if one was attached.
    #[inline]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Explicit status, falling back to the category's conventional one.
    #[inline]
    pub const fn effective_status(&self) -> StatusCode {
        match self.status {
            Some(status) => status,
            None => self.code.category.default_status(),
        }
    }

    /// Error code.
    #[inline]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// Category component of the code.
    #[inline]
    pub const fn category(&self) -> Category {
        self.code.category
    }

    /// Whether this error's category is `category`.
    #[inline]
    pub fn is(&self, category: Category) -> bool {
        self.code.category == category
    }

    /// Override message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Text a response layer should show: the message, else the cause.
    pub fn public_message(&self) -> Cow<'_, str> {
        match &self.message {
            Some(message) => Cow::Borrowed(message.as_str()),
            None => Cow::Owned(self.cause.to_string()),
        }
    }

    /// Attached metadata.
    #[inline]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable access to metadata, for callers building it incrementally.
    #[inline]
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    // ------------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------------

    /// Structured log view borrowing from this error.
    ///
    /// ```rust
    /// # use app_errors::{AppError, Category};
    /// let err = AppError::new("disk full", Category::Internal, Some(28)).with_info("tmp");
    /// let log = err.internal_log();
    /// assert_eq!(log.code().to_string(), "InternalError#28");
    /// assert_eq!(log.cause().to_string(), "disk full");
    /// ```
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog {
            code: &self.code,
            status: self.effective_status(),
            message: self.message.as_deref(),
            cause: self.cause.as_ref(),
            metadata: &self.metadata,
        }
    }

    /// Callback-style logging; the view dies when `f` returns.
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("code", &self.code)
            .field("status", &self.status)
            .field("message", &self.message)
            .field("metadata", &self.metadata)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for AppError {
    /// The cause's own text. `message` is metadata, not the rendered text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Chain Classification
// ============================================================================

/// First [`AppError`] in the `source()` chain of `err`, starting at `err`.
///
/// Foreign wrapper errors along the way are traversed as long as they
/// report their inner error through `source()`. `std::io::Error` is the
/// exception: its `source()` skips the payload it wraps, so the payload is
/// taken from `get_ref()` instead.
pub fn find_app_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a AppError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(app) = e.downcast_ref::<AppError>() {
            return Some(app);
        }
        current = match e.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
            Some(inner) => Some(inner as &(dyn Error + 'static)),
            None => e.source(),
        };
    }
    None
}

/// Whether the first [`AppError`] in the chain of `err` has `category`.
///
/// Returns `false` when the chain holds no `AppError`.
#[inline]
pub fn is_category(err: &(dyn Error + 'static), category: Category) -> bool {
    find_app_error(err).is_some_and(|app| app.is(category))
}
