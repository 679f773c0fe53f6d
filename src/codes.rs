//! Error codes and HTTP-style status values.
//!
//! Two independent classification axes live here:
//!
//! - [`Code`]: the application-level classification, a [`Category`] plus an
//!   optional implementation-defined numeric sub-code.
//! - [`StatusCode`]: the transport-level status a response layer should use.
//!
//! Both are small `Copy` values. Display formatting writes directly to the
//! provided formatter.
//!
//! # Example
//!
//! ```rust
//! use app_errors::{Category, Code, StatusCode};
//!
//! let code = Code::new(Category::NotFound, Some(1203));
//! assert_eq!(code.to_string(), "NotFoundError#1203");
//!
//! const TEAPOT: StatusCode = StatusCode::new(418);
//! assert_eq!(TEAPOT.as_u16(), 418);
//! ```

use crate::Category;
use std::fmt;

// ============================================================================
// Status Code Type (Validates Range)
// ============================================================================

/// Validated HTTP-style status code (100-599).
///
/// # Purpose
///
/// Centralizes range validation so that downstream response layers receive
/// a status they can put on the wire without re-checking it.
///
/// # Example
///
/// ```rust
/// # use app_errors::StatusCode;
/// // Compile-time validation
/// const CONFLICT: StatusCode = StatusCode::new(409);
///
/// // Runtime validation
/// # let from_config = 503u16;
/// let status = StatusCode::checked_new(from_config).unwrap();
/// assert!(status.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 400 Bad Request
    pub const BAD_REQUEST: Self = Self(400);
    /// 401 Unauthorized
    pub const UNAUTHORIZED: Self = Self(401);
    /// 403 Forbidden
    pub const FORBIDDEN: Self = Self(403);
    /// 404 Not Found
    pub const NOT_FOUND: Self = Self(404);
    /// 405 Method Not Allowed
    pub const METHOD_NOT_ALLOWED: Self = Self(405);
    /// 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// Create a status code with compile-time validation.
    ///
    /// # Panics
    ///
    /// Panics at compile time (in const contexts) or at runtime if the
    /// value is outside 100-599.
    #[inline]
    pub const fn new(code: u16) -> Self {
        assert!(code >= 100 && code <= 599, "Status code must be 100-599");
        Self(code)
    }

    /// Create a status code with runtime validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is outside 100-599.
    #[inline]
    pub fn checked_new(code: u16) -> Result<Self, StatusCodeError> {
        if (100..=599).contains(&code) {
            Ok(Self(code))
        } else {
            Err(StatusCodeError::OutOfRange { value: code })
        }
    }

    /// Get the raw numeric value.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// 4xx
    #[inline]
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// 5xx
    #[inline]
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = StatusCodeError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::checked_new(code)
    }
}

/// Error type for status code validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCodeError {
    /// Value is not a valid HTTP status (100-599).
    OutOfRange {
        /// The rejected value.
        value: u16,
    },
}

impl fmt::Display for StatusCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "Status code {} outside valid range (100-599)", value)
            }
        }
    }
}

impl std::error::Error for StatusCodeError {}

// ============================================================================
// Error Code
// ============================================================================

/// Composite error code: category plus optional internal sub-code.
///
/// The internal code is an implementation-defined secondary classifier
/// (for example a numeric reason from a downstream service). `None` means
/// no sub-code was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    /// Application-level category.
    pub category: Category,
    /// Optional secondary classifier.
    pub internal: Option<i32>,
}

impl Code {
    /// Build a code.
    #[inline]
    pub const fn new(category: Category, internal: Option<i32>) -> Self {
        Self { category, internal }
    }

    /// Category component.
    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Internal sub-code, if any.
    #[inline]
    pub const fn internal(&self) -> Option<i32> {
        self.internal
    }
}

impl From<Category> for Code {
    fn from(category: Category) -> Self {
        Self::new(category, None)
    }
}

impl fmt::Display for Code {
    /// Format: `{CategoryName}` or `{CategoryName}#{internal}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category.name())?;
        if let Some(internal) = self.internal {
            write!(f, "#{}", internal)?;
        }
        Ok(())
    }
}
