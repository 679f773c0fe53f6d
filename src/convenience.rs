//! Status shortcuts and formatting macros.
//!
//! Each shortcut wraps a cause, attaches a fixed HTTP status, copies the
//! cause's rendered text into `message`, and sets the category that
//! matches the status:
//!
//! | Function | Status | Category |
//! |---|---|---|
//! | [`bad_request`] | 400 | `Validation` |
//! | [`unauthorized`] | 401 | `Unauthorized` |
//! | [`forbidden`] | 403 | `Forbidden` |
//! | [`not_found`] | 404 | `NotFound` |
//! | [`internal_server_error`] | 500 | `Internal` |
//!
//! Keeping status and category in agreement means [`crate::is_category`]
//! works for errors built through these shortcuts too. Callers that need
//! the two axes to diverge use [`AppError::new`] and
//! [`AppError::with_status`].
//!
//! # Macros
//!
//! ```rust
//! # use app_errors::{app_error, Category};
//! let id = 42;
//! let err = app_error!(Category::NotFound, "user {} does not exist", id);
//! assert_eq!(err.to_string(), "user 42 does not exist");
//! assert_eq!(err.category(), Category::NotFound);
//! ```

use crate::{AppError, BoxError, Category, StatusCode};

/// 400 Bad Request, category `Validation`.
#[inline]
pub fn bad_request(err: impl Into<BoxError>) -> AppError {
    AppError::with_status_of(err, StatusCode::BAD_REQUEST, Category::Validation)
}

/// 404 Not Found, category `NotFound`.
#[inline]
pub fn not_found(err: impl Into<BoxError>) -> AppError {
    AppError::with_status_of(err, StatusCode::NOT_FOUND, Category::NotFound)
}

/// 401 Unauthorized, category `Unauthorized`.
#[inline]
pub fn unauthorized(err: impl Into<BoxError>) -> AppError {
    AppError::with_status_of(err, StatusCode::UNAUTHORIZED, Category::Unauthorized)
}

/// 403 Forbidden, category `Forbidden`.
#[inline]
pub fn forbidden(err: impl Into<BoxError>) -> AppError {
    AppError::with_status_of(err, StatusCode::FORBIDDEN, Category::Forbidden)
}

/// 500 Internal Server Error, category `Internal`.
#[inline]
pub fn internal_server_error(err: impl Into<BoxError>) -> AppError {
    AppError::with_status_of(err, StatusCode::INTERNAL_SERVER_ERROR, Category::Internal)
}

/// Create an [`AppError`] whose cause is a formatted message.
///
/// # Forms
///
/// - `app_error!(category, "literal")`
/// - `app_error!(category, "format {}", args...)`
/// - `app_error!(category, code = N, "format {}", args...)` to attach an
///   internal sub-code
#[macro_export]
macro_rules! app_error {
    ($category:expr, code = $code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::AppError::new(::std::format!($fmt $(, $arg)*), $category, Some($code))
    };
    ($category:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::AppError::new(::std::format!($fmt $(, $arg)*), $category, None)
    };
}

/// Return early with an [`AppError`] built by [`app_error!`].
///
/// ```rust
/// # use app_errors::{bail, Category, Result};
/// fn check(limit: u32) -> Result<()> {
///     if limit == 0 {
///         bail!(Category::Validation, "limit must be positive");
///     }
///     Ok(())
/// }
/// assert!(check(0).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($($tt:tt)+) => {
        return Err($crate::app_error!($($tt)+))
    };
}
