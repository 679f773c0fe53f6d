//! Error category taxonomy.
//!
//! # Purpose
//!
//! A `Category` classifies *why* an application operation failed so that
//! downstream handlers (HTTP response mapping, alerting, audit trails) can
//! route the error without inspecting its cause.
//!
//! The set is closed. Raw numeric values arriving from outside the crate
//! (database columns, foreign services) are mapped back through
//! [`Category::from_repr`] and [`Category::name_of`], the latter being total
//! so that an unrecognized value still renders to something stable.

use crate::codes::StatusCode;
use std::fmt;

/// Fallback name for raw category values outside the defined set.
pub const UNKNOWN_CATEGORY_NAME: &str = "UnknownCategoryError";

/// Application error category.
///
/// # Copy Semantics
///
/// Small fieldless enum, frequently passed by value in error construction
/// and classification queries.
///
/// # Stable Representation
///
/// Discriminants are fixed (`Validation = 0` through `Unauthorized = 6`).
/// They are part of the public contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Category {
    /// Input failed validation (malformed, out of range, missing).
    #[default]
    Validation = 0,
    /// Unexpected failure inside the application.
    Internal = 1,
    /// The requested entity does not exist.
    NotFound = 2,
    /// The operation is not supported on the target resource.
    MethodNotAllowed = 3,
    /// A security policy was violated.
    Security = 4,
    /// The caller is known but lacks permission.
    Forbidden = 5,
    /// The caller could not be authenticated.
    Unauthorized = 6,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Category; 7] = [
        Self::Validation,
        Self::Internal,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::Security,
        Self::Forbidden,
        Self::Unauthorized,
    ];

    /// Stable human-readable name.
    ///
    /// Const function, returns a static string. Safe for log indexing and
    /// metric labels.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Internal => "InternalError",
            Self::NotFound => "NotFoundError",
            Self::MethodNotAllowed => "MethodNotAllowedError",
            Self::Security => "SecurityError",
            Self::Forbidden => "ForbiddenError",
            Self::Unauthorized => "UnauthorizedError",
        }
    }

    /// Map a raw numeric value back to a category.
    #[inline]
    pub const fn from_repr(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Validation),
            1 => Some(Self::Internal),
            2 => Some(Self::NotFound),
            3 => Some(Self::MethodNotAllowed),
            4 => Some(Self::Security),
            5 => Some(Self::Forbidden),
            6 => Some(Self::Unauthorized),
            _ => None,
        }
    }

    /// Name for a raw numeric value.
    ///
    /// Total over `i64`: values outside the defined set yield
    /// [`UNKNOWN_CATEGORY_NAME`] rather than an error.
    #[inline]
    pub const fn name_of(raw: i64) -> &'static str {
        match Self::from_repr(raw) {
            Some(category) => category.name(),
            None => UNKNOWN_CATEGORY_NAME,
        }
    }

    /// Conventional HTTP status for this category.
    ///
    /// Used by [`AppError::effective_status`](crate::AppError::effective_status)
    /// when no explicit status was attached.
    #[inline]
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Security | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_non_empty_and_distinct() {
        let names: HashSet<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Category::ALL.len());
        assert!(names.iter().all(|n| !n.is_empty()));
        assert!(!names.contains(UNKNOWN_CATEGORY_NAME));
    }

    #[test]
    fn raw_values_round_trip() {
        for category in Category::ALL {
            let raw = category as i64;
            assert_eq!(Category::from_repr(raw), Some(category));
            assert_eq!(Category::name_of(raw), category.name());
        }
    }

    #[test]
    fn unknown_raw_value_uses_fallback() {
        assert_eq!(Category::from_repr(7), None);
        assert_eq!(Category::name_of(7), UNKNOWN_CATEGORY_NAME);
        assert_eq!(Category::name_of(-1), UNKNOWN_CATEGORY_NAME);
        assert_eq!(Category::name_of(i64::MAX), UNKNOWN_CATEGORY_NAME);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Category::NotFound.to_string(), "NotFoundError");
        assert_eq!(format!("{}", Category::Security), "SecurityError");
    }

    #[test]
    fn zero_value_is_validation() {
        assert_eq!(Category::default(), Category::Validation);
    }

    #[test]
    fn default_status_mapping() {
        assert_eq!(Category::Validation.default_status().as_u16(), 400);
        assert_eq!(Category::Unauthorized.default_status().as_u16(), 401);
        assert_eq!(Category::Forbidden.default_status().as_u16(), 403);
        assert_eq!(Category::Security.default_status().as_u16(), 403);
        assert_eq!(Category::NotFound.default_status().as_u16(), 404);
        assert_eq!(Category::MethodNotAllowed.default_status().as_u16(), 405);
        assert_eq!(Category::Internal.default_status().as_u16(), 500);
    }
}
