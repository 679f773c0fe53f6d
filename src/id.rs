//! Typed entity identifiers.
//!
//! [`Id`] wraps a 128-bit UUID so that identifiers cannot be confused with
//! arbitrary strings or integers at API boundaries. It has value
//! semantics: two `Id`s are equal iff their UUIDs are equal.
//!
//! # Parsing
//!
//! [`Id::from_string`] never panics. It rejects:
//!
//! - the empty string ([`IdError::Empty`])
//! - any text that parses to the nil UUID, in any accepted notation
//!   ([`IdError::Nil`])
//! - malformed text ([`IdError::Parse`])
//!
//! ```rust
//! use app_errors::{Id, IdError};
//!
//! let id: Id = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
//! assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
//!
//! assert!(matches!(Id::from_string("not-a-uuid"), Err(IdError::Parse(_))));
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Reasons an identifier could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Input text was empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// Input was the nil UUID.
    #[error("identifier cannot be the nil UUID")]
    Nil,

    /// Input text is not a UUID.
    #[error("invalid identifier: {0}")]
    Parse(#[from] uuid::Error),
}

/// Typed entity identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Uuid);

impl Id {
    /// Fresh random (version 4) identifier.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse canonical (or any `uuid`-accepted) text.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Self::try_from(Uuid::parse_str(s)?)
    }

    /// The underlying UUID.
    #[inline]
    pub const fn to_uuid(self) -> Uuid {
        self.0
    }

    /// Borrow the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Id {
    /// A fresh random identifier; there is no meaningful zero `Id`.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    /// Lowercase hyphenated 8-4-4-4-12 form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<Uuid> for Id {
    type Error = IdError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        if uuid.is_nil() {
            Err(IdError::Nil)
        } else {
            Ok(Self(uuid))
        }
    }
}

impl From<Id> for Uuid {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl AsRef<Uuid> for Id {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}
