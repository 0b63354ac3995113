//! Contains the error-related types for the `bson_extjson` crate.

mod datetime;
mod decimal128;
mod extjson;
mod oid;

use thiserror::Error;

pub use datetime::DateTimeErrorKind;
pub use decimal128::Decimal128ErrorKind;
pub use oid::ObjectIdErrorKind;

/// The result type for all methods that can return an error in the `bson_extjson` crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur in the `bson_extjson` crate.
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,

    /// The document key associated with the error, if any.
    pub key: Option<String>,

    /// The array index associated with the error, if any.
    pub index: Option<usize>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(key) = self.key.as_deref() {
            write!(f, "Error at key \"{key}\": ")?;
        } else if let Some(index) = self.index {
            write!(f, "Error at array index {index}: ")?;
        }

        write!(f, "{}", self.kind)
    }
}

/// The types of errors that can occur in the `bson_extjson` crate.
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An object carried a reserved extended JSON key (e.g. `$oid`), but the payload under it
    /// did not have the required shape.
    #[error("invalid {discriminator} payload: {message}")]
    #[non_exhaustive]
    UnrecognizedDiscriminatorPayload {
        /// The reserved key that matched.
        discriminator: &'static str,

        /// A message describing why the payload was rejected.
        message: String,
    },

    /// A JSON number could not be assigned a BSON numeric type.
    #[error("number {number} cannot be represented as a BSON numeric type")]
    #[non_exhaustive]
    UnsupportedNumberShape {
        /// The textual form of the offending number.
        number: String,
    },

    /// An error related to the [`ObjectId`](crate::oid::ObjectId) type occurred.
    #[error("An ObjectId-related error occurred: {kind}")]
    #[non_exhaustive]
    ObjectId {
        /// The kind of error that occurred.
        kind: ObjectIdErrorKind,
    },

    /// An error related to the [`Decimal128`](crate::Decimal128) type occurred.
    #[error("A Decimal128-related error occurred: {kind}")]
    #[non_exhaustive]
    Decimal128 {
        /// The kind of error that occurred.
        kind: Decimal128ErrorKind,
    },

    /// An error related to the [`DateTime`](crate::DateTime) type occurred.
    #[error("A DateTime-related error occurred: {kind}")]
    #[non_exhaustive]
    DateTime {
        /// The kind of error that occurred.
        kind: DateTimeErrorKind,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            key: None,
            index: None,
        }
    }
}

impl Error {
    /// Attaches the document key under which this error occurred. Keys set deeper in a nested
    /// conversion take precedence, so the innermost failing field is reported.
    pub(crate) fn with_key(mut self, key: impl Into<String>) -> Self {
        if self.key.is_none() && self.index.is_none() {
            self.key = Some(key.into());
        }
        self
    }

    /// Attaches the array index at which this error occurred, unless a more specific location
    /// has already been recorded.
    pub(crate) fn with_index(mut self, index: usize) -> Self {
        if self.key.is_none() && self.index.is_none() {
            self.index = Some(index);
        }
        self
    }

    /// Whether this error was caused by a malformed payload under a reserved extended JSON key.
    pub fn is_unrecognized_discriminator_payload(&self) -> bool {
        matches!(self.kind, ErrorKind::UnrecognizedDiscriminatorPayload { .. })
    }

    /// Whether this error was caused by a JSON number with no BSON numeric counterpart.
    pub fn is_unsupported_number_shape(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedNumberShape { .. })
    }
}
