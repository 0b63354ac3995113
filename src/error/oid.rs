use hex::FromHexError;
use thiserror::Error as ThisError;

use crate::error::{Error, ErrorKind};

/// Reasons an [`ObjectId`](crate::oid::ObjectId) hex string is rejected.
#[derive(Clone, Debug, ThisError)]
#[non_exhaustive]
pub enum ObjectIdErrorKind {
    /// A character outside `0-9`, `a-f` and `A-F`.
    #[error("'{c}' at index {index} is not a hex digit")]
    #[non_exhaustive]
    InvalidHexStringCharacter {
        /// The offending character.
        c: char,

        /// Its position in the string.
        index: usize,
    },

    /// The string is not exactly 24 characters long.
    #[error("expected 24 hex characters, got {length}")]
    #[non_exhaustive]
    InvalidHexStringLength {
        /// The length of the rejected string.
        length: usize,
    },
}

impl Error {
    pub(crate) fn oid_from_hex_error(error: FromHexError, length: usize) -> Self {
        let kind = match error {
            FromHexError::InvalidHexCharacter { c, index } => {
                ObjectIdErrorKind::InvalidHexStringCharacter { c, index }
            }
            FromHexError::InvalidStringLength | FromHexError::OddLength => {
                ObjectIdErrorKind::InvalidHexStringLength { length }
            }
        };
        ErrorKind::ObjectId { kind }.into()
    }

    pub(crate) fn oid_invalid_length(length: usize) -> Self {
        ErrorKind::ObjectId {
            kind: ObjectIdErrorKind::InvalidHexStringLength { length },
        }
        .into()
    }
}
