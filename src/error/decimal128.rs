use thiserror::Error as ThisError;

use crate::error::{Error, ErrorKind};

/// Reasons a [`Decimal128`](crate::Decimal128) string or component set is rejected.
#[derive(Clone, Debug, ThisError)]
#[non_exhaustive]
pub enum Decimal128ErrorKind {
    /// An `E` with no digits after it.
    #[error("exponent marker is not followed by digits")]
    EmptyExponent,

    /// The exponent is not an integer or does not fit in an `i64`.
    #[error("invalid exponent: {message}")]
    #[non_exhaustive]
    InvalidExponent {
        /// A message describing the error.
        message: String,
    },

    /// The coefficient needs more than 34 significant digits.
    #[error("invalid coefficient: {message}")]
    #[non_exhaustive]
    InvalidCoefficient {
        /// A message describing the error.
        message: String,
    },

    /// The value is too large in magnitude for the 6111 exponent limit.
    #[error("exponent exceeds 6111 and cannot be absorbed by the coefficient")]
    Overflow,

    /// The value needs an exponent below -6176 and would lose digits.
    #[error("exponent is below -6176 and rounding would lose digits")]
    Underflow,

    /// Not a decimal number, `NaN` or an infinity.
    #[error("not a decimal number")]
    Unparseable,
}

impl Error {
    pub(crate) fn decimal128(kind: Decimal128ErrorKind) -> Self {
        ErrorKind::Decimal128 { kind }.into()
    }

    #[cfg(test)]
    pub(crate) fn is_decimal128_unparseable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Decimal128 {
                kind: Decimal128ErrorKind::Unparseable,
            }
        )
    }
}
