use std::fmt::{self, Display};

use crate::{
    base64,
    error::{Error, Result},
    spec::BinarySubtype,
};

/// Represents a BSON binary value.
///
/// In extended JSON a binary is written as
/// `{ "$binary": { "base64": "<payload>", "subType": "<two hex digits>" } }`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Binary {
    /// The subtype of the bytes.
    pub subtype: BinarySubtype,

    /// The binary bytes.
    pub bytes: Vec<u8>,
}

impl Display for Binary {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "Binary({:#x}, {})",
            u8::from(self.subtype),
            base64::encode(&self.bytes)
        )
    }
}

impl Binary {
    /// Creates a [`Binary`] from a base64 string and optional [`BinarySubtype`]. If the
    /// `subtype` argument is [`None`], the [`Binary`] constructed will default to
    /// [`BinarySubtype::Generic`].
    ///
    /// ```rust
    /// # use bson_extjson::{Binary, error::Result};
    /// # fn example() -> Result<()> {
    /// let binary = Binary::from_base64("aGVsbG8=", None)?;
    /// assert_eq!(binary.bytes, b"hello");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_base64(
        input: impl AsRef<str>,
        subtype: impl Into<Option<BinarySubtype>>,
    ) -> Result<Self> {
        let bytes = base64::decode(input.as_ref())
            .map_err(|e| Error::discriminator_payload("$binary", e))?;
        let subtype = match subtype.into() {
            Some(s) => s,
            None => BinarySubtype::Generic,
        };
        Ok(Binary { subtype, bytes })
    }

    /// The payload as a standard, padded base64 string.
    pub fn to_base64(&self) -> String {
        base64::encode(&self.bytes)
    }
}
