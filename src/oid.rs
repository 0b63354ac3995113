//! The 12-byte BSON ObjectId and its hex text form.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Hex characters in the text form of an [`ObjectId`].
pub const HEX_LEN: usize = 24;

/// A 12-byte BSON ObjectId.
///
/// In extended JSON an ObjectId is written as `{ "$oid": "<24 hex characters>" }`. Either case
/// is accepted on input; output is always lowercase.
///
/// ```rust
/// use bson_extjson::oid::ObjectId;
///
/// let oid = ObjectId::parse_str("56E1FC72E0C917E9C4714161")?;
/// assert_eq!(oid.to_hex(), "56e1fc72e0c917e9c4714161");
/// assert_eq!(oid.timestamp(), 0x56e1fc72);
/// # Ok::<(), bson_extjson::error::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ObjectId {
    id: [u8; 12],
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl From<[u8; 12]> for ObjectId {
    fn from(bytes: [u8; 12]) -> Self {
        Self { id: bytes }
    }
}

impl ObjectId {
    /// Wraps the raw byte representation.
    pub const fn from_bytes(bytes: [u8; 12]) -> ObjectId {
        ObjectId { id: bytes }
    }

    /// Parses exactly [`HEX_LEN`] hex characters of either case.
    pub fn parse_str(s: impl AsRef<str>) -> Result<ObjectId> {
        let s = s.as_ref();
        if s.len() != HEX_LEN {
            return Err(Error::oid_invalid_length(s.len()));
        }

        let mut id = [0; 12];
        hex::decode_to_slice(s, &mut id).map_err(|e| Error::oid_from_hex_error(e, s.len()))?;
        Ok(ObjectId { id })
    }

    /// The creation time embedded in the first four bytes, in seconds since the epoch.
    pub fn timestamp(&self) -> u32 {
        let [a, b, c, d, ..] = self.id;
        u32::from_be_bytes([a, b, c, d])
    }

    /// Returns the raw byte representation.
    pub const fn bytes(&self) -> [u8; 12] {
        self.id
    }

    /// Lowercase hex text, the form written under `$oid`.
    pub fn to_hex(self) -> String {
        hex::encode(self.id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.to_hex()).finish()
    }
}
