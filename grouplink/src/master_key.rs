use crate::error::InvalidMasterKey;
use std::fmt;

const KEY_SIZE: usize = 32;

/// Long-lived symmetric key identifying a group.
///
/// Opaque to this crate beyond its length. The bytes are wiped on drop and
/// never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct GroupMasterKey([u8; KEY_SIZE]);

impl GroupMasterKey {
    pub const SIZE: usize = KEY_SIZE;

    pub fn new(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    pub fn serialize(&self) -> [u8; Self::SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for GroupMasterKey {
    type Error = InvalidMasterKey;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; Self::SIZE]>::try_from(bytes).map_err(|_| InvalidMasterKey {
            expected: Self::SIZE,
            got: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for GroupMasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GroupMasterKey").field(&"[REDACTED]").finish()
    }
}
