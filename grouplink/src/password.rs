use crate::error::PasswordGenerationError;
use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;

/// Rotatable secret authorizing use of the current invite link.
///
/// The bytes are kept exactly as given. Length and content checks belong to
/// whoever issued the password, not to this type.
#[derive(Clone, PartialEq, Eq, zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct LinkPassword(Vec<u8>);

impl LinkPassword {
    /// Length of freshly generated passwords.
    pub const GENERATED_SIZE: usize = 16;

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Draw a new password from the system CSPRNG.
    pub fn generate() -> Result<Self, PasswordGenerationError> {
        let mut bytes = vec![0u8; Self::GENERATED_SIZE];
        SystemRandom::new()
            .fill(&mut bytes)
            .map_err(|_| PasswordGenerationError)?;
        Ok(Self(bytes))
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for LinkPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkPassword")
            .field("len", &self.0.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
