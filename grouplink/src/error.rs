/// Result type alias for invite link decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Outcome of a failed [`decode`](crate::decode).
///
/// Variants are ordered from benign to exceptional. `NotOurs` is the common
/// case of an arbitrary URL that simply isn't a group link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Not a group invite link")]
    NotOurs,

    #[error("Invalid group invite link: {0}")]
    InvalidLink(#[from] InvalidLinkCause),

    #[error("Link contains no known group link content")]
    UnknownVersion,
}

impl DecodeError {
    /// True when the input simply wasn't a group link, the benign case.
    pub fn is_not_ours(&self) -> bool {
        matches!(self, DecodeError::NotOurs)
    }
}

/// Why a recognised group link was rejected.
///
/// Messages never include key or password bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLinkCause {
    #[error("no path was expected in the link, got '{0}'")]
    UnexpectedPath(String),

    #[error("no fragment was in the link")]
    MissingFragment,

    #[error("invalid base64url encoding: {0}")]
    InvalidBase64(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    InvalidMasterKey(#[from] InvalidMasterKey),
}

impl From<base64::DecodeError> for InvalidLinkCause {
    fn from(e: base64::DecodeError) -> Self {
        InvalidLinkCause::InvalidBase64(e.to_string())
    }
}

impl From<prost::DecodeError> for InvalidLinkCause {
    fn from(e: prost::DecodeError) -> Self {
        InvalidLinkCause::MalformedPayload(e.to_string())
    }
}

/// The byte sequence can't be a group master key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid group master key: expected {expected} bytes, got {got}")]
pub struct InvalidMasterKey {
    pub expected: usize,
    pub got: usize,
}

/// The system random number generator failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Couldn't generate a link password: system RNG failure")]
pub struct PasswordGenerationError;
