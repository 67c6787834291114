//! Group invite link library
//!
//! Encoding and decoding of shareable group invite links
//! (`https://signal.group/#...`). A link carries the group master key and
//! the current invite password in a versioned protobuf payload, base64url
//! encoded into the URL fragment.
//!
//! Decoding distinguishes three failures: the URL isn't a group link at all,
//! it is one but is broken, or it was produced by a newer client.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod link;
pub mod master_key;
pub mod password;
pub mod payload;

pub use config::LinkConfig;
pub use decode::{decode_payload, decode_with};
pub use encode::{encode_payload, encode_with};
pub use error::{
    DecodeError, InvalidLinkCause, InvalidMasterKey, PasswordGenerationError, Result,
};
pub use link::InviteLink;
pub use master_key::GroupMasterKey;
pub use password::LinkPassword;

/// Encode a group master key and invite password into a link.
pub fn encode(master_key: &GroupMasterKey, password: &LinkPassword) -> String {
    encode::encode(master_key, password)
}

/// Decode a link into an [`InviteLink`].
///
/// # Errors
///
/// Returns [`DecodeError::NotOurs`] for URLs outside the group link family,
/// [`DecodeError::InvalidLink`] for malformed group links and
/// [`DecodeError::UnknownVersion`] for links of a newer format.
pub fn decode(uri: &str) -> Result<InviteLink> {
    decode::decode(uri)
}
