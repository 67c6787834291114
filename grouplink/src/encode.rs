use crate::config::LinkConfig;
use crate::master_key::GroupMasterKey;
use crate::password::LinkPassword;
use crate::payload::GroupInviteLink;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use prost::Message;

/// Encode binary payload to base64url (URL-safe base64 without padding).
fn encode_base64url(payload: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(payload)
}

/// Serialize a key and password as the V1 variant of the link payload.
pub fn encode_payload(master_key: &GroupMasterKey, password: &LinkPassword) -> Vec<u8> {
    GroupInviteLink::v1(master_key.serialize().to_vec(), password.serialize()).encode_to_vec()
}

/// Encode a group invite link using the given configuration.
pub fn encode_with(
    config: &LinkConfig,
    master_key: &GroupMasterKey,
    password: &LinkPassword,
) -> String {
    let payload = encode_payload(master_key, password);
    format!("{}{}", config.url_prefix(), encode_base64url(&payload))
}

/// Encode a group invite link (`https://signal.group/#...`).
pub fn encode(master_key: &GroupMasterKey, password: &LinkPassword) -> String {
    encode_with(LinkConfig::global(), master_key, password)
}
