use crate::config::LinkConfig;
use crate::error::{DecodeError, InvalidLinkCause, Result};
use crate::link::InviteLink;
use crate::master_key::GroupMasterKey;
use crate::password::LinkPassword;
use crate::payload::{Contents, GroupInviteLink};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::{debug, trace};
use percent_encoding::percent_decode_str;
use prost::Message;
use url::Url;
use zeroize::Zeroizing;

/// Host, path and fragment exactly as written in the input.
///
/// `Url` resolves dot segments and percent-escapes before handing these out,
/// so the shape checks run on the raw text instead.
#[derive(Debug, PartialEq, Eq)]
struct RawLink<'a> {
    host: &'a str,
    path: &'a str,
    fragment: Option<&'a str>,
}

impl<'a> RawLink<'a> {
    /// Split `scheme://authority/path?query#fragment`. `None` without an authority.
    fn split(uri: &'a str) -> Option<Self> {
        let (_, rest) = uri.split_once(':')?;
        let rest = rest.strip_prefix("//")?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (rest, None),
        };
        let rest = rest.split_once('?').map_or(rest, |(before, _)| before);

        let (authority, path) = match rest.find('/') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
        let host = host.split_once(':').map_or(host, |(host, _)| host);

        Some(Self {
            host,
            path,
            fragment,
        })
    }
}

/// Parse the string as a URL and keep it only if scheme and host belong to
/// the group link family. Anything else, including unparsable input, is
/// `None`.
fn recognize<'a>(config: &LinkConfig, uri: &'a str) -> Option<RawLink<'a>> {
    // Url strips these silently
    if uri.chars().any(|c| c.is_ascii_control() || c.is_whitespace()) {
        return None;
    }

    let url = Url::parse(uri).ok()?;
    if !config.matches_scheme(url.scheme()) {
        return None;
    }

    let raw = RawLink::split(uri)?;
    let host_matches = url.host_str().is_some_and(|host| config.matches_host(host))
        && config.matches_host(raw.host);
    host_matches.then_some(raw)
}

/// Decode base64url, with or without trailing padding.
fn decode_base64url(encoded: &str) -> std::result::Result<Vec<u8>, InvalidLinkCause> {
    let encoded = encoded.trim_end_matches('=');
    if encoded.is_empty() {
        return Err(InvalidLinkCause::MissingFragment);
    }
    URL_SAFE_NO_PAD.decode(encoded).map_err(InvalidLinkCause::from)
}

/// Decode a link payload into its key and password.
///
/// # Errors
///
/// `InvalidLink` if the bytes aren't a well-formed payload or the key has
/// the wrong length, `UnknownVersion` if no known variant is present.
pub fn decode_payload(payload: &[u8]) -> Result<(GroupMasterKey, LinkPassword)> {
    let link = GroupInviteLink::decode(payload).map_err(InvalidLinkCause::from)?;

    match link.contents {
        Some(Contents::V1Contents(contents)) => {
            let key_bytes = Zeroizing::new(contents.group_master_key);
            let master_key =
                GroupMasterKey::try_from(key_bytes.as_slice()).map_err(InvalidLinkCause::from)?;
            let password = LinkPassword::from_bytes(contents.invite_link_password);
            Ok((master_key, password))
        }
        None => Err(DecodeError::UnknownVersion),
    }
}

/// Decode the path and fragment of an already recognised link.
fn decode_link(config: &LinkConfig, raw: &RawLink<'_>) -> Result<InviteLink> {
    if !raw.path.is_empty() && raw.path != "/" {
        return Err(InvalidLinkCause::UnexpectedPath(raw.path.to_string()).into());
    }

    let fragment = raw.fragment.ok_or(InvalidLinkCause::MissingFragment)?;
    let encoded = percent_decode_str(fragment)
        .decode_utf8()
        .map_err(|e| InvalidLinkCause::InvalidBase64(e.to_string()))?;

    let payload = Zeroizing::new(decode_base64url(&encoded)?);
    let (master_key, password) = decode_payload(&payload)?;

    Ok(InviteLink::for_group_with(config, master_key, password))
}

/// Decode a group invite link using the given configuration.
///
/// # Errors
///
/// - `NotOurs` if the string isn't a URL on the configured scheme and host.
/// - `InvalidLink` if it is, but the path, fragment or payload is malformed.
/// - `UnknownVersion` if the payload is well-formed but of a newer format.
pub fn decode_with(config: &LinkConfig, uri: &str) -> Result<InviteLink> {
    let raw = match recognize(config, uri) {
        Some(raw) => raw,
        None => {
            trace!("Not a group link");
            return Err(DecodeError::NotOurs);
        }
    };

    decode_link(config, &raw).map_err(|e| {
        debug!("Rejecting group link: {}", e);
        e
    })
}

/// Decode a group invite link (`https://signal.group/#...` or
/// `sgnl://signal.group/#...`).
pub fn decode(uri: &str) -> Result<InviteLink> {
    decode_with(LinkConfig::global(), uri)
}
