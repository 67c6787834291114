use crate::config::LinkConfig;
use crate::encode::encode_with;
use crate::master_key::GroupMasterKey;
use crate::password::LinkPassword;
use std::fmt;

/// A group invite link together with its canonical URL.
///
/// The URL is rendered once at construction; the value is immutable
/// afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct InviteLink {
    master_key: GroupMasterKey,
    password: LinkPassword,
    url: String,
}

impl InviteLink {
    /// Build the share link for a group from its current state.
    pub fn for_group(master_key: GroupMasterKey, password: LinkPassword) -> Self {
        Self::for_group_with(LinkConfig::global(), master_key, password)
    }

    pub fn for_group_with(
        config: &LinkConfig,
        master_key: GroupMasterKey,
        password: LinkPassword,
    ) -> Self {
        let url = encode_with(config, &master_key, &password);
        Self {
            master_key,
            password,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn master_key(&self) -> &GroupMasterKey {
        &self.master_key
    }

    pub fn password(&self) -> &LinkPassword {
        &self.password
    }
}

/// The URL embeds the key material, so it is redacted along with it.
impl fmt::Debug for InviteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InviteLink")
            .field("master_key", &self.master_key)
            .field("password", &self.password)
            .field("url", &"[REDACTED]")
            .finish()
    }
}
