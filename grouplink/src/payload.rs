//! Protobuf schema of the link payload.
//!
//! ```text
//! message GroupInviteLink {
//!   message GroupInviteLinkContentsV1 {
//!     bytes groupMasterKey     = 1;
//!     bytes inviteLinkPassword = 2;
//!   }
//!   oneof contents {
//!     GroupInviteLinkContentsV1 v1Contents = 1;
//!   }
//! }
//! ```
//!
//! Fields with unknown numbers are skipped by the decoder, so a payload
//! written by a newer client decodes with `contents == None`.

/// Versioned envelope carried in the link fragment.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GroupInviteLink {
    #[prost(oneof = "group_invite_link::Contents", tags = "1")]
    pub contents: Option<group_invite_link::Contents>,
}

pub mod group_invite_link {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GroupInviteLinkContentsV1 {
        #[prost(bytes = "vec", tag = "1")]
        pub group_master_key: Vec<u8>,
        #[prost(bytes = "vec", tag = "2")]
        pub invite_link_password: Vec<u8>,
    }

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Contents {
        #[prost(message, tag = "1")]
        V1Contents(GroupInviteLinkContentsV1),
    }
}

pub use group_invite_link::{Contents, GroupInviteLinkContentsV1};

impl GroupInviteLink {
    pub fn v1(group_master_key: Vec<u8>, invite_link_password: Vec<u8>) -> Self {
        Self {
            contents: Some(Contents::V1Contents(GroupInviteLinkContentsV1 {
                group_master_key,
                invite_link_password,
            })),
        }
    }
}
