use grouplink::{
    decode, decode_payload, encode, encode_payload, DecodeError, GroupMasterKey, LinkPassword,
};
use proptest::prelude::*;

fn arbitrary_key() -> impl Strategy<Value = GroupMasterKey> {
    any::<[u8; 32]>().prop_map(GroupMasterKey::new)
}

fn arbitrary_password() -> impl Strategy<Value = LinkPassword> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(LinkPassword::from_bytes)
}

proptest! {
    #[test]
    fn test_encode_decode_roundtrip(key in arbitrary_key(), password in arbitrary_password()) {
        let url = encode(&key, &password);
        let decoded = decode(&url).unwrap();

        prop_assert_eq!(decoded.master_key(), &key);
        prop_assert_eq!(decoded.password().serialize(), password.serialize());
        prop_assert_eq!(decoded.url(), url.as_str());
    }

    #[test]
    fn test_url_no_padding(key in arbitrary_key(), password in arbitrary_password()) {
        let url = encode(&key, &password);
        prop_assert!(url.starts_with("https://signal.group/#"));
        prop_assert!(!url.contains('='));
    }

    #[test]
    fn test_truncated_payload_never_decodes(
        key in arbitrary_key(),
        password in arbitrary_password(),
        cut in 1usize..8,
    ) {
        let mut payload = encode_payload(&key, &password);
        let keep = payload.len().saturating_sub(cut);
        payload.truncate(keep);

        let result = decode_payload(&payload);
        prop_assert!(matches!(
            result,
            Err(DecodeError::InvalidLink(_)) | Err(DecodeError::UnknownVersion)
        ));
    }

    #[test]
    fn test_arbitrary_fragment_never_panics(fragment in "[A-Za-z0-9_=-]{0,80}") {
        let _ = decode(&format!("https://signal.group/#{}", fragment));
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in "\\PC{0,100}") {
        let _ = decode(&input);
    }

    #[test]
    fn test_foreign_hosts_are_not_ours(host in "[a-z]{1,12}\\.(com|org|net)") {
        let result = decode(&format!("https://{}/#CiIKIA", host));
        prop_assert_eq!(result, Err(DecodeError::NotOurs));
    }
}
