use grouplink::{
    decode, decode_with, encode, GroupMasterKey, InviteLink, LinkConfig, LinkPassword,
};

fn sample_key() -> GroupMasterKey {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    GroupMasterKey::new(bytes)
}

#[test]
fn test_roundtrip_typical_link() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![0xC3; 16]);

    let url = encode(&key, &password);
    assert!(url.starts_with("https://signal.group/#"));

    let decoded = decode(&url).unwrap();

    assert_eq!(decoded.master_key(), &key);
    assert_eq!(decoded.password().serialize(), password.serialize());
    assert_eq!(decoded.url(), url);
}

#[test]
fn test_roundtrip_empty_password() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(Vec::new());

    let decoded = decode(&encode(&key, &password)).unwrap();

    assert_eq!(decoded.master_key(), &key);
    assert!(decoded.password().is_empty());
}

#[test]
fn test_roundtrip_long_password() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![0x42; 300]);

    let decoded = decode(&encode(&key, &password)).unwrap();

    assert_eq!(decoded.password(), &password);
}

#[test]
fn test_roundtrip_generated_password() {
    let link = InviteLink::for_group(sample_key(), LinkPassword::generate().unwrap());

    let decoded = decode(link.url()).unwrap();

    assert_eq!(decoded, link);
}

#[test]
fn test_for_group_matches_encode() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(b"password".to_vec());

    let link = InviteLink::for_group(key.clone(), password.clone());

    assert_eq!(link.url(), encode(&key, &password));
}

#[test]
fn test_encode_is_deterministic() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![1, 2, 3, 4]);

    assert_eq!(encode(&key, &password), encode(&key, &password));
}

#[test]
fn test_uppercase_link_decodes_identically() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![9; 16]);
    let url = encode(&key, &password);
    let fragment = url.split_once('#').unwrap().1;

    let upper = decode(&format!("HTTPS://SIGNAL.GROUP/#{}", fragment)).unwrap();
    let lower = decode(&url).unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn test_app_scheme_decodes_identically() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![9; 16]);
    let url = encode(&key, &password);
    let fragment = url.split_once('#').unwrap().1;

    for alias in [
        format!("sgnl://signal.group/#{}", fragment),
        format!("SGNL://signal.group#{}", fragment),
    ] {
        let decoded = decode(&alias).unwrap();
        assert_eq!(decoded.master_key(), &key);
        assert_eq!(decoded.password(), &password);
        // always re-rendered in canonical form
        assert_eq!(decoded.url(), url);
    }
}

#[test]
fn test_link_without_trailing_slash() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![5; 16]);
    let url = encode(&key, &password);
    let fragment = url.split_once('#').unwrap().1;

    let decoded = decode(&format!("https://signal.group#{}", fragment)).unwrap();

    assert_eq!(decoded.master_key(), &key);
}

#[test]
fn test_padded_fragment_decodes_identically() {
    let key = sample_key();
    // 32-byte key + 2-byte password gives a 40-byte payload, which needs padding
    let password = LinkPassword::from_bytes(vec![7, 7]);
    let url = encode(&key, &password);
    assert!(!url.contains('='));

    let padded = decode(&format!("{}=", url)).unwrap();
    let canonical = decode(&url).unwrap();

    assert_eq!(padded, canonical);
    assert_eq!(padded.url(), url);
}

#[test]
fn test_roundtrip_custom_config() {
    let config = LinkConfig {
        host: "join.example.net".to_string(),
        scheme: "https".to_string(),
        app_scheme: "exmpl".to_string(),
    };
    let link = InviteLink::for_group_with(
        &config,
        sample_key(),
        LinkPassword::from_bytes(vec![1; 16]),
    );
    let fragment = link.url().split_once('#').unwrap().1;

    assert_eq!(decode_with(&config, link.url()).unwrap(), link);
    assert_eq!(
        decode_with(&config, &format!("exmpl://JOIN.example.net/#{}", fragment)).unwrap(),
        link
    );
    assert!(decode(link.url()).unwrap_err().is_not_ours());
}

#[test]
fn test_percent_escaped_fragment_decodes_identically() {
    let key = sample_key();
    let password = LinkPassword::from_bytes(vec![0x3E; 16]);
    let url = encode(&key, &password);
    let fragment = url.split_once('#').unwrap().1;

    let escaped: String = fragment.bytes().map(|b| format!("%{:02X}", b)).collect();
    let decoded = decode(&format!("https://signal.group/#{}", escaped)).unwrap();

    assert_eq!(decoded.master_key(), &key);
    assert_eq!(decoded.password(), &password);
    assert_eq!(decoded.url(), url);
}
