use bytes::Bytes;
use hex_literal::hex;
use prost::Message;

use super::{PBLink, PBNode};
use crate::fixtures::{DUMMY_HASH, HELLO_HASH, HELLO_NODE, WORLD_NODE};
use crate::Link;

#[test]
fn encode_empty() {
    let n = PBNode::default();
    assert_eq!(n.encode_to_vec(), Vec::<u8>::new());
    assert_eq!(n.encoded_len(), 0);
}

#[test]
fn encode_data_only() {
    let n = PBNode {
        data: Some(Bytes::from_static(b"hello")),
        ..Default::default()
    };
    assert_eq!(n.encode_to_vec(), hex!("0a0568656c6c6f"));
    assert_eq!(n.encoded_len(), 7);
}

/// Links must be written before data.
#[test]
fn encode_links_before_data() {
    let n = PBNode::from_parts(
        &Bytes::from_static(b"world"),
        &[HELLO_NODE.as_link("prev")],
    );
    let encoded = n.encode_to_vec();

    assert_eq!(encoded.len(), n.encoded_len());
    assert_eq!(&encoded[..2], &[0x12, 0x2c]);
    assert_eq!(&encoded[encoded.len() - 7..], &hex!("0a05776f726c64"));
    assert_eq!(&encoded[..], &WORLD_NODE.encoded()[..]);
}

#[test]
fn from_parts_omits_empty_fields() {
    let n = PBNode::from_parts(&Bytes::new(), &[]);
    assert_eq!(n, PBNode::default());

    let n = PBNode::from_parts(&Bytes::from_static(b"x"), &[]);
    assert!(n.links.is_empty());
    assert_eq!(n.data, Some(Bytes::from_static(b"x")));
}

#[test]
fn encode_link() {
    let l = PBLink::from(&Link::new("prev", 7, HELLO_HASH.clone()));
    let encoded = l.encode_to_vec();

    assert_eq!(encoded.len(), 44);
    assert_eq!(&encoded[..2], &[0x0a, 0x22]);
    assert_eq!(&encoded[36..], &hex!("120470726576 1807"));
}

#[test]
fn decode_data_before_links() {
    // same fields as WORLD_NODE, but in tag order.
    let n = PBNode {
        links: vec![PBLink::from(&HELLO_NODE.as_link("prev"))],
        data: Some(Bytes::from_static(b"world")),
    };
    let mut swapped = hex!("0a05776f726c64").to_vec();
    swapped.extend_from_slice(&WORLD_NODE.encoded()[..46]);

    assert_eq!(PBNode::decode(&swapped[..]).expect("must decode"), n);
}

#[test]
fn decode_skips_unknown_fields() {
    // field 3, varint 1, then data.
    let buf = hex!("1801 0a0568656c6c6f");
    let n = PBNode::decode(&buf[..]).expect("must decode");

    assert_eq!(n.data, Some(Bytes::from_static(b"hello")));
    assert!(n.links.is_empty());
}

#[test]
fn decode_present_but_empty_data() {
    let n = PBNode::decode(&hex!("0a00")[..]).expect("must decode");
    assert_eq!(n.data, Some(Bytes::new()));
}

#[test]
fn decode_invalid_name() {
    // a link whose name is not valid UTF-8.
    let buf = hex!("1203 1201ff");
    assert!(PBNode::decode(&buf[..]).is_err());
}

#[test]
fn link_missing_fields() {
    let l = Link::from(PBLink::default());
    assert_eq!(l.name(), "");
    assert_eq!(l.size(), 0);
    assert!(l.hash().is_empty());
}

#[test]
fn link_all_fields_set() {
    let l = PBLink::from(&Link::new("", 0, DUMMY_HASH.clone()));
    assert_eq!(l.name, Some(String::new()));
    assert_eq!(l.tsize, Some(0));
    assert_eq!(l.hash, Some(Bytes::from(vec![0x00u8; 34])));
}
