use crate::{Node, NodeHash};
use data_encoding::HEXLOWER;
use lazy_static::lazy_static;

pub const SOME_DATA_CONTENTS: &[u8] = b"some data";

lazy_static! {
    /// An opaque hash, not a valid multihash.
    pub static ref DUMMY_HASH: NodeHash = vec![0x00u8; 34].into();

    pub static ref HELLO_HASH: NodeHash = HEXLOWER
        .decode(b"122050ee8231ac5be6b674d35e806db2900dd4048450d29a8598559a9c0d088cc7e3")
        .expect("invalid hex")
        .into();
    pub static ref WORLD_HASH: NodeHash = HEXLOWER
        .decode(b"12202a6afde7895640b9098f8251ffb059d182b0888723ed182b112cfa40ba290f32")
        .expect("invalid hex")
        .into();

    // "hello", no links. 7 bytes.
    pub static ref HELLO_NODE: Node = Node::new("hello").expect("must build");
    // "world", linking to HELLO_NODE as "prev".
    pub static ref WORLD_NODE: Node =
        Node::with_links("world", [HELLO_NODE.as_link("prev")]).expect("must build");
    // "!!!", linking to HELLO_NODE as "prev" and WORLD_NODE as "otherPrev",
    // in this (unsorted) order.
    pub static ref BANG_NODE: Node = Node::with_named_links(
        "!!!",
        [("prev", &*HELLO_NODE), ("otherPrev", &*WORLD_NODE)]
    )
    .expect("must build");
}
