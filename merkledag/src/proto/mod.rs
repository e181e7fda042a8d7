//! Protobuf messages describing the wire form of a node:
//!
//! ```protobuf
//! message PBLink {
//!   optional bytes Hash = 1;
//!   optional string Name = 2;
//!   optional uint64 Tsize = 3;
//! }
//! message PBNode {
//!   repeated PBLink Links = 2;
//!   optional bytes Data = 1;
//! }
//! ```
use bytes::{Buf, BufMut, Bytes};
use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};

use crate::{Link, NodeHash};

#[cfg(test)]
mod tests;

const DATA_TAG: u32 = 1;
const LINKS_TAG: u32 = 2;

#[derive(Clone, PartialEq, Message)]
pub struct PBLink {
    #[prost(bytes = "bytes", optional, tag = "1")]
    pub hash: Option<Bytes>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(uint64, optional, tag = "3")]
    pub tsize: Option<u64>,
}

/// The node message.
///
/// Unlike [PBLink], this does not use the prost derive: the derive emits
/// fields ordered by tag, but node ids depend on `Links` being written
/// before `Data`. Decoding accepts both fields in any order.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct PBNode {
    pub links: Vec<PBLink>,
    pub data: Option<Bytes>,
}

impl Message for PBNode {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        for link in &self.links {
            encoding::message::encode(LINKS_TAG, link, buf);
        }
        if let Some(data) = &self.data {
            encoding::bytes::encode(DATA_TAG, data, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            DATA_TAG => {
                let data = self.data.get_or_insert_with(Bytes::new);
                encoding::bytes::merge(wire_type, data, buf, ctx)
            }
            LINKS_TAG => encoding::message::merge_repeated(wire_type, &mut self.links, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        encoding::message::encoded_len_repeated(LINKS_TAG, &self.links)
            + self
                .data
                .as_ref()
                .map_or(0, |data| encoding::bytes::encoded_len(DATA_TAG, data))
    }

    fn clear(&mut self) {
        self.links.clear();
        self.data = None;
    }
}

impl PBNode {
    /// Maps node contents to their wire form. Empty data and an empty link
    /// list are left out of the message entirely.
    pub fn from_parts(data: &Bytes, links: &[Link]) -> Self {
        PBNode {
            links: links.iter().map(PBLink::from).collect(),
            data: if data.is_empty() {
                None
            } else {
                Some(data.clone())
            },
        }
    }
}

impl From<&Link> for PBLink {
    fn from(link: &Link) -> Self {
        PBLink {
            hash: Some(link.hash().clone().into()),
            name: Some(link.name().to_owned()),
            tsize: Some(link.size()),
        }
    }
}

// Absent fields decode to their zero values.
impl From<PBLink> for Link {
    fn from(value: PBLink) -> Self {
        Link::new(
            value.name.unwrap_or_default(),
            value.tsize.unwrap_or_default(),
            NodeHash::from(value.hash.unwrap_or_default()),
        )
    }
}
