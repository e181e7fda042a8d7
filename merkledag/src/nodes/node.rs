use bytes::Bytes;
use icu_collator::{Collator, CollatorOptions};
use prost::Message;
use tracing::{debug, instrument};

use crate::{proto::PBNode, Error, Link, LinkTarget, NodeHash};

/// A Node holds some data and an ordered list of [Link]s to other nodes.
///
/// Everything else is derived when the node is built, and never changes
/// afterwards:
///  - `encoded`, the canonical protobuf form of data and links,
///  - `hash`, the sha2-256 multihash of `encoded`,
///  - `size`, the length of `encoded` plus the sizes of all links,
///  - `id`, the base58 rendering of `hash`.
///
/// Links are encoded in the order they were passed in. Only [Node::decode]
/// sorts them by name, so two nodes built from the same links in a different
/// order will have different hashes.
///
/// None of the fields can be assigned to from the outside:
///
/// ```compile_fail
/// let mut node = merkledag::Node::new("hello").unwrap();
/// node.size = 0;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    data: Bytes,
    links: Vec<Link>,
    encoded: Bytes,
    hash: NodeHash,
    size: u64,
    id: String,
}

impl Node {
    /// Builds a node without any links.
    pub fn new(data: impl Into<Bytes>) -> Result<Self, Error> {
        Self::build(data.into(), vec![])
    }

    /// Builds a node linking to the given [Link]s, in the given order.
    pub fn with_links(
        data: impl Into<Bytes>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<Self, Error> {
        Self::build(data.into(), links.into_iter().collect())
    }

    /// Builds a node from (name, target) pairs. Each target is turned into a
    /// [Link] carrying the target's current size and hash, in the order the
    /// pairs are yielded.
    pub fn with_named_links<'a, N, T>(
        data: impl Into<Bytes>,
        links: impl IntoIterator<Item = (N, &'a T)>,
    ) -> Result<Self, Error>
    where
        N: Into<String>,
        T: LinkTarget + ?Sized + 'a,
    {
        let links = links
            .into_iter()
            .map(|(name, target)| Link::new(name, target.size(), target.hash().clone()))
            .collect();

        Self::build(data.into(), links)
    }

    /// Parses a node from its wire form.
    /// Links are sorted by name using the root collation order of the
    /// Unicode Collation Algorithm (keeping the wire order of names that
    /// collate equal) before the node is rebuilt from them.
    #[instrument(level = "trace", skip_all, fields(len = buf.len()), err)]
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let pb_node = PBNode::decode(buf)?;

        let mut links: Vec<Link> = pb_node.links.into_iter().map(Link::from).collect();
        if links.len() > 1 {
            let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
                .map_err(|e| {
                    Error::InternalInvariantViolation(format!("unable to load collator: {}", e))
                })?;
            links.sort_by(|a, b| collator.compare(a.name(), b.name()));
        }

        Self::build(pb_node.data.unwrap_or_default(), links)
    }

    #[instrument(level = "trace", skip_all, fields(data_len = data.len(), links = links.len()), err)]
    fn build(data: Bytes, links: Vec<Link>) -> Result<Self, Error> {
        let encoded: Bytes = PBNode::from_parts(&data, &links).encode_to_vec().into();
        let hash = NodeHash::of(&encoded)?;

        let size = checked_sum(
            std::iter::once(encoded.len() as u64).chain(links.iter().map(|link| link.size())),
        )
        .ok_or_else(|| Error::InvalidArgument("cumulative link size overflows u64".into()))?;

        let id = hash.to_id()?;
        debug!(%id, size, "built node");

        Ok(Self {
            data,
            links,
            encoded,
            hash,
            size,
            id,
        })
    }

    /// Returns a [Link] with the given name pointing to this node.
    pub fn as_link(&self, name: impl Into<String>) -> Link {
        Link::new(name, self.size, self.hash.clone())
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn encoded(&self) -> &Bytes {
        &self.encoded
    }

    pub fn hash(&self) -> &NodeHash {
        &self.hash
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

fn checked_sum(iter: impl IntoIterator<Item = u64>) -> Option<u64> {
    iter.into_iter().try_fold(0u64, |acc, i| acc.checked_add(i))
}

impl LinkTarget for Node {
    fn size(&self) -> u64 {
        self.size
    }

    fn hash(&self) -> &NodeHash {
        &self.hash
    }
}

impl TryFrom<&[u8]> for Node {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Node::decode(value)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
