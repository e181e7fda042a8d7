use crate::{LinkTarget, NodeHash};

/// A Link is a named pointer to another [crate::Node], by its hash.
/// It doesn't hold on to the node itself, only a copy of its hash and size.
///
/// ```compile_fail
/// let mut link = merkledag::Node::new("hello").unwrap().as_link("prev");
/// link.name = "next".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Name of the link. Not required to be unique within a node.
    name: String,
    /// Cumulative size of the node referred to by `hash`, as it was when the
    /// link was created. This is the encoded length of that node, plus the
    /// sizes of all its links.
    size: u64,
    /// The multihash of the referred node's encoded form.
    hash: NodeHash,
}

impl Link {
    pub fn new(name: impl Into<String>, size: u64, hash: NodeHash) -> Self {
        Self {
            name: name.into(),
            size,
            hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn hash(&self) -> &NodeHash {
        &self.hash
    }
}

impl LinkTarget for Link {
    fn size(&self) -> u64 {
        self.size
    }

    fn hash(&self) -> &NodeHash {
        &self.hash
    }
}
