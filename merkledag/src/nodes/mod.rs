//! This holds the types describing nodes of the Merkle DAG and the links
//! between them.
mod link;
mod node;

use crate::NodeHash;
pub use link::Link;
pub use node::Node;

/// Anything a [Link] can point to: it needs to expose the cumulative size
/// of what it refers to, and its hash.
pub trait LinkTarget {
    fn size(&self) -> u64;
    fn hash(&self) -> &NodeHash;
}
