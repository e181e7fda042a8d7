mod digests;
mod errors;
mod nodes;

pub mod fixtures;
pub mod proto;

pub use digests::{NodeHash, SHA2_256, SHA2_256_LEN};
pub use errors::Error;
pub use nodes::{Link, LinkTarget, Node};
