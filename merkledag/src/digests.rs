use std::str::FromStr;

use bytes::Bytes;
use cid::Cid;
use data_encoding::HEXLOWER;
use multihash::Multihash;
use sha2::{Digest, Sha256};

use crate::Error;

/// Multihash code of sha2-256.
pub const SHA2_256: u64 = 0x12;
/// Length of a sha2-256 digest, without the multihash prefix.
pub const SHA2_256_LEN: usize = 32;

/// The hash of a node: the raw bytes of a self-describing multihash
/// (algorithm code, digest length, digest).
///
/// Hashes read off the wire are kept as they are, so a [NodeHash] is not
/// guaranteed to hold a valid multihash. Hashes computed by [NodeHash::of]
/// always do.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeHash(Bytes);

impl NodeHash {
    /// Computes the sha2-256 multihash of `encoded`.
    pub fn of(encoded: &[u8]) -> Result<Self, Error> {
        let digest = Sha256::digest(encoded);
        Ok(Multihash::<64>::wrap(SHA2_256, &digest)?.into())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the hash as base58btc, which is the string form of a CIDv0.
    /// Only sha2-256 multihashes have such a form.
    pub fn to_id(&self) -> Result<String, Error> {
        let mh = Multihash::<64>::from_bytes(&self.0)?;
        Ok(Cid::new_v0(mh)?.to_string())
    }
}

impl From<Multihash<64>> for NodeHash {
    fn from(value: Multihash<64>) -> Self {
        Self(value.to_bytes().into())
    }
}

impl From<Bytes> for NodeHash {
    fn from(value: Bytes) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for NodeHash {
    fn from(value: Vec<u8>) -> Self {
        Self(value.into())
    }
}

impl From<NodeHash> for Bytes {
    fn from(value: NodeHash) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for NodeHash {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl FromStr for NodeHash {
    type Err = Error;

    /// Parses the id form produced by [NodeHash::to_id] back into the multihash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cid = Cid::try_from(s)
            .map_err(|e| Error::InvalidArgument(format!("invalid node id {:?}: {}", s, e)))?;
        Ok(cid.hash().to_owned().into())
    }
}

impl std::fmt::Display for NodeHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", HEXLOWER.encode(&self.0))
    }
}

impl std::fmt::Debug for NodeHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mh:{}", HEXLOWER.encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeHash, SHA2_256_LEN};
    use crate::Error;
    use hex_literal::hex;
    use rstest::rstest;

    #[test]
    fn of_empty() {
        let h = NodeHash::of(b"").expect("must hash");
        assert_eq!(
            h.as_slice(),
            &hex!("1220e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(h.as_slice().len(), 2 + SHA2_256_LEN);
        assert_eq!(
            h.to_id().expect("must render"),
            "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n"
        );
    }

    #[rstest]
    #[case::hello(
        "QmTnaGEpw4totXN7rhv2jPMXKfL8s65PhhCKL5pwtJfRxn",
        &hex!("122050ee8231ac5be6b674d35e806db2900dd4048450d29a8598559a9c0d088cc7e3")
    )]
    #[case::empty(
        "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n",
        &hex!("1220e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    )]
    fn parse_id(#[case] id: &str, #[case] expected: &[u8]) {
        let h: NodeHash = id.parse().expect("must parse");
        assert_eq!(h.as_slice(), expected);
        assert_eq!(h.to_id().expect("must render"), id);
    }

    #[test]
    fn parse_invalid_id() {
        assert!(matches!(
            "not-an-id".parse::<NodeHash>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn opaque_hash_has_no_id() {
        let h = NodeHash::from(vec![0x01, 0x02]);
        assert!(matches!(
            h.to_id(),
            Err(Error::InternalInvariantViolation(_))
        ));
    }

    #[test]
    fn display() {
        let h = NodeHash::from(vec![0xab, 0x01]);
        assert_eq!(h.to_string(), "ab01");
        assert_eq!(format!("{:?}", h), "mh:ab01");
    }
}
