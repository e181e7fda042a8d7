use thiserror::Error;

/// Errors that can occur while building or decoding a [crate::Node].
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed input: {0}")]
    MalformedInput(#[from] prost::DecodeError),

    /// A derived value that always exists for a well-formed node could not
    /// be produced. This is a bug, not a problem with the input.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl From<multihash::Error> for Error {
    fn from(value: multihash::Error) -> Self {
        Error::InternalInvariantViolation(format!("unable to wrap digest: {}", value))
    }
}

impl From<cid::Error> for Error {
    fn from(value: cid::Error) -> Self {
        Error::InternalInvariantViolation(format!("unable to render id: {}", value))
    }
}
