/*
    Error type shared by every module of the library.
*/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Wrong key length or prefix, zero or out of range scalar, or a point not on the curve
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// m or n out of bounds, m > n, or n not matching the number of keys
    #[error("invalid multisig parameters: {0}")]
    InvalidMultisigParams(String),

    /// Malformed witness program or undecodable text encoding
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// A base58check payload whose trailing four bytes do not match its checksum
    #[error("checksum mismatch")]
    ChecksumFailure,

    #[error("address type {0} cannot be built from this input")]
    UnsupportedAddressType(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Error reported by a chain client implementation
    #[error("chain client error: {0}")]
    Client(String)
}

impl From<secp256k1::Error> for Error {
    fn from(err: secp256k1::Error) -> Self {
        Error::InvalidKeyFormat(err.to_string())
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Self {
        Error::EncodingError(format!("base58: {}", err))
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Entropy(err.to_string())
    }
}
