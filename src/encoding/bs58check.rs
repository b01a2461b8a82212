use crate::{
    hash,
    error::{Error, Result},
    encoding::version_prefix::VersionPrefix
};

/**
    Returns the Base58Check encoded value of the payload.
    * Base58( payload | checksum(payload) )
*/
pub fn base58_check(payload: &[u8]) -> String {
    let mut data = payload.to_vec();
    data.extend_from_slice(&hash::checksum(payload));
    bs58::encode(data).into_string()
}

/**
    Returns the Base58Check encoded value of the input data.
    * Prefix is based on use case as defined in the VersionPrefix enum
*/
pub fn check_encode(prefix: VersionPrefix, data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 1);
    payload.push(prefix.to_byte());
    payload.extend_from_slice(data);
    base58_check(&payload)
}

/**
    Encodes a given u8 slice into base 58 without a checksum
*/
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/**
    Decodes a given Base58 string into a byte vector.
    Does not remove the checksum.
*/
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(encoded).into_vec()?)
}

/**
    Decodes a Base58Check string and returns the payload with the checksum removed.
    The version prefix is kept as the first byte.
*/
pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut bytes = decode(encoded)?;
    if bytes.len() < 5 {
        return Err(Error::EncodingError(format!("base58check payload too short ({} bytes)", bytes.len())))
    }

    let split = bytes.len() - 4;
    if hash::checksum(&bytes[..split])[..] != bytes[split..] {
        return Err(Error::ChecksumFailure)
    }

    bytes.truncate(split);
    Ok(bytes)
}
