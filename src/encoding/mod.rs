/*
    Module that bundles together the text encoding schemes used for addresses and keys.
    No cryptography happens here beyond the base58check checksum.
*/

pub mod version_prefix;
pub mod bs58check;
pub mod bech32;
pub use version_prefix::{
    ToVersionPrefix,
    VersionPrefix,
    Base58Kind
};

use crate::{
    error::Result,
    util::Network
};

/**
    Base58Check( version | hash160 )
*/
pub fn base58_address(version: VersionPrefix, hash160: &[u8; 20]) -> String {
    bs58check::check_encode(version, hash160)
}

/**
    Bech32 encoded segwit address of a witness program
*/
pub fn segwit_address(network: Network, witness_version: u8, program: &[u8]) -> Result<String> {
    bech32::encode(witness_version, program, network)
}
