/*
    Module implements bech32 segwit address encoding (BIP-0173)
*/
use crate::{
    error::{Error, Result},
    util::Network
};

use bitcoin_bech32::{
    WitnessProgram,
    u5
};
use bitcoin_bech32::constants::Network as Bech32Network;

/// Length of a P2WPKH program (Hash160 of a compressed public key)
pub const P2WPKH_PROGRAM_LEN: usize = 20;
/// Length of a P2WSH program (Sha256 of the witness script)
pub const P2WSH_PROGRAM_LEN: usize = 32;

fn bech32_network(network: Network) -> Bech32Network {
    match network {
        Network::Bitcoin => Bech32Network::Bitcoin,
        Network::Testnet => Bech32Network::Testnet
    }
}

/**
    Encodes a witness program as a segwit address.

    Use witness version 0 with a 20 byte pubkey hash for P2WPKH or
    a 32 byte script hash for P2WSH. Any other program length is rejected.
*/
pub fn encode(witness_version: u8, program: &[u8], network: Network) -> Result<String> {
    if witness_version != 0 {
        return Err(Error::EncodingError(format!("unsupported witness version {}", witness_version)))
    }
    if program.len() != P2WPKH_PROGRAM_LEN && program.len() != P2WSH_PROGRAM_LEN {
        return Err(Error::EncodingError(format!("invalid witness program length {}", program.len())))
    }

    let version = u5::try_from_u8(witness_version)
        .map_err(|e| Error::EncodingError(e.to_string()))?;
    let witness_program = WitnessProgram::new(version, program.to_vec(), bech32_network(network))
        .map_err(|e| Error::EncodingError(e.to_string()))?;

    Ok(witness_program.to_address())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_hex;

    #[test]
    /// BIP-0173 P2WPKH vectors for the public key of private key 1
    fn p2wpkh_bip173_vectors() {
        let program = decode_hex("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(encode(0, &program, Network::Bitcoin).unwrap(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert_eq!(encode(0, &program, Network::Testnet).unwrap(), "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
    }

    #[test]
    /// BIP-0173 P2WSH vector
    fn p2wsh_bip173_vector() {
        let program = decode_hex("1863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262").unwrap();
        assert_eq!(
            encode(0, &program, Network::Testnet).unwrap(),
            "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7"
        );
    }

    #[test]
    fn rejects_bad_program_lengths() {
        for len in [0usize, 19, 21, 31, 33, 40].iter() {
            let program = vec![0x11; *len];
            assert!(matches!(encode(0, &program, Network::Bitcoin), Err(Error::EncodingError(_))));
        }
    }

    #[test]
    fn rejects_unsupported_versions() {
        let program = vec![0x11; 32];
        assert!(matches!(encode(1, &program, Network::Bitcoin), Err(Error::EncodingError(_))));
    }
}
