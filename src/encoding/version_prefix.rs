use crate::{
    error::Error,
    util::Network
};

/// One byte version prefixes placed in front of base58check payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
        BTCAddress = 0x00,
        BTCTestNetAddress = 0x6F,
        P2ScriptAddress = 0x05,
        TestnetP2SHAddress = 0xC4,
        PrivateKeyWIF = 0x80,
        TestNetPrivateKeyWIF = 0xEF
}

impl VersionPrefix {
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    pub fn from_byte(byte: u8) -> Result<Self, Error> {
        Ok(match byte {
            0x00 => Self::BTCAddress,
            0x6F => Self::BTCTestNetAddress,
            0x05 => Self::P2ScriptAddress,
            0xC4 => Self::TestnetP2SHAddress,
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,
            x => return Err(Error::EncodingError(format!("unknown version byte 0x{:02x}", x)))
        })
    }

    pub fn network(&self) -> Network {
        match self {
            Self::BTCAddress | Self::P2ScriptAddress | Self::PrivateKeyWIF => Network::Bitcoin,
            _ => Network::Testnet
        }
    }

    /// True for the four prefixes used by P2PKH and P2SH addresses
    pub fn is_address(&self) -> bool {
        !matches!(self, Self::PrivateKeyWIF | Self::TestNetPrivateKeyWIF)
    }
}

pub trait ToVersionPrefix {
    fn version_prefix(&self, network: Network) -> VersionPrefix;
}

/// Payloads that are base58check encoded with a network dependent prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Kind {
    PubKeyHash,
    ScriptHash,
    PrivateKey
}

impl ToVersionPrefix for Base58Kind {
    fn version_prefix(&self, network: Network) -> VersionPrefix {
        match (self, network) {
            (Base58Kind::PubKeyHash, Network::Bitcoin) => VersionPrefix::BTCAddress,
            (Base58Kind::PubKeyHash, Network::Testnet) => VersionPrefix::BTCTestNetAddress,
            (Base58Kind::ScriptHash, Network::Bitcoin) => VersionPrefix::P2ScriptAddress,
            (Base58Kind::ScriptHash, Network::Testnet) => VersionPrefix::TestnetP2SHAddress,
            (Base58Kind::PrivateKey, Network::Bitcoin) => VersionPrefix::PrivateKeyWIF,
            (Base58Kind::PrivateKey, Network::Testnet) => VersionPrefix::TestNetPrivateKeyWIF
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_match_network_bytes() {
        for network in [Network::Bitcoin, Network::Testnet].iter() {
            assert_eq!(Base58Kind::PubKeyHash.version_prefix(*network).to_byte(), network.p2pkh_version());
            assert_eq!(Base58Kind::ScriptHash.version_prefix(*network).to_byte(), network.p2sh_version());
            assert_eq!(Base58Kind::PrivateKey.version_prefix(*network).to_byte(), network.wif_version());
        }
    }

    #[test]
    fn from_byte_round_trips_known_prefixes() {
        for byte in [0x00u8, 0x6F, 0x05, 0xC4, 0x80, 0xEF].iter() {
            assert_eq!(VersionPrefix::from_byte(*byte).unwrap().to_byte(), *byte);
        }
        assert!(VersionPrefix::from_byte(0x42).is_err());
        assert_eq!(VersionPrefix::from_byte(0xC4).unwrap().network(), Network::Testnet);
        assert!(!VersionPrefix::PrivateKeyWIF.is_address());
    }
}
