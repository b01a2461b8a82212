use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/*
    Decodes a hex string into a byte vector
*/
pub fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode(s.trim()).map_err(|e| Error::EncodingError(format!("bad hex: {}", e)))
}

/*
    Encodes a byte slice into a lower case hex string
*/
pub fn encode_hex<T: AsRef<[u8]>>(bytes: T) -> String {
    hex::encode(bytes)
}

/**
    The network an address or WIF key is encoded for.

    Every encoding function takes the network explicitly, there is no
    process wide network flag.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[serde(alias = "mainnet", alias = "main")]
    Bitcoin,
    #[serde(alias = "test")]
    Testnet
}

impl Network {
    /// Version byte of a P2PKH address
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Bitcoin => 0x00,
            Network::Testnet => 0x6F
        }
    }

    /// Version byte of a P2SH address
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Bitcoin => 0x05,
            Network::Testnet => 0xC4
        }
    }

    /// Version byte of a WIF encoded private key
    pub fn wif_version(&self) -> u8 {
        match self {
            Network::Bitcoin => 0x80,
            Network::Testnet => 0xEF
        }
    }

    /// Human readable part of a bech32 address
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bc",
            Network::Testnet => "tb"
        }
    }

    /// BIP-44 coin type
    pub fn coin_type(&self) -> u32 {
        match self {
            Network::Bitcoin => 0,
            Network::Testnet => 1
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::Testnet => "testnet"
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcoin
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bitcoin" | "mainnet" | "main" => Ok(Network::Bitcoin),
            "testnet" | "test" => Ok(Network::Testnet),
            other => Err(Error::UnknownNetwork(other.to_string()))
        }
    }
}
