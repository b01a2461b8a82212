use std::{fmt, str::FromStr};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    key::PubKey,
    error::{Error, Result},
    encoding::{
        self,
        bs58check,
        Base58Kind,
        ToVersionPrefix,
        VersionPrefix
    },
    script::{
        RedeemScript,
        WitnessProgram,
        MAX_REDEEM_SCRIPT_LEN
    },
    util::Network
};

/// The spending condition an address commits to
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    #[serde(rename = "p2pkh")]
    P2PKH,
    #[serde(rename = "p2sh")]
    P2SH,
    #[serde(rename = "p2wpkh")]
    P2WPKH,
    #[serde(rename = "p2wsh")]
    P2WSH,
    #[serde(rename = "p2sh-p2wpkh")]
    P2SH_P2WPKH,
    #[serde(rename = "p2sh-p2wsh")]
    P2SH_P2WSH
}

impl AddressType {
    pub const ALL: [AddressType; 6] = [
        AddressType::P2PKH,
        AddressType::P2SH,
        AddressType::P2WPKH,
        AddressType::P2WSH,
        AddressType::P2SH_P2WPKH,
        AddressType::P2SH_P2WSH
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "p2pkh",
            AddressType::P2SH => "p2sh",
            AddressType::P2WPKH => "p2wpkh",
            AddressType::P2WSH => "p2wsh",
            AddressType::P2SH_P2WPKH => "p2sh-p2wpkh",
            AddressType::P2SH_P2WSH => "p2sh-p2wsh"
        }
    }

    /// Address types that can only be built from a compressed public key
    pub fn requires_compressed_key(&self) -> bool {
        !matches!(self, AddressType::P2PKH | AddressType::P2SH)
    }

    /// Address types that can commit to a multisig redeem script
    pub fn supports_multisig(&self) -> bool {
        matches!(self, AddressType::P2SH | AddressType::P2WSH | AddressType::P2SH_P2WSH)
    }

    /**
        Account level derivation path that wallets use for this address type
        (BIP-44, BIP-49 and BIP-84). Informational only, no HD derivation is done here.
    */
    pub fn derivation_path(&self, network: Network) -> Option<String> {
        let purpose = match self {
            AddressType::P2PKH => 44,
            AddressType::P2SH_P2WPKH => 49,
            AddressType::P2WPKH => 84,
            _ => return None
        };
        Some(format!("m/{}'/{}'/0'", purpose, network.coin_type()))
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase().replace('_', "-");
        AddressType::ALL
            .iter()
            .find(|t| t.name() == lower)
            .copied()
            .ok_or_else(|| Error::UnsupportedAddressType(s.to_string()))
    }
}

pub struct Address;

impl Address {
    /**
        Derives the address of a single public key.

        * P2PKH and P2SH commit to the Hash160 of the key in the form it was given.
        * P2WPKH and P2SH-P2WPKH commit to the Hash160 of the compressed key.
        * P2WSH and P2SH-P2WSH commit to the 1-of-1 multisig script of the key.
    */
    pub fn derive(pk: &PubKey, address_type: AddressType, network: Network) -> Result<String> {
        debug!("deriving {} address on {}", address_type, network);

        match address_type {
            AddressType::P2PKH => Ok(encoding::base58_address(
                Base58Kind::PubKeyHash.version_prefix(network),
                &pk.hash160()
            )),
            AddressType::P2SH => Ok(encoding::base58_address(
                Base58Kind::ScriptHash.version_prefix(network),
                &pk.hash160()
            )),
            AddressType::P2WPKH => WitnessProgram::p2wpkh(pk)?.to_address(network),
            AddressType::P2SH_P2WPKH => {
                let redeem = RedeemScript::p2sh_p2wpkh(pk)?;
                Ok(encoding::base58_address(
                    Base58Kind::ScriptHash.version_prefix(network),
                    &redeem.hash()
                ))
            }
            AddressType::P2WSH | AddressType::P2SH_P2WSH => {
                let script = RedeemScript::multisig(1, 1, &[*pk])?;
                Self::from_redeem_script(&script, address_type, network)
            }
        }
    }

    /**
        Derives the address of an m-of-n multisig redeem script built from the given keys.
        Only P2SH, P2WSH and P2SH-P2WSH can carry a multisig script.
    */
    pub fn derive_multisig(
        m: u8,
        n: u8,
        keys: &[PubKey],
        address_type: AddressType,
        network: Network
    ) -> Result<String> {
        debug!("deriving {}-of-{} {} address on {}", m, n, address_type, network);

        if !address_type.supports_multisig() {
            return Err(Error::UnsupportedAddressType(address_type.to_string()))
        }
        let script = RedeemScript::multisig(m, n, keys)?;
        Self::from_redeem_script(&script, address_type, network)
    }

    /**
        Derives the P2SH, P2WSH or P2SH-P2WSH address of an arbitrary redeem script.
        A P2SH redeem script may not exceed 520 bytes.
    */
    pub fn from_redeem_script(script: &RedeemScript, address_type: AddressType, network: Network) -> Result<String> {
        let p2sh_prefix = Base58Kind::ScriptHash.version_prefix(network);

        match address_type {
            AddressType::P2SH => {
                if script.code.len() > MAX_REDEEM_SCRIPT_LEN {
                    return Err(Error::EncodingError(format!(
                        "P2SH redeem script is {} bytes, the limit is {}",
                        script.code.len(),
                        MAX_REDEEM_SCRIPT_LEN
                    )))
                }
                Ok(encoding::base58_address(p2sh_prefix, &script.hash()))
            }
            AddressType::P2WSH => WitnessProgram::p2wsh(script).to_address(network),
            AddressType::P2SH_P2WSH => {
                let nested = RedeemScript::p2sh_p2wsh(script);
                Ok(encoding::base58_address(p2sh_prefix, &nested.hash()))
            }
            other => Err(Error::UnsupportedAddressType(other.to_string()))
        }
    }

    /**
        Every address type the key supports, in AddressType::ALL order.
        Uncompressed keys only yield P2PKH and P2SH.
    */
    pub fn all(pk: &PubKey, network: Network) -> Result<Vec<(AddressType, String)>> {
        AddressType::ALL
            .iter()
            .filter(|t| pk.is_compressed() || !t.requires_compressed_key())
            .map(|t| Self::derive(pk, *t, network).map(|address| (*t, address)))
            .collect()
    }

    /**
        Decodes a P2PKH or P2SH address into its type, network and 20 byte hash
    */
    pub fn decode_base58(address: &str) -> Result<(AddressType, Network, [u8; 20])> {
        let payload = bs58check::check_decode(address)?;
        if payload.len() != 21 {
            return Err(Error::EncodingError(format!("address payload must be 21 bytes, got {}", payload.len())))
        }

        let prefix = VersionPrefix::from_byte(payload[0])?;
        let address_type = match prefix {
            VersionPrefix::BTCAddress | VersionPrefix::BTCTestNetAddress => AddressType::P2PKH,
            VersionPrefix::P2ScriptAddress | VersionPrefix::TestnetP2SHAddress => AddressType::P2SH,
            other => return Err(Error::EncodingError(format!("{:?} is not an address prefix", other)))
        };

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok((address_type, prefix.network(), hash))
    }

    /**
        Verifies that a base58 address is valid by checking the payload and checksum
    */
    pub fn is_valid_base58(address: &str) -> bool {
        Self::decode_base58(address).is_ok()
    }
}
