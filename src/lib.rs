/*
    Library to create keys and every standard address encoding
    of a public key for Bitcoin mainnet and testnet.

    Supported address types:
        - P2PKH         (legacy, Base58Check)
        - P2SH          (Base58Check)
        - P2WPKH        (native segwit, Bech32)
        - P2WSH         (native segwit, Bech32)
        - P2SH-P2WPKH   (nested segwit)
        - P2SH-P2WSH    (nested segwit)
    and m-of-n multisig redeem scripts for the script hash types.

    Every function is pure over its inputs apart from private key generation,
    which reads the OS entropy source. The network is always passed explicitly.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
        - learn me a bitcoin (https://learnmeabitcoin.com/)
        - BIP-0011, BIP-0016, BIP-0141, BIP-0173
*/

//Outward facing modules
pub mod key;
pub mod address;
pub mod script;
pub mod encoding;
pub mod client;
pub mod error;
pub mod prelude;
pub mod util;

//Modules for internal use
mod hash;
mod entropy;

pub use hash::{sha256, hash160, checksum};
pub use encoding::bs58check::base58_check;

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Sha256, Digest};
use ripemd160::Ripemd160;
