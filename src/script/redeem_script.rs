use log::trace;

use crate::{
    hash,
    error::{Error, Result},
    key::PubKey,
    script::{
        ScriptBuilder,
        opcodes
    },
    util::encode_hex
};

/// Largest n accepted for a multisig script.
/// 15 keys keep a P2SH redeem script within the 520 byte push limit.
pub const MAX_MULTISIG_KEYS: usize = 15;

/// Largest script that can be pushed as a P2SH redeem script
pub const MAX_REDEEM_SCRIPT_LEN: usize = 520;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemScript {
    pub code: Vec<u8>
}

impl RedeemScript {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }

    /// Sha256 of the script, the program of a P2WSH output
    pub fn witness_hash(&self) -> [u8; 32] {
        hash::sha256(&self.code)
    }

    pub fn as_hex(&self) -> String {
        encode_hex(&self.code)
    }

    /**
        Redeem script of a P2SH-P2WPKH output:
        OP_0 <20-byte-pubkey-hash>

        The key must be compressed.
    */
    pub fn p2sh_p2wpkh(pubkey: &PubKey) -> Result<Self> {
        if !pubkey.is_compressed() {
            return Err(Error::InvalidKeyFormat("P2SH-P2WPKH requires a compressed public key".to_string()))
        }

        Ok(ScriptBuilder::new()
            .push_opcode(opcodes::OP_PUSHBYTES_0)
            .push_opcode(opcodes::OP_PUSHBYTES_20)
            .push_slice(&pubkey.hash160())
            .into_script())
    }

    /**
        Creates the redeem script for a m-of-n multisig wallet (BIP-11):
        OP_m <pubkey_1> ... <pubkey_n> OP_n OP_CHECKMULTISIG

        Keys are placed in the order given and must all be compressed.
    */
    pub fn multisig(m: u8, n: u8, keys: &[PubKey]) -> Result<Self> {
        if m < 1 || m > n {
            return Err(Error::InvalidMultisigParams(format!("need 1 <= m <= n, got m={} n={}", m, n)))
        }
        if n as usize > MAX_MULTISIG_KEYS {
            return Err(Error::InvalidMultisigParams(format!("n={} exceeds the maximum of {} keys", n, MAX_MULTISIG_KEYS)))
        }
        if n as usize != keys.len() {
            return Err(Error::InvalidMultisigParams(format!("n={} but {} keys were given", n, keys.len())))
        }
        if let Some(i) = keys.iter().position(|k| !k.is_compressed()) {
            return Err(Error::InvalidKeyFormat(format!("multisig key {} is not compressed", i)))
        }

        let mut builder = ScriptBuilder::new().push_int(m)?;
        for key in keys {
            builder = builder.push_opcode(opcodes::OP_PUSHBYTES_33);
            builder = builder.push_slice(&key.compressed_bytes());
        }

        let script = builder
            .push_int(n)?
            .push_opcode(opcodes::OP_CHECKMULTISIG)
            .into_script();
        trace!("{}-of-{} multisig redeem script {}", m, n, script.as_hex());
        Ok(script)
    }

    /**
        Wraps a witness script into the P2SH redeem script of a P2SH-P2WSH output:
        OP_0 <32-byte-script-hash>
    */
    pub fn p2sh_p2wsh(witness_script: &Self) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_PUSHBYTES_0)
            .push_opcode(opcodes::OP_PUSHBYTES_32)
            .push_slice(&witness_script.witness_hash())
            .into_script()
    }

    /// P2PKH script pub key
    /// OP_DUP OP_HASH160 <Pubkey Hash> OP_EQUALVERIFY OP_CHECKSIG
    pub fn p2pkh(pubkey: &PubKey) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_DUP)
            .push_opcode(opcodes::OP_HASH160)
            .push_opcode(opcodes::OP_PUSHBYTES_20)
            .push_slice(&pubkey.hash160())
            .push_opcode(opcodes::OP_EQUALVERIFY)
            .push_opcode(opcodes::OP_CHECKSIG)
            .into_script()
    }

    /// P2SH script pub key
    /// OP_HASH160 <Hash160(redeemScript)> OP_EQUAL
    pub fn p2sh(script: &Self) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_HASH160)
            .push_opcode(opcodes::OP_PUSHBYTES_20)
            .push_slice(&script.hash())
            .push_opcode(opcodes::OP_EQUAL)
            .into_script()
    }

    /// P2WPKH script pub key, identical to the P2SH-P2WPKH redeem script
    /// 0x0014 <20-byte-pubkey-hash>
    pub fn p2wpkh(pubkey: &PubKey) -> Result<Self> {
        Self::p2sh_p2wpkh(pubkey)
    }

    /// P2WSH script pub key, identical to the P2SH-P2WSH redeem script
    /// 0x0020 <32-byte-script-hash>
    pub fn p2wsh(script: &Self) -> Self {
        Self::p2sh_p2wsh(script)
    }
}
