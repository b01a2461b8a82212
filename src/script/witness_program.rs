use crate::{
    error::{Error, Result},
    encoding::bech32,
    key::PubKey,
    script::{
        RedeemScript,
        ScriptBuilder,
        Opcode
    },
    util::Network
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessProgram {
    version: u8,
    program: Vec<u8>
}

impl WitnessProgram {
    /**
        Creates a new version 0 witness program.

        For P2WPKH the data is the Hash160 of the public key.
        For P2WSH the data is the SHA256 of the witness script.
        The length is checked when the program is encoded.
    */
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            version: 0,
            program: data
        }
    }

    /// P2WPKH program, the key must be compressed
    pub fn p2wpkh(pubkey: &PubKey) -> Result<Self> {
        // The nesting redeem script carries the compression check
        let redeem = RedeemScript::p2sh_p2wpkh(pubkey)?;
        Ok(Self::new(redeem.code[2..].to_vec()))
    }

    pub fn p2wsh(witness_script: &RedeemScript) -> Self {
        Self::new(witness_script.witness_hash().to_vec())
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn to_address(&self, network: Network) -> Result<String> {
        bech32::encode(self.version, &self.program, network)
    }

    /// version | program len | program
    pub fn to_scriptpubkey(&self) -> Result<RedeemScript> {
        if self.version != 0 {
            return Err(Error::EncodingError(format!("unsupported witness version {}", self.version)))
        }

        Ok(ScriptBuilder::new()
            .push_opcode(Opcode::from(self.version))
            .push_data(&self.program)?
            .into_script())
    }
}
