/*

    Script builder module.

*/

use super::RedeemScript;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub code: Vec<u8>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { code: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.code.push(opcode.into_u8());
        self
    }

    /// Push raw bytes into the code without a length prefix
    pub fn push_slice(mut self, slice: &[u8]) -> Self {
        self.code.extend_from_slice(slice);
        self
    }

    /// Push data with its single byte length opcode (OP_PUSHBYTES_1 to OP_PUSHBYTES_75)
    pub fn push_data(self, data: &[u8]) -> Result<Self> {
        if data.is_empty() || data.len() > 75 {
            return Err(Error::EncodingError(format!("cannot push {} bytes with a single opcode", data.len())))
        }
        Ok(self.push_opcode(Opcode::from(data.len() as u8)).push_slice(data))
    }

    /// Push a small integer as OP_1 to OP_16
    pub fn push_int(self, n: u8) -> Result<Self> {
        Ok(self.push_opcode(Opcode::small_int(n)?))
    }

    /// Convert self into a redeem script
    pub fn into_script(self) -> RedeemScript {
        RedeemScript::new(self.code)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub fn into_u8(self) -> u8 {
        self.code
    }

    /// OP_n for 1 <= n <= 16, encoded as 0x50 + n
    pub fn small_int(n: u8) -> Result<Self> {
        match n {
            1..=16 => Ok(Self { code: opcodes::OP_RESERVED.code + n }),
            _ => Err(Error::EncodingError(format!("{} has no small integer opcode", n)))
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

// Opcode constants
pub mod opcodes {
    use super::Opcode;

    /// Push an empty array onto the stack
    pub const OP_PUSHBYTES_0: Opcode = Opcode {code: 0x00};
    /// Push the next 20 bytes as an array onto the stack
    pub const OP_PUSHBYTES_20: Opcode = Opcode {code: 0x14};
    /// Push the next 32 bytes as an array onto the stack
    pub const OP_PUSHBYTES_32: Opcode = Opcode {code: 0x20};
    /// Push the next 33 bytes as an array onto the stack
    pub const OP_PUSHBYTES_33: Opcode = Opcode {code: 0x21};
    /// Base of the small integer opcodes, OP_n = 0x50 + n
    pub const OP_RESERVED: Opcode = Opcode {code: 0x50};
    /// Push the array `0x01` onto the stack
    pub const OP_PUSHNUM_1: Opcode = Opcode {code: 0x51};
    /// Push the array `0x10` onto the stack
    pub const OP_PUSHNUM_16: Opcode = Opcode {code: 0x60};
    /// Duplicates the top stack item
    pub const OP_DUP: Opcode = Opcode {code: 0x76};
    /// Pushes 1 if the inputs are exactly equal, 0 otherwise
    pub const OP_EQUAL: Opcode = Opcode {code: 0x87};
    /// Returns success if the inputs are exactly equal, failure otherwise
    pub const OP_EQUALVERIFY: Opcode = Opcode {code: 0x88};
    /// Pop the top stack item and push its RIPEMD160(SHA256) hash
    pub const OP_HASH160: Opcode = Opcode {code: 0xa9};
    /// Pushes 1 if the signature is valid for the public key
    pub const OP_CHECKSIG: Opcode = Opcode {code: 0xac};
    /// m-of-n signature check
    pub const OP_CHECKMULTISIG: Opcode = Opcode {code: 0xae};
}
