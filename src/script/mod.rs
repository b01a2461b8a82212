/*
    Scripts and witness programs behind P2SH, P2WPKH and P2WSH addresses.

    Scripts are only built here, never executed.
*/

pub mod builder;
pub mod redeem_script;
pub mod witness_program;

pub use redeem_script::{
    RedeemScript,
    MAX_MULTISIG_KEYS,
    MAX_REDEEM_SCRIPT_LEN
};
pub use witness_program::WitnessProgram;
pub use builder::{
    Builder as ScriptBuilder,
    Opcode,
    opcodes
};
