/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_addrkit::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey
    },

    address::{
        Address,
        AddressType
    },

    script::{
        RedeemScript,
        WitnessProgram
    },

    client::{
        ChainClient,
        SignedTransaction,
        TransactionContext
    },

    error::{
        Error,
        Result
    },

    util::Network

};
