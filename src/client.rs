/*
    Boundary to the chain client that fetches account state and broadcasts transactions.

    The library never talks to a node itself. Callers plug in their own client
    by implementing ChainClient; connection handling and retries are its job.
*/

use log::{debug, info};

use crate::error::{Error, Result};

/// The capabilities the library needs from a node or API client
pub trait ChainClient {
    type Error: std::error::Error;

    /// Current nonce (transaction count) of an account
    fn fetch_nonce(&self, address: &str) -> std::result::Result<u64, Self::Error>;

    /// Suggested fee rate in the chain's smallest unit
    fn suggest_fee(&self) -> std::result::Result<u64, Self::Error>;

    fn chain_id(&self) -> std::result::Result<u64, Self::Error>;

    /// Submits a serialized, signed transaction and returns its id
    fn broadcast_raw_transaction(&self, raw_tx: &[u8]) -> std::result::Result<String, Self::Error>;
}

fn client_error<E: std::error::Error>(err: E) -> Error {
    Error::Client(err.to_string())
}

/// Values a signer needs from the chain before building a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionContext {
    pub nonce: u64,
    pub fee_rate: u64,
    pub chain_id: u64
}

impl TransactionContext {
    pub fn fetch<C: ChainClient>(client: &C, sender: &str) -> Result<Self> {
        let context = Self {
            nonce: client.fetch_nonce(sender).map_err(client_error)?,
            fee_rate: client.suggest_fee().map_err(client_error)?,
            chain_id: client.chain_id().map_err(client_error)?
        };
        debug!("transaction context for {}: {:?}", sender, context);
        Ok(context)
    }
}

/// A transaction that has already been serialized and signed elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub raw: Vec<u8>,
    pub sender: String,
    pub recipient: String
}

impl SignedTransaction {
    pub fn new(raw: Vec<u8>, sender: &str, recipient: &str) -> Self {
        Self {
            raw,
            sender: sender.to_string(),
            recipient: recipient.to_string()
        }
    }

    /// Hands the raw bytes to the client. Returns the transaction id.
    pub fn broadcast<C: ChainClient>(&self, client: &C) -> Result<String> {
        if self.raw.is_empty() {
            return Err(Error::EncodingError("refusing to broadcast an empty transaction".to_string()))
        }

        let txid = client.broadcast_raw_transaction(&self.raw).map_err(client_error)?;
        info!("broadcast {} byte transaction {} -> {}: {}", self.raw.len(), self.sender, self.recipient, txid);
        Ok(txid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, fmt};

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "server is not connected")
        }
    }

    impl std::error::Error for Offline {}

    #[derive(Default)]
    struct MockClient {
        connected: bool,
        sent: RefCell<Vec<Vec<u8>>>
    }

    impl ChainClient for MockClient {
        type Error = Offline;

        fn fetch_nonce(&self, _address: &str) -> std::result::Result<u64, Offline> {
            if self.connected { Ok(7) } else { Err(Offline) }
        }

        fn suggest_fee(&self) -> std::result::Result<u64, Offline> {
            if self.connected { Ok(12) } else { Err(Offline) }
        }

        fn chain_id(&self) -> std::result::Result<u64, Offline> {
            if self.connected { Ok(1) } else { Err(Offline) }
        }

        fn broadcast_raw_transaction(&self, raw_tx: &[u8]) -> std::result::Result<String, Offline> {
            if !self.connected { return Err(Offline) }
            self.sent.borrow_mut().push(raw_tx.to_vec());
            Ok(crate::util::encode_hex(crate::hash::sha256d(raw_tx)))
        }
    }

    #[test]
    fn fetches_context() {
        let client = MockClient { connected: true, ..Default::default() };
        let context = TransactionContext::fetch(&client, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
        assert_eq!(context, TransactionContext { nonce: 7, fee_rate: 12, chain_id: 1 });
    }

    #[test]
    fn broadcasts_raw_bytes() {
        let client = MockClient { connected: true, ..Default::default() };
        let tx = SignedTransaction::new(vec![0x02, 0x00, 0x00, 0x00], "sender", "recipient");

        let txid = tx.broadcast(&client).unwrap();
        assert_eq!(txid.len(), 64);
        assert_eq!(client.sent.borrow().as_slice(), &[vec![0x02, 0x00, 0x00, 0x00]]);
    }

    #[test]
    fn client_errors_propagate() {
        let client = MockClient::default();
        assert_eq!(
            TransactionContext::fetch(&client, "sender"),
            Err(Error::Client("server is not connected".to_string()))
        );
        let tx = SignedTransaction::new(vec![0x01], "a", "b");
        assert!(matches!(tx.broadcast(&client), Err(Error::Client(_))));
    }

    #[test]
    fn rejects_empty_transactions() {
        let client = MockClient { connected: true, ..Default::default() };
        let tx = SignedTransaction::new(Vec::new(), "a", "b");
        assert!(matches!(tx.broadcast(&client), Err(Error::EncodingError(_))));
        assert!(client.sent.borrow().is_empty());
    }
}
