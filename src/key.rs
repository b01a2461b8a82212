use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    entropy,
    error::{Error, Result},
    encoding::{
        bs58check,
        Base58Kind,
        ToVersionPrefix,
        VersionPrefix
    },
    hash,
    util::{encode_hex, Network}
};
use log::warn;
use std::fmt;

/// Length of a compressed public key (parity byte + x coordinate)
pub const COMPRESSED_PUBKEY_LEN: usize = 33;
/// Length of an uncompressed public key (0x04 + x + y)
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Flag byte appended to a WIF payload when the public key is compressed
const WIF_COMPRESSION_FLAG: u8 = 0x01;

/**
    A secp256k1 secret scalar in the range [1, n-1].

    The bytes are only accepted after secp256k1 has validated the range, so a
    PrivKey in hand is always usable.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct PrivKey([u8; 32]);

impl PrivKey {

    /**
        Draws 32 bytes from the OS entropy source until they form a valid scalar.

        Zero and values at or above the curve order are thrown away and redrawn.
    */
    pub fn new_rand() -> Result<Self> {
        loop {
            let bytes = entropy::random_bytes::<32>()?;
            match Self::from_slice(&bytes) {
                Ok(k) => return Ok(k),
                Err(_) => warn!("generated scalar outside the curve order, resampling")
            }
        }
    }

    /**
        Use a predefined byte array as a secret key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        if byte_array.len() != 32 {
            return Err(Error::InvalidKeyFormat(format!("private key must be 32 bytes, got {}", byte_array.len())))
        }
        SecretKey::from_slice(byte_array)?;

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(byte_array);
        Ok(Self(bytes))
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&crate::util::decode_hex(hex)?)
    }

    /// Returns the raw scalar
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub(crate) fn secret_key(&self) -> Result<SecretKey> {
        Ok(SecretKey::from_slice(&self.0)?)
    }

    /**
        Export the private key in wallet import format (Base58Check encoded with prefix).
        * Use the compressed parameter to indicate if the WIF should include the compression byte.
    */
    pub fn export_as_wif(&self, compressed: bool, network: Network) -> String {
        let mut key: Vec<u8> = self.0.to_vec();
        if compressed {
            key.push(WIF_COMPRESSION_FLAG);
        }

        bs58check::check_encode(Base58Kind::PrivateKey.version_prefix(network), &key)
    }

    /**
        Decodes a WIF string.

        Returns the key, whether the public key should be compressed and the network
        the WIF was encoded for.
    */
    pub fn from_wif(wif: &str) -> Result<(Self, bool, Network)> {
        let payload = bs58check::check_decode(wif)?;

        let prefix = VersionPrefix::from_byte(payload[0])?;
        if prefix.is_address() {
            return Err(Error::EncodingError(format!("{:?} is not a private key prefix", prefix)))
        }

        let compressed = match payload.len() {
            33 => false,
            34 if payload[33] == WIF_COMPRESSION_FLAG => true,
            x => return Err(Error::InvalidKeyFormat(format!("bad WIF payload length {}", x)))
        };

        Ok((Self::from_slice(&payload[1..33])?, compressed, prefix.network()))
    }
}

/**
    A secp256k1 public key together with the wire form it is serialised in.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubKey {
    key: PublicKey,
    compressed: bool
}

impl PubKey {

    /**
        Finds the public key of a secret key.

        Is the result of static point G on the secp256k1 curve multiplied k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey, compressed: bool) -> Result<Self> {
        let secp = Secp256k1::signing_only();
        Ok(Self {
            key: PublicKey::from_secret_key(&secp, &k.secret_key()?),
            compressed
        })
    }

    /**
        Use a predefined byte array as a public key.

        33 bytes must start with 0x02 or 0x03, 65 bytes must start with 0x04
        and the point must lie on the curve.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        let compressed = match (byte_array.len(), byte_array.first()) {
            (COMPRESSED_PUBKEY_LEN, Some(0x02)) | (COMPRESSED_PUBKEY_LEN, Some(0x03)) => true,
            (UNCOMPRESSED_PUBKEY_LEN, Some(0x04)) => false,
            (COMPRESSED_PUBKEY_LEN, Some(x)) | (UNCOMPRESSED_PUBKEY_LEN, Some(x)) => {
                return Err(Error::InvalidKeyFormat(format!("bad public key prefix 0x{:02x}", x)))
            }
            (len, _) => {
                return Err(Error::InvalidKeyFormat(format!("public key must be 33 or 65 bytes, got {}", len)))
            }
        };

        Ok(Self {
            key: PublicKey::from_slice(byte_array)?,
            compressed
        })
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&crate::util::decode_hex(hex)?)
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The same point in the other wire form
    pub fn with_compression(&self, compressed: bool) -> Self {
        Self { key: self.key, compressed }
    }

    /**
        Returns the key in the wire form it was created with.
    */
    pub fn as_bytes(&self) -> Vec<u8> {
        if self.compressed {
            self.compressed_bytes().to_vec()
        } else {
            self.decompressed_bytes().to_vec()
        }
    }

    pub fn compressed_bytes(&self) -> [u8; 33] {
        self.key.serialize()
    }

    /**
        Extracts the uncompressed public key (0x04 | x | y).
    */
    pub fn decompressed_bytes(&self) -> [u8; 65] {
        self.key.serialize_uncompressed()
    }

    /// Hash160 of the wire form
    pub fn hash160(&self) -> [u8; 20] {
        hash::hash160(self.as_bytes())
    }

    pub fn as_hex(&self) -> String {
        encode_hex(self.as_bytes())
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PrivKey(..)")
    }
}

impl fmt::Display for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_hex(self.0))
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::constants::CURVE_ORDER;

    const GENERATOR_HEX: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const GENERATOR_UNCOMPRESSED_HEX: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn key_one() -> PrivKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        PrivKey::from_slice(&bytes).unwrap()
    }

    #[test]
    fn generator_point_from_key_one() {
        let k = key_one();
        assert_eq!(PubKey::from_priv_key(&k, true).unwrap().as_hex(), GENERATOR_HEX);
        assert_eq!(PubKey::from_priv_key(&k, false).unwrap().as_hex(), GENERATOR_UNCOMPRESSED_HEX);
    }

    #[test]
    fn random_keys_have_valid_forms() {
        for _ in 0..10 {
            let k = PrivKey::new_rand().unwrap();
            let compressed = PubKey::from_priv_key(&k, true).unwrap().as_bytes();
            let uncompressed = PubKey::from_priv_key(&k, false).unwrap().as_bytes();

            assert_eq!(compressed.len(), 33);
            assert_eq!(uncompressed.len(), 65);
            assert_eq!(uncompressed[0], 0x04);
            assert_eq!(compressed[1..], uncompressed[1..33]);

            // Parity byte follows the y coordinate
            let y_is_odd = uncompressed[64] & 1 == 1;
            assert_eq!(compressed[0], if y_is_odd { 0x03 } else { 0x02 });
        }
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        assert!(matches!(PrivKey::from_slice(&[0u8; 32]), Err(Error::InvalidKeyFormat(_))));
        assert!(matches!(PrivKey::from_slice(&CURVE_ORDER), Err(Error::InvalidKeyFormat(_))));
        assert!(matches!(PrivKey::from_slice(&[0xff; 32]), Err(Error::InvalidKeyFormat(_))));
        assert!(matches!(PrivKey::from_slice(&[1u8; 31]), Err(Error::InvalidKeyFormat(_))));

        let mut below_order = CURVE_ORDER;
        below_order[31] -= 1;
        assert!(PrivKey::from_slice(&below_order).is_ok());
    }

    #[test]
    fn rejects_malformed_pubkeys() {
        let mut bytes = crate::util::decode_hex(GENERATOR_HEX).unwrap();
        bytes.push(0x00);
        assert!(matches!(PubKey::from_slice(&bytes), Err(Error::InvalidKeyFormat(_))));

        let mut bad_prefix = crate::util::decode_hex(GENERATOR_HEX).unwrap();
        bad_prefix[0] = 0x04;
        assert!(matches!(PubKey::from_slice(&bad_prefix), Err(Error::InvalidKeyFormat(_))));

        let mut bad_uncompressed = crate::util::decode_hex(GENERATOR_UNCOMPRESSED_HEX).unwrap();
        bad_uncompressed[0] = 0x02;
        assert!(matches!(PubKey::from_slice(&bad_uncompressed), Err(Error::InvalidKeyFormat(_))));

        assert!(PubKey::from_slice(&[]).is_err());
    }

    #[test]
    fn pubkey_keeps_wire_form() {
        let pk = PubKey::from_hex(GENERATOR_UNCOMPRESSED_HEX).unwrap();
        assert!(!pk.is_compressed());
        assert_eq!(pk.as_bytes().len(), 65);
        assert_eq!(pk.with_compression(true).as_hex(), GENERATOR_HEX);
    }

    #[test]
    fn wif_of_key_one() {
        let k = key_one();
        assert_eq!(k.export_as_wif(true, Network::Bitcoin), "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(k.export_as_wif(false, Network::Bitcoin), "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf");
        assert!(k.export_as_wif(true, Network::Testnet).starts_with('c'));
        assert!(k.export_as_wif(false, Network::Testnet).starts_with('9'));
    }

    #[test]
    fn wif_layout() {
        let k = PrivKey::new_rand().unwrap();
        let raw = bs58check::decode(&k.export_as_wif(true, Network::Testnet)).unwrap();
        assert_eq!(raw.len(), 38);
        assert_eq!(raw[0], 0xEF);
        assert_eq!(raw[1..33], k.as_bytes()[..]);
        assert_eq!(raw[33], 0x01);
        assert_eq!(raw[34..], hash::checksum(&raw[..34])[..]);
    }

    #[test]
    fn wif_decode() {
        let k = PrivKey::new_rand().unwrap();
        for network in [Network::Bitcoin, Network::Testnet].iter() {
            for compressed in [true, false].iter() {
                let (decoded, c, n) = PrivKey::from_wif(&k.export_as_wif(*compressed, *network)).unwrap();
                assert_eq!(decoded, k);
                assert_eq!(c, *compressed);
                assert_eq!(n, *network);
            }
        }
    }

    #[test]
    fn wif_decode_rejects_addresses() {
        assert!(matches!(
            PrivKey::from_wif("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
            Err(Error::EncodingError(_))
        ));
    }
}
