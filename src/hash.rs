/*
    Hash module includes the hash functions necessary to turn
    a public key or script into an address.
*/

use crate::{
    Ripemd160, Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    r.finalize().into()
}

/// Ripemd160( Sha256( input ) )
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/// Sha256( Sha256( input ) )
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/// First four bytes of the double sha256 of the payload
pub fn checksum<T>(payload: T) -> [u8; 4]
where T: AsRef<[u8]>
{
    let hash = sha256d(payload);
    [hash[0], hash[1], hash[2], hash[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{decode_hex, encode_hex};

    #[test]
    fn sha256_empty() {
        assert_eq!(
            encode_hex(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn ripemd160_empty() {
        assert_eq!(encode_hex(ripemd160(b"")), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    }

    #[test]
    fn hash160_of_generator_point() {
        // Compressed serialisation of G, the public key of private key 1
        let g = decode_hex("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();
        assert_eq!(encode_hex(hash160(&g)), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn checksum_is_prefix_of_sha256d() {
        let payload = b"hello";
        let full = sha256d(payload);
        assert_eq!(checksum(payload), full[0..4]);
        assert_eq!(
            encode_hex(full),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }
}
