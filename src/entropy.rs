use rand::RngCore;

use crate::{
    OsRng,
    error::Result
};

/**
    Fills a buffer of the given size with bytes from the OS entropy source.

    A fresh OsRng is opened on every call so no generator state is shared between threads.
*/
pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut osrng = OsRng::new()?;
    let mut bytes = [0u8; N];
    osrng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bytes_differ() {
        let a = random_bytes::<32>().unwrap();
        let b = random_bytes::<32>().unwrap();
        assert_ne!(a, b);
    }
}
