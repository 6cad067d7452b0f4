//! SHA-256d and scrypt hashing
//!
//! Transaction ids and Merkle nodes use double SHA-256. Block hashes are
//! the scrypt(1024, 1, 1) digest of the 80-byte header.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::OnceLock;

/// 32-byte hash in internal byte order (least significant byte first)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used as the genesis previous hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse the display form (most significant byte first), with or
    /// without a leading `0x`
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        for (dst, src) in arr.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Ok(Hash(arr))
    }

    /// Display form: reversed hex
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interpret as a 256-bit unsigned integer for target comparisons
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash(second.into())
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}

/// Block hash parameters: N = 2^10, r = 1, p = 1, 32-byte output
fn scrypt_params() -> &'static scrypt::Params {
    static PARAMS: OnceLock<scrypt::Params> = OnceLock::new();
    PARAMS.get_or_init(|| scrypt::Params::new(10, 1, 1, 32).expect("constant scrypt parameters"))
}

/// scrypt with N=1024, r=1, p=1 and the input doubling as salt
pub fn scrypt_hash(data: &[u8]) -> Hash {
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, scrypt_params(), &mut out).expect("32-byte output is a valid length");
    Hash(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_known_vector() {
        // sha256d("") from the Bitcoin test suite, display order
        let hash = sha256d(b"");
        assert_eq!(
            hash.to_hex(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn test_scrypt_known_vector() {
        // scrypt(password = salt = "Reflect", N=1024, r=1, p=1, 32 bytes)
        let expected = "e78ccea3b9b7f1312293a77e32e4f3662fa00a073d62c0fea5dd988e3a3d9c44";
        assert_eq!(hex::encode(scrypt_hash(b"Reflect").0), expected);
        // Second call goes through the cached parameters
        assert_eq!(hex::encode(scrypt_hash(b"Reflect").0), expected);
    }

    #[test]
    fn test_hash_different_inputs() {
        assert_ne!(sha256d(b"hello"), sha256d(b"world"));
        assert_ne!(scrypt_hash(b"hello"), scrypt_hash(b"world"));
    }

    #[test]
    fn test_zero_hash() {
        let zero = Hash::zero();
        assert_eq!(zero.0, [0u8; 32]);
        assert!(zero.is_zero());
        assert_eq!(zero.to_u256(), U256::zero());
    }

    #[test]
    fn test_hex_is_reversed() {
        let hash = Hash::from_hex(
            "0x00000000000000000000000000000000000000000000000000000000000000ff",
        )
        .unwrap();
        assert_eq!(hash.0[0], 0xff);
        assert_eq!(hash.to_u256(), U256::from(0xffu64));
        assert_eq!(
            hash.to_hex(),
            "00000000000000000000000000000000000000000000000000000000000000ff"
        );
    }

    #[test]
    fn test_from_hex_rejects_short_input() {
        assert!(Hash::from_hex("abcd").is_err());
        assert!(Hash::from_hex("zz").is_err());
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let left = sha256d(b"left");
        let right = sha256d(b"right");
        assert_eq!(hash_pair(&left, &right), hash_pair(&left, &right));
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }
}
