//! Compact difficulty encoding
//!
//! A compact target packs a 256-bit threshold into 32 bits: the top byte
//! is a base-256 exponent (byte length), the low 23 bits a mantissa, and
//! bit 23 a sign flag that is never valid for targets.

use primitive_types::U256;
use crate::crypto::Hash;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Result of unpacking a compact target, flags included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTarget {
    pub target: U256,
    pub negative: bool,
    pub overflow: bool,
}

/// Unpack compact bits into a 256-bit value, reporting the sign and overflow flags
pub fn decode_compact(compact: u32) -> DecodedTarget {
    let size = compact >> 24;
    let mut mantissa = compact & MANTISSA_MASK;

    let negative = mantissa != 0 && (compact & SIGN_BIT) != 0;
    let overflow = mantissa != 0
        && (size > 34 || (mantissa > 0xff && size > 33) || (mantissa > 0xffff && size > 32));

    let target = if overflow {
        U256::zero()
    } else if size <= 3 {
        mantissa >>= 8 * (3 - size);
        U256::from(mantissa)
    } else {
        U256::from(mantissa) << (8 * (size - 3) as usize)
    };

    DecodedTarget {
        target,
        negative,
        overflow,
    }
}

/// Usable target for compact bits: `None` when negative, overflowing or zero
pub fn target_from_compact(compact: u32) -> Option<U256> {
    let decoded = decode_compact(compact);
    if decoded.negative || decoded.overflow || decoded.target.is_zero() {
        None
    } else {
        Some(decoded.target)
    }
}

/// Pack a 256-bit target, truncating to three significant bytes
pub fn compact_from_target(target: &U256) -> u32 {
    let mut size = (target.bits() as u32 + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (*target >> (8 * (size - 3) as usize)).low_u64() as u32
    };

    // Keep the sign bit clear by moving into the next exponent
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | (size << 24)
}

/// Whether a limit survives the compact encoding as a usable, non-zero
/// target that does not exceed the limit itself
pub fn is_compact_representable(limit: &U256) -> bool {
    target_from_compact(compact_from_target(limit)).map_or(false, |t| t <= *limit)
}

/// Check a block hash against its compact target and the network limit
pub fn check_proof_of_work(hash: &Hash, bits: u32, pow_limit: &U256) -> bool {
    match target_from_compact(bits) {
        Some(target) if target <= *pow_limit => hash.to_u256() <= target,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(hex: &str) -> U256 {
        U256::from_str_radix(hex, 16).unwrap()
    }

    #[test]
    fn test_decode_genesis_bits() {
        let target = target_from_compact(0x1e0ffff0).unwrap();
        assert_eq!(target, U256::from(0x0ffff0u64) << 216usize);
        assert!(target <= limit("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"));
    }

    #[test]
    fn test_small_exponents_shift_right() {
        assert_eq!(decode_compact(0x01123456).target, U256::from(0x12u64));
        assert_eq!(decode_compact(0x02123456).target, U256::from(0x1234u64));
        assert_eq!(decode_compact(0x03123456).target, U256::from(0x123456u64));
        assert_eq!(decode_compact(0x04123456).target, U256::from(0x12345600u64));
    }

    #[test]
    fn test_negative_and_overflow_flags() {
        let negative = decode_compact(0x04923456);
        assert!(negative.negative);
        assert!(target_from_compact(0x04923456).is_none());

        let overflow = decode_compact(0xff123456);
        assert!(overflow.overflow);
        assert!(target_from_compact(0xff123456).is_none());

        assert!(target_from_compact(0).is_none());
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(compact_from_target(&(U256::from(0x0ffff0u64) << 216usize)), 0x1e0ffff0);
        assert_eq!(compact_from_target(&U256::from(0x80u64)), 0x02008000);
        assert_eq!(compact_from_target(&U256::zero()), 0);
        assert_eq!(
            compact_from_target(&limit("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")),
            0x1e0fffff
        );
    }

    #[test]
    fn test_limits_are_representable() {
        assert!(is_compact_representable(&limit(
            "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        )));
        assert!(is_compact_representable(&limit(
            "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        )));
        assert!(!is_compact_representable(&U256::zero()));
    }

    #[test]
    fn test_check_proof_of_work() {
        let pow_limit = limit("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        let easy = Hash::from_hex(
            "00000100000000000000000000000000000000000000000000000000000000ff",
        )
        .unwrap();
        let hard = Hash::from_hex(
            "0000ff0000000000000000000000000000000000000000000000000000000000",
        )
        .unwrap();
        assert!(check_proof_of_work(&easy, 0x1e0ffff0, &pow_limit));
        assert!(!check_proof_of_work(&hard, 0x1e0ffff0, &pow_limit));
        // bits easier than the network limit are rejected outright
        assert!(!check_proof_of_work(&easy, 0x1f0fffff, &pow_limit));
    }
}
