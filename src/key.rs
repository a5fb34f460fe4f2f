//! Order-preserving transforms from typed values onto a 64-bit [`Key`].
//!
//! Every function here maps a value to a `u64` such that comparing the keys as
//! unsigned integers gives the intended order on the values. Byte and string
//! keys are *prefix* keys: two values sharing their first 8 bytes map to the
//! same key and must be told apart by [`Sequence::less`](crate::core::Sequence::less).

/// A 64-bit unsigned sort key. Larger keys sort later.
pub type Key = u64;

/// Number of bytes packed into a prefix key.
pub const PREFIX_SIZE: usize = 8;

const SIGN_BIT: Key = 1 << 63;

/// Key for a signed 64-bit integer: flips the sign bit so two's-complement
/// order becomes unsigned order.
#[inline(always)]
pub fn int64_key(value: i64) -> Key {
    (value as Key) ^ SIGN_BIT
}

/// Key for a signed 32-bit integer. The value is sign-extended first.
#[inline(always)]
pub fn int32_key(value: i32) -> Key {
    int64_key(value as i64)
}

/// Key for an unsigned integer of any width up to 64 bits.
#[inline(always)]
pub fn uint_key<U: Into<u64>>(value: U) -> Key {
    value.into()
}

#[inline(always)]
fn float_bits_key(bits: Key) -> Key {
    // Negative: flip every bit. Positive: set the sign bit.
    let mask = !((bits >> 63).wrapping_sub(1)) | SIGN_BIT;
    bits ^ mask
}

/// Key for an `f64`.
///
/// Negative values sort before positive ones, `-0.0` directly before `0.0`,
/// and every NaN (either sign) after the largest finite value and infinity.
#[inline(always)]
pub fn float64_key(value: f64) -> Key {
    let mut bits = value.to_bits();
    if value.is_nan() {
        // A negative NaN would otherwise land below negative infinity.
        bits &= !SIGN_BIT;
    }
    float_bits_key(bits)
}

/// Key for an `f32`. The bit pattern lives in the upper half of the key.
#[inline(always)]
pub fn float32_key(value: f32) -> Key {
    let mut bits = value.to_bits();
    if value.is_nan() {
        bits &= !(1 << 31);
    }
    float_bits_key((bits as Key) << 32)
}

/// Compares two `f64`s, treating NaN as greater than every number.
#[inline]
pub fn float64_less(a: f64, b: f64) -> bool {
    float64_key(a) < float64_key(b)
}

/// Compares two `f32`s, treating NaN as greater than every number.
#[inline]
pub fn float32_less(a: f32, b: f32) -> bool {
    float32_key(a) < float32_key(b)
}

/// Packs up to the first 8 bytes of `bytes` into a key, most significant byte
/// first, zero-padding short inputs.
#[inline(always)]
pub fn prefix_key(bytes: &[u8]) -> Key {
    let n = bytes.len().min(PREFIX_SIZE);
    let mut buf = [0u8; PREFIX_SIZE];
    buf[..n].copy_from_slice(&bytes[..n]);
    Key::from_be_bytes(buf)
}

/// Prefix key of a string's UTF-8 bytes.
#[inline(always)]
pub fn str_key(s: &str) -> Key {
    prefix_key(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_keys_preserve_order() {
        let values = [i64::MIN, -5, -1, 0, 1, 5, i64::MAX];
        for pair in values.windows(2) {
            assert!(int64_key(pair[0]) < int64_key(pair[1]));
        }
        assert!(int32_key(-1) < int32_key(0));
        assert_eq!(int32_key(-3), int64_key(-3));
    }

    #[test]
    fn test_float64_key_order() {
        let values = [
            f64::NEG_INFINITY,
            -1.0e300,
            -1.0,
            -f64::MIN_POSITIVE,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
        ];
        for pair in values.windows(2) {
            assert!(
                float64_key(pair[0]) < float64_key(pair[1]),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_nan_sorts_last_for_both_signs() {
        let nan = f64::NAN;
        let neg_nan = -f64::NAN;
        assert!(neg_nan.is_sign_negative());
        assert!(float64_key(nan) > float64_key(f64::INFINITY));
        assert!(float64_key(neg_nan) > float64_key(f64::INFINITY));
        assert!(float64_key(neg_nan) > float64_key(f64::MAX));
        assert!(float64_less(f64::MAX, nan));
        assert!(!float64_less(nan, 1.0));

        assert!(float32_key(f32::NAN) > float32_key(f32::INFINITY));
        assert!(float32_key(-f32::NAN) > float32_key(f32::INFINITY));
        assert!(float32_less(-1.0, 0.5));
    }

    #[test]
    fn test_prefix_key_packing() {
        assert_eq!(prefix_key(b""), 0);
        assert_eq!(prefix_key(b"a"), (b'a' as Key) << 56);
        assert_eq!(prefix_key(b"ab"), ((b'a' as Key) << 56) | ((b'b' as Key) << 48));
        assert_eq!(
            prefix_key(b"abcdefgh"),
            Key::from_be_bytes(*b"abcdefgh")
        );
        // Bytes past the prefix are ignored.
        assert_eq!(prefix_key(b"abcdefghXYZ"), prefix_key(b"abcdefgh"));
        assert!(str_key("apple") < str_key("banana"));
        assert_eq!(str_key("band"), prefix_key(b"band"));
    }
}
