//! Binary-coded-decimal and single-bit helpers.
//!
//! Every calendar and alarm register of the PCF8523 stores its value as two
//! BCD digits, and every flag is a single bit inside a shared register byte.
//! All such conversions in the driver go through this module.

/// Errors produced by the BCD codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BcdError {
    /// The value does not fit in two decimal digits (0-99).
    InvalidFieldValue(u8),
    /// The byte has a nibble greater than 9 and is not valid BCD.
    InvalidEncoding(u8),
}

/// Packs a value in `0..=99` into a BCD byte, tens digit in the high nibble.
///
/// # Errors
///
/// Returns [`BcdError::InvalidFieldValue`] if `value` is greater than 99.
pub fn encode_bcd(value: u8) -> Result<u8, BcdError> {
    if value > 99 {
        return Err(BcdError::InvalidFieldValue(value));
    }
    Ok(((value / 10) << 4) | (value % 10))
}

/// Unpacks a BCD byte into its integer value.
///
/// # Errors
///
/// Returns [`BcdError::InvalidEncoding`] if either nibble is greater than 9.
pub fn decode_bcd(byte: u8) -> Result<u8, BcdError> {
    let high = byte >> 4;
    let low = byte & 0x0F;
    if high > 9 || low > 9 {
        return Err(BcdError::InvalidEncoding(byte));
    }
    Ok(10 * high + low)
}

/// Returns the bit at `pos` (0 = least significant).
pub const fn get_bit(byte: u8, pos: u8) -> bool {
    byte & (1 << pos) != 0
}

/// Returns `byte` with the bit at `pos` set to `value`, every other bit unchanged.
pub const fn set_bit(byte: u8, pos: u8, value: bool) -> u8 {
    if value {
        byte | (1 << pos)
    } else {
        byte & !(1 << pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_inverts_encode_for_all_two_digit_values() {
        for v in 0..=99u8 {
            let encoded = encode_bcd(v).unwrap();
            assert_eq!(decode_bcd(encoded).unwrap(), v, "value {}", v);
        }
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode_bcd(0).unwrap(), 0x00);
        assert_eq!(encode_bcd(9).unwrap(), 0x09);
        assert_eq!(encode_bcd(10).unwrap(), 0x10);
        assert_eq!(encode_bcd(59).unwrap(), 0x59);
        assert_eq!(encode_bcd(99).unwrap(), 0x99);
    }

    #[test]
    fn test_encode_rejects_values_above_99() {
        for v in 100..=255u8 {
            assert_eq!(encode_bcd(v), Err(BcdError::InvalidFieldValue(v)));
        }
    }

    #[test]
    fn test_decode_rejects_invalid_nibbles() {
        assert_eq!(decode_bcd(0x0A), Err(BcdError::InvalidEncoding(0x0A)));
        assert_eq!(decode_bcd(0xA0), Err(BcdError::InvalidEncoding(0xA0)));
        assert_eq!(decode_bcd(0xFF), Err(BcdError::InvalidEncoding(0xFF)));
        assert_eq!(decode_bcd(0x6A), Err(BcdError::InvalidEncoding(0x6A)));
    }

    #[test]
    fn test_bit_helpers_preserve_other_bits() {
        assert!(get_bit(0b1000_0000, 7));
        assert!(!get_bit(0b0111_1111, 7));
        assert_eq!(set_bit(0b0101_0101, 7, true), 0b1101_0101);
        assert_eq!(set_bit(0b1101_0101, 7, false), 0b0101_0101);
        assert_eq!(set_bit(0b0101_0101, 0, false), 0b0101_0100);
        // Setting an already-set bit is a no-op
        assert_eq!(set_bit(0b0000_0100, 2, true), 0b0000_0100);
    }
}
