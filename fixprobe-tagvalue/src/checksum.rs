/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FIX checksum calculation.
//!
//! The checksum (tag 10) is the byte sum of everything that precedes the
//! `10=` field, SOH terminators included, modulo 256. It is written as a
//! zero-padded 3-digit decimal.

/// Calculates the FIX checksum for the given data.
///
/// # Example
/// ```
/// use fixprobe_tagvalue::calculate_checksum;
///
/// let data = b"8=FIX.4.4\x019=5\x0135=0\x01";
/// assert_eq!(calculate_checksum(data), 163);
/// ```
#[inline]
#[must_use]
pub fn calculate_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Formats a checksum value as a 3-digit zero-padded string.
#[inline]
#[must_use]
pub fn format_checksum(checksum: u8) -> [u8; 3] {
    let d0 = b'0' + (checksum / 100);
    let d1 = b'0' + ((checksum / 10) % 10);
    let d2 = b'0' + (checksum % 10);
    [d0, d1, d2]
}

/// Parses a 3-digit checksum string, or `None` if it is malformed.
#[inline]
#[must_use]
pub fn parse_checksum(bytes: &[u8]) -> Option<u8> {
    let [d0, d1, d2] = bytes else {
        return None;
    };
    if !(d0.is_ascii_digit() && d1.is_ascii_digit() && d2.is_ascii_digit()) {
        return None;
    }
    let value = u16::from(d0 - b'0') * 100 + u16::from(d1 - b'0') * 10 + u16::from(d2 - b'0');
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_checksum_empty() {
        assert_eq!(calculate_checksum(b""), 0);
    }

    #[test]
    fn test_calculate_checksum_includes_soh() {
        let with_soh = calculate_checksum(b"35=0\x01");
        let without_soh = calculate_checksum(b"35=0");
        assert_eq!(with_soh, without_soh.wrapping_add(1));
    }

    #[test]
    fn test_calculate_checksum_wraps() {
        let data = vec![255u8; 1000];
        let expected = ((255u32 * 1000) % 256) as u8;
        assert_eq!(calculate_checksum(&data), expected);
    }

    #[test]
    fn test_format_checksum_is_three_digits() {
        assert_eq!(format_checksum(0), *b"000");
        assert_eq!(format_checksum(7), *b"007");
        assert_eq!(format_checksum(42), *b"042");
        assert_eq!(format_checksum(255), *b"255");
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum(b"042"), Some(42));
        assert_eq!(parse_checksum(b"255"), Some(255));
        assert_eq!(parse_checksum(b"256"), None);
        assert_eq!(parse_checksum(b"42"), None);
        assert_eq!(parse_checksum(b"4x2"), None);
    }
}
