/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! FIX checksum arithmetic.
//!
//! The trailer CheckSum (tag 10) is the sum of every byte of the message up
//! to and including the delimiter that precedes the `10=` field, modulo 256,
//! written as a 3-digit zero-padded decimal.

/// Computes the checksum over the given message prefix.
///
/// # Arguments
/// * `data` - All message bytes up to, but excluding, the `10=` field
#[inline]
#[must_use]
pub fn body_checksum(data: &[u8]) -> u8 {
    let sum: u32 = data.iter().map(|&b| u32::from(b)).sum();
    (sum % 256) as u8
}

/// Renders a checksum as its 3-digit zero-padded wire form.
#[inline]
#[must_use]
pub fn format_checksum(value: u8) -> [u8; 3] {
    [
        b'0' + value / 100,
        b'0' + (value / 10) % 10,
        b'0' + value % 10,
    ]
}

/// Parses the declared trailer value.
///
/// The wire form must be exactly three ASCII digits; anything else is a
/// structural fault.
///
/// # Returns
/// `Some(value)` for a well-formed 3-digit field, `None` otherwise.
#[inline]
#[must_use]
pub fn parse_declared_checksum(bytes: &[u8]) -> Option<u8> {
    let &[a, b, c] = bytes else {
        return None;
    };
    let (a, b, c) = (
        a.wrapping_sub(b'0'),
        b.wrapping_sub(b'0'),
        c.wrapping_sub(b'0'),
    );
    if a > 9 || b > 9 || c > 9 {
        return None;
    }
    // 255 is the largest representable sum, so no overflow check needed.
    let value = u16::from(a) * 100 + u16::from(b) * 10 + u16::from(c);
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_checksum() {
        assert_eq!(body_checksum(b""), 0);
        assert_eq!(body_checksum(b"ABC"), ((65u32 + 66 + 67) % 256) as u8);

        let soh_heavy = b"8=FIX.4.2\x019=5\x0135=0\x01";
        assert_eq!(body_checksum(soh_heavy), 161);
    }

    #[test]
    fn test_body_checksum_wraps() {
        let data = vec![0xFFu8; 513];
        assert_eq!(body_checksum(&data), ((0xFFu32 * 513) % 256) as u8);
    }

    #[test]
    fn test_format_checksum_zero_padded() {
        assert_eq!(&format_checksum(0), b"000");
        assert_eq!(&format_checksum(7), b"007");
        assert_eq!(&format_checksum(93), b"093");
        assert_eq!(&format_checksum(255), b"255");
    }

    #[test]
    fn test_parse_declared() {
        assert_eq!(parse_declared_checksum(b"161"), Some(161));
        assert_eq!(parse_declared_checksum(b"000"), Some(0));
        assert_eq!(parse_declared_checksum(b"255"), Some(255));
    }

    #[test]
    fn test_parse_declared_rejects_malformed() {
        assert_eq!(parse_declared_checksum(b""), None);
        assert_eq!(parse_declared_checksum(b"42"), None);
        assert_eq!(parse_declared_checksum(b"0042"), None);
        assert_eq!(parse_declared_checksum(b"1a3"), None);
        assert_eq!(parse_declared_checksum(b"999"), None);
    }

    #[test]
    fn test_format_parse_agree() {
        for value in 0..=255u8 {
            assert_eq!(parse_declared_checksum(&format_checksum(value)), Some(value));
        }
    }
}
