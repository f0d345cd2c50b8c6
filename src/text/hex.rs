//! Hexadecimal formatting of UTF-16 code units.

/// Format a UTF-16 code unit as four uppercase hexadecimal digits.
///
/// # Example
///
/// ```rust
/// use bitfn::text::hex::to_hex;
///
/// assert_eq!(to_hex(0x00C6), "00C6");
/// assert_eq!(to_hex(0xBEEF), "BEEF");
/// ```
#[inline]
pub fn to_hex(unit: u16) -> String {
    format!("{:04X}", unit)
}

/// Format every UTF-16 code unit of `ch` with [`to_hex`].
///
/// Characters in the Basic Multilingual Plane yield one group, all others
/// yield their surrogate pair.
pub fn utf16_hex(ch: char) -> Vec<String> {
    let mut buf = [0u16; 2];
    ch.encode_utf16(&mut buf).iter().map(|&u| to_hex(u)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_pads_and_uppercases() {
        assert_eq!(to_hex('A' as u16), "0041");
        assert_eq!(to_hex('a' as u16), "0061");
        assert_eq!(to_hex('Æ' as u16), "00C6");
        assert_eq!(to_hex('æ' as u16), "00E6");
        assert_eq!(to_hex(0x0123), "0123");
        assert_eq!(to_hex(0xDEAD), "DEAD");
        assert_eq!(to_hex(0xBEEF), "BEEF");
        assert_eq!(to_hex(0), "0000");
    }

    #[test]
    fn test_utf16_hex_bmp() {
        assert_eq!(utf16_hex('é'), vec!["00E9"]);
    }

    #[test]
    fn test_utf16_hex_surrogate_pair() {
        assert_eq!(utf16_hex('😀'), vec!["D83D", "DE00"]);
    }
}
