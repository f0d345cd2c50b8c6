//! Unescaping of string-literal escape sequences.
//!
//! [`unescape`] decodes backslash escapes (`a\tb`). [`unescape_verbatim`]
//! decodes verbatim literal bodies, where the only escape is a doubled quote
//! (`say ""hi""`).

use crate::error::{Error, Result};

/// Decode the escape sequences of a regular string literal.
///
/// Supported sequences:
///
/// | Sequence | Result |
/// |---|---|
/// | `\'` `\"` `\\` | the quoted character |
/// | `\0` `\a` `\b` `\f` `\n` `\r` `\t` `\v` | the control character |
/// | `\x` + 1 to 4 hex digits | the code point, digits read greedily |
/// | `\u` + 4 hex digits | the code point |
/// | `\U` + 8 hex digits | the code point |
///
/// # Errors
///
/// Returns [`Error::InvalidEscape`] at the first backslash that does not start
/// one of the sequences above, or whose code point is not a Unicode scalar
/// value (lone surrogates included).
///
/// # Example
///
/// ```rust
/// use bitfn::text::unescape;
///
/// assert_eq!(unescape(r"Line:\t1\r\n")?, "Line:\t1\r\n");
/// assert_eq!(unescape(r"Mise\u0301rables")?, "Mise\u{301}rables");
/// assert!(unescape(r"\d").is_err());
/// # Ok::<(), bitfn::Error>(())
/// ```
pub fn unescape(text: &str) -> Result<String> {
    if !text.contains('\\') {
        return Ok(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch != '\\' {
            out.push(ch);
            i += 1;
            continue;
        }

        let invalid = Error::InvalidEscape { index: i };
        let marker = *chars.get(i + 1).ok_or_else(|| invalid.clone())?;
        let (decoded, consumed) = match marker {
            '\'' => ('\'', 2),
            '"' => ('"', 2),
            '\\' => ('\\', 2),
            '0' => ('\0', 2),
            'a' => ('\u{07}', 2),
            'b' => ('\u{08}', 2),
            'f' => ('\u{0C}', 2),
            'n' => ('\n', 2),
            'r' => ('\r', 2),
            't' => ('\t', 2),
            'v' => ('\u{0B}', 2),
            'x' => {
                let digits = hex_run(&chars[i + 2..], 4);
                if digits == 0 {
                    return Err(invalid);
                }
                (code_point(&chars[i + 2..i + 2 + digits]).ok_or(invalid)?, 2 + digits)
            }
            'u' => (fixed_hex(&chars[i + 2..], 4).ok_or(invalid)?, 6),
            'U' => (fixed_hex(&chars[i + 2..], 8).ok_or(invalid)?, 10),
            _ => return Err(invalid),
        };
        out.push(decoded);
        i += consumed;
    }
    Ok(out)
}

/// Decode a verbatim string literal body, where `""` stands for `"`.
///
/// # Errors
///
/// Returns [`Error::InvalidEscape`] at the first quotation mark that is not
/// immediately followed by another.
///
/// # Example
///
/// ```rust
/// use bitfn::text::unescape_verbatim;
///
/// assert_eq!(unescape_verbatim(r#"say ""hi"""#)?, r#"say "hi""#);
/// assert!(unescape_verbatim(r#"say "hi"#).is_err());
/// # Ok::<(), bitfn::Error>(())
/// ```
pub fn unescape_verbatim(text: &str) -> Result<String> {
    if !text.contains('"') {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().enumerate();
    while let Some((index, ch)) = chars.next() {
        if ch == '"' {
            match chars.next() {
                Some((_, '"')) => {}
                _ => return Err(Error::InvalidEscape { index }),
            }
        }
        out.push(ch);
    }
    Ok(out)
}

/// Length of the run of hex digits at the start of `chars`, capped at `max`.
fn hex_run(chars: &[char], max: usize) -> usize {
    chars
        .iter()
        .take(max)
        .take_while(|c| c.is_ascii_hexdigit())
        .count()
}

/// Exactly `len` hex digits at the start of `chars`, decoded.
fn fixed_hex(chars: &[char], len: usize) -> Option<char> {
    if hex_run(chars, len) != len {
        return None;
    }
    code_point(&chars[..len])
}

fn code_point(digits: &[char]) -> Option<char> {
    let value = digits
        .iter()
        .try_fold(0u32, |acc, c| Some(acc * 16 + c.to_digit(16)?))?;
    char::from_u32(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_simple_sequences() {
        assert_eq!(
            unescape(r#"\'\"\\\0\a\b\f\n\r\t\v"#).unwrap(),
            "'\"\\\0\u{07}\u{08}\u{0C}\n\r\t\u{0B}"
        );
        assert_eq!(
            unescape("Line:\\t1\\r\\nLine:\t2").unwrap(),
            "Line:\t1\r\nLine:\t2"
        );
    }

    #[test]
    fn test_unescape_code_points() {
        assert_eq!(
            unescape(r"Line:\u00091\xaLine:\u00092").unwrap(),
            "Line:\t1\nLine:\t2"
        );
        assert_eq!(
            unescape(r"Les Mise\U00000301rables").unwrap(),
            "Les Mise\u{0301}rables"
        );
        assert_eq!(unescape(r"Les Mise\x301rables").unwrap(), "Les Mise\u{0301}rables");
        assert_eq!(unescape(r"Les Mise\x0301rables").unwrap(), "Les Mise\u{0301}rables");
    }

    #[test]
    fn test_unescape_hex_reads_at_most_four_digits() {
        assert_eq!(unescape(r"\x00411").unwrap(), "A1");
    }

    #[test]
    fn test_unescape_passthrough() {
        assert_eq!(unescape("Line: 1; Line: 2").unwrap(), "Line: 1; Line: 2");
        assert_eq!(unescape("").unwrap(), "");
    }

    #[test]
    fn test_unescape_invalid() {
        for input in [r"\", r"\d", r"\x", r"\u123", r"\u123X", r"\U1234567", r"\U1234567X"] {
            assert_eq!(
                unescape(input),
                Err(Error::InvalidEscape { index: 0 }),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_unescape_invalid_reports_position() {
        assert_eq!(unescape(r"ab\q"), Err(Error::InvalidEscape { index: 2 }));
    }

    #[test]
    fn test_unescape_rejects_surrogates_and_out_of_range() {
        assert!(unescape(r"\uD800").is_err());
        assert!(unescape(r"\U00110000").is_err());
        assert_eq!(unescape(r"\U0001F600").unwrap(), "😀");
    }

    #[test]
    fn test_unescape_verbatim() {
        assert_eq!(
            unescape_verbatim("Line:\t\"\"1\"\".").unwrap(),
            "Line:\t\"1\"."
        );
        assert_eq!(unescape_verbatim("Line: 1; Line: 2").unwrap(), "Line: 1; Line: 2");
        assert_eq!(unescape_verbatim("").unwrap(), "");
    }

    #[test]
    fn test_unescape_verbatim_invalid() {
        assert_eq!(
            unescape_verbatim("One Double-Quote: \""),
            Err(Error::InvalidEscape { index: 18 })
        );
        assert_eq!(
            unescape_verbatim("Three Double-Quote: '\"\"\"'"),
            Err(Error::InvalidEscape { index: 23 })
        );
    }
}
