//! Integration tests for the non-slug text helpers

use bitfn::prelude::*;
use bitfn::text::{hex, transliteration};

#[test]
fn test_remove_diacritics_examples() {
    assert_eq!(remove_diacritics("café"), "cafe");
    assert_eq!(remove_diacritics("Ångström"), "Angstrom");
    assert_eq!(remove_diacritics("naïve résumé"), "naive resume");
    // ligatures are not diacritics
    assert_eq!(remove_diacritics("Æsir"), "Æsir");
}

#[test]
fn test_remove_diacritics_precomposed_and_decomposed_agree() {
    assert_eq!(remove_diacritics("e\u{0301}"), remove_diacritics("\u{00E9}"));
}

#[test]
fn test_to_ascii_keeps_layout() {
    assert_eq!(to_ascii("Ærøskøbing, Denmark!"), "AEroskobing, Denmark!");
    assert_eq!(to_ascii("  tabs\tand\nnewlines  "), "  tabs\tand\nnewlines  ");
    assert_eq!(to_ascii("Москва"), "Москва");
}

#[test]
fn test_to_ascii_fullwidth() {
    assert_eq!(to_ascii("ＡＢＣ１２３"), "ABC123");
}

#[test]
fn test_to_hex() {
    assert_eq!(to_hex('A' as u16), "0041");
    assert_eq!(hex::utf16_hex('Æ'), vec!["00C6"]);
    assert_eq!(hex::utf16_hex('😀'), vec!["D83D", "DE00"]);
}

#[test]
fn test_transliteration_lookup() {
    assert_eq!(transliteration::lookup('æ'), Some("ae"));
    assert_eq!(transliteration::lookup('ẞ'), Some("SS"));
    assert_eq!(transliteration::lookup('a'), None);
    assert!(transliteration::len() > 100);
    assert_eq!(transliteration::entries().count(), transliteration::len());
}

#[test]
fn test_unescape_round_trips_common_literals() {
    assert_eq!(unescape(r#"C:\\Users\\me\\file.txt"#).unwrap(), r"C:\Users\me\file.txt");
    assert_eq!(unescape(r#"say \"hi\"\n"#).unwrap(), "say \"hi\"\n");
    assert_eq!(unescape(r"\u00e6\x41\U0001F600").unwrap(), "æA😀");
}

#[test]
fn test_unescape_errors_carry_position() {
    let err = unescape(r"ok\z").unwrap_err();
    assert_eq!(err, Error::InvalidEscape { index: 2 });
    assert_eq!(err.to_string(), "Invalid escape sequence found at character 2");
}

#[test]
fn test_unescape_verbatim() {
    assert_eq!(unescape_verbatim(r#"He said ""no"""#).unwrap(), r#"He said "no""#);
    assert_eq!(
        unescape_verbatim(r#"bad " quote"#),
        Err(Error::InvalidEscape { index: 4 })
    );
}

#[test]
fn test_push_repeated() {
    let mut s = String::from("ab");
    s.push_repeated("-", 3).push_repeated("xy", 2);
    assert_eq!(s, "ab---xyxy");
    s.push_repeated("z", 0);
    assert_eq!(s, "ab---xyxy");
}
