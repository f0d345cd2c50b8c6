//! End-to-end slug scenarios through the public API

use bitfn::text::{to_slug, SlugOptions};
use bitfn::Error;

fn plain() -> SlugOptions {
    SlugOptions::new()
}

#[test]
fn test_case_handling() {
    assert_eq!(to_slug("AbC", plain().lowercase(true)).unwrap(), "abc");
    assert_eq!(to_slug("AbC", plain()).unwrap(), "AbC");
    assert_eq!(to_slug("A B", plain().lowercase(true)).unwrap(), "a-b");
}

#[test]
fn test_diacritics_removed_and_spaces_broken() {
    assert_eq!(to_slug("à la mode", plain()).unwrap(), "a-la-mode");
    assert_eq!(to_slug("Les Misérables", plain()).unwrap(), "Les-Miserables");
    assert_eq!(to_slug("  Crème   brûlée  ", plain().lowercase(true)).unwrap(), "creme-brulee");
}

#[test]
fn test_brackets_and_slashes_break_words() {
    assert_eq!(
        to_slug("a(b)c[d]e{f}g/h\\i|j", plain()).unwrap(),
        "a-b-c-d-e-f-g-h-i-j"
    );
}

#[test]
fn test_parenthetical_mode() {
    let options = plain().parenthetical(true);
    assert_eq!(to_slug("a[b]c", options).unwrap(), "a(b)c");
    assert_eq!(to_slug("a(b", options).unwrap(), "a(b)");
    assert_eq!(to_slug("a)b", options).unwrap(), "a-b");
    assert_eq!(to_slug("Title (Director's Cut)", options).unwrap(), "Title-(Directors-Cut)");
}

#[test]
fn test_strict_control_character() {
    assert_eq!(to_slug("a\u{0001}b", plain()).unwrap(), "ab");

    let err = to_slug("a\u{0001}b", plain().strict(true)).unwrap_err();
    assert!(matches!(err, Error::UnhandledCharacter { character: '\u{0001}', .. }));
    assert_eq!(err.to_string(), "Unhandled character in UnicodeCategory.Control: '' (0x0001).");
}

#[test]
fn test_strict_surrogate_pair_message() {
    let err = to_slug("😀", plain().strict(true)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unhandled character in UnicodeCategory.OtherSymbol: '😀' (0xD83D 0xDE00)."
    );
}

#[test]
fn test_guid_is_preserved() {
    let guid = "3F2504E04F8941D39A0C0305E82C3301";
    assert_eq!(to_slug(guid, plain()).unwrap(), guid);
    let underscored = "3F2504E0_4F89_41D3_9A0C_0305E82C3301";
    assert_eq!(to_slug(underscored, plain()).unwrap(), underscored);
}

#[test]
fn test_hyphenated_guid_keeps_single_dashes() {
    let guid = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";
    assert_eq!(to_slug(guid, plain()).unwrap(), guid);
}

#[test]
fn test_latin1_range_non_strict() {
    for code in 1u32..=255 {
        let ch = char::from_u32(code).unwrap();
        let text = format!("x{}y", ch);
        let slug = to_slug(&text, plain()).unwrap();
        assert!(
            slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            "U+{:04X} produced {:?}",
            code,
            slug
        );
        assert!(slug.starts_with('x') && slug.ends_with('y'), "U+{:04X} produced {:?}", code, slug);
    }
}

#[test]
fn test_latin1_letters_transliterate() {
    assert_eq!(to_slug("ÀÁÂÃÄÅ", plain()).unwrap(), "AAAAAA");
    assert_eq!(to_slug("Æ", plain()).unwrap(), "AE");
    assert_eq!(to_slug("Ðð", plain()).unwrap(), "Dd");
    assert_eq!(to_slug("Øø", plain()).unwrap(), "Oo");
    assert_eq!(to_slug("Þþ", plain()).unwrap(), "Pp");
    assert_eq!(to_slug("ß", plain()).unwrap(), "ss");
    assert_eq!(to_slug("µ", plain()).unwrap(), "u");
}

#[test]
fn test_math_symbols_break() {
    assert_eq!(to_slug("1+1=2", plain()).unwrap(), "1-1-2");
    assert_eq!(to_slug("a<b>c", plain()).unwrap(), "a-b-c");
}

#[test]
fn test_strict_failure_returns_no_partial_output() {
    let result = to_slug("valid prefix \u{0007}", plain().strict(true));
    assert!(result.is_err());
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("Smørrebrød #{} — Œuvre", i);
                to_slug(&text, SlugOptions::new().lowercase(true)).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("smorrebrod-{}-oeuvre", i));
    }
}
