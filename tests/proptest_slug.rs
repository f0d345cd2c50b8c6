//! Property-based tests for the slug transcoder and the ASCII folds.
//!
//! Properties checked for every option combination (non-strict unless noted):
//!
//! 1. **Alphabet closure**: output only uses `[A-Za-z0-9_-]`, plus `()` in
//!    parenthetical mode
//! 2. **Dash placement**: no leading, trailing or doubled `-`
//! 3. **Paren balance**: parentheses nest and close
//! 4. **Idempotence**: slugging a slug changes nothing
//! 5. **Literal preservation**: `[A-Za-z0-9_]*` passes through untouched
//! 6. **Strict agreement**: a strict success equals the lenient result

use bitfn::text::category::is_nonspacing_mark;
use bitfn::text::{remove_diacritics, to_ascii, to_slug, SlugOptions};
use proptest::prelude::*;

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

// Latin text with the punctuation the transcoder treats specially
fn arb_punctuated_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9_ ()\[\]{}/\\|+=.,'\-–—àéïøæßⓐ⑴\t]{0,40}").unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_unicode_string(), arb_punctuated_string()]
}

fn arb_options() -> impl Strategy<Value = SlugOptions> {
    (any::<bool>(), any::<bool>())
        .prop_map(|(lowercase, parenthetical)| {
            SlugOptions::new().lowercase(lowercase).parenthetical(parenthetical)
        })
}

fn in_alphabet(ch: char, parenthetical: bool) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || (parenthetical && (ch == '(' || ch == ')'))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn slug_alphabet_closure(text in arb_text(), options in arb_options()) {
        let slug = to_slug(&text, options).unwrap();
        for ch in slug.chars() {
            prop_assert!(
                in_alphabet(ch, options.parenthetical),
                "{:?} escaped the alphabet in {:?}", ch, slug
            );
        }
    }

    #[test]
    fn slug_dash_placement(text in arb_text(), options in arb_options()) {
        let slug = to_slug(&text, options).unwrap();
        prop_assert!(!slug.starts_with('-'), "leading dash in {:?}", slug);
        prop_assert!(!slug.ends_with('-'), "trailing dash in {:?}", slug);
        prop_assert!(!slug.contains("--"), "doubled dash in {:?}", slug);
    }

    #[test]
    fn slug_parens_balance(text in arb_text(), lowercase in any::<bool>()) {
        let options = SlugOptions::new().lowercase(lowercase).parenthetical(true);
        let slug = to_slug(&text, options).unwrap();
        let mut depth = 0i32;
        for ch in slug.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0, "close before open in {:?}", slug);
        }
        prop_assert_eq!(depth, 0, "unbalanced parentheses in {:?}", slug);
    }

    #[test]
    fn slug_idempotent(text in arb_text(), options in arb_options()) {
        let once = to_slug(&text, options).unwrap();
        let twice = to_slug(&once, options).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn slug_preserves_literals(text in "[A-Za-z0-9_]{0,40}") {
        prop_assert_eq!(to_slug(&text, SlugOptions::new()).unwrap(), text);
    }

    #[test]
    fn slug_lowercase_has_no_uppercase(text in arb_text()) {
        let slug = to_slug(&text, SlugOptions::new().lowercase(true)).unwrap();
        prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase()), "uppercase in {:?}", slug);
    }

    #[test]
    fn slug_strict_success_matches_lenient(text in arb_text(), options in arb_options()) {
        if let Ok(strict) = to_slug(&text, options.strict(true)) {
            prop_assert_eq!(strict, to_slug(&text, options).unwrap());
        }
    }

    #[test]
    fn remove_diacritics_leaves_no_marks(text in arb_text()) {
        let stripped = remove_diacritics(&text);
        prop_assert!(!stripped.chars().any(is_nonspacing_mark), "mark left in {:?}", stripped);
    }

    #[test]
    fn to_ascii_keeps_ascii(text in "[ -~]{0,40}") {
        prop_assert_eq!(to_ascii(&text), text);
    }
}
