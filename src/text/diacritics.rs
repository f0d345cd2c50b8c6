//! Diacritic removal and ASCII folding.

use unicode_normalization::UnicodeNormalization;

use super::category::is_nonspacing_mark;
use super::transliteration;

/// Remove non-spacing marks, such as the accent in "resumé".
///
/// The text is decomposed, stripped of every non-spacing mark and recomposed.
/// Nothing else changes.
///
/// # Example
///
/// ```rust
/// use bitfn::text::remove_diacritics;
///
/// assert_eq!(remove_diacritics("café"), "cafe");
/// assert_eq!(remove_diacritics("tête-à-tête"), "tete-a-tete");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_nonspacing_mark(c)).nfc().collect()
}

/// Remove diacritics and replace letters found in the transliteration table.
///
/// Unlike [`to_slug`](super::to_slug) this keeps whitespace, punctuation and
/// unknown characters exactly as they are.
///
/// # Example
///
/// ```rust
/// use bitfn::text::to_ascii;
///
/// assert_eq!(to_ascii("æther"), "aether");
/// assert_eq!(to_ascii("El Niño"), "El Nino");
/// ```
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfd() {
        if ch.is_ascii() {
            out.push(ch);
        } else if let Some(replacement) = transliteration::lookup(ch) {
            out.push_str(replacement);
        } else if !is_nonspacing_mark(ch) {
            out.push(ch);
        }
    }
    out.nfc().collect()
}
