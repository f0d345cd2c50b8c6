//! Slug transcoding.
//!
//! Converts arbitrary text into a slug made of ASCII letters, digits,
//! underscores and dashes, plus parentheses in parenthetical mode.
//!
//! The input is decomposed (NFD) and walked once. Each character is classified
//! in a fixed order:
//!
//! 1. ASCII alphanumerics and `_` are emitted, lowercased on request.
//! 2. Whitespace, separators, `-`, `–`, `—`, `/` and `\` request a word break.
//! 3. Characters in the [transliteration table](super::transliteration) emit
//!    their replacement.
//! 4. Everything else is classified by Unicode general category. Space
//!    separators, dash and connector punctuation request a word break. Open and
//!    close punctuation become `(` and `)` in parenthetical mode, or a word
//!    break otherwise. Math symbols request a word break. Anything left over is
//!    skipped, or rejected in strict mode.
//!
//! A pending word break becomes a single `-` in front of the next emission,
//! unless nothing has been emitted yet or a parenthesis asked to hug its
//! neighbour. Combining marks fall into the leftover bucket, which is how
//! diacritics disappear.
//!
//! ## Example
//!
//! ```rust
//! use bitfn::text::{to_slug, SlugOptions};
//!
//! assert_eq!(to_slug("à la mode", SlugOptions::new())?, "a-la-mode");
//! assert_eq!(to_slug("A B", SlugOptions::new().lowercase(true))?, "a-b");
//! assert_eq!(to_slug("a[b]c", SlugOptions::new().parenthetical(true))?, "a(b)c");
//! # Ok::<(), bitfn::Error>(())
//! ```

use unicode_normalization::UnicodeNormalization;

use super::category::{category, category_name, is_separator, GeneralCategory};
use super::repeat::StringExt;
use super::transliteration;
use crate::error::{Error, Result};

/// Options controlling [`to_slug`].
///
/// All options are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SlugOptions {
    /// Convert ASCII letters, including transliterated ones, to lowercase.
    pub lowercase: bool,
    /// Convert open and close punctuation to matched parentheses.
    pub parenthetical: bool,
    /// Fail on characters that have no slug handling instead of skipping them.
    pub strict: bool,
}

impl SlugOptions {
    /// Options with every flag off.
    pub const fn new() -> Self {
        SlugOptions {
            lowercase: false,
            parenthetical: false,
            strict: false,
        }
    }

    /// Set whether letters are lowercased.
    pub const fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set whether open and close punctuation become parentheses.
    pub const fn parenthetical(mut self, parenthetical: bool) -> Self {
        self.parenthetical = parenthetical;
        self
    }

    /// Set whether unhandled characters are an error.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Convert `text` into a slug.
///
/// # Errors
///
/// Returns [`Error::UnhandledCharacter`] when `options.strict` is set and the
/// text contains a character that is neither emitted, transliterated nor
/// treated as a word break. No partial slug is returned.
pub fn to_slug(text: &str, options: SlugOptions) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let mut transcoder = Transcoder::new(options, text.len());
    for ch in text.nfd() {
        transcoder.feed(ch)?;
    }
    Ok(transcoder.finish())
}

/// Per-call transcoding state.
struct Transcoder {
    options: SlugOptions,
    out: String,
    /// A dash is owed before the next emission.
    wordbreak: bool,
    /// The owed dash is suppressed next to a parenthesis.
    skipbreak: bool,
    /// Parentheses opened and not yet closed.
    paren_count: usize,
}

impl Transcoder {
    fn new(options: SlugOptions, capacity: usize) -> Self {
        Transcoder {
            options,
            out: String::with_capacity(capacity),
            wordbreak: false,
            skipbreak: false,
            paren_count: 0,
        }
    }

    fn feed(&mut self, ch: char) -> Result<()> {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            let ch = if self.options.lowercase {
                ch.to_ascii_lowercase()
            } else {
                ch
            };
            self.begin_emit();
            self.out.push(ch);
            self.end_emit(false);
            return Ok(());
        }

        // Cheap checks first; also catches control characters such as '\n'
        // that no category below would break on.
        if is_break_char(ch) {
            self.wordbreak = true;
            return Ok(());
        }

        if let Some(replacement) = transliteration::lookup(ch) {
            self.emit_replacement(replacement);
            return Ok(());
        }

        let category = category(ch);
        match category {
            GeneralCategory::SpaceSeparator
            | GeneralCategory::DashPunctuation
            | GeneralCategory::ConnectorPunctuation => {
                self.wordbreak = true;
                return Ok(());
            }
            GeneralCategory::OpenPunctuation if self.options.parenthetical => {
                self.paren_count += 1;
                self.begin_emit();
                self.out.push('(');
                self.end_emit(true);
                return Ok(());
            }
            GeneralCategory::ClosePunctuation
                if self.options.parenthetical && self.paren_count > 0 =>
            {
                self.paren_count -= 1;
                self.skipbreak = true;
                self.begin_emit();
                self.out.push(')');
                self.end_emit(false);
                return Ok(());
            }
            GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::MathSymbol => {
                self.wordbreak = true;
            }
            _ => {}
        }

        if self.options.strict {
            return Err(unhandled(ch, category));
        }
        Ok(())
    }

    fn emit_replacement(&mut self, replacement: &str) {
        let replacement = if self.options.parenthetical {
            replacement
        } else {
            replacement.trim_start_matches('(').trim_end_matches(')')
        };
        self.begin_emit();
        if self.options.lowercase {
            self.out
                .extend(replacement.chars().map(|c| c.to_ascii_lowercase()));
        } else {
            self.out.push_str(replacement);
        }
        self.end_emit(false);
    }

    #[inline]
    fn begin_emit(&mut self) {
        if self.wordbreak && !self.skipbreak && !self.out.is_empty() {
            self.out.push('-');
        }
    }

    #[inline]
    fn end_emit(&mut self, skip_next: bool) {
        self.wordbreak = false;
        self.skipbreak = skip_next;
    }

    fn finish(mut self) -> String {
        if self.options.parenthetical {
            self.out.push_repeated(")", self.paren_count);
        }
        self.out.nfc().collect()
    }
}

#[inline]
fn is_break_char(ch: char) -> bool {
    matches!(ch, '-' | '\u{2013}' | '\u{2014}' | '/' | '\\')
        || ch.is_whitespace()
        || is_separator(ch)
}

fn unhandled(ch: char, category: GeneralCategory) -> Error {
    let mut buf = [0u16; 2];
    Error::UnhandledCharacter {
        character: ch,
        category: category_name(category),
        code_units: ch.encode_utf16(&mut buf).to_vec(),
    }
}
