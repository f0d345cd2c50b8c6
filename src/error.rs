//! Error types for text transformations.

use std::fmt;

use thiserror::Error;

/// Errors produced by the fallible text transformations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character with no slug handling was found while transcoding in strict mode.
    ///
    /// The code units are the UTF-16 encoding of the character, so a character
    /// outside the Basic Multilingual Plane reports both surrogates.
    #[error(
        "Unhandled character in UnicodeCategory.{category}: '{}' ({}).",
        printable(.character, .category),
        HexUnits(.code_units)
    )]
    UnhandledCharacter {
        /// The offending character.
        character: char,
        /// Name of the character's Unicode general category.
        category: &'static str,
        /// UTF-16 code units of the character.
        code_units: Vec<u16>,
    },

    /// A malformed escape sequence was found while unescaping.
    #[error("Invalid escape sequence found at character {index}")]
    InvalidEscape {
        /// Character offset of the backslash or quote that starts the sequence.
        index: usize,
    },
}

/// A specialized `Result` type for text transformations.
pub type Result<T> = std::result::Result<T, Error>;

// Control characters are reported by code only.
fn printable(character: &char, category: &str) -> String {
    if category == "Control" {
        String::new()
    } else {
        character.to_string()
    }
}

struct HexUnits<'a>(&'a [u16]);

impl fmt::Display for HexUnits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "0x{}", crate::text::hex::to_hex(*unit))?;
        }
        Ok(())
    }
}
