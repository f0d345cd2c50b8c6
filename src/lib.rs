//! # bitfn
//!
//! Small string and collection helpers, centred on a Unicode-aware slug
//! transcoder.
//!
//! [`to_slug`](text::to_slug) turns arbitrary text into a URL-safe identifier
//! built from ASCII letters, digits, `_`, `-` and optionally balanced
//! parentheses. Accents are stripped through canonical decomposition, common
//! non-decomposable letters are transliterated from a static table, and runs
//! of whitespace and dash-like punctuation collapse into single hyphens.
//!
//! ## Example
//!
//! ```rust
//! use bitfn::prelude::*;
//!
//! let options = SlugOptions::new().lowercase(true);
//! assert_eq!(to_slug("Héllo, Wörld!", options)?, "hello-world");
//!
//! let parens = SlugOptions::new().parenthetical(true);
//! assert_eq!(to_slug("Les Misérables (2012)", parens)?, "Les-Miserables-(2012)");
//! # Ok::<(), bitfn::Error>(())
//! ```
//!
//! ## Features
//!
//! - `rand` (default): thread-local random helpers and [`IterExt::shuffle`](collections::IterExt::shuffle).
//! - `serialization`: serde support for [`SlugOptions`](text::SlugOptions).
//! - `cli`: the `bitfn` command-line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod error;
pub mod text;

/// Thread-local random number helpers
#[cfg(feature = "rand")]
pub mod random;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::collections::{CounterExt, IterExt, ListMapExt, MapExt, SetMapExt};
    pub use crate::error::{Error, Result};
    pub use crate::text::{
        remove_diacritics, to_ascii, to_hex, to_slug, unescape, unescape_verbatim, SlugOptions,
        StringExt,
    };
}
