//! Text transformations.
//!
//! The centrepiece is the slug transcoder, [`to_slug`], which folds arbitrary
//! text into `[A-Za-z0-9_-]` (plus parentheses on request) using canonical
//! decomposition, Unicode general categories and a static
//! [transliteration] table. The simpler folds, [`remove_diacritics`] and
//! [`to_ascii`], share the same decomposition approach.

pub mod category;
pub mod diacritics;
pub mod escape;
pub mod hex;
pub mod repeat;
pub mod slug;
pub mod transliteration;

pub use diacritics::{remove_diacritics, to_ascii};
pub use escape::{unescape, unescape_verbatim};
pub use hex::to_hex;
pub use repeat::StringExt;
pub use slug::{to_slug, SlugOptions};
