//! Extension traits for maps and iterators.
//!
//! - [`MapExt`], [`ListMapExt`], [`SetMapExt`] and [`CounterExt`] add
//!   insert-or-update operations to [`HashMap`](std::collections::HashMap).
//! - [`IterExt`] adds counting, ordering, shuffling and validation to every
//!   iterator.

pub mod iter;
pub mod map;

pub use iter::{FailIfAny, IterExt, Shuffle};
pub use map::{CounterExt, ListMapExt, MapExt, SetMapExt};
