//! Thread-local random number source.
//!
//! Every thread lazily seeds its own [`StdRng`] from the wall clock mixed with
//! the thread's id, so threads started in the same instant still diverge. The
//! free functions below borrow that generator; no locking is involved.
//!
//! **Note**: This module requires the optional `rand` dependency (on by default).
//!
//! ## Example
//!
//! ```rust
//! use bitfn::random;
//!
//! let roll = random::random_int_between(1, 7);
//! assert!((1..7).contains(&roll));
//!
//! let mut buf = [0u8; 16];
//! random::random_bytes(&mut buf);
//! ```

use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

thread_local! {
    static LOCAL: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(thread_seed()));
}

fn thread_seed() -> u64 {
    let ticks = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut hasher = FxHasher::default();
    thread::current().id().hash(&mut hasher);
    ticks.wrapping_mul(31).wrapping_add(hasher.finish())
}

/// Run `f` with this thread's generator.
///
/// Calls must not nest: calling any function of this module from inside `f`
/// panics because the generator is already borrowed.
pub fn with_local<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    LOCAL.with(|rng| f(&mut rng.borrow_mut()))
}

/// A non-negative random integer.
pub fn random_int() -> i32 {
    with_local(|rng| rng.gen_range(0..i32::MAX))
}

/// A random integer in `0..max`, or `0` when `max` is `0`.
pub fn random_int_under(max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    with_local(|rng| rng.gen_range(0..max))
}

/// A random index in `lo..hi`, or `lo` when the range is empty.
pub fn random_index_between(lo: usize, hi: usize) -> usize {
    if hi <= lo {
        return lo;
    }
    with_local(|rng| rng.gen_range(lo..hi))
}

/// A random integer in `min..max`, or `min` when the range is empty.
pub fn random_int_between(min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    with_local(|rng| rng.gen_range(min..max))
}

/// A random floating-point number in `[0.0, 1.0)`.
pub fn random_double() -> f64 {
    with_local(|rng| rng.gen::<f64>())
}

/// Fill `buffer` with random bytes.
pub fn random_bytes(buffer: &mut [u8]) {
    with_local(|rng| rng.fill(buffer))
}
