//! Counting, ordering and shuffling adapters for iterators.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Extension methods available on every iterator.
pub trait IterExt: Iterator + Sized {
    /// Count the elements per key, each element counted exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitfn::collections::IterExt;
    ///
    /// let counts = ["a", "bb", "cc", "d"].into_iter().count_by(|s| s.len());
    /// assert_eq!(counts[&1], 2);
    /// assert_eq!(counts[&2], 2);
    /// ```
    fn count_by<K, F>(self, mut selector: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        let mut counts = HashMap::new();
        for item in self {
            *counts.entry(selector(item)).or_insert(0) += 1;
        }
        counts
    }

    /// Count the elements per key, each element counted once for every key
    /// the selector yields for it (possibly zero times).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitfn::collections::IterExt;
    ///
    /// let counts = ["", "ab", "bc"].into_iter().count_by_many(|s| s.chars());
    /// assert_eq!(counts[&'b'], 2);
    /// assert_eq!(counts.len(), 3);
    /// ```
    fn count_by_many<K, I, F>(self, mut selector: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        I: IntoIterator<Item = K>,
        F: FnMut(Self::Item) -> I,
    {
        let mut counts = HashMap::new();
        for item in self {
            for key in selector(item) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Collect the elements in ascending order. The sort is stable.
    fn sorted(self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut items: Vec<_> = self.collect();
        items.sort();
        items
    }

    /// Collect the elements in ascending order of `compare`. The sort is stable.
    fn sorted_by<F>(self, compare: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut items: Vec<_> = self.collect();
        items.sort_by(compare);
        items
    }

    /// Collect the elements in descending order. The sort is stable.
    fn sorted_desc(self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        self.sorted_desc_by(Ord::cmp)
    }

    /// Collect the elements in descending order of `compare`. The sort is stable.
    fn sorted_desc_by<F>(self, mut compare: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut items: Vec<_> = self.collect();
        items.sort_by(|a, b| compare(b, a));
        items
    }

    /// Yield the elements in random order using the thread-local generator.
    ///
    /// The source is collected as soon as the first element is requested.
    #[cfg(feature = "rand")]
    fn shuffle(self) -> Shuffle<Self, fn(usize, usize) -> usize> {
        self.shuffle_with(crate::random::random_index_between as fn(usize, usize) -> usize)
    }

    /// Yield the elements in random order, drawing indices from `rng`.
    ///
    /// `rng(lo, hi)` must return an index in `lo..hi`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitfn::collections::IterExt;
    ///
    /// let picked: Vec<_> = [1, 2, 3].into_iter().shuffle_with(|_, hi| hi - 1).collect();
    /// assert_eq!(picked, vec![3, 1, 2]);
    /// ```
    fn shuffle_with<R>(self, rng: R) -> Shuffle<Self, R>
    where
        R: FnMut(usize, usize) -> usize,
    {
        Shuffle {
            source: Some(self),
            buffer: Vec::new(),
            position: 0,
            rng,
        }
    }

    /// Pass elements through as `Ok` until one matches `predicate`, then yield
    /// `Err(make_error(&item))` once and stop.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitfn::collections::IterExt;
    ///
    /// let checked: Result<Vec<i32>, String> = [1, 2, -3, 4]
    ///     .into_iter()
    ///     .fail_if_any(|n| *n < 0, |n| format!("negative: {}", n))
    ///     .collect();
    /// assert_eq!(checked, Err("negative: -3".to_string()));
    /// ```
    fn fail_if_any<P, F, E>(self, predicate: P, make_error: F) -> FailIfAny<Self, P, F>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(&Self::Item) -> E,
    {
        FailIfAny {
            iter: self,
            predicate,
            make_error,
            failed: false,
        }
    }
}

impl<I: Iterator> IterExt for I {}

/// Iterator returned by [`IterExt::shuffle_with`].
///
/// A lazy Fisher-Yates shuffle: step `i` picks `j` in `i..n`, yields the
/// element at `j` and moves the element at `i` into slot `j`.
pub struct Shuffle<I: Iterator, R> {
    source: Option<I>,
    buffer: Vec<Option<I::Item>>,
    position: usize,
    rng: R,
}

impl<I, R> Iterator for Shuffle<I, R>
where
    I: Iterator,
    R: FnMut(usize, usize) -> usize,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            self.buffer = source.map(Some).collect();
        }

        let i = self.position;
        let len = self.buffer.len();
        if i >= len {
            return None;
        }
        self.position += 1;

        let j = (self.rng)(i, len);
        debug_assert!((i..len).contains(&j), "rng returned {} outside {}..{}", j, i, len);
        let j = j.clamp(i, len - 1);
        self.buffer.swap(i, j);
        self.buffer[i].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => {
                let remaining = self.buffer.len() - self.position;
                (remaining, Some(remaining))
            }
        }
    }
}

impl<I, R> FusedIterator for Shuffle<I, R>
where
    I: Iterator,
    R: FnMut(usize, usize) -> usize,
{
}

/// Iterator returned by [`IterExt::fail_if_any`].
pub struct FailIfAny<I, P, F> {
    iter: I,
    predicate: P,
    make_error: F,
    failed: bool,
}

impl<I, P, F, E> Iterator for FailIfAny<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(&I::Item) -> E,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.iter.next()?;
        if (self.predicate)(&item) {
            self.failed = true;
            return Some(Err((self.make_error)(&item)));
        }
        Some(Ok(item))
    }
}

impl<I, P, F, E> FusedIterator for FailIfAny<I, P, F>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(&I::Item) -> E,
{
}
