//! Ordered, growable token sink with a lookback window.
//!
//! The buffer is the only place a classifier may look at tokens it has
//! already produced. Besides appending, it supports removing the tail
//! ([`truncate`](TokenBuffer::truncate), [`pop_n`](TokenBuffer::pop_n)),
//! which is how retroactive merges replace several emitted tokens with a
//! single one.

use std::collections::TryReserveError;
use std::ops::Index;

/// Capacity of the first allocation.
pub const INITIAL_CAPACITY: usize = 8;

/// Append-ordered sequence of tokens.
///
/// Capacity starts at [`INITIAL_CAPACITY`] and doubles whenever it is
/// exhausted. Growth goes through `try_reserve_exact`, so running out of
/// memory is an error value rather than an abort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBuffer<T> {
    items: Vec<T>,
}

impl<T> Default for TokenBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TokenBuffer<T> {
    /// Create an empty buffer. Nothing is allocated until the first push.
    #[inline]
    pub fn new() -> Self {
        TokenBuffer { items: Vec::new() }
    }

    /// Append a token, doubling capacity if the buffer is full.
    pub fn push(&mut self, item: T) -> Result<(), TryReserveError> {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.try_reserve_exact(additional)?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The most recently appended token.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The last `n` tokens in emission order (fewer if the buffer is short).
    pub fn last_n(&self, n: usize) -> &[T] {
        &self.items[self.items.len().saturating_sub(n)..]
    }

    /// Shorten the buffer to `len` tokens. No-op if already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Remove the last `n` tokens, returning how many were removed.
    pub fn pop_n(&mut self, n: usize) -> usize {
        let removed = n.min(self.items.len());
        self.items.truncate(self.items.len() - removed);
        removed
    }

    /// Remove and return the last token.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Stable in-place sort with a caller-supplied comparator.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> std::cmp::Ordering) {
        self.items.sort_by(compare);
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Hand the tokens over to the next stage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Index<usize> for TokenBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a TokenBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for TokenBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
