//! # Token Counter

use compact_str::CompactString;

use crate::{
    types::{CountType, StringChunkType, WCHashMap, hash_map_with_capacity},
    vocab::TokenSource,
};

/// Token frequency counter.
///
/// Counts are kept in first-occurrence order, so that a stable sort by
/// count leaves equally frequent tokens in the order they were first seen.
///
/// # Parameters
/// * `K` - the type used to store token strings.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct TokenCounter<K = CompactString, C = usize>
where
    K: StringChunkType,
    C: CountType,
{
    /// Maps each token to its slot in `counts`.
    slots: WCHashMap<K, usize>,

    /// `(token, count)` in first-occurrence order.
    counts: Vec<(K, C)>,
}

impl<K, C> Default for TokenCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> TokenCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new, empty token counter.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new token counter with room for `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: hash_map_with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
        }
    }

    /// The number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no tokens have been seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the count for a token.
    pub fn count(
        &self,
        token: &str,
    ) -> C {
        self.slots
            .get(token)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or_default()
    }

    /// Count one occurrence of a token.
    pub fn update_from_token(
        &mut self,
        token: &str,
    ) {
        match self.slots.get(token) {
            Some(&slot) => self.counts[slot].1 += C::one(),
            None => {
                let key: K = token.into();
                self.slots.insert(key.clone(), self.counts.len());
                self.counts.push((key, C::one()));
            }
        }
    }

    /// Count every token of an iterator.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.update_from_token(token.as_ref());
        }
    }

    /// Count every token of a [`TokenSource`].
    pub fn update_from_source<S: AsRef<str>>(
        &mut self,
        source: TokenSource<'_, S>,
    ) {
        self.update_from_tokens(source.iter());
    }

    /// View the counts in first-occurrence order.
    pub fn counts(&self) -> &[(K, C)] {
        &self.counts
    }

    /// Release the counts, sorted by descending count.
    ///
    /// Equal counts keep first-occurrence order.
    pub fn into_sorted_counts(self) -> Vec<(K, C)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}
