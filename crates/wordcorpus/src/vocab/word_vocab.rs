//! # Token Vocabulary

use core::iter;

use compact_str::CompactString;

use crate::{
    errors::{WCResult, WordcorpusError},
    types::{TokenType, WCHashMap, hash_map_with_capacity, hash_set_with_capacity},
    vocab::{TokenCounter, TokenSource, VocabOptions},
};

/// A bijection between tokens and dense indices `0..len()`.
///
/// Index `0` is always the unknown token. Forward lookups of tokens
/// without an index resolve to `0`; reverse lookups outside `0..len()`
/// fail with [`WordcorpusError::IndexOutOfRange`].
///
/// A `Vocab` is immutable once built; share it with `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocab<T: TokenType = u32> {
    /// Tokens by index.
    idx_to_token: Vec<CompactString>,

    /// Indices by token.
    token_to_idx: WCHashMap<CompactString, T>,

    /// Corpus counts, by descending count.
    token_freqs: Vec<(CompactString, usize)>,
}

impl<T: TokenType> Vocab<T> {
    /// Build a vocab by counting a token source.
    ///
    /// ## Arguments
    /// * `source` - the tokens to count.
    /// * `options` - the build options.
    ///
    /// ## Returns
    /// A new `Vocab`; or [`WordcorpusError::VocabSizeOverflow`] if the
    /// number of indices does not fit `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(source, options)))]
    pub fn build<S: AsRef<str>>(
        source: TokenSource<'_, S>,
        options: &VocabOptions,
    ) -> WCResult<Self> {
        let mut counter: TokenCounter<CompactString, usize> = TokenCounter::new();
        counter.update_from_source(source);
        let token_freqs = counter.into_sorted_counts();

        let idx_to_token = assemble_index_order(options, &token_freqs);

        let mut token_to_idx = hash_map_with_capacity(idx_to_token.len());
        for (idx, token) in idx_to_token.iter().enumerate() {
            let idx = T::from_usize(idx).ok_or(WordcorpusError::VocabSizeOverflow {
                size: idx_to_token.len(),
            })?;
            token_to_idx.insert(token.clone(), idx);
        }

        log::debug!(
            "built vocab: {} indices from {} distinct tokens (min_freq={})",
            idx_to_token.len(),
            token_freqs.len(),
            options.min_freq
        );

        Ok(Self {
            idx_to_token,
            token_to_idx,
            token_freqs,
        })
    }

    /// The number of indices, including the unknown and reserved tokens.
    pub fn len(&self) -> usize {
        self.idx_to_token.len()
    }

    /// Always false; the unknown token is always present.
    pub fn is_empty(&self) -> bool {
        self.idx_to_token.is_empty()
    }

    /// The index of the unknown token.
    pub fn unk_index(&self) -> T {
        T::zero()
    }

    /// The unknown token.
    pub fn unk_token(&self) -> &str {
        &self.idx_to_token[0]
    }

    /// Returns true if the token has its own index.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_idx.contains_key(token)
    }

    /// Look up the index of a token.
    ///
    /// ## Returns
    /// The token's index; or the unknown index if the token has none.
    pub fn lookup_index(
        &self,
        token: &str,
    ) -> T {
        self.token_to_idx
            .get(token)
            .copied()
            .unwrap_or_else(|| self.unk_index())
    }

    /// Look up the indices of a sequence of tokens.
    ///
    /// See [`Vocab::lookup_index`].
    pub fn lookup_indices<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|token| self.lookup_index(token.as_ref()))
            .collect()
    }

    /// Look up the token at an index.
    ///
    /// ## Returns
    /// The token; or [`WordcorpusError::IndexOutOfRange`].
    pub fn try_lookup_token(
        &self,
        index: T,
    ) -> WCResult<&str> {
        index
            .to_usize()
            .and_then(|idx| self.idx_to_token.get(idx))
            .map(CompactString::as_str)
            .ok_or_else(|| WordcorpusError::IndexOutOfRange {
                index: index.to_usize().unwrap_or(usize::MAX),
                size: self.len(),
            })
    }

    /// Look up the tokens at a sequence of indices.
    ///
    /// ## Returns
    /// The tokens; or [`WordcorpusError::IndexOutOfRange`] for the first
    /// index outside the vocab.
    pub fn try_lookup_tokens(
        &self,
        indices: &[T],
    ) -> WCResult<Vec<&str>> {
        indices
            .iter()
            .map(|&index| self.try_lookup_token(index))
            .collect()
    }

    /// Iterate over the tokens in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.idx_to_token.iter().map(CompactString::as_str)
    }

    /// The corpus token counts, by descending count.
    ///
    /// This covers every counted token, including those below `min_freq`.
    pub fn token_freqs(&self) -> &[(CompactString, usize)] {
        &self.token_freqs
    }
}

/// Order the unknown token, the reserved tokens, and the frequent corpus
/// tokens; placing each token once, at its first position.
fn assemble_index_order(
    options: &VocabOptions,
    token_freqs: &[(CompactString, usize)],
) -> Vec<CompactString> {
    let frequent = token_freqs
        .iter()
        .filter(|(_, count)| *count >= options.min_freq)
        .map(|(token, _)| token.as_str());

    let candidates = iter::once(options.unk_token.as_str())
        .chain(options.reserved_tokens.iter().map(String::as_str))
        .chain(frequent);

    let capacity = 1 + options.reserved_tokens.len() + token_freqs.len();
    let mut seen = hash_set_with_capacity(capacity);
    let mut order = Vec::with_capacity(capacity);
    for token in candidates {
        if seen.insert(token) {
            order.push(CompactString::from(token));
        }
    }
    order
}
