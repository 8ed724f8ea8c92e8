//! # Corpus Encoder

use std::sync::Arc;

use crate::{encoding::CorpusEncoderOptions, types::TokenType, vocab::Vocab};

/// A flat index corpus, with the vocab that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedCorpus<T: TokenType = u32> {
    /// One index per token, in document order.
    pub indices: Vec<T>,

    /// The vocab used for the encoding.
    pub vocab: Arc<Vocab<T>>,
}

impl<T: TokenType> EncodedCorpus<T> {
    /// The number of indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the corpus has no indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Encodes tokenized lines against a shared [`Vocab`].
#[derive(Debug, Clone)]
pub struct CorpusEncoder<T: TokenType = u32> {
    /// The encoder options.
    pub options: CorpusEncoderOptions,

    vocab: Arc<Vocab<T>>,
}

impl<T: TokenType> CorpusEncoder<T> {
    /// Create a new corpus encoder.
    ///
    /// ## Arguments
    /// * `vocab` - the vocab to encode with.
    /// * `options` - the encoder options.
    pub fn new(
        vocab: Arc<Vocab<T>>,
        options: CorpusEncoderOptions,
    ) -> Self {
        Self { options, vocab }
    }

    /// Get the vocab.
    pub fn vocab(&self) -> &Arc<Vocab<T>> {
        &self.vocab
    }

    /// Encode tokenized lines into a flat index corpus.
    ///
    /// ## Arguments
    /// * `lines` - one token sequence per line.
    ///
    /// ## Returns
    /// The indices of every token, in document order, truncated to
    /// `max_tokens` when bounded; together with the vocab.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lines)))]
    pub fn encode_lines<S: AsRef<str>>(
        &self,
        lines: &[Vec<S>],
    ) -> EncodedCorpus<T> {
        let limit = self.options.max_tokens.unwrap_or(usize::MAX);

        let indices: Vec<T> = lines
            .iter()
            .flatten()
            .take(limit)
            .map(|token| self.vocab.lookup_index(token.as_ref()))
            .collect();

        log::debug!("encoded corpus: {} indices", indices.len());

        EncodedCorpus {
            indices,
            vocab: self.vocab.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{TokenSource, VocabOptions};

    fn abc_lines() -> Vec<Vec<String>> {
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec![],
            vec!["c".to_string()],
        ]
    }

    fn abc_vocab(lines: &[Vec<String>]) -> Arc<Vocab<u32>> {
        let vocab: Vocab<u32> = VocabOptions::default()
            .build(TokenSource::Lines(lines))
            .unwrap();
        Arc::new(vocab)
    }

    #[test]
    fn test_encode_all() {
        let lines = abc_lines();
        let vocab = abc_vocab(&lines);

        let encoder = CorpusEncoderOptions::default().init(vocab.clone());
        let corpus = encoder.encode_lines(&lines);

        assert_eq!(corpus.indices, vec![1, 2, 3]);
        assert!(Arc::ptr_eq(&corpus.vocab, &vocab));
        assert_eq!(
            corpus.vocab.try_lookup_tokens(&corpus.indices).unwrap(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_encode_truncated() {
        let lines = abc_lines();
        let encoder = CorpusEncoderOptions::from_max_tokens(2).init(abc_vocab(&lines));

        let corpus = encoder.encode_lines(&lines);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.indices, vec![1, 2]);
    }

    #[test]
    fn test_encode_unbounded_limits() {
        let lines = abc_lines();
        for max_tokens in [0, -5, 3, 100] {
            let encoder =
                CorpusEncoderOptions::from_max_tokens(max_tokens).init(abc_vocab(&lines));
            assert_eq!(encoder.encode_lines(&lines).len(), 3, "{max_tokens}");
        }
    }

    #[test]
    fn test_encode_unknown_tokens() {
        let lines = abc_lines();
        let encoder = CorpusEncoder::new(abc_vocab(&lines), Default::default());

        let other = vec![vec!["c", "zz", "a"]];
        let corpus = encoder.encode_lines(&other);
        assert_eq!(corpus.indices, vec![3, 0, 1]);

        let empty: Vec<Vec<String>> = vec![vec![], vec![]];
        assert!(encoder.encode_lines(&empty).is_empty());
    }
}
