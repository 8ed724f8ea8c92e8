//! # Encoder Options

use std::sync::Arc;

use crate::{encoding::CorpusEncoder, types::TokenType, vocab::Vocab};

/// Options for [`CorpusEncoder`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorpusEncoderOptions {
    /// Keep at most this many indices; `None` keeps all of them.
    pub max_tokens: Option<usize>,
}

impl CorpusEncoderOptions {
    /// Create options from a signed token limit.
    ///
    /// ## Arguments
    /// * `max_tokens` - the limit; `<= 0` means unbounded.
    pub fn from_max_tokens(max_tokens: i64) -> Self {
        Self::default().with_max_tokens(max_tokens)
    }

    /// Sets the token limit.
    ///
    /// ## Arguments
    /// * `max_tokens` - the limit; `<= 0` means unbounded.
    ///
    /// ## Returns
    /// The updated `CorpusEncoderOptions` instance.
    pub fn with_max_tokens(
        self,
        max_tokens: i64,
    ) -> Self {
        let max_tokens = usize::try_from(max_tokens).ok().filter(|&n| n > 0);
        Self { max_tokens }
    }

    /// Initializes a [`CorpusEncoder`] from these options.
    ///
    /// ## Arguments
    /// * `vocab` - the vocab to encode with.
    pub fn init<T: TokenType>(
        self,
        vocab: Arc<Vocab<T>>,
    ) -> CorpusEncoder<T> {
        CorpusEncoder::new(vocab, self)
    }
}
