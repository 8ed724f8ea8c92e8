//! # Vocabulary Options

use crate::{
    errors::WCResult,
    types::TokenType,
    vocab::{TokenSource, Vocab},
};

/// The default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Options for building a [`Vocab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabOptions {
    /// Minimum count for a corpus token to receive an index.
    pub min_freq: usize,

    /// Tokens placed directly after the unknown token, in order.
    pub reserved_tokens: Vec<String>,

    /// The unknown token; always index `0`.
    pub unk_token: String,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            min_freq: 0,
            reserved_tokens: Vec::new(),
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
        }
    }
}

impl VocabOptions {
    /// Sets the minimum token count.
    ///
    /// ## Arguments
    /// * `min_freq` - tokens seen fewer times are left out of the vocab.
    ///
    /// ## Returns
    /// The updated `VocabOptions` instance.
    pub fn with_min_freq(
        self,
        min_freq: usize,
    ) -> Self {
        Self { min_freq, ..self }
    }

    /// Sets the reserved tokens.
    ///
    /// ## Arguments
    /// * `reserved_tokens` - tokens such as `<pad>`, `<bos>`, `<eos>`.
    ///
    /// ## Returns
    /// The updated `VocabOptions` instance.
    pub fn with_reserved_tokens<W, S>(
        self,
        reserved_tokens: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reserved_tokens: reserved_tokens
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            ..self
        }
    }

    /// Sets the unknown token.
    ///
    /// ## Returns
    /// The updated `VocabOptions` instance.
    pub fn with_unk_token<S: AsRef<str>>(
        self,
        unk_token: S,
    ) -> Self {
        Self {
            unk_token: unk_token.as_ref().to_string(),
            ..self
        }
    }

    /// Build a [`Vocab`] from these options.
    ///
    /// ## Arguments
    /// * `source` - the tokens to count.
    ///
    /// ## Returns
    /// A new `Vocab`; or an error if the vocab does not fit `T`.
    pub fn build<T, S>(
        &self,
        source: TokenSource<'_, S>,
    ) -> WCResult<Vocab<T>>
    where
        T: TokenType,
        S: AsRef<str>,
    {
        Vocab::build(source, self)
    }
}
