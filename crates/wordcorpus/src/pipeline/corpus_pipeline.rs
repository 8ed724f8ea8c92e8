//! # Corpus Pipeline

use core::marker::PhantomData;
use std::{io::BufRead, path::Path, sync::Arc};

use crate::{
    encoding::{CorpusEncoder, CorpusEncoderOptions, EncodedCorpus},
    errors::WCResult,
    loading::{load_lines_path, read_lines},
    tokenizing::{TokenizeMode, tokenize},
    types::TokenType,
    vocab::{TokenSource, Vocab, VocabOptions},
};

/// Options for [`CorpusPipeline`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CorpusPipelineOptions {
    /// The token unit.
    pub mode: TokenizeMode,

    /// The vocab build options.
    pub vocab: VocabOptions,

    /// The encoder options.
    pub encoder: CorpusEncoderOptions,
}

impl CorpusPipelineOptions {
    /// Sets the token unit.
    ///
    /// ## Returns
    /// The updated `CorpusPipelineOptions` instance.
    pub fn with_mode(
        self,
        mode: TokenizeMode,
    ) -> Self {
        Self { mode, ..self }
    }

    /// Replace the vocab build options.
    ///
    /// ## Returns
    /// The updated `CorpusPipelineOptions` instance.
    pub fn with_vocab(
        self,
        vocab: VocabOptions,
    ) -> Self {
        Self { vocab, ..self }
    }

    /// Replace the encoder options.
    ///
    /// ## Returns
    /// The updated `CorpusPipelineOptions` instance.
    pub fn with_encoder(
        self,
        encoder: CorpusEncoderOptions,
    ) -> Self {
        Self { encoder, ..self }
    }

    /// Sets the corpus token limit.
    ///
    /// ## Arguments
    /// * `max_tokens` - the limit; `<= 0` means unbounded.
    ///
    /// ## Returns
    /// The updated `CorpusPipelineOptions` instance.
    pub fn with_max_tokens(
        self,
        max_tokens: i64,
    ) -> Self {
        Self {
            encoder: self.encoder.with_max_tokens(max_tokens),
            ..self
        }
    }

    /// Initializes a [`CorpusPipeline`] from these options.
    pub fn init<T: TokenType>(self) -> CorpusPipeline<T> {
        CorpusPipeline::new(self)
    }
}

/// Load, tokenize, build a vocab, and encode a text corpus.
///
/// The vocab is built from the whole text before any truncation by
/// `max_tokens`.
#[derive(Debug, Clone)]
pub struct CorpusPipeline<T: TokenType = u32> {
    /// The pipeline options.
    pub options: CorpusPipelineOptions,

    _marker: PhantomData<T>,
}

impl<T: TokenType> CorpusPipeline<T> {
    /// Create a new pipeline.
    pub fn new(options: CorpusPipelineOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    /// Run the pipeline over a [`BufRead`] stream.
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> WCResult<EncodedCorpus<T>> {
        let lines = read_lines(reader)?;
        self.encode_text_lines(&lines)
    }

    /// Run the pipeline over a text file.
    pub fn load_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WCResult<EncodedCorpus<T>> {
        let lines = load_lines_path(path)?;
        self.encode_text_lines(&lines)
    }

    /// Run the tokenize, vocab, and encode stages over normalized lines.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lines)))]
    pub fn encode_text_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> WCResult<EncodedCorpus<T>> {
        let tokens = tokenize(lines, self.options.mode);

        let vocab: Vocab<T> = self.options.vocab.build(TokenSource::Lines(&tokens))?;
        log::info!(
            "vocab size: {} ({} mode, {} lines)",
            vocab.len(),
            self.options.mode,
            lines.len()
        );

        let encoder = CorpusEncoder::new(Arc::new(vocab), self.options.encoder);
        let corpus = encoder.encode_lines(&tokens);
        log::info!("corpus size: {}", corpus.len());

        Ok(corpus)
    }
}
