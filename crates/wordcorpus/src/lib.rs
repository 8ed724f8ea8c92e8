//! # `wordcorpus` Corpus Vocabulary Suite
//!
//! This crate turns raw text into integer index sequences for
//! sequence-model training.
//!
//! The work happens in four stages:
//!
//! ```text
//! loading -> tokenizing -> vocab -> encoding
//! ```
//!
//! See:
//! * [`loading`] to read and normalize text lines.
//! * [`tokenizing`] to split lines into word or character tokens.
//! * [`vocab`] to count tokens and build a [`Vocab`].
//! * [`encoding`] to map tokenized lines into a flat index corpus.
//! * [`pipeline`] to run all four stages in one call.
//!
//! ## Example
//!
//! ```rust
//! use wordcorpus::{CorpusPipelineOptions, TokenizeMode, VocabOptions};
//!
//! let text = "The Time Machine, by H. G. Wells\n\nThe Time Traveller";
//!
//! let options = CorpusPipelineOptions::default()
//!     .with_mode(TokenizeMode::Word)
//!     .with_vocab(VocabOptions::default().with_reserved_tokens(["<pad>"]));
//!
//! let corpus = options.init::<u32>().load_reader(text.as_bytes())?;
//!
//! let vocab = &corpus.vocab;
//! assert_eq!(vocab.lookup_index("<unk>"), 0);
//! assert_eq!(vocab.lookup_index("<pad>"), 1);
//! assert_eq!(vocab.lookup_index("the"), 2);
//! assert_eq!(corpus.indices.len(), 10);
//! # Ok::<(), wordcorpus::WordcorpusError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod encoding;
pub mod errors;
pub mod loading;
pub mod pipeline;
pub mod tokenizing;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoding::{CorpusEncoder, CorpusEncoderOptions, EncodedCorpus};
#[doc(inline)]
pub use errors::{WCResult, WordcorpusError};
#[doc(inline)]
pub use loading::{load_lines_path, normalize_line, read_lines};
#[doc(inline)]
pub use pipeline::{CorpusPipeline, CorpusPipelineOptions};
#[doc(inline)]
pub use tokenizing::{TokenizeMode, tokenize, tokenize_with_mode_name};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{TokenSource, Vocab, VocabOptions};
