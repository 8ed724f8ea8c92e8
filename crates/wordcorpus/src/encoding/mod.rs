//! # Corpus Encoding
//!
//! Maps tokenized lines through a [`crate::Vocab`] into one flat index
//! sequence. Line boundaries are not kept.

mod corpus_encoder;
mod encoder_options;

#[doc(inline)]
pub use corpus_encoder::{CorpusEncoder, EncodedCorpus};
#[doc(inline)]
pub use encoder_options::CorpusEncoderOptions;
