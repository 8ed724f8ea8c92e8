//! # Vocabulary
//!
//! This module counts tokens and assigns them dense indices.
//!
//! ## Index Order
//!
//! A [`Vocab`] always assigns its indices in this order:
//! * index `0` - the unknown token (see [`VocabOptions::unk_token`]),
//! * the reserved tokens, in the order given,
//! * the corpus tokens with a count of at least `min_freq`,
//!   by descending count; equal counts keep first-occurrence order.
//!
//! A token is placed only once, at its first position in that order.
//!
//! ## Inputs
//!
//! Tokens are passed as a [`TokenSource`], which is either a flat
//! token slice or a slice of per-line token sequences.

pub mod token_counter;
pub mod token_source;
pub mod vocab_options;
pub mod word_vocab;

#[doc(inline)]
pub use token_counter::TokenCounter;
#[doc(inline)]
pub use token_source::TokenSource;
#[doc(inline)]
pub use vocab_options::{DEFAULT_UNK_TOKEN, VocabOptions};
#[doc(inline)]
pub use word_vocab::Vocab;
