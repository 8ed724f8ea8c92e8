//! # Line Tokenizing
//!
//! Splits normalized lines into word or character tokens.
//!
//! The output is a sequence of per-line token sequences, in line order.

mod line_tokenizer;
mod tokenize_mode;

#[doc(inline)]
pub use line_tokenizer::{tokenize, tokenize_line, tokenize_with_mode_name};
#[doc(inline)]
pub use tokenize_mode::TokenizeMode;
