//! # Corpus Loading
//!
//! Reads raw text sources into normalized lines.
//!
//! Normalization replaces every maximal run of non-alphabetic characters
//! with a single space, trims the ends, and lower-cases the result.
//! Empty lines are kept as empty strings.

mod corpus_loader;

#[doc(inline)]
pub use corpus_loader::{load_lines_path, normalize_line, read_lines};
