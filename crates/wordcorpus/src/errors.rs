//! # Error Types

/// Errors from wordcorpus operations.
#[derive(Debug, thiserror::Error)]
pub enum WordcorpusError {
    /// The text source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An argument was outside the accepted set of values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A reverse lookup was given an index outside the vocabulary.
    #[error("index {index} out of range for vocab of size {size}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,

        /// The vocab size.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },
}

/// Result type for wordcorpus operations.
pub type WCResult<T> = core::result::Result<T, WordcorpusError>;
