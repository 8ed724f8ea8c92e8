//! # Token Source

/// Tokens to build a vocabulary from.
///
/// The caller states the shape of the input; nothing is inferred from the
/// first element.
#[derive(Debug)]
pub enum TokenSource<'a, S> {
    /// A flat sequence of tokens.
    Flat(&'a [S]),

    /// A sequence of per-line token sequences.
    Lines(&'a [Vec<S>]),
}

impl<S> Clone for TokenSource<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TokenSource<'_, S> {}

impl<'a, S: AsRef<str>> TokenSource<'a, S> {
    /// Iterate over all tokens, flattened, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a, S> {
        let (flat, lines): (&'a [S], &'a [Vec<S>]) = match *self {
            Self::Flat(tokens) => (tokens, Default::default()),
            Self::Lines(lines) => (Default::default(), lines),
        };

        flat.iter()
            .chain(lines.iter().flatten())
            .map(|token| token.as_ref())
    }

    /// The total number of tokens.
    pub fn token_count(&self) -> usize {
        match *self {
            Self::Flat(tokens) => tokens.len(),
            Self::Lines(lines) => lines.iter().map(Vec::len).sum(),
        }
    }
}
