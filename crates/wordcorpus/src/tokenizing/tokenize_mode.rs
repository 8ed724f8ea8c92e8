//! # Tokenize Mode

use core::str::FromStr;

use crate::errors::{WCResult, WordcorpusError};

/// The unit a line is split into.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum TokenizeMode {
    /// Whitespace separated words.
    Word,

    /// Single characters.
    #[default]
    Char,
}

impl TokenizeMode {
    /// Parse a mode name.
    ///
    /// ## Arguments
    /// * `name` - one of `"word"` or `"char"`.
    ///
    /// ## Returns
    /// The mode; or [`WordcorpusError::InvalidArgument`] for any other name.
    pub fn try_from_name(name: &str) -> WCResult<Self> {
        Self::from_str(name)
            .map_err(|_| WordcorpusError::InvalidArgument(format!("unknown token type: {name}")))
    }
}
