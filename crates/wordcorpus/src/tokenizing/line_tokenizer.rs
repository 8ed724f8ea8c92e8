//! # Line Tokenizer

use crate::{errors::WCResult, tokenizing::TokenizeMode};

/// Split a single line into tokens.
///
/// ## Arguments
/// * `line` - the normalized line.
/// * `mode` - the token unit.
///
/// ## Returns
/// The line's tokens, in order; empty for an empty line.
pub fn tokenize_line(
    line: &str,
    mode: TokenizeMode,
) -> Vec<String> {
    match mode {
        TokenizeMode::Word => line.split_whitespace().map(str::to_string).collect(),
        TokenizeMode::Char => line.chars().map(String::from).collect(),
    }
}

/// Split each line into tokens.
///
/// ## Arguments
/// * `lines` - the normalized lines.
/// * `mode` - the token unit.
///
/// ## Returns
/// One token sequence per line; line order and in-line token order preserved.
pub fn tokenize<S: AsRef<str>>(
    lines: &[S],
    mode: TokenizeMode,
) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| tokenize_line(line.as_ref(), mode))
        .collect()
}

/// Split each line into tokens, selecting the mode by name.
///
/// ## Arguments
/// * `lines` - the normalized lines.
/// * `mode_name` - `"word"` or `"char"`.
///
/// ## Returns
/// See [`tokenize`]; fails with
/// [`crate::WordcorpusError::InvalidArgument`] for an unknown mode name.
pub fn tokenize_with_mode_name<S: AsRef<str>>(
    lines: &[S],
    mode_name: &str,
) -> WCResult<Vec<Vec<String>>> {
    let mode = TokenizeMode::try_from_name(mode_name)?;
    Ok(tokenize(lines, mode))
}
