//! # Corpus Line Loader

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::errors::WCResult;

/// Matches maximal runs of non-alphabetic characters.
static NON_ALPHA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z]+").expect("regex pattern compilation failed"));

/// Normalize a single line of raw text.
///
/// ## Arguments
/// * `line` - the raw line.
///
/// ## Returns
/// The line with non-alphabetic runs collapsed to a single space,
/// leading and trailing whitespace removed, lower-cased.
pub fn normalize_line(line: &str) -> String {
    NON_ALPHA_RUN
        .replace_all(line, " ")
        .trim()
        .to_ascii_lowercase()
}

/// Read and normalize all lines from a [`BufRead`] stream.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// The normalized lines, in source order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(reader)))]
pub fn read_lines<R: BufRead>(reader: R) -> WCResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(normalize_line(&line?));
    }
    log::debug!("read {} lines", lines.len());
    Ok(lines)
}

/// Read and normalize all lines of a text file.
///
/// ## Arguments
/// * `path` - the path to the text file.
pub fn load_lines_path<P: AsRef<Path>>(path: P) -> WCResult<Vec<String>> {
    let path = path.as_ref();
    log::info!("loading corpus: {}", path.display());

    let file = File::open(path)?;
    read_lines(BufReader::new(file))
}
