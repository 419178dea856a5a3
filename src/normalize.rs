//! Whitespace normalization for extracted text.
//!
//! Extractors hand back text full of layout artifacts: indented lines, runs of
//! spaces used for alignment, and blank lines between blocks. [`normalize`]
//! reduces that to one trimmed, single-spaced line per non-blank input line.

/// Unicode whitespace, plus the ASCII information separators (U+001C..U+001F)
/// which some extractors emit as field breaks.
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse every run of whitespace in `line` into a single space.
fn collapse_whitespace(line: &str) -> String {
    line.split(is_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize extracted text.
///
/// Splits on `\n`, trims each line, drops lines that end up empty, collapses
/// internal whitespace to single spaces and joins the survivors with `\n`.
/// The result never ends with a newline and the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_matches(is_whitespace))
        .filter(|line| !line.is_empty())
        .map(collapse_whitespace)
        .collect::<Vec<_>>()
        .join("\n")
}
