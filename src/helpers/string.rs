//! String splitting utilities shared by the record source and the schedule parser.

/// Splits a line on a single separator character and trims both ends of every token.
/// Empty input yields no tokens, a line without the separator yields one token.
pub(crate) fn split_by(line: &str, separator: char) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split(separator)
        .map(|token| token.trim().to_owned())
        .collect()
}

/// Splits a line on a single separator character without trimming tokens.
/// Consumers that only trim leading whitespace themselves use this variant.
pub(crate) fn split_raw(line: &str, separator: char) -> impl Iterator<Item = &str> + '_ {
    line.split(separator)
}

/// Removes leading whitespace only.
#[inline]
pub(crate) fn trim_start(s: &str) -> &str {
    s.trim_start()
}
