/// Normalized word tokens of `text`: whitespace separated, lowercased, with
/// surrounding punctuation stripped. Tokens that are pure punctuation vanish.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize)
}

pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Punctuation before and after the word part of `raw`.
pub fn affixes(raw: &str) -> (&str, &str) {
    let start = raw.find(|c: char| c.is_alphanumeric()).unwrap_or(raw.len());
    let end = raw
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(start);
    (&raw[..start], &raw[end..])
}
