//! Message tokenizer

use std::collections::BTreeSet;

/// Tokenize a message into its set of distinct words
///
/// Splits on whitespace, lowercases each token and deletes every character
/// that is not an ASCII letter, so "don't" becomes "dont". Tokens left empty
/// are dropped. Each word appears once no matter how often it occurs.
///
/// The set is ordered so that sums over it are reproducible.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(is_separator)
        .filter(|raw| !raw.is_empty())
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Whitespace that separates words
///
/// Non-breaking spaces and NEL join their neighbours; the ASCII
/// information separators U+001C..U+001F split.
fn is_separator(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}
