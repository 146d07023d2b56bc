//! Query and document tokenizer.
//!
//! Lowercases, turns every character that is not a word character or
//! whitespace into a separator, splits on whitespace, and discards tokens of
//! two characters or fewer. No stemming and no stop-word list: the length
//! filter is the only noise filter.

/// Tokens with this many characters or fewer are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Tokenize `text` into normalised terms.
///
/// Word characters are alphanumerics and `_`. Length is counted in
/// characters, not bytes, so short non-ASCII words are filtered the same way
/// as short ASCII ones.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalised: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalised
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}
