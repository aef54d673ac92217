//! Tokenisation shared by the vector space and the frequency signal.
#![forbid(unsafe_code)]

/// Minimum number of characters a token needs to be kept.
const MIN_TOKEN_CHARS: usize = 2;

/// Split `text` into lower-cased word tokens.
///
/// Words are runs of alphanumeric characters or `_`; single-character
/// words are dropped.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().nth(MIN_TOKEN_CHARS - 1).is_some())
        .map(str::to_lowercase)
}

/// Join an ingredient list into the single document a restaurant
/// contributes to the vector space.
pub(crate) fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(" ")
}
