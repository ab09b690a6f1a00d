// Phrase tokenization.
//
// A word is a maximal run of alphanumeric or apostrophe characters; any
// other character separates words. Apostrophes stay inside tokens so
// contractions ("let's", "'twas") survive as single words. Tokens are
// lowercased — the one casing rule shared with dictionary headwords and
// override keys.

/// Split a phrase into lowercase words, discarding empty tokens.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
