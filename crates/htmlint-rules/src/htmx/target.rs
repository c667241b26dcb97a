//! `hx-target`: a CSS selector, a special word, or `keyword selector`.

use super::vocab::HtmxVocabulary;
use super::Issue;

pub(crate) fn validate(vocab: &HtmxVocabulary, value: &str) -> Vec<Issue> {
    let value = value.trim();
    // Single words are specials or plain selectors; selectors are not parsed.
    let Some((keyword, _selector)) = value.split_once(char::is_whitespace) else {
        return Vec::new();
    };

    let lower = keyword.to_ascii_lowercase();
    if vocab.is_target_keyword(&lower) || vocab.is_target_special(&lower) {
        return Vec::new();
    }

    vec![Issue::warning(format!(
        "invalid hx-target keyword '{keyword}'; expected 'this', 'closest', 'find', 'next', 'previous', or a CSS selector"
    ))]
}
