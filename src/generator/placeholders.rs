//! Detection of placeholder tokens that survived substitution.

use regex::Regex;
use std::sync::LazyLock;

/// `[NAME]` or `[[NAME]]` with an upper-case name. JSON arrays never match
/// because their elements are numbers, quoted strings or objects.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[[A-Z][A-Z0-9_]*\]\]|\[[A-Z][A-Z0-9_]*\]").expect("placeholder pattern is valid")
});

/// Returns each distinct placeholder token in `text`, in order of first appearance.
pub fn find_unresolved(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for found in PLACEHOLDER_REGEX.find_iter(text) {
        let token = found.as_str();
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}
