//! Input text normalization.

/// Lowercase `input`, drop every character outside `[a-z0-9]` and
/// whitespace, and collapse whitespace runs to single spaces.
///
/// Total and idempotent; the output alphabet is exactly `[a-z0-9 ]` with no
/// leading or trailing space. Punctuation is deleted rather than spaced, so
/// "node.js" becomes "nodejs".
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-phrase containment on token boundaries. Both sides are expected
/// pre-normalized; "react" is found in "react native" but not in "reacted".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    format!(" {text} ").contains(&format!(" {phrase} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("", "" ; "empty")]
    #[test_case("   ", "" ; "whitespace only")]
    #[test_case("hello", "hello" ; "already normal")]
    #[test_case("Hello World", "hello world" ; "lowercases")]
    #[test_case("What's  YOUR   name?!", "whats your name" ; "punctuation and runs")]
    #[test_case("node.js", "nodejs" ; "dots deleted not spaced")]
    #[test_case("tell\tme\nmore", "tell me more" ; "tabs and newlines")]
    #[test_case("React/Redux, GraphQL & more...", "reactredux graphql more" ; "symbol soup")]
    #[test_case("web3 in 2024", "web3 in 2024" ; "digits survive")]
    #[test_case("café", "caf" ; "non-ascii dropped")]
    fn normalize_cases(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test_case("react native graphql", "react", true ; "token at start")]
    #[test_case("react native graphql", "native", true ; "token in middle")]
    #[test_case("react native graphql", "react native", true ; "multiword phrase")]
    #[test_case("reacted badly", "react", false ; "no partial token")]
    #[test_case("react", "react", true ; "whole text")]
    #[test_case("react", "", false ; "empty phrase never matches")]
    fn contains_phrase_cases(text: &str, phrase: &str, expected: bool) {
        assert_eq!(contains_phrase(text, phrase), expected);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,64}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_alphabet(s in "\\PC{0,64}") {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == ' '));
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }
    }
}
