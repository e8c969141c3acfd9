/// Lower-cased word tokens from raw utterance text.
///
/// Non-letter characters are dropped outright rather than replaced with
/// spaces, so "don't" tokenizes as "dont". Digits and symbols never appear
/// in tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// First `max_chars` Unicode scalars of `text`. Counting chars instead of
/// bytes means truncation can never split a code point.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("The App Works"), vec!["the", "app", "works"]);
    }

    #[test]
    fn drops_punctuation_without_inserting_spaces() {
        assert_eq!(tokenize("don't"), vec!["dont"]);
        assert_eq!(tokenize("well-known"), vec!["wellknown"]);
    }

    #[test]
    fn drops_digits_and_symbols() {
        assert_eq!(tokenize("v2 costs $30 per seat!"), vec!["v", "costs", "per", "seat"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  123 $%^ ").is_empty());
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        assert_eq!(excerpt("héllo", 2), "hé");
        assert_eq!(excerpt("short", 100), "short");
    }
}
