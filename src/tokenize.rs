//! Pattern tokenizer and its lossy inverse.
//!
//! `untokenize(tokenize(s, p))` is not `s`: whitespace runs, punctuation,
//! digits, and (for `LowercaseLetters`) upper-case letters are gone, and the
//! surviving runs are joined with single spaces.

use crate::types::Token;

/// Closed set of token patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSpec {
    /// Maximal runs of `[a-zA-Z]`.
    Letters,
    /// Maximal runs of `[a-z]`.
    LowercaseLetters,
}

impl PatternSpec {
    fn accepts(self, ch: char) -> bool {
        match self {
            PatternSpec::Letters => ch.is_ascii_alphabetic(),
            PatternSpec::LowercaseLetters => ch.is_ascii_lowercase(),
        }
    }

    /// Regex rendering of the pattern.
    pub fn as_regex(self) -> &'static str {
        match self {
            PatternSpec::Letters => "[a-zA-Z]+",
            PatternSpec::LowercaseLetters => "[a-z]+",
        }
    }
}

/// Extract maximal runs matching `pattern`; everything else only separates tokens.
pub fn tokenize(text: &str, pattern: PatternSpec) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if pattern.accepts(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Join tokens with single spaces.
pub fn untokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            joined.push(' ');
        }
        joined.push_str(token.as_ref());
    }
    joined
}

/// Lowercase every token, preserving order.
pub fn lowercase_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Token> {
    tokens.iter().map(|token| token.as_ref().to_lowercase()).collect()
}

/// Split on any whitespace and rejoin with single spaces (leading/trailing removed).
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_pattern_keeps_mixed_case_runs() {
        assert_eq!(
            tokenize("RT I CAN'T, go2day!!", PatternSpec::Letters),
            vec!["RT", "I", "CAN", "T", "go", "day"]
        );
    }

    #[test]
    fn lowercase_pattern_splits_on_capitals() {
        assert_eq!(
            tokenize("iPhone helloWorld", PatternSpec::LowercaseLetters),
            vec!["i", "hone", "hello", "orld"]
        );
    }

    #[test]
    fn empty_and_letterless_input_yield_no_tokens() {
        assert!(tokenize("", PatternSpec::Letters).is_empty());
        assert!(tokenize("123 !!! ... \t", PatternSpec::Letters).is_empty());
        assert!(tokenize("café", PatternSpec::Letters) == vec!["caf"]);
    }

    #[test]
    fn untokenize_is_only_a_lossy_inverse() {
        let source = "  Ice,   caps\tmelt -- 2 fast! ";
        let round_trip = untokenize(&tokenize(source, PatternSpec::Letters));
        assert_eq!(round_trip, "Ice caps melt fast");
        assert_ne!(round_trip, source);
        assert_eq!(untokenize::<&str>(&[]), "");
    }

    #[test]
    fn lowercase_all_preserves_order_and_duplicates() {
        assert_eq!(lowercase_all(&["CO2", "Ice", "ice"]), vec!["co2", "ice", "ice"]);
    }

    #[test]
    fn collapse_whitespace_trims_and_squeezes() {
        assert_eq!(collapse_whitespace("Alpha\n\n  Beta\tGamma  "), "Alpha Beta Gamma");
        assert_eq!(collapse_whitespace(" \t\n"), "");
    }

    #[test]
    fn patterns_render_as_regex() {
        assert_eq!(PatternSpec::Letters.as_regex(), "[a-zA-Z]+");
        assert_eq!(PatternSpec::LowercaseLetters.as_regex(), "[a-z]+");
    }
}
