//! Message cleaning and lemmatization.
//!
//! Both stages are total: any string, including the empty string, maps to a
//! (possibly empty) string.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PipelineConfig;
use crate::constants::features::RETWEET_MARKER;
use crate::constants::normalize::DEFAULT_MIN_LEMMA_LEN;
use crate::lexicon::Lexicon;
use crate::tokenize::{PatternSpec, collapse_whitespace, tokenize, untokenize};

mod lemma;

pub use lemma::Lemmatizer;

static MENTION_SYMBOL_OR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)")
        .expect("MENTION_SYMBOL_OR_URL: invalid pattern")
});

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9]+").expect("MENTION: invalid pattern"));

static HTTP_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)http\S+").expect("HTTP_LINK: invalid pattern"));

static MEDIA_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pic\.\S+").expect("MEDIA_LINK: invalid pattern"));

/// Contraction rewrites, specific forms before the generic suffixes.
const CONTRACTIONS: [(&str, &str); 10] = [
    ("won't", "will not"),
    ("can't", "can not"),
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

/// Expand contractions with a fixed ordered table of global replacements.
///
/// This is an approximation, not a contraction grammar: `'s` always becomes
/// `is`, and a bare `'t` left over after the `n't` rule becomes ` not`.
pub fn expand_contractions(phrase: &str) -> String {
    let mut expanded = phrase.to_string();
    for (contracted, replacement) in CONTRACTIONS {
        if expanded.contains(contracted) {
            expanded = expanded.replace(contracted, replacement);
        }
    }
    expanded
}

/// Canonicalize a raw message into lowercase letters-only words.
///
/// Steps, each applied to the previous output:
/// 1. mentions, non-alphanumeric characters, and `scheme://` URLs become spaces; whitespace collapses
/// 2. leftover `@mentions` are dropped
/// 3. `http...` and `pic....` links are dropped
/// 4. contractions expand
/// 5. `RT` markers are removed (and links exposed by the removal dropped), then trimmed
/// 6. lowercase
/// 7. letters-only tokens rejoined with single spaces
pub fn clean(raw: &str) -> String {
    let spaced = MENTION_SYMBOL_OR_URL.replace_all(raw, " ");
    let collapsed = collapse_whitespace(&spaced);
    let unmentioned = MENTION.replace_all(&collapsed, "");
    let unlinked = strip_links(&unmentioned);
    let expanded = expand_contractions(&unlinked);
    let without_retweets = strip_links(&expanded.replace(RETWEET_MARKER, ""));
    let lowered = without_retweets.trim().to_lowercase();
    untokenize(&tokenize(&lowered, PatternSpec::Letters))
}

fn strip_links(text: &str) -> String {
    let without_http = HTTP_LINK.replace_all(text, "");
    MEDIA_LINK.replace_all(&without_http, "").into_owned()
}

/// Cleaning and lemmatization bound to one configuration.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    lemmatizer: Lemmatizer,
    min_lemma_len: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LEMMA_LEN)
    }
}

impl TextNormalizer {
    /// Create a normalizer that keeps lemmas of at least `min_lemma_len` characters.
    pub fn new(min_lemma_len: usize) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(),
            min_lemma_len,
        }
    }

    /// Create a normalizer from pipeline settings.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.min_lemma_len)
    }

    /// See [`clean`].
    pub fn clean(&self, raw: &str) -> String {
        clean(raw)
    }

    /// Lowercase-letter tokens, minus stopwords, reduced to lemmas, minus short tokens.
    ///
    /// Stopwords are checked on the surface token and again on its lemma, so a
    /// plural that reduces to a stopword ("cans" -> "can") is dropped too.
    pub fn lemmatize(&self, raw: &str, stopwords: &Lexicon) -> String {
        let lemmas: Vec<String> = tokenize(raw, PatternSpec::LowercaseLetters)
            .into_iter()
            .filter(|token| !stopwords.contains(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .filter(|lemma| !stopwords.contains(lemma))
            .filter(|lemma| lemma.chars().count() >= self.min_lemma_len)
            .collect();
        untokenize(&lemmas).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconStore;

    #[test]
    fn contraction_order_keeps_specific_forms_intact() {
        assert_eq!(expand_contractions("won't"), "will not");
        assert_eq!(expand_contractions("can't"), "can not");
        assert_eq!(expand_contractions("isn't"), "is not");
        assert_eq!(expand_contractions("they're"), "they are");
        assert_eq!(
            expand_contractions("I'm sure it's what we'd've"),
            "I am sure it is what we would have"
        );
        assert_eq!(expand_contractions("you'll"), "you will");
        assert_eq!(expand_contractions("ma'tam"), "ma notam");
        assert_eq!(expand_contractions("no contractions"), "no contractions");
    }

    #[test]
    fn clean_strips_markers_links_and_symbols() {
        assert_eq!(
            clean("RT @user I CAN'T believe it! https://x.co #climate"),
            "i can t believe it climate"
        );
        assert_eq!(
            clean("@EPA   says CO2 levels up 3% http://t.co/abc pic.twitter.com/xyz"),
            "says co levels up pic twitter com xyz"
        );
        assert_eq!(clean("Ice caps\n\nmelting...FAST"), "ice caps melting fast");
    }

    #[test]
    fn clean_is_total_on_degenerate_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
        assert_eq!(clean("1234 !!! ???"), "");
        assert_eq!(clean("@only @mentions"), "");
        assert_eq!(clean("🌍🔥"), "");
    }

    #[test]
    fn clean_removes_retweet_markers_inside_words() {
        assert_eq!(clean("PARTY time"), "pay time");
        assert_eq!(clean("RRTT"), "rt");
    }

    #[test]
    fn clean_is_idempotent() {
        let samples = [
            "RT @user I CAN'T believe it! https://x.co #climate",
            "HTTPS is fine but HTTPSx was a link",
            "hRTttpx and hRTTTPy",
            "We're DOOMED!!! #ClimateChange @NASA 2017",
            "won't can't shouldn't",
            "pic.twitter.com/abc RT RT RT",
            "tabs\tand\nnewlines",
            "",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "input: {sample:?}");
        }
    }

    #[test]
    fn lemmatize_drops_stopwords_short_tokens_and_plurals() {
        let store = LexiconStore::load().unwrap();
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.lemmatize("the glaciers are melting and the cities flood", &store.stopwords),
            "glacier melting city flood"
        );
        assert_eq!(normalizer.lemmatize("co2 is up by a lot", &store.stopwords), "lot");
        assert_eq!(normalizer.lemmatize("cans of ice", &store.stopwords), "ice");
        assert_eq!(
            normalizer.lemmatize("potatoes heroes volcanoes goes lenses", &store.stopwords),
            "potato hero volcano lens"
        );
        assert_eq!(normalizer.lemmatize("", &store.stopwords), "");
        assert_eq!(normalizer.lemmatize("1234 ???", &store.stopwords), "");
    }

    #[test]
    fn lemmatize_output_respects_length_and_stopword_bounds() {
        let store = LexiconStore::load().unwrap();
        let normalizer = TextNormalizer::default();
        let output = normalizer.lemmatize(
            "we are so sure the oceans and seas will rise as co2 keeps climbing, ok?",
            &store.stopwords,
        );
        for token in output.split_whitespace() {
            assert!(token.len() > 2, "{token}");
            assert!(!store.stopwords.contains(token), "{token}");
        }
        assert_eq!(output, "sure ocean sea rise keep climbing");
    }

    #[test]
    fn lemmatize_uses_lowercase_pattern_only() {
        let store = LexiconStore::load().unwrap();
        let normalizer = TextNormalizer::new(3);
        assert_eq!(normalizer.lemmatize("Glaciers MELT", &store.stopwords), "lacier");
    }
}

#[cfg(test)]
mod properties {
    use std::sync::LazyLock;

    use proptest::prelude::*;

    use super::*;
    use crate::lexicon::LexiconStore;

    static STORE: LazyLock<LexiconStore> =
        LazyLock::new(|| LexiconStore::load().expect("built-in lexicons load"));

    /// Tweet-shaped text: markers, links, contractions and `RT` fragments mixed with noise.
    fn tweet_text() -> impl Strategy<Value = String> {
        let fragment = prop_oneof![
            "[A-Za-z]{1,8}",
            "[ \t\n]{1,3}",
            "[@#!?.,:;$%'/]{1,2}",
            Just("RT".to_string()),
            Just("http".to_string()),
            Just("HTTPS://".to_string()),
            Just("pic.".to_string()),
            Just("n't".to_string()),
            Just("'s".to_string()),
            "[0-9]{1,4}",
        ];
        prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        #[test]
        fn clean_is_idempotent_on_tweet_text(text in tweet_text()) {
            let once = clean(&text);
            prop_assert_eq!(clean(&once), once.clone(), "input: {:?}", text);
        }

        #[test]
        fn clean_is_idempotent_on_any_text(text in "\\PC{0,80}") {
            let once = clean(&text);
            prop_assert_eq!(clean(&once), once.clone(), "input: {:?}", text);
        }

        #[test]
        fn clean_emits_single_spaced_lowercase_letters(text in tweet_text()) {
            let cleaned = clean(&text);
            prop_assert!(cleaned.chars().all(|ch| ch == ' ' || ch.is_ascii_lowercase()));
            prop_assert!(!cleaned.contains("  "));
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }

        #[test]
        fn lemmatize_bounds_hold_for_tweet_text(text in tweet_text()) {
            let normalizer = TextNormalizer::default();
            let output = normalizer.lemmatize(&clean(&text), &STORE.stopwords);
            for token in output.split_whitespace() {
                prop_assert!(token.chars().count() >= DEFAULT_MIN_LEMMA_LEN, "{}", token);
                prop_assert!(!STORE.stopwords.contains(token), "{}", token);
            }
        }
    }
}
