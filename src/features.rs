use serde::Serialize;

use crate::constants::features::{
    FEATURE_COLUMNS, HASHTAG_MARKER, HYPERLINK_MARKER, MENTION_MARKER, RETWEET_MARKER,
};
use crate::data::Record;
use crate::lexicon::LexiconStore;
use crate::normalize::clean;
use crate::sentiment::SentimentScorer;
use crate::tokenize::{PatternSpec, tokenize};
use crate::types::Token;

/// Fixed-schema feature vector for one record.
///
/// Field order matches [`FeatureVector::COLUMNS`]; serialization emits the
/// fields in that order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Sentiment polarity of the raw text, `[-1, 1]`.
    pub polarity: f64,
    /// Sentiment subjectivity of the raw text, `[0, 1]`.
    pub subjectivity: f64,
    /// Character count of the raw text.
    pub length: usize,
    /// Raw text contains `http`.
    pub hyperlink_present: u8,
    /// Raw text contains `RT`.
    pub retweet_present: u8,
    /// Raw text contains `@`.
    pub mention_present: u8,
    /// Occurrences of `@`.
    pub mention_count: usize,
    /// Raw text contains `#`.
    pub hashtag_present: u8,
    /// Occurrences of `#`.
    pub hashtag_count: usize,
    /// Raw text contains `!`.
    pub exclamation_point: u8,
    /// Raw text contains `?`.
    pub question_mark: u8,
    /// Raw text contains `$`.
    pub dollar_sign: u8,
    /// Raw text contains `%`.
    pub percent_symbol: u8,
    /// Raw text contains `:`.
    pub colon: u8,
    /// Raw text contains `;`.
    pub semi_colon: u8,
    /// Distinct news-lexicon entries found in the cleaned text.
    pub news_association: usize,
    /// Distinct climate-lexicon entries found in the cleaned text.
    pub climate_association: usize,
    /// Distinct democratic-lexicon entries found in the cleaned text.
    pub democratic_association: usize,
    /// Distinct republican-lexicon entries found in the cleaned text.
    pub republican_association: usize,
    /// Some letters-only token of the raw text is entirely upper-case.
    pub uppercase_present: u8,
}

impl FeatureVector {
    /// Column names in schema order.
    pub const COLUMNS: [&'static str; 20] = FEATURE_COLUMNS;

    /// Values aligned with [`FeatureVector::COLUMNS`].
    pub fn values(&self) -> [f64; 20] {
        [
            self.polarity,
            self.subjectivity,
            self.length as f64,
            f64::from(self.hyperlink_present),
            f64::from(self.retweet_present),
            f64::from(self.mention_present),
            self.mention_count as f64,
            f64::from(self.hashtag_present),
            self.hashtag_count as f64,
            f64::from(self.exclamation_point),
            f64::from(self.question_mark),
            f64::from(self.dollar_sign),
            f64::from(self.percent_symbol),
            f64::from(self.colon),
            f64::from(self.semi_colon),
            self.news_association as f64,
            self.climate_association as f64,
            self.democratic_association as f64,
            self.republican_association as f64,
            f64::from(self.uppercase_present),
        ]
    }

    /// Value of one named column, if it exists.
    pub fn get(&self, column: &str) -> Option<f64> {
        Self::COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|idx| self.values()[idx])
    }
}

/// `1` when `marker` occurs anywhere in `text`.
pub fn presence_flag(text: &str, marker: &str) -> u8 {
    u8::from(text.contains(marker))
}

/// Non-overlapping occurrences of `marker` in `text`.
pub fn occurrence_count(text: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    text.matches(marker).count()
}

/// `1` when any token has a cased character and no lower-case character.
pub fn check_uppercase<S: AsRef<str>>(tokens: &[S]) -> u8 {
    let any_upper = tokens.iter().any(|token| {
        let token = token.as_ref();
        token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
    });
    u8::from(any_upper)
}

/// Tokens outside the tier-1 vocabulary, order and duplicates preserved.
pub fn uncommon_terms<S: AsRef<str>>(tokens: &[S], store: &LexiconStore) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| !store.tier_one.contains(token))
        .map(str::to_string)
        .collect()
}

/// Per-record feature derivation; holds only the sentiment scorer.
#[derive(Clone, Debug, Default)]
pub struct FeatureExtractor {
    scorer: SentimentScorer,
}

impl FeatureExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive features, cleaning the text internally for association counts.
    pub fn extract(&self, record: &Record, store: &LexiconStore) -> FeatureVector {
        match record.text.as_deref() {
            Some(raw) => self.extract_text(raw, &clean(raw), store),
            None => FeatureVector::default(),
        }
    }

    /// Derive features from raw text plus its already-cleaned form.
    ///
    /// Markers, punctuation, length, sentiment and upper-case presence read
    /// `raw`; association counts read `cleaned`.
    pub fn extract_text(&self, raw: &str, cleaned: &str, store: &LexiconStore) -> FeatureVector {
        let sentiment = self.scorer.score(raw);
        let [news, climate, democratic, republican] = store
            .association_lexicons()
            .map(|lexicon| lexicon.association_count(cleaned));

        FeatureVector {
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
            length: raw.chars().count(),
            hyperlink_present: presence_flag(raw, HYPERLINK_MARKER),
            retweet_present: presence_flag(raw, RETWEET_MARKER),
            mention_present: presence_flag(raw, MENTION_MARKER),
            mention_count: occurrence_count(raw, MENTION_MARKER),
            hashtag_present: presence_flag(raw, HASHTAG_MARKER),
            hashtag_count: occurrence_count(raw, HASHTAG_MARKER),
            exclamation_point: presence_flag(raw, "!"),
            question_mark: presence_flag(raw, "?"),
            dollar_sign: presence_flag(raw, "$"),
            percent_symbol: presence_flag(raw, "%"),
            colon: presence_flag(raw, ":"),
            semi_colon: presence_flag(raw, ";"),
            news_association: news,
            climate_association: climate,
            democratic_association: democratic,
            republican_association: republican,
            uppercase_present: check_uppercase(&tokenize(raw, PatternSpec::Letters)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn store() -> LexiconStore {
        LexiconStore::load().unwrap()
    }

    #[test]
    fn single_character_flags_read_raw_text() {
        let features = FeatureExtractor::new().extract(&Record::new("r0", "50% off!!"), &store());
        assert_eq!(features.percent_symbol, 1);
        assert_eq!(features.exclamation_point, 1);
        assert_eq!(features.dollar_sign, 0);
        assert_eq!(features.question_mark, 0);
        assert_eq!(features.length, 9);
    }

    #[test]
    fn markers_are_substring_matches_with_counts() {
        let features = FeatureExtractor::new().extract(
            &Record::new("r1", "RT @a @b #climate #ClimateChange https://t.co/x: yes; ok?"),
            &store(),
        );
        assert_eq!(features.retweet_present, 1);
        assert_eq!(features.hyperlink_present, 1);
        assert_eq!(features.mention_present, 1);
        assert_eq!(features.mention_count, 2);
        assert_eq!(features.hashtag_present, 1);
        assert_eq!(features.hashtag_count, 2);
        assert_eq!(features.colon, 1);
        assert_eq!(features.semi_colon, 1);
        assert_eq!(features.question_mark, 1);
        assert_eq!(features.uppercase_present, 1);
    }

    #[test]
    fn malformed_records_produce_zero_features() {
        let features = FeatureExtractor::new().extract(&Record::malformed("r2"), &store());
        assert_eq!(features, FeatureVector::default());
        assert!(features.values().iter().all(|value| *value == 0.0));
    }

    #[test]
    fn association_counts_use_cleaned_text() {
        let store = store();
        let features = FeatureExtractor::new().extract_text(
            "GLOBAL WARMING!!!",
            "global warming",
            &store,
        );
        assert!(features.climate_association >= 1);
        assert_eq!(
            features.climate_association,
            store.climate.association_count("global warming")
        );
    }

    #[test]
    fn schema_is_identical_across_records() {
        let extractor = FeatureExtractor::new();
        let store = store();
        let keys = |record: Record| -> Vec<String> {
            let value = serde_json::to_value(extractor.extract(&record, &store)).unwrap();
            match value {
                Value::Object(map) => map.keys().cloned().collect(),
                other => panic!("unexpected {other}"),
            }
        };
        let first = keys(Record::new("a", "Climate change is REAL #science"));
        let second = keys(Record::malformed("b"));
        assert_eq!(first, second);
        assert_eq!(first, FeatureVector::COLUMNS.to_vec());
    }

    #[test]
    fn get_reads_columns_by_name() {
        let features = FeatureVector {
            mention_count: 3,
            ..FeatureVector::default()
        };
        assert_eq!(features.get("mention_count"), Some(3.0));
        assert_eq!(features.get("nonexistent"), None);
    }

    #[test]
    fn uppercase_and_uncommon_helpers() {
        assert_eq!(check_uppercase(&["Climate", "NOW"]), 1);
        assert_eq!(check_uppercase(&["Climate", "now"]), 0);
        assert_eq!(check_uppercase::<&str>(&[]), 0);
        let store = store();
        assert_eq!(
            uncommon_terms(&["april", "glacier", "april"], &store),
            vec!["glacier".to_string()]
        );
    }

    #[test]
    fn occurrence_count_ignores_empty_markers() {
        assert_eq!(occurrence_count("aaa", ""), 0);
        assert_eq!(occurrence_count("RTRT", "RT"), 2);
    }
}
