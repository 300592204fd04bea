//! US location tagging over free-text location values.
//!
//! The tag keeps only the trailing run of consecutive state abbreviations: a
//! single non-matching token resets the accumulator to `"not"`, so
//! `["ca", "zz", "ny"]` tags as `"notny"`.

use tracing::info;

use crate::constants::geo::{NOT_US_MARKER, NOT_US_SENTINEL, STATE_ABBREVIATIONS};
use crate::data::Record;
use crate::lexicon::{Lexicon, LexiconStore};
use crate::types::LocationTag;

/// Result of splitting a location value into words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitTokens {
    /// Whitespace-separated words.
    Words(Vec<String>),
    /// The value was absent or not text.
    NotUs,
}

impl SplitTokens {
    /// Sentinel text for the `NotUs` case.
    pub fn sentinel() -> &'static str {
        NOT_US_SENTINEL
    }
}

/// Concatenate the trailing run of state abbreviations, resetting to `"not"` on any miss.
pub fn find_us<S: AsRef<str>>(tokens: &[S], states: &Lexicon) -> LocationTag {
    let mut tag = String::new();
    for token in tokens {
        let token = token.as_ref();
        if states.contains(token) {
            tag.push_str(token);
        } else {
            tag = NOT_US_MARKER.to_string();
        }
    }
    tag
}

/// Split a location value on whitespace; absent values become [`SplitTokens::NotUs`].
pub fn try_split(value: Option<&str>) -> SplitTokens {
    match value {
        Some(text) => SplitTokens::Words(text.split_whitespace().map(str::to_string).collect()),
        None => SplitTokens::NotUs,
    }
}

/// Tag a location value. `NotUs` splits contain no state and tag as `"not"`.
pub fn location_tag(value: Option<&str>, states: &Lexicon) -> LocationTag {
    match try_split(value) {
        SplitTokens::Words(words) => find_us(&words, states),
        SplitTokens::NotUs => NOT_US_MARKER.to_string(),
    }
}

/// A tag marks a US location when it ends in at least one abbreviation.
pub fn is_us_location(tag: &str) -> bool {
    !tag.is_empty() && tag != NOT_US_MARKER
}

/// Keep records whose `column` metadata tags as a US location.
pub fn filter_us_records(records: &[Record], column: &str, store: &LexiconStore) -> Vec<Record> {
    let kept: Vec<Record> = records
        .iter()
        .filter(|record| {
            let value = record.columns.get(column).map(String::as_str);
            is_us_location(&location_tag(value, &store.us_states))
        })
        .cloned()
        .collect();
    info!(
        "[stance:geo] kept {} of {} records with a US '{}' value",
        kept.len(),
        records.len(),
        column
    );
    kept
}

/// Canonical upper-case state (and DC) abbreviations.
pub fn states_list() -> Vec<&'static str> {
    STATE_ABBREVIATIONS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Lexicon {
        LexiconStore::load().unwrap().us_states
    }

    #[test]
    fn trailing_run_survives_a_mismatch() {
        let states = states();
        assert_eq!(find_us(&["ca", "zz", "ny"], &states), "notny");
        assert_eq!(find_us(&["ca", "ny"], &states), "cany");
        assert_eq!(find_us(&["ca", "zz"], &states), "not");
        assert_eq!(find_us::<&str>(&[], &states), "");
    }

    #[test]
    fn membership_ignores_case_but_keeps_token_text() {
        let states = states();
        assert_eq!(find_us(&["Austin,", "TX"], &states), "notTX");
        assert!(is_us_location("notTX"));
    }

    #[test]
    fn try_split_substitutes_sentinel_for_missing_values() {
        assert_eq!(
            try_split(Some(" Denver  CO ")),
            SplitTokens::Words(vec!["Denver".to_string(), "CO".to_string()])
        );
        assert_eq!(try_split(None), SplitTokens::NotUs);
        assert_eq!(SplitTokens::sentinel(), "not us");
        assert_eq!(location_tag(None, &states()), "not");
    }

    #[test]
    fn us_location_requires_a_trailing_abbreviation() {
        assert!(!is_us_location(""));
        assert!(!is_us_location("not"));
        assert!(is_us_location("ny"));
        assert!(is_us_location("notny"));
    }

    #[test]
    fn filter_keeps_only_us_tagged_records() {
        let store = LexiconStore::load().unwrap();
        let records = vec![
            Record::new("a", "hot").with_column("user_location", "Portland OR"),
            Record::new("b", "cold").with_column("user_location", "London UK"),
            Record::new("c", "warm"),
            Record::new("d", "wet").with_column("user_location", ""),
        ];
        let kept = filter_us_records(&records, "user_location", &store);
        let ids: Vec<&str> = kept.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn states_list_is_upper_case_and_complete() {
        let states = states_list();
        assert_eq!(states.len(), 51);
        assert_eq!(states[0], "AL");
        assert!(states.iter().all(|state| state.chars().all(|ch| ch.is_ascii_uppercase())));
    }
}
