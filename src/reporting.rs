//! Per-label aggregate statistics over processed rows.
//!
//! Unlabeled rows are ignored. A label with no rows reports `None`, rendered
//! as `"n/a"` by [`format_ratio`].

use std::collections::HashMap;

use crate::constants::reporting::{NOT_APPLICABLE, SHARE_DECIMALS};
use crate::data::{FeatureRow, Label};
use crate::errors::PipelineError;
use crate::features::{FeatureVector, uncommon_terms};
use crate::lexicon::{Lexicon, LexiconStore};
use crate::tokenize::{PatternSpec, lowercase_all, tokenize, untokenize};
use crate::types::Token;

/// Share or mean over one label's rows; `None` when the label has no rows.
pub type Ratio = Option<f64>;

/// One value per stance label, in [`Label::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct PerLabel<T> {
    values: [T; 4],
}

impl<T> PerLabel<T> {
    fn from_fn(build: impl FnMut(Label) -> T) -> Self {
        Self {
            values: Label::ALL.map(build),
        }
    }

    /// Value for `label`.
    pub fn get(&self, label: Label) -> &T {
        let idx = Label::ALL
            .iter()
            .position(|candidate| *candidate == label)
            .unwrap_or_default();
        &self.values[idx]
    }

    /// `(label, value)` pairs in canonical label order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> {
        Label::ALL.into_iter().zip(self.values.iter())
    }
}

/// Shares of a label's rows strictly below and strictly above a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdShares {
    /// Share with `value < threshold`.
    pub below: Ratio,
    /// Share with `value > threshold`.
    pub above: Ratio,
}

/// Render a ratio with three decimals, or `"n/a"`.
pub fn format_ratio(ratio: Ratio) -> String {
    match ratio {
        Some(value) => format!("{value:.3}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

fn round_share(value: f64) -> f64 {
    let scale = 10f64.powi(SHARE_DECIMALS);
    (value * scale).round() / scale
}

fn rows_for(rows: &[FeatureRow], label: Label) -> Vec<&FeatureRow> {
    rows.iter()
        .filter(|row| row.record.label == Some(label))
        .collect()
}

fn feature_index(feature: &str) -> Result<usize, PipelineError> {
    FeatureVector::COLUMNS
        .iter()
        .position(|column| *column == feature)
        .ok_or_else(|| PipelineError::Configuration(format!("unknown feature column '{feature}'")))
}

fn share_where(
    subset: &[&FeatureRow],
    idx: usize,
    predicate: impl Fn(f64) -> bool,
) -> Ratio {
    if subset.is_empty() {
        return None;
    }
    let hits = subset
        .iter()
        .filter(|row| predicate(row.features.values()[idx]))
        .count();
    Some(hits as f64 / subset.len() as f64)
}

/// Per-label shares of rows below and above `threshold` on `feature`, rounded to three decimals.
pub fn threshold_report(
    rows: &[FeatureRow],
    feature: &str,
    threshold: f64,
) -> Result<PerLabel<ThresholdShares>, PipelineError> {
    let idx = feature_index(feature)?;
    Ok(PerLabel::from_fn(|label| {
        let subset = rows_for(rows, label);
        ThresholdShares {
            below: share_where(&subset, idx, |value| value < threshold).map(round_share),
            above: share_where(&subset, idx, |value| value > threshold).map(round_share),
        }
    }))
}

/// Per-label share of rows where `feature` is non-zero.
pub fn presence_rates(
    rows: &[FeatureRow],
    feature: &str,
) -> Result<PerLabel<Ratio>, PipelineError> {
    let idx = feature_index(feature)?;
    Ok(PerLabel::from_fn(|label| {
        share_where(&rows_for(rows, label), idx, |value| value != 0.0)
    }))
}

/// Per-label mean of `feature`.
pub fn count_means(rows: &[FeatureRow], feature: &str) -> Result<PerLabel<Ratio>, PipelineError> {
    let idx = feature_index(feature)?;
    Ok(PerLabel::from_fn(|label| {
        let subset = rows_for(rows, label);
        if subset.is_empty() {
            return None;
        }
        let total: f64 = subset.iter().map(|row| row.features.values()[idx]).sum();
        Some(total / subset.len() as f64)
    }))
}

fn letters_text(row: &FeatureRow) -> String {
    untokenize(&lowercase_all(&tokenize(
        row.record.text_or_empty(),
        PatternSpec::Letters,
    )))
}

/// Per-label lexicon entries found in the label's combined text, divided by its row count.
///
/// The combined text is every row's lowercased letters-only text joined with spaces.
pub fn association_rates(rows: &[FeatureRow], lexicon: &Lexicon) -> PerLabel<Ratio> {
    PerLabel::from_fn(|label| {
        let subset = rows_for(rows, label);
        if subset.is_empty() {
            return None;
        }
        let combined = subset
            .iter()
            .map(|row| letters_text(row))
            .collect::<Vec<_>>()
            .join(" ");
        Some(lexicon.association_count(&combined) as f64 / subset.len() as f64)
    })
}

/// Most frequent tokens outside the tier-1 vocabulary for one label.
///
/// Ties keep first-seen order.
pub fn top_uncommon_terms(
    rows: &[FeatureRow],
    label: Label,
    limit: usize,
    store: &LexiconStore,
) -> Vec<(Token, usize)> {
    let mut order: Vec<Token> = Vec::new();
    let mut counts: HashMap<Token, usize> = HashMap::new();
    for row in rows_for(rows, label) {
        let tokens = lowercase_all(&tokenize(row.record.text_or_empty(), PatternSpec::Letters));
        for term in uncommon_terms(&tokens, store) {
            let count = counts.entry(term.clone()).or_insert(0);
            if *count == 0 {
                order.push(term);
            }
            *count += 1;
        }
    }
    let mut ranked: Vec<(Token, usize)> = order
        .into_iter()
        .map(|term| {
            let count = counts.get(&term).copied().unwrap_or_default();
            (term, count)
        })
        .collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn row(label: Label, text: &str, polarity: f64, hashtags: usize) -> FeatureRow {
        FeatureRow {
            record: Record::new(text, text).with_label(label),
            features: FeatureVector {
                polarity,
                hashtag_present: u8::from(hashtags > 0),
                hashtag_count: hashtags,
                ..FeatureVector::default()
            },
            cleaned: None,
            lemmatized: None,
        }
    }

    fn sample() -> Vec<FeatureRow> {
        vec![
            row(Label::AntiManMade, "Hoax hoax HOAX", -0.5, 0),
            row(Label::AntiManMade, "scam", 0.25, 2),
            row(Label::AntiManMade, "fraud glacier", 0.0, 1),
            row(Label::ManMade, "Glacier melt", 0.4, 3),
        ]
    }

    #[test]
    fn empty_labels_report_not_applicable() {
        let report = threshold_report(&sample(), "polarity", 0.0).unwrap();
        assert_eq!(report.get(Label::Neutral).below, None);
        assert_eq!(format_ratio(report.get(Label::News).above), "n/a");
        assert_eq!(format_ratio(Some(1.0 / 3.0)), "0.333");
    }

    #[test]
    fn threshold_shares_are_strict_and_rounded() {
        let report = threshold_report(&sample(), "polarity", 0.0).unwrap();
        let anti = report.get(Label::AntiManMade);
        assert_eq!(anti.below, Some(0.333));
        assert_eq!(anti.above, Some(0.333));
        assert_eq!(report.get(Label::ManMade).above, Some(1.0));
    }

    #[test]
    fn presence_and_mean_read_the_named_feature() {
        let rows = sample();
        let presence = presence_rates(&rows, "hashtag_present").unwrap();
        assert_eq!(*presence.get(Label::AntiManMade), Some(2.0 / 3.0));
        let means = count_means(&rows, "hashtag_count").unwrap();
        assert_eq!(*means.get(Label::AntiManMade), Some(1.0));
        assert_eq!(*means.get(Label::ManMade), Some(3.0));
        assert_eq!(*means.get(Label::News), None);
        let labels: Vec<Label> = means.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, Label::ALL.to_vec());
    }

    #[test]
    fn unknown_feature_is_a_configuration_error() {
        assert!(matches!(
            count_means(&sample(), "retweets"),
            Err(PipelineError::Configuration(ref msg)) if msg.contains("retweets")
        ));
    }

    #[test]
    fn association_rate_divides_distinct_hits_by_row_count() {
        let lexicon = Lexicon::from_entries("demo", ["hoax", "scam", "glacier", "melt"]).unwrap();
        let rates = association_rates(&sample(), &lexicon);
        assert_eq!(*rates.get(Label::AntiManMade), Some(1.0));
        assert_eq!(*rates.get(Label::ManMade), Some(2.0));
        assert_eq!(*rates.get(Label::Neutral), None);
    }

    #[test]
    fn top_uncommon_terms_ranks_by_frequency() {
        let store = LexiconStore::load().unwrap();
        let top = top_uncommon_terms(&sample(), Label::AntiManMade, 2, &store);
        assert_eq!(top[0], ("hoax".to_string(), 3));
        assert_eq!(top.len(), 2);
        assert!(top_uncommon_terms(&sample(), Label::News, 5, &store).is_empty());
    }
}
