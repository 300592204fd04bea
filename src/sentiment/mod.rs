//! Lexicon-based polarity and subjectivity scoring.
//!
//! Each scored word carries a `(polarity, subjectivity)` pair. Intensifiers
//! scale the next scored word, negations flip and damp its polarity, and
//! phrase punctuation clears any pending modifier. The text score is the mean
//! over scored words.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

mod words;

use words::{INTENSIFIERS, WORD_SCORES};

/// Polarity multiplier applied to a negated word.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: [&str; 5] = ["not", "never", "no", "cannot", "nor"];

static INTENSIFIER_TABLE: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

static SCORE_TABLE: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    WORD_SCORES
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

/// Text-level sentiment score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Sentiment {
    /// Polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
}

enum Piece {
    Word(String),
    PhraseBreak,
}

/// Scores raw message text with the embedded sentiment lexicon.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    /// Create the scorer.
    pub fn new() -> Self {
        Self
    }

    /// Score `text`; text without scored words is neutral and objective.
    pub fn score(&self, text: &str) -> Sentiment {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for piece in split_phrases(text) {
            let word = match piece {
                Piece::PhraseBreak => {
                    intensity = 1.0;
                    negated = false;
                    continue;
                }
                Piece::Word(word) => word,
            };
            if is_negation(&word) {
                negated = true;
                continue;
            }
            if let Some(multiplier) = INTENSIFIER_TABLE.get(word.as_str()) {
                intensity *= multiplier;
                continue;
            }
            if let Some(&(polarity, subjectivity)) = SCORE_TABLE.get(word.as_str()) {
                let mut polarity = polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity);
                subjectivities.push(subjectivity * intensity);
                intensity = 1.0;
                negated = false;
            }
        }

        if polarities.is_empty() {
            return Sentiment::default();
        }
        Sentiment {
            polarity: mean(&polarities).clamp(-1.0, 1.0),
            subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
        }
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

fn split_phrases(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_alphabetic() || (ch == '\'' && !current.is_empty()) {
            current.extend(ch.to_lowercase());
            continue;
        }
        if !current.is_empty() {
            pieces.push(Piece::Word(std::mem::take(&mut current)));
        }
        if matches!(ch, '.' | ',' | '!' | '?' | ';' | ':') {
            pieces.push(Piece::PhraseBreak);
        }
    }
    if !current.is_empty() {
        pieces.push(Piece::Word(current));
    }
    pieces
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
