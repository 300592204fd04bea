#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pipeline configuration types.
pub mod config;
/// Centralized constants: feature schema, markers, sentinels, label encodings.
pub mod constants;
/// Label, record, and output row types.
pub mod data;
/// Fixed-schema feature vector and extractor.
pub mod features;
/// US location tagging and filtering.
pub mod geo;
/// Immutable word lists and the lexicon store.
pub mod lexicon;
/// Message cleaning and lemmatization.
pub mod normalize;
/// JSON-lines handoff writer.
pub mod output;
/// Record-to-row pipeline.
pub mod pipeline;
/// Per-label aggregate statistics.
pub mod reporting;
/// Lexicon-based sentiment scoring.
pub mod sentiment;
/// Pattern tokenizer.
pub mod tokenize;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{PipelineConfig, TextColumn};
pub use data::{FeatureRow, Label, Record};
pub use errors::PipelineError;
pub use features::{FeatureExtractor, FeatureVector};
pub use geo::{SplitTokens, find_us, is_us_location, location_tag, try_split};
pub use lexicon::{Lexicon, LexiconSources, LexiconStore};
pub use normalize::{TextNormalizer, clean, expand_contractions};
pub use output::OutputSchema;
pub use pipeline::Pipeline;
pub use reporting::{PerLabel, Ratio, ThresholdShares};
pub use sentiment::{Sentiment, SentimentScorer};
pub use tokenize::{PatternSpec, tokenize, untokenize};
pub use types::{ColumnName, ColumnValue, LexiconEntry, LexiconName, LocationTag, RecordId, Token};
