use std::io;

use thiserror::Error;

use crate::types::{ColumnName, LexiconName};

/// Error type for lexicon loading, configuration, label decoding, and output failures.
///
/// Text-processing operations are total and never produce this error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A built-in or supplied word list is empty or has an empty entry.
    #[error("lexicon '{lexicon}' failed to load: {reason}")]
    LexiconLoad {
        /// Lexicon that failed.
        lexicon: LexiconName,
        /// What was wrong with it.
        reason: String,
    },
    /// A label cell is outside both encodings.
    #[error("label encoding '{value}' is not one of the four stance classes")]
    InvalidLabel {
        /// Offending cell, rendered as text.
        value: String,
    },
    /// A bound text or label column is absent from a row.
    #[error("record is missing required column '{column}'")]
    MissingColumn {
        /// Missing column name.
        column: ColumnName,
    },
    /// Invalid pipeline settings or an unknown feature column.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Output I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Output serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
