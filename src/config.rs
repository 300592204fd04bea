use std::borrow::Cow;

use crate::constants::features::FEATURE_COLUMNS;
use crate::constants::labels::DEFAULT_LABEL_COLUMN;
use crate::constants::normalize::DEFAULT_MIN_LEMMA_LEN;
use crate::constants::output::{CLEANED_COLUMN, ID_COLUMN, LEMMATIZED_COLUMN};
use crate::errors::PipelineError;
use crate::types::ColumnName;

/// Source column that carries the raw message text.
///
/// Training tables name it `message`; the location-tagged tables name it `tweet`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextColumn {
    /// The `message` column of labeled training tables.
    #[default]
    Message,
    /// The `tweet` column of location-tagged tables.
    Tweet,
    /// Any other column name.
    Custom(Cow<'static, str>),
}

impl TextColumn {
    /// Return the bound column name.
    pub fn name(&self) -> &str {
        match self {
            TextColumn::Message => "message",
            TextColumn::Tweet => "tweet",
            TextColumn::Custom(name) => name.as_ref(),
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Column the message text is read from when binding loosely typed rows.
    pub text_column: TextColumn,
    /// Column the stance label is read from; `None` for unlabeled tables.
    pub label_column: Option<ColumnName>,
    /// Minimum token length kept by the lemmatizer.
    pub min_lemma_len: usize,
    /// Attach the cleaned text to each output row.
    pub emit_cleaned: bool,
    /// Attach the lemmatized text to each output row.
    pub emit_lemmatized: bool,
    /// Process batch records on the rayon pool.
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_column: TextColumn::default(),
            label_column: Some(DEFAULT_LABEL_COLUMN.to_string()),
            min_lemma_len: DEFAULT_MIN_LEMMA_LEN,
            emit_cleaned: true,
            emit_lemmatized: true,
            parallel: true,
        }
    }
}

/// Whether `name` is written by the pipeline itself (id, features, derived text).
pub fn is_generated_column(name: &str) -> bool {
    name == ID_COLUMN
        || name == CLEANED_COLUMN
        || name == LEMMATIZED_COLUMN
        || FEATURE_COLUMNS.contains(&name)
}

impl PipelineConfig {
    /// Output key for the stance label; unlabeled tables use the default name.
    pub fn label_output_column(&self) -> &str {
        self.label_column.as_deref().unwrap_or(DEFAULT_LABEL_COLUMN)
    }

    /// Reject settings that would break the output schema or drop every token.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.min_lemma_len == 0 {
            return Err(PipelineError::Configuration(
                "min_lemma_len must be at least 1".to_string(),
            ));
        }
        if self.text_column.name().trim().is_empty() {
            return Err(PipelineError::Configuration(
                "text column name must not be empty".to_string(),
            ));
        }
        if is_generated_column(self.text_column.name()) {
            return Err(PipelineError::Configuration(format!(
                "text column '{}' collides with a generated output column",
                self.text_column.name()
            )));
        }
        if let Some(label) = &self.label_column {
            if label.trim().is_empty() {
                return Err(PipelineError::Configuration(
                    "label column name must not be empty".to_string(),
                ));
            }
            if is_generated_column(label) {
                return Err(PipelineError::Configuration(format!(
                    "label column '{label}' collides with a generated output column"
                )));
            }
            if label == self.text_column.name() {
                return Err(PipelineError::Configuration(format!(
                    "label column '{label}' must differ from the text column"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_binds_message() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text_column.name(), "message");
        assert_eq!(config.label_column.as_deref(), Some("sentiment"));
        assert_eq!(config.min_lemma_len, 3);
    }

    #[test]
    fn text_column_names_are_stable() {
        assert_eq!(TextColumn::Tweet.name(), "tweet");
        assert_eq!(TextColumn::Custom("body".into()).name(), "body");
    }

    #[test]
    fn validate_rejects_degenerate_settings() {
        let zero_len = PipelineConfig {
            min_lemma_len: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            zero_len.validate(),
            Err(PipelineError::Configuration(ref msg)) if msg.contains("min_lemma_len")
        ));

        let blank_column = PipelineConfig {
            text_column: TextColumn::Custom("  ".into()),
            ..PipelineConfig::default()
        };
        assert!(blank_column.validate().is_err());

        let clashing = PipelineConfig {
            label_column: Some("message".to_string()),
            ..PipelineConfig::default()
        };
        assert!(matches!(
            clashing.validate(),
            Err(PipelineError::Configuration(ref msg)) if msg.contains("must differ")
        ));
    }

    #[test]
    fn validate_rejects_bound_columns_named_like_generated_ones() {
        let text_as_feature = PipelineConfig {
            text_column: TextColumn::Custom("length".into()),
            ..PipelineConfig::default()
        };
        assert!(matches!(
            text_as_feature.validate(),
            Err(PipelineError::Configuration(ref msg)) if msg.contains("'length'")
        ));

        let label_as_id = PipelineConfig {
            label_column: Some("id".to_string()),
            ..PipelineConfig::default()
        };
        assert!(label_as_id.validate().is_err());

        assert!(is_generated_column("lemmatized"));
        assert!(!is_generated_column("tweetid"));
        assert_eq!(
            PipelineConfig {
                label_column: None,
                ..PipelineConfig::default()
            }
            .label_output_column(),
            "sentiment"
        );
    }
}
