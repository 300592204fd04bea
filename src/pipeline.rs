use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::data::{FeatureRow, Record};
use crate::errors::PipelineError;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::lexicon::LexiconStore;
use crate::normalize::TextNormalizer;
use crate::output::OutputSchema;
use crate::types::ColumnName;

/// Record-to-row pipeline over a shared, read-only lexicon store.
///
/// Records are processed independently, so batches may run on the rayon pool
/// without changing the output order.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    store: Arc<LexiconStore>,
    normalizer: TextNormalizer,
    extractor: FeatureExtractor,
}

impl Pipeline {
    /// Validate `config` and bind it to `store`.
    pub fn new(config: PipelineConfig, store: Arc<LexiconStore>) -> Result<Self, PipelineError> {
        config.validate()?;
        let normalizer = TextNormalizer::from_config(&config);
        Ok(Self {
            config,
            store,
            normalizer,
            extractor: FeatureExtractor::new(),
        })
    }

    /// Load the built-in lexicons and build a pipeline with default settings.
    pub fn with_defaults() -> Result<Self, PipelineError> {
        Self::new(PipelineConfig::default(), Arc::new(LexiconStore::load()?))
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Shared lexicon store.
    pub fn store(&self) -> &Arc<LexiconStore> {
        &self.store
    }

    /// Output table layout for this pipeline's rows.
    pub fn output_schema(&self) -> Result<OutputSchema, PipelineError> {
        OutputSchema::new(&self.config)
    }

    /// Produce the output row for one record.
    ///
    /// Lemmatization runs on the cleaned text.
    pub fn process(&self, record: &Record) -> FeatureRow {
        let Some(raw) = record.text.as_deref() else {
            warn!(
                "[stance:pipeline] record {} has non-text content; emitting zero features",
                record.id
            );
            return FeatureRow {
                record: record.clone(),
                features: FeatureVector::default(),
                cleaned: self.config.emit_cleaned.then(String::new),
                lemmatized: self.config.emit_lemmatized.then(String::new),
            };
        };

        let cleaned = self.normalizer.clean(raw);
        let features = self.extractor.extract_text(raw, &cleaned, &self.store);
        let lemmatized = self
            .config
            .emit_lemmatized
            .then(|| self.normalizer.lemmatize(&cleaned, &self.store.stopwords));
        debug!(
            "[stance:pipeline] record {} -> {} cleaned chars",
            record.id,
            cleaned.len()
        );
        FeatureRow {
            record: record.clone(),
            features,
            cleaned: self.config.emit_cleaned.then_some(cleaned),
            lemmatized,
        }
    }

    /// Produce one row per record, in input order.
    pub fn process_batch(&self, records: &[Record]) -> Vec<FeatureRow> {
        let started = Instant::now();
        info!(
            "[stance:pipeline] processing {} records (parallel={})",
            records.len(),
            self.config.parallel
        );
        let rows: Vec<FeatureRow> = if self.config.parallel {
            records.par_iter().map(|record| self.process(record)).collect()
        } else {
            records.iter().map(|record| self.process(record)).collect()
        };
        let malformed = records.iter().filter(|record| record.text.is_none()).count();
        info!(
            "[stance:pipeline] processed {} records in {:.2}s (malformed={})",
            rows.len(),
            started.elapsed().as_secs_f64(),
            malformed
        );
        rows
    }

    /// Bind loosely typed rows with the configured columns, then process them.
    ///
    /// Record ids are row positions. A missing bound column or an invalid
    /// label fails the whole table.
    pub fn process_rows(
        &self,
        rows: &[IndexMap<ColumnName, Value>],
    ) -> Result<Vec<FeatureRow>, PipelineError> {
        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| Record::from_columns(idx.to_string(), row, &self.config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.process_batch(&records))
    }
}
