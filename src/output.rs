use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value, json};
use tracing::info;

use crate::config::{PipelineConfig, is_generated_column};
use crate::constants::output::{CLEANED_COLUMN, ID_COLUMN, LEMMATIZED_COLUMN};
use crate::data::FeatureRow;
use crate::errors::PipelineError;
use crate::features::FeatureVector;
use crate::types::ColumnName;

/// Column layout of the output table for one pipeline configuration.
///
/// The text and label keep their source column names. Pass-through columns
/// may not reuse any output key; such a row is rejected instead of one value
/// silently replacing another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSchema {
    text_column: ColumnName,
    label_column: ColumnName,
}

impl OutputSchema {
    /// Layout for rows produced under `config`.
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            text_column: config.text_column.name().to_string(),
            label_column: config.label_output_column().to_string(),
        })
    }

    /// Output key carrying the raw message text.
    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Output key carrying the signed label code.
    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    fn is_reserved(&self, name: &str) -> bool {
        name == self.text_column || name == self.label_column || is_generated_column(name)
    }

    /// Render one row as a JSON object.
    ///
    /// Key order: `id`, text column, label column (signed code), pass-through
    /// columns, the feature columns in schema order, then
    /// `cleaned`/`lemmatized` when present.
    pub fn row_to_json(&self, row: &FeatureRow) -> Result<Value, PipelineError> {
        let mut object = Map::new();
        object.insert(ID_COLUMN.to_string(), json!(row.record.id));
        object.insert(self.text_column.clone(), json!(row.record.text));
        object.insert(
            self.label_column.clone(),
            json!(row.record.label.map(|label| label.code())),
        );
        for (name, value) in &row.record.columns {
            if self.is_reserved(name) {
                return Err(PipelineError::Configuration(format!(
                    "record {} column '{name}' collides with an output column",
                    row.record.id
                )));
            }
            object.insert(name.clone(), json!(value));
        }
        let features = row.features.values();
        for (idx, column) in FeatureVector::COLUMNS.iter().enumerate() {
            let value = match *column {
                "polarity" | "subjectivity" => json!(features[idx]),
                _ => json!(features[idx] as u64),
            };
            object.insert((*column).to_string(), value);
        }
        if let Some(cleaned) = &row.cleaned {
            object.insert(CLEANED_COLUMN.to_string(), json!(cleaned));
        }
        if let Some(lemmatized) = &row.lemmatized {
            object.insert(LEMMATIZED_COLUMN.to_string(), json!(lemmatized));
        }
        Ok(Value::Object(object))
    }

    /// Write one JSON object per line; returns the number of rows written.
    ///
    /// A colliding pass-through column fails the write at that row.
    pub fn write_jsonl<W: Write>(
        &self,
        rows: &[FeatureRow],
        writer: W,
    ) -> Result<usize, PipelineError> {
        let mut writer = BufWriter::new(writer);
        for row in rows {
            serde_json::to_writer(&mut writer, &self.row_to_json(row)?)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(rows.len())
    }

    /// Write rows to `path` as JSON lines, creating parent directories.
    pub fn write_jsonl_file(&self, rows: &[FeatureRow], path: &Path) -> Result<usize, PipelineError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let written = self.write_jsonl(rows, fs::File::create(path)?)?;
        info!(
            "[stance:output] wrote {} rows to {}",
            written,
            path.display()
        );
        Ok(written)
    }
}
