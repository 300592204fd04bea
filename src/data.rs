use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::constants::labels::{LABEL_CODES, LABEL_NAMES};
use crate::errors::PipelineError;
use crate::features::FeatureVector;

pub use crate::types::{ColumnName, ColumnValue, RecordId};

/// Stance of a message toward man-made climate change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    /// Does not believe in man-made climate change (`-1`).
    AntiManMade,
    /// Neither supports nor refutes (`0`).
    Neutral,
    /// Believes in man-made climate change (`1`).
    ManMade,
    /// Links to factual news about climate change (`2`).
    News,
}

impl Label {
    /// Every label in canonical order.
    pub const ALL: [Label; 4] = [Label::AntiManMade, Label::Neutral, Label::ManMade, Label::News];

    fn index(self) -> usize {
        match self {
            Label::AntiManMade => 0,
            Label::Neutral => 1,
            Label::ManMade => 2,
            Label::News => 3,
        }
    }

    /// Decode the signed-integer encoding.
    pub fn from_code(code: i64) -> Result<Self, PipelineError> {
        LABEL_CODES
            .iter()
            .position(|candidate| *candidate == code)
            .map(|idx| Label::ALL[idx])
            .ok_or_else(|| PipelineError::InvalidLabel {
                value: code.to_string(),
            })
    }

    /// Signed-integer encoding.
    pub fn code(self) -> i64 {
        LABEL_CODES[self.index()]
    }

    /// Descriptive-string encoding.
    pub fn display_name(self) -> &'static str {
        LABEL_NAMES[self.index()]
    }

    /// Decode a float-typed code; only integral values are accepted (`2.0`, not `1.5`).
    pub fn from_float_code(code: f64) -> Result<Self, PipelineError> {
        if code.fract() != 0.0 || !code.is_finite() {
            return Err(PipelineError::InvalidLabel {
                value: code.to_string(),
            });
        }
        Label::from_code(code as i64)
    }

    /// Decode a JSON cell holding either encoding.
    ///
    /// Float-typed integral codes (`2.0`) decode like their integer form.
    pub fn from_value(value: &Value) -> Result<Option<Self>, PipelineError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(code), _) => Label::from_code(code).map(Some),
                (None, Some(code)) => Label::from_float_code(code).map(Some),
                (None, None) => Err(PipelineError::InvalidLabel {
                    value: number.to_string(),
                }),
            },
            Value::String(raw) => raw.parse().map(Some),
            other => Err(PipelineError::InvalidLabel {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Label {
    type Err = PipelineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Label::from_code(code);
        }
        if let Ok(code) = trimmed.parse::<f64>() {
            return Label::from_float_code(code).map_err(|_| PipelineError::InvalidLabel {
                value: raw.to_string(),
            });
        }
        let folded: String = trimmed
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "antimanmade" => Ok(Label::AntiManMade),
            "neutral" => Ok(Label::Neutral),
            "manmade" => Ok(Label::ManMade),
            "news" => Ok(Label::News),
            _ => Err(PipelineError::InvalidLabel {
                value: raw.to_string(),
            }),
        }
    }
}

/// One input row: message text, optional stance label, and pass-through columns.
///
/// `text` is `None` when the source cell was not a string; such records still
/// produce a full feature row with zero-valued text features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable record identifier.
    pub id: RecordId,
    /// Raw message text.
    pub text: Option<String>,
    /// Stance label (training data only).
    pub label: Option<Label>,
    /// Remaining source columns in input order.
    #[serde(default)]
    pub columns: IndexMap<ColumnName, ColumnValue>,
}

impl Record {
    /// Create an unlabeled record with text.
    pub fn new(id: impl Into<RecordId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            label: None,
            columns: IndexMap::new(),
        }
    }

    /// Create a record whose text cell was not a string.
    pub fn malformed(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            label: None,
            columns: IndexMap::new(),
        }
    }

    /// Attach a stance label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Attach a pass-through column.
    pub fn with_column(mut self, name: impl Into<ColumnName>, value: impl Into<ColumnValue>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    /// Raw text, or the empty string for malformed records.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Bind a loosely typed row using the configured text and label columns.
    ///
    /// A missing text or label column is a table-level schema error. A present
    /// but non-string text cell yields a malformed record instead.
    pub fn from_columns(
        id: impl Into<RecordId>,
        row: &IndexMap<ColumnName, Value>,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let text_column = config.text_column.name();
        let text = match row.get(text_column) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => None,
            None => {
                return Err(PipelineError::MissingColumn {
                    column: text_column.to_string(),
                });
            }
        };

        let label = match &config.label_column {
            Some(column) => match row.get(column) {
                Some(value) => Label::from_value(value)?,
                None => {
                    return Err(PipelineError::MissingColumn {
                        column: column.clone(),
                    });
                }
            },
            None => None,
        };

        let columns = row
            .iter()
            .filter(|(name, _)| {
                name.as_str() != text_column && Some(name.as_str()) != config.label_column.as_deref()
            })
            .map(|(name, value)| (name.clone(), render_cell(value)))
            .collect();

        Ok(Self {
            id: id.into(),
            text,
            label,
            columns,
        })
    }
}

fn render_cell(value: &Value) -> ColumnValue {
    match value {
        Value::String(raw) => raw.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One output row: the source record, its features, and optional derived text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureRow {
    /// Source record, unchanged.
    pub record: Record,
    /// Fixed-schema feature vector.
    pub features: FeatureVector,
    /// Cleaned text when enabled.
    pub cleaned: Option<String>,
    /// Lemmatized text when enabled.
    pub lemmatized: Option<String>,
}
