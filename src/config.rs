use serde::{Deserialize, Serialize};

use crate::core::ScaleKind;
use crate::error::{DepixError, DepixResult};
use crate::output::{DEFAULT_TEXT_PRECISION, OutputFormat};

/// Conversion settings shared by the library pipeline and the CLI.
///
/// This type is serializable so callers can keep presets next to their
/// drawings instead of repeating flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Scale used when axis metadata omits the scale kind.
    #[serde(default)]
    pub default_scale_kind: ScaleKind,
    /// Digits after the decimal point in text tables.
    #[serde(default = "default_text_precision")]
    pub text_precision: usize,
    /// Forces an output format instead of deriving it from the output path.
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
}

fn default_text_precision() -> usize {
    DEFAULT_TEXT_PRECISION
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_scale_kind: ScaleKind::Linear,
            text_precision: DEFAULT_TEXT_PRECISION,
            output_format: None,
        }
    }
}

impl ConversionConfig {
    #[must_use]
    pub fn with_default_scale_kind(mut self, kind: ScaleKind) -> Self {
        self.default_scale_kind = kind;
        self
    }

    #[must_use]
    pub fn with_text_precision(mut self, precision: usize) -> Self {
        self.text_precision = precision;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn to_json_pretty(self) -> DepixResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            DepixError::Serialization(format!("failed to serialize conversion config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> DepixResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DepixError::Serialization(format!("failed to parse conversion config: {e}"))
        })
    }
}
