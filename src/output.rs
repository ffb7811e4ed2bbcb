use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{PlotPoint, PlotTable};
use crate::error::{DepixError, DepixResult};

pub const PLOT_TABLE_JSON_SCHEMA_V1: u32 = 1;

/// Digits after the decimal point used for text tables unless configured otherwise.
pub const DEFAULT_TEXT_PRECISION: usize = 18;

/// Supported output artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Whitespace separated `x y` rows.
    #[default]
    Text,
    /// Versioned JSON contract.
    Json,
}

impl OutputFormat {
    /// `.json` selects JSON; every other extension gets the text table.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotTableJsonContractV1 {
    pub schema_version: u32,
    pub rows: Vec<PlotPoint>,
}

impl PlotTable {
    pub fn to_json_contract_v1_pretty(&self) -> DepixResult<String> {
        let payload = PlotTableJsonContractV1 {
            schema_version: PLOT_TABLE_JSON_SCHEMA_V1,
            rows: self.rows().to_vec(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DepixError::Serialization(format!("failed to serialize plot table contract v1: {e}"))
        })
    }

    pub fn from_json_contract_str(input: &str) -> DepixResult<Self> {
        let payload: PlotTableJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DepixError::Serialization(format!("failed to parse plot table json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_TABLE_JSON_SCHEMA_V1 {
            return Err(DepixError::Serialization(format!(
                "unsupported plot table schema version: {}",
                payload.schema_version
            )));
        }
        Ok(Self::new(payload.rows))
    }

    /// Renders one `x y` row per sample in scientific notation.
    #[must_use]
    pub fn to_text(&self, precision: usize) -> String {
        let mut out = String::with_capacity(self.len() * (2 * precision + 16));
        for row in self.rows() {
            let _ = writeln!(
                out,
                "{} {}",
                format_scientific(row.x, precision),
                format_scientific(row.y, precision)
            );
        }
        out
    }
}

/// Formats like C's `%.{precision}e`: signed exponent with at least two digits.
#[must_use]
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

pub fn render_table(
    table: &PlotTable,
    format: OutputFormat,
    precision: usize,
) -> DepixResult<String> {
    match format {
        OutputFormat::Text => Ok(table.to_text(precision)),
        OutputFormat::Json => table.to_json_contract_v1_pretty(),
    }
}

/// Renders the whole table first, then writes it in one step.
pub fn write_table(
    path: &Path,
    table: &PlotTable,
    format: OutputFormat,
    precision: usize,
) -> DepixResult<()> {
    let rendered = render_table(table, format, precision)?;
    fs::write(path, rendered).map_err(|source| DepixError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{OutputFormat, format_scientific};
    use crate::core::{PlotPoint, PlotTable};

    #[test]
    fn scientific_format_matches_c_style() {
        assert_eq!(format_scientific(50.0, 18), "5.000000000000000000e+01");
        assert_eq!(format_scientific(-0.125, 3), "-1.250e-01");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        assert_eq!(format_scientific(1.5e300, 1), "1.5e+300");
    }

    #[test]
    fn text_table_keeps_row_order() {
        let table = PlotTable::new(vec![PlotPoint::new(1.0, 2.0), PlotPoint::new(-3.0, 0.5)]);
        assert_eq!(table.to_text(1), "1.0e+00 2.0e+00\n-3.0e+00 5.0e-01\n");
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.JSON")),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.txt")),
            OutputFormat::Text
        );
        assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Text);
    }

    #[test]
    fn json_contract_round_trips_rows() {
        let table = PlotTable::new(vec![PlotPoint::new(1.0, 2.0)]);
        let json = table.to_json_contract_v1_pretty().expect("json");
        assert!(json.contains("\"schema_version\": 1"));
        let restored = PlotTable::from_json_contract_str(&json).expect("parse");
        assert_eq!(restored, table);
    }
}
