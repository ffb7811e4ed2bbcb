//! End-to-end conversion: load a drawing, calibrate, write the table.

use std::path::Path;

use tracing::{debug, info};

use crate::config::ConversionConfig;
use crate::core::{PlotTable, build_and_apply};
use crate::error::DepixResult;
use crate::input::{InputFormat, PixelDataset, load_dataset, parse_dataset};
use crate::output::{OutputFormat, write_table};

/// Converts an in-memory dataset to plot units.
pub fn convert_dataset(dataset: &PixelDataset) -> DepixResult<PlotTable> {
    build_and_apply(&dataset.x_axis, &dataset.y_axis, &dataset.data)
}

/// Parses drawing contents and converts them, without touching the filesystem.
pub fn convert_str(
    format: InputFormat,
    contents: &str,
    config: &ConversionConfig,
) -> DepixResult<PlotTable> {
    let dataset = parse_dataset(format, contents, config.default_scale_kind)?;
    convert_dataset(&dataset)
}

/// Loads `input` and returns the recovered table.
pub fn process_file(input: &Path, config: &ConversionConfig) -> DepixResult<PlotTable> {
    let dataset = load_dataset(input, config.default_scale_kind)?;
    let table = convert_dataset(&dataset)?;
    debug!(rows = table.len(), "converted data points");
    Ok(table)
}

/// Converts `input` and writes the table to `output`.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> DepixResult<PlotTable> {
    info!(input = %input.display(), "processing data");
    let table = process_file(input, config)?;

    let format = config
        .output_format
        .unwrap_or_else(|| OutputFormat::from_path(output));
    write_table(output, &table, format, config.text_precision)?;
    info!(
        output = %output.display(),
        rows = table.len(),
        "written data in plot units"
    );
    Ok(table)
}
