//! Loading calibrated pixel data from supported drawing formats.
//!
//! The input format is resolved once from the file extension; every loader
//! produces the same [`PixelDataset`] so the transform never sees the format.

mod svg;
mod text;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisCalibration, PixelPoint, ScaleKind};
use crate::error::{DepixError, DepixResult};

pub use svg::{ElementRole, parse_axis_metadata};

/// Supported input drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Vector drawing with labeled `<path>` elements.
    Svg,
    /// Whitespace table: two axis rows followed by one row per data point.
    Text,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> DepixResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("txt") => Ok(Self::Text),
            _ => Err(DepixError::UnsupportedFileFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Both axis calibrations and the raw data series, still in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelDataset {
    pub x_axis: AxisCalibration,
    pub y_axis: AxisCalibration,
    pub data: Vec<PixelPoint>,
}

/// Parses already loaded file contents in the given format.
pub fn parse_dataset(
    format: InputFormat,
    contents: &str,
    default_scale: ScaleKind,
) -> DepixResult<PixelDataset> {
    let dataset = match format {
        InputFormat::Svg => svg::parse_svg(contents, default_scale)?,
        InputFormat::Text => text::parse_text(contents, default_scale)?,
    };

    debug!(x_axis = ?dataset.x_axis, "x axis specs");
    debug!(y_axis = ?dataset.y_axis, "y axis specs");
    debug!(points = dataset.data.len(), "pixel data points");
    Ok(dataset)
}

/// Reads `path` and parses it according to its extension.
pub fn load_dataset(path: &Path, default_scale: ScaleKind) -> DepixResult<PixelDataset> {
    let format = InputFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| DepixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?format, path = %path.display(), "loaded input file");
    parse_dataset(format, &contents, default_scale)
}
