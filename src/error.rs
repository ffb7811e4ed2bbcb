use std::path::PathBuf;

use thiserror::Error;

use crate::core::AxisRole;

pub type DepixResult<T> = Result<T, DepixError>;

#[derive(Debug, Error)]
pub enum DepixError {
    #[error("path data must start with `M` or `m`, found `{found}`")]
    InvalidPathStart { found: String },

    #[error("path data is empty")]
    EmptyPath,

    #[error("coordinate `{token}` has {found} component(s), expected {expected}")]
    InvalidCoordinateArity {
        token: String,
        expected: usize,
        found: usize,
    },

    #[error("`{token}` is not a real number")]
    InvalidNumber { token: String },

    #[error("`{command}` segment needs a previous point")]
    MissingPathOrigin { command: char },

    #[error("missing {axis} axis element")]
    MissingAxis { axis: AxisRole },

    #[error("more than one {axis} axis element")]
    DuplicateAxis { axis: AxisRole },

    #[error("missing data element")]
    MissingData,

    #[error("more than one data element")]
    DuplicateData,

    #[error("{axis} axis path must contain exactly 2 points, found {count}")]
    InvalidAxisPointCount { axis: AxisRole, count: usize },

    #[error("invalid axis metadata `{id}`: {reason}")]
    InvalidAxisMetadata { id: String, reason: String },

    #[error("axis values must be finite, got low={low}, high={high}")]
    InvalidAxisValues { low: f64, high: f64 },

    #[error("path element `{id}` has no `d` attribute")]
    MissingPathData { id: String },

    #[error("axis calibration is singular (determinant={determinant})")]
    SingularCalibration { determinant: f64 },

    #[error("log scale requires finite values > 0, got low={low}, high={high}")]
    InvalidLogRange { low: f64, high: f64 },

    #[error("data point {index} maps to a non-finite value")]
    NonFiniteValue { index: usize },

    #[error("unsupported scale kind `{0}`")]
    UnsupportedScaleKind(String),

    #[error("unsupported file format for `{}`", path.display())]
    UnsupportedFileFormat { path: PathBuf },

    #[error("line {line}: {reason}")]
    InvalidTextLine { line: usize, reason: String },

    #[error("invalid svg document: {0}")]
    InvalidSvg(String),

    #[error("in element `{id}`: {source}")]
    Element {
        id: String,
        #[source]
        source: Box<DepixError>,
    },

    #[error("failed to access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("usage: {0}")]
    Usage(String),
}

impl DepixError {
    /// Attaches the id of the drawing element that produced this error.
    #[must_use]
    pub fn in_element(self, id: impl Into<String>) -> Self {
        Self::Element {
            id: id.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping element context wrappers.
    #[must_use]
    pub fn root(&self) -> &DepixError {
        match self {
            Self::Element { source, .. } => source.root(),
            other => other,
        }
    }
}
