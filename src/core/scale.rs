use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{DepixError, DepixResult};

/// Relationship between a normalized axis position and the plotted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Uniform spacing in raw value units.
    #[default]
    Linear,
    /// Uniform spacing in natural-log value units (both endpoints must be > 0).
    Log,
}

impl ScaleKind {
    /// Parses a metadata field. An empty field selects `default`.
    pub fn parse_or(raw: &str, default: Self) -> DepixResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        trimmed.parse()
    }
}

impl FromStr for ScaleKind {
    type Err = DepixError;

    fn from_str(raw: &str) -> DepixResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Log),
            _ => Err(DepixError::UnsupportedScaleKind(raw.to_owned())),
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Log => f.write_str("log"),
        }
    }
}

/// Two reference pixels along one axis and the values they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCalibration {
    low_pixel: PixelPoint,
    high_pixel: PixelPoint,
    low_value: f64,
    high_value: f64,
    scale_kind: ScaleKind,
}

impl AxisCalibration {
    pub fn new(
        low_pixel: PixelPoint,
        high_pixel: PixelPoint,
        low_value: f64,
        high_value: f64,
        scale_kind: ScaleKind,
    ) -> DepixResult<Self> {
        if !low_pixel.is_finite() || !high_pixel.is_finite() {
            return Err(DepixError::SingularCalibration {
                determinant: f64::NAN,
            });
        }
        if !low_value.is_finite() || !high_value.is_finite() {
            return Err(match scale_kind {
                ScaleKind::Log => DepixError::InvalidLogRange {
                    low: low_value,
                    high: high_value,
                },
                ScaleKind::Linear => DepixError::InvalidAxisValues {
                    low: low_value,
                    high: high_value,
                },
            });
        }
        if scale_kind == ScaleKind::Log && (low_value <= 0.0 || high_value <= 0.0) {
            return Err(DepixError::InvalidLogRange {
                low: low_value,
                high: high_value,
            });
        }

        Ok(Self {
            low_pixel,
            high_pixel,
            low_value,
            high_value,
            scale_kind,
        })
    }

    /// Linear calibration shorthand.
    pub fn linear(
        low_pixel: PixelPoint,
        high_pixel: PixelPoint,
        low_value: f64,
        high_value: f64,
    ) -> DepixResult<Self> {
        Self::new(
            low_pixel,
            high_pixel,
            low_value,
            high_value,
            ScaleKind::Linear,
        )
    }

    #[must_use]
    pub fn low_pixel(self) -> PixelPoint {
        self.low_pixel
    }

    #[must_use]
    pub fn high_pixel(self) -> PixelPoint {
        self.high_pixel
    }

    #[must_use]
    pub fn values(self) -> (f64, f64) {
        (self.low_value, self.high_value)
    }

    #[must_use]
    pub fn scale_kind(self) -> ScaleKind {
        self.scale_kind
    }

    /// Pixel-space vector from the low to the high calibration point.
    #[must_use]
    pub fn pixel_span(self) -> PixelPoint {
        self.high_pixel - self.low_pixel
    }

    /// Maps a normalized position (`0` at the low pixel, `1` at the high pixel)
    /// to a plot value.
    #[must_use]
    pub fn value_at(self, t: f64) -> f64 {
        match self.scale_kind {
            ScaleKind::Linear => t * (self.high_value - self.low_value) + self.low_value,
            ScaleKind::Log => {
                let ln_low = self.low_value.ln();
                let ln_high = self.high_value.ln();
                (t * (ln_high - ln_low) + ln_low).exp()
            }
        }
    }
}
