//! Pixel space to plot space mapping built from two axis calibrations.
//!
//! The mapping runs in two independent stages:
//!
//! 1. An affine stage that expresses a pixel as a combination of the two
//!    calibration vectors (`high_pixel - low_pixel` for each axis). Axes do not
//!    need to be orthogonal or aligned with the pixel grid, so both normalized
//!    coordinates depend on both pixel coordinates.
//! 2. A per-axis unit stage that turns the normalized coordinate (`0` at the
//!    low calibration pixel, `1` at the high one) into a plot value according
//!    to the axis [`ScaleKind`](crate::core::ScaleKind).

#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::{AxisCalibration, PixelPoint, PlotPoint, PlotTable};
use crate::error::{DepixError, DepixResult};

/// Inverse of the matrix whose columns are the x and y calibration vectors,
/// together with the offsets that pin each axis' low pixel at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    inverse: [[f64; 2]; 2],
    x_offset: f64,
    y_offset: f64,
}

impl AxisFrame {
    pub fn new(x_axis: &AxisCalibration, y_axis: &AxisCalibration) -> DepixResult<Self> {
        let ux = x_axis.pixel_span();
        let uy = y_axis.pixel_span();

        let determinant = ux.x * uy.y - uy.x * ux.y;
        let scale = ux.x.hypot(ux.y) * uy.x.hypot(uy.y);
        if !determinant.is_finite() || determinant.abs() <= f64::EPSILON * scale {
            return Err(DepixError::SingularCalibration { determinant });
        }

        let inverse = [
            [uy.y / determinant, -uy.x / determinant],
            [-ux.y / determinant, ux.x / determinant],
        ];
        let mut frame = Self {
            inverse,
            x_offset: 0.0,
            y_offset: 0.0,
        };
        frame.x_offset = frame.apply_inverse(x_axis.low_pixel()).0;
        frame.y_offset = frame.apply_inverse(y_axis.low_pixel()).1;

        debug!(
            determinant,
            x_offset = frame.x_offset,
            y_offset = frame.y_offset,
            "built axis frame"
        );
        Ok(frame)
    }

    fn apply_inverse(self, point: PixelPoint) -> (f64, f64) {
        let [[a, b], [c, d]] = self.inverse;
        (a * point.x + b * point.y, c * point.x + d * point.y)
    }

    /// Normalized axis coordinates of `point`: `(0, 0)` sits on the low
    /// calibration pixels, `1` on each axis' high pixel.
    #[must_use]
    pub fn to_normalized(self, point: PixelPoint) -> (f64, f64) {
        let (u, v) = self.apply_inverse(point);
        (u - self.x_offset, v - self.y_offset)
    }
}

fn convert_single_point(
    index: usize,
    point: PixelPoint,
    frame: AxisFrame,
    x_axis: &AxisCalibration,
    y_axis: &AxisCalibration,
) -> DepixResult<PlotPoint> {
    let (tx, ty) = frame.to_normalized(point);
    let x = x_axis.value_at(tx);
    let y = y_axis.value_at(ty);
    if !x.is_finite() || !y.is_finite() {
        return Err(DepixError::NonFiniteValue { index });
    }
    Ok(PlotPoint::new(x, y))
}

/// Maps every data point through the calibration and returns rows in input order.
pub fn build_and_apply(
    x_axis: &AxisCalibration,
    y_axis: &AxisCalibration,
    data: &[PixelPoint],
) -> DepixResult<PlotTable> {
    debug!(?x_axis, ?y_axis, points = data.len(), "applying calibration");
    let frame = AxisFrame::new(x_axis, y_axis)?;

    #[cfg(feature = "parallel-transform")]
    {
        let rows: DepixResult<Vec<PlotPoint>> = data
            .par_iter()
            .enumerate()
            .map(|(index, point)| convert_single_point(index, *point, frame, x_axis, y_axis))
            .collect();
        rows.map(PlotTable::new)
    }

    #[cfg(not(feature = "parallel-transform"))]
    {
        let mut rows = Vec::with_capacity(data.len());
        for (index, point) in data.iter().enumerate() {
            rows.push(convert_single_point(index, *point, frame, x_axis, y_axis)?);
        }
        Ok(PlotTable::new(rows))
    }
}
