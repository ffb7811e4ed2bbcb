//! depix: recover numeric datasets from calibrated plot drawings.
//!
//! A drawing labels three paths: one per axis, each running from a known low
//! value to a known high value, and one data series. The pixel positions of
//! the data series are mapped back to plot units through the two axis
//! calibrations, which may be skewed, flipped, linear or logarithmic.
//!
//! ```
//! use depix::core::{AxisCalibration, PixelPoint, ScaleKind, build_and_apply};
//!
//! let x_axis = AxisCalibration::new(
//!     PixelPoint::new(0.0, 0.0),
//!     PixelPoint::new(10.0, 0.0),
//!     0.0,
//!     100.0,
//!     ScaleKind::Linear,
//! )?;
//! let y_axis = AxisCalibration::new(
//!     PixelPoint::new(0.0, 0.0),
//!     PixelPoint::new(0.0, 10.0),
//!     1.0,
//!     100.0,
//!     ScaleKind::Log,
//! )?;
//! let table = build_and_apply(&x_axis, &y_axis, &[PixelPoint::new(5.0, 5.0)])?;
//! assert!((table.rows()[0].x - 50.0).abs() < 1e-9);
//! assert!((table.rows()[0].y - 10.0).abs() < 1e-9);
//! # Ok::<(), depix::DepixError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod telemetry;

pub use config::ConversionConfig;
pub use error::{DepixError, DepixResult};
pub use pipeline::{convert_file, process_file};
