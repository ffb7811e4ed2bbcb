pub mod path;
pub mod scale;
pub mod transform;
pub mod types;

pub use path::{PathMode, PathOrigin, parse_path};
pub use scale::{AxisCalibration, ScaleKind};
pub use transform::{AxisFrame, build_and_apply};
pub use types::{AxisRole, PixelPoint, PlotPoint, PlotTable};
