use tracing::{debug, trace};

use crate::core::{AxisCalibration, AxisRole, PixelPoint, ScaleKind, parse_path};
use crate::error::{DepixError, DepixResult};

use super::PixelDataset;

/// Meaning of a `<path>` element, decided by its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Axis(AxisRole),
    Data,
}

impl ElementRole {
    /// Classifies an element id; ids without a known prefix are ignored.
    #[must_use]
    pub fn classify(id: &str) -> Option<Self> {
        if id.starts_with(AxisRole::X.id_prefix()) {
            Some(Self::Axis(AxisRole::X))
        } else if id.starts_with(AxisRole::Y.id_prefix()) {
            Some(Self::Axis(AxisRole::Y))
        } else if id.starts_with("data") {
            Some(Self::Data)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LabeledPath<'a> {
    id: &'a str,
    data: &'a str,
}

#[derive(Debug, Default)]
struct RoleSlots<'a> {
    x_axis: Option<LabeledPath<'a>>,
    y_axis: Option<LabeledPath<'a>>,
    data: Option<LabeledPath<'a>>,
}

impl<'a> RoleSlots<'a> {
    fn insert(&mut self, role: ElementRole, path: LabeledPath<'a>) -> DepixResult<()> {
        let (slot, duplicate) = match role {
            ElementRole::Axis(AxisRole::X) => (
                &mut self.x_axis,
                DepixError::DuplicateAxis { axis: AxisRole::X },
            ),
            ElementRole::Axis(AxisRole::Y) => (
                &mut self.y_axis,
                DepixError::DuplicateAxis { axis: AxisRole::Y },
            ),
            ElementRole::Data => (&mut self.data, DepixError::DuplicateData),
        };
        if slot.is_some() {
            return Err(duplicate.in_element(path.id));
        }
        *slot = Some(path);
        Ok(())
    }

    fn finish(self) -> DepixResult<(LabeledPath<'a>, LabeledPath<'a>, LabeledPath<'a>)> {
        let x_axis = self
            .x_axis
            .ok_or(DepixError::MissingAxis { axis: AxisRole::X })?;
        let y_axis = self
            .y_axis
            .ok_or(DepixError::MissingAxis { axis: AxisRole::Y })?;
        let data = self.data.ok_or(DepixError::MissingData)?;
        Ok((x_axis, y_axis, data))
    }
}

/// Splits `<prefix>:<low>:<high>[:<scale_kind>]` into its calibration values.
pub fn parse_axis_metadata(
    id: &str,
    default_scale: ScaleKind,
) -> DepixResult<(f64, f64, ScaleKind)> {
    let fields: Vec<&str> = id.split(':').collect();
    if fields.len() < 3 || fields.len() > 4 {
        return Err(DepixError::InvalidAxisMetadata {
            id: id.to_owned(),
            reason: "expected `<prefix>:<low>:<high>[:<scale_kind>]`".to_owned(),
        });
    }

    let parse_value = |name: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| DepixError::InvalidAxisMetadata {
                id: id.to_owned(),
                reason: format!("{name} value `{raw}` is not a number"),
            })
    };
    let low = parse_value("low", fields[1])?;
    let high = parse_value("high", fields[2])?;
    let scale_kind = match fields.get(3) {
        Some(raw) => ScaleKind::parse_or(raw, default_scale)?,
        None => default_scale,
    };
    Ok((low, high, scale_kind))
}

fn parse_axis(
    axis: AxisRole,
    path: LabeledPath<'_>,
    default_scale: ScaleKind,
) -> DepixResult<AxisCalibration> {
    let build = || -> DepixResult<AxisCalibration> {
        let (low, high, scale_kind) = parse_axis_metadata(path.id, default_scale)?;
        let points = parse_path(path.data)?;
        let [low_pixel, high_pixel] = points.as_slice() else {
            return Err(DepixError::InvalidAxisPointCount {
                axis,
                count: points.len(),
            });
        };
        AxisCalibration::new(*low_pixel, *high_pixel, low, high, scale_kind)
    };
    build().map_err(|err| err.in_element(path.id))
}

fn parse_data(path: LabeledPath<'_>) -> DepixResult<Vec<PixelPoint>> {
    parse_path(path.data).map_err(|err| err.in_element(path.id))
}

pub(super) fn parse_svg(contents: &str, default_scale: ScaleKind) -> DepixResult<PixelDataset> {
    let doc = roxmltree::Document::parse(contents)
        .map_err(|err| DepixError::InvalidSvg(err.to_string()))?;

    let mut slots = RoleSlots::default();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
    {
        let Some(id) = node.attribute("id") else {
            continue;
        };
        let Some(role) = ElementRole::classify(id) else {
            trace!(id, "skipping unlabeled path");
            continue;
        };
        let data = node
            .attribute("d")
            .ok_or_else(|| DepixError::MissingPathData { id: id.to_owned() })?;
        trace!(id, d = data, ?role, "classified path element");
        slots.insert(role, LabeledPath { id, data })?;
    }

    let (x_path, y_path, data_path) = slots.finish()?;
    debug!(
        x_axis = x_path.id,
        y_axis = y_path.id,
        data = data_path.id,
        "resolved svg elements"
    );

    Ok(PixelDataset {
        x_axis: parse_axis(AxisRole::X, x_path, default_scale)?,
        y_axis: parse_axis(AxisRole::Y, y_path, default_scale)?,
        data: parse_data(data_path)?,
    })
}
