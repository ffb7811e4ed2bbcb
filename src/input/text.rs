//! Plain pixel table: the first two meaningful lines calibrate the x and y
//! axes (`px_low_x px_low_y px_high_x px_high_y low high [scale_kind]`), every
//! following line holds one `px py` data point. `#` starts a comment.

use smallvec::SmallVec;

use crate::core::{AxisCalibration, AxisRole, PixelPoint, ScaleKind};
use crate::error::{DepixError, DepixResult};

use super::PixelDataset;

#[derive(Debug, Clone, Copy)]
struct TextLine<'a> {
    number: usize,
    words: &'a str,
}

fn meaningful_lines(contents: &str) -> impl Iterator<Item = TextLine<'_>> {
    contents.lines().enumerate().filter_map(|(index, line)| {
        let words = line.split('#').next().unwrap_or_default().trim();
        (!words.is_empty()).then_some(TextLine {
            number: index + 1,
            words,
        })
    })
}

fn parse_number(line: TextLine<'_>, word: &str) -> DepixResult<f64> {
    word.parse::<f64>().map_err(|_| DepixError::InvalidTextLine {
        line: line.number,
        reason: format!("`{word}` is not a number"),
    })
}

fn parse_axis_line(
    axis: AxisRole,
    line: TextLine<'_>,
    default_scale: ScaleKind,
) -> DepixResult<AxisCalibration> {
    let words: SmallVec<[&str; 7]> = line.words.split_whitespace().collect();
    if words.len() != 6 && words.len() != 7 {
        return Err(DepixError::InvalidTextLine {
            line: line.number,
            reason: format!(
                "{axis} axis needs 6 or 7 fields, found {}",
                words.len()
            ),
        });
    }

    let mut numbers = [0.0; 6];
    for (slot, word) in numbers.iter_mut().zip(&words) {
        *slot = parse_number(line, word)?;
    }
    let scale_kind = match words.get(6) {
        Some(raw) if raw.parse::<f64>().is_ok() => {
            return Err(DepixError::InvalidTextLine {
                line: line.number,
                reason: format!(
                    "numeric unit factor `{raw}` is no longer supported, \
                     use a scale kind (`linear` or `log`) as the 7th field"
                ),
            });
        }
        Some(raw) => ScaleKind::parse_or(raw, default_scale)?,
        None => default_scale,
    };

    AxisCalibration::new(
        PixelPoint::new(numbers[0], numbers[1]),
        PixelPoint::new(numbers[2], numbers[3]),
        numbers[4],
        numbers[5],
        scale_kind,
    )
}

fn parse_data_line(line: TextLine<'_>) -> DepixResult<PixelPoint> {
    let words: SmallVec<[&str; 2]> = line.words.split_whitespace().collect();
    let [x, y] = words.as_slice() else {
        return Err(DepixError::InvalidTextLine {
            line: line.number,
            reason: format!("data point needs 2 fields, found {}", words.len()),
        });
    };
    let point = PixelPoint::new(parse_number(line, x)?, parse_number(line, y)?);
    if !point.is_finite() {
        return Err(DepixError::InvalidTextLine {
            line: line.number,
            reason: "data point must be finite".to_owned(),
        });
    }
    Ok(point)
}

pub(super) fn parse_text(contents: &str, default_scale: ScaleKind) -> DepixResult<PixelDataset> {
    let mut lines = meaningful_lines(contents);
    let x_line = lines
        .next()
        .ok_or(DepixError::MissingAxis { axis: AxisRole::X })?;
    let x_axis = parse_axis_line(AxisRole::X, x_line, default_scale)?;
    let y_line = lines
        .next()
        .ok_or(DepixError::MissingAxis { axis: AxisRole::Y })?;
    let y_axis = parse_axis_line(AxisRole::Y, y_line, default_scale)?;
    let data = lines.map(parse_data_line).collect::<DepixResult<Vec<_>>>()?;
    if data.is_empty() {
        return Err(DepixError::MissingData);
    }

    Ok(PixelDataset {
        x_axis,
        y_axis,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_text;
    use crate::core::{AxisRole, PixelPoint, ScaleKind};
    use crate::error::DepixError;

    const SAMPLE: &str = "\
# x axis: two pixels and their values
10 200 210 200 0 100
10 200 10 0 1 1000 log   # y axis

50 100
  110 150 # trailing comment
";

    #[test]
    fn parses_axes_and_points() {
        let dataset = parse_text(SAMPLE, ScaleKind::Linear).expect("dataset");
        assert_eq!(dataset.x_axis.values(), (0.0, 100.0));
        assert_eq!(dataset.x_axis.scale_kind(), ScaleKind::Linear);
        assert_eq!(dataset.y_axis.scale_kind(), ScaleKind::Log);
        assert_eq!(dataset.y_axis.high_pixel(), PixelPoint::new(10.0, 0.0));
        assert_eq!(
            dataset.data,
            vec![PixelPoint::new(50.0, 100.0), PixelPoint::new(110.0, 150.0)]
        );
    }

    #[test]
    fn reports_missing_sections() {
        assert!(matches!(
            parse_text("# nothing\n", ScaleKind::Linear),
            Err(DepixError::MissingAxis { axis: AxisRole::X })
        ));
        assert!(matches!(
            parse_text("0 0 1 0 0 1\n", ScaleKind::Linear),
            Err(DepixError::MissingAxis { axis: AxisRole::Y })
        ));
        assert!(matches!(
            parse_text("0 0 1 0 0 1\n0 0 0 1 0 1\n", ScaleKind::Linear),
            Err(DepixError::MissingData)
        ));
    }

    #[test]
    fn reports_line_numbers_for_bad_rows() {
        let err = parse_text("0 0 1 0 0 1\n0 0 0 1 0 1\n\n1 2 3\n", ScaleKind::Linear)
            .expect_err("three fields");
        assert!(matches!(err, DepixError::InvalidTextLine { line: 4, .. }));

        let err = parse_text("0 0 1 0 zero 1\n", ScaleKind::Linear).expect_err("word");
        assert!(matches!(err, DepixError::InvalidTextLine { line: 1, .. }));
    }

    #[test]
    fn bad_x_axis_line_is_reported_before_missing_y_axis() {
        let err = parse_text("# header\n0 0 1 0 0\n", ScaleKind::Linear).expect_err("short x axis");
        assert!(matches!(err, DepixError::InvalidTextLine { line: 2, .. }));
    }

    #[test]
    fn numeric_seventh_field_explains_dropped_unit_factor() {
        let err = parse_text(
            "0 0 1 0 0 1 1\n0 0 0 1 0 1\n1 1\n",
            ScaleKind::Linear,
        )
        .expect_err("legacy unit factor");
        match err {
            DepixError::InvalidTextLine { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("unit factor"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
