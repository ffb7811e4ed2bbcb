//! Parser for the path mini-language used by calibration and data elements.
//!
//! The grammar is a subset of SVG path data: a leading `M` (absolute) or `m`
//! (relative) move command followed by whitespace separated coordinate
//! literals. `V` and `H` switch the parser into vertical-only and
//! horizontal-only segments where each literal carries a single number.
//!
//! ```
//! use depix::core::{PixelPoint, parse_path};
//!
//! let points = parse_path("m 10,10 5,0 V 3").unwrap();
//! assert_eq!(
//!     points,
//!     vec![
//!         PixelPoint::new(10.0, 10.0),
//!         PixelPoint::new(15.0, 10.0),
//!         PixelPoint::new(15.0, 13.0),
//!     ]
//! );
//! ```

use smallvec::SmallVec;

use crate::core::PixelPoint;
use crate::error::{DepixError, DepixResult};

/// How literals combine with the previously emitted point.
///
/// Decided once by the leading move command and kept for the whole path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    /// `M`: literals are absolute pixel coordinates.
    Absolute,
    /// `m`: every literal after the first point is an offset from the previous point.
    Relative,
}

impl PathOrigin {
    fn from_command(token: &str) -> DepixResult<Self> {
        match token {
            "M" => Ok(Self::Absolute),
            "m" => Ok(Self::Relative),
            other => Err(DepixError::InvalidPathStart {
                found: other.to_owned(),
            }),
        }
    }
}

/// Segment mode selected by the most recent mode token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    Move,
    Vertical,
    Horizontal,
}

impl PathMode {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "V" => Some(Self::Vertical),
            "H" => Some(Self::Horizontal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Move => 2,
            Self::Vertical | Self::Horizontal => 1,
        }
    }

    const fn command(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Vertical => 'V',
            Self::Horizontal => 'H',
        }
    }
}

/// Incremental parser state: the active mode and the last emitted point.
#[derive(Debug, Clone)]
struct PathCursor {
    origin: PathOrigin,
    mode: PathMode,
    points: Vec<PixelPoint>,
}

impl PathCursor {
    fn new(origin: PathOrigin) -> Self {
        Self {
            origin,
            mode: PathMode::Move,
            points: Vec::new(),
        }
    }

    fn switch_mode(&mut self, mode: PathMode) -> DepixResult<()> {
        if self.points.is_empty() {
            return Err(DepixError::MissingPathOrigin {
                command: mode.command(),
            });
        }
        self.mode = mode;
        Ok(())
    }

    fn push_literal(&mut self, token: &str) -> DepixResult<()> {
        let values = parse_components(token)?;
        if values.len() != self.mode.arity() {
            return Err(DepixError::InvalidCoordinateArity {
                token: token.to_owned(),
                expected: self.mode.arity(),
                found: values.len(),
            });
        }

        let previous = self.points.last().copied();
        let point = match (self.mode, previous) {
            (PathMode::Move, None) => PixelPoint::new(values[0], values[1]),
            (PathMode::Move, Some(prev)) => {
                let literal = PixelPoint::new(values[0], values[1]);
                match self.origin {
                    PathOrigin::Absolute => literal,
                    PathOrigin::Relative => prev + literal,
                }
            }
            (PathMode::Vertical, Some(prev)) => match self.origin {
                PathOrigin::Absolute => PixelPoint::new(prev.x, values[0]),
                PathOrigin::Relative => PixelPoint::new(prev.x, prev.y + values[0]),
            },
            (PathMode::Horizontal, Some(prev)) => match self.origin {
                PathOrigin::Absolute => PixelPoint::new(values[0], prev.y),
                PathOrigin::Relative => PixelPoint::new(prev.x + values[0], prev.y),
            },
            (mode, None) => {
                return Err(DepixError::MissingPathOrigin {
                    command: mode.command(),
                });
            }
        };

        self.points.push(point);
        Ok(())
    }
}

fn parse_components(token: &str) -> DepixResult<SmallVec<[f64; 2]>> {
    token
        .split(',')
        .map(|part| match part.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(DepixError::InvalidNumber {
                token: token.to_owned(),
            }),
        })
        .collect()
}

/// Parses path data into absolute pixel points in encounter order.
pub fn parse_path(raw: &str) -> DepixResult<Vec<PixelPoint>> {
    let mut tokens = raw.split_whitespace();
    let first = tokens.next().ok_or(DepixError::EmptyPath)?;
    let mut cursor = PathCursor::new(PathOrigin::from_command(first)?);

    for token in tokens {
        match PathMode::from_token(token) {
            Some(mode) => cursor.switch_mode(mode)?,
            None => cursor.push_literal(token)?,
        }
    }

    if cursor.points.is_empty() {
        return Err(DepixError::EmptyPath);
    }
    Ok(cursor.points)
}

#[cfg(test)]
mod tests {
    use super::{PathMode, parse_path};
    use crate::core::PixelPoint;
    use crate::error::DepixError;

    #[test]
    fn absolute_path_keeps_literals() {
        let points = parse_path("M 1,2 3,4 -5.5,6e1").expect("parse");
        assert_eq!(
            points,
            vec![
                PixelPoint::new(1.0, 2.0),
                PixelPoint::new(3.0, 4.0),
                PixelPoint::new(-5.5, 60.0),
            ]
        );
    }

    #[test]
    fn relative_path_accumulates_offsets() {
        let points = parse_path("m 1,2 3,4 -1,-1").expect("parse");
        assert_eq!(
            points,
            vec![
                PixelPoint::new(1.0, 2.0),
                PixelPoint::new(4.0, 6.0),
                PixelPoint::new(3.0, 5.0),
            ]
        );
    }

    #[test]
    fn vertical_and_horizontal_segments_in_absolute_mode() {
        let points = parse_path("M 1,2 V 7 H 9").expect("parse");
        assert_eq!(
            points,
            vec![
                PixelPoint::new(1.0, 2.0),
                PixelPoint::new(1.0, 7.0),
                PixelPoint::new(9.0, 7.0),
            ]
        );
    }

    #[test]
    fn vertical_and_horizontal_segments_accumulate_in_relative_mode() {
        let points = parse_path("m 1,2 V 7 3 H -4").expect("parse");
        assert_eq!(
            points,
            vec![
                PixelPoint::new(1.0, 2.0),
                PixelPoint::new(1.0, 9.0),
                PixelPoint::new(1.0, 12.0),
                PixelPoint::new(-3.0, 12.0),
            ]
        );
    }

    #[test]
    fn rejects_unknown_start_command() {
        let err = parse_path("L 1,2").expect_err("must fail");
        assert!(matches!(err, DepixError::InvalidPathStart { ref found } if found == "L"));
    }

    #[test]
    fn rejects_empty_input_and_bare_move() {
        assert!(matches!(parse_path("   "), Err(DepixError::EmptyPath)));
        assert!(matches!(parse_path("M"), Err(DepixError::EmptyPath)));
    }

    #[test]
    fn rejects_mismatched_arity() {
        let err = parse_path("M 1,2 3").expect_err("single number in move mode");
        assert!(matches!(
            err,
            DepixError::InvalidCoordinateArity {
                expected: 2,
                found: 1,
                ..
            }
        ));

        let err = parse_path("M 1,2 V 3,4").expect_err("pair in vertical mode");
        assert!(matches!(
            err,
            DepixError::InvalidCoordinateArity {
                expected: 1,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_axis_segment_before_first_point() {
        let err = parse_path("m V 3").expect_err("no origin");
        assert!(matches!(err, DepixError::MissingPathOrigin { command: 'V' }));
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_literals() {
        assert!(matches!(
            parse_path("M 1,x"),
            Err(DepixError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_path("M 1,2 inf,3"),
            Err(DepixError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn mode_arity_matches_grammar() {
        assert_eq!(PathMode::Move.arity(), 2);
        assert_eq!(PathMode::Vertical.arity(), 1);
        assert_eq!(PathMode::Horizontal.arity(), 1);
    }
}
