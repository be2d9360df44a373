//! Control points (pebbles) supplied by the caller.

use crate::path::error::{PathError, PathResult};

/// Coordinate axis of a 2D control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Ordered sequence of 2D control points the path must pass through.
///
/// Coordinates are plain reals (screen columns/rows in the grid toy); no bounds
/// are assumed. The sequence may hold fewer than three points, but path
/// generation rejects it with [`PathError::InsufficientPoints`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlSequence {
    points: Vec<[f64; 2]>,
}

impl ControlSequence {
    /// Create a sequence from `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidParameter`] if any coordinate is NaN or infinite.
    pub fn new(points: Vec<[f64; 2]>) -> PathResult<Self> {
        if let Some(i) = points
            .iter()
            .position(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(PathError::InvalidParameter {
                parameter: "points".to_string(),
                message: format!("control point {} has a non-finite coordinate", i),
            });
        }
        Ok(Self { points })
    }

    /// Create a sequence from an interleaved `x0, y0, x1, y1, ...` slice.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidParameter`] for odd-length input or
    /// non-finite coordinates.
    pub fn from_interleaved(xy: &[f64]) -> PathResult<Self> {
        if xy.len() % 2 != 0 {
            return Err(PathError::InvalidParameter {
                parameter: "xy".to_string(),
                message: format!("interleaved coordinates must have even length, got {}", xy.len()),
            });
        }
        Self::new(xy.chunks_exact(2).map(|p| [p[0], p[1]]).collect())
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points as `[x, y]` pairs.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Coordinates of every control point along one axis, in order.
    pub fn axis(&self, axis: Axis) -> Vec<f64> {
        let k = axis.index();
        self.points.iter().map(|p| p[k]).collect()
    }
}

impl TryFrom<Vec<[f64; 2]>> for ControlSequence {
    type Error = PathError;

    fn try_from(points: Vec<[f64; 2]>) -> PathResult<Self> {
        Self::new(points)
    }
}
