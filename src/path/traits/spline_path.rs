//! Spline path algorithm trait.
use crate::DType;

use crate::path::control::ControlSequence;
use crate::path::error::{PathError, PathResult, try_buffer};
use crate::path::options::{PathOptions, SystemSolver};
use crate::path::track::PathTrack;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Per-segment cubic coefficients for one axis.
///
/// Row i holds `[a, b, c, d]` such that segment i is
/// `a + b*t + c*t^2 + d*t^3` for `t` in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct CoefficientTable<R: Runtime> {
    /// Coefficients, shape [n_segments, 4].
    pub coefficients: Tensor<R>,
}

impl<R: Runtime> CoefficientTable<R> {
    /// Number of segments (control points minus one).
    pub fn segments(&self) -> usize {
        self.coefficients.shape()[0]
    }

    /// Copy the table to host memory as `[a, b, c, d]` rows.
    pub fn to_rows(&self) -> Vec<[f64; 4]> {
        let data: Vec<f64> = self.coefficients.contiguous().to_vec();
        data.chunks_exact(4)
            .map(|row| [row[0], row[1], row[2], row[3]])
            .collect()
    }
}

/// Sampled path: x samples stacked on top of y samples.
///
/// Rows `0..segments` hold x coordinates per segment, rows
/// `segments..2*segments` hold y coordinates in the same segment order.
/// Each row has `resolution` samples.
#[derive(Debug, Clone)]
pub struct PathBuffer<R: Runtime> {
    /// Samples, shape [2 * segments, resolution].
    pub samples: Tensor<R>,
    /// Number of segments per axis block.
    pub segments: usize,
    /// Samples per segment.
    pub resolution: usize,
}

impl<R: Runtime> PathBuffer<R> {
    /// Shape of the sample grid, `[2 * segments, resolution]`.
    pub fn shape(&self) -> [usize; 2] {
        [2 * self.segments, self.resolution]
    }

    /// The x block, shape [segments, resolution].
    pub fn x_block(&self) -> PathResult<Tensor<R>> {
        Ok(self.samples.narrow(0, 0, self.segments)?.contiguous())
    }

    /// The y block, shape [segments, resolution].
    pub fn y_block(&self) -> PathResult<Tensor<R>> {
        Ok(self
            .samples
            .narrow(0, self.segments, self.segments)?
            .contiguous())
    }

    /// Flatten both blocks into host-side x and y paths.
    pub fn to_track(&self) -> PathResult<PathTrack> {
        let len = self.segments * self.resolution;
        let data: Vec<f64> = self.samples.contiguous().to_vec();
        if data.len() != 2 * len {
            return Err(PathError::InvalidParameter {
                parameter: "samples".to_string(),
                message: format!("expected {} samples, buffer holds {}", 2 * len, data.len()),
            });
        }

        // x keeps the host copy; only the y half moves into a new buffer
        let mut ys = try_buffer(len, "PathBuffer::to_track")?;
        let mut xs = data;
        ys.extend(xs.drain(len..));
        xs.shrink_to_fit();
        Ok(PathTrack::from_parts(xs, ys))
    }
}

/// Natural cubic spline path generation.
///
/// Control points are joined by one cubic per segment with unit parametric
/// spacing, zero curvature at both ends, and continuous first and second
/// derivatives at every interior point. Each axis is solved independently.
///
/// # Example
///
/// ```ignore
/// use antpath::path::{ControlSequence, PathOptions, SplinePathAlgorithms};
/// use numr::runtime::cpu::{CpuClient, CpuDevice};
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
///
/// let pebbles = ControlSequence::new(vec![[1.0, 1.0], [10.0, 4.0], [20.0, 2.0]])?;
/// let path = client.create_path(&pebbles, &PathOptions::default())?;
/// let track = path.to_track()?;
/// ```
pub trait SplinePathAlgorithms<R: Runtime<DType = DType>> {
    /// Build the n×n boundary system for `n` control points.
    ///
    /// Rows 0 and n-1 are identity rows (zero curvature at the ends); interior
    /// row i holds `1, 4, 1` at columns i-1, i, i+1.
    ///
    /// # Errors
    ///
    /// [`PathError::InsufficientPoints`] if `n < 3`; nothing is allocated.
    fn build_system(&self, n: usize) -> PathResult<Tensor<R>>;

    /// Solve for the cubic coefficients of one axis.
    ///
    /// # Arguments
    ///
    /// * `axis_coords` - 1D tensor of n control coordinates (n >= 3)
    /// * `solver` - How to solve the boundary system
    ///
    /// # Returns
    ///
    /// The n-1 coefficient rows `[a, b, c, d]`.
    fn solve_coefficients(
        &self,
        axis_coords: &Tensor<R>,
        solver: SystemSolver,
    ) -> PathResult<CoefficientTable<R>>;

    /// Sample every segment at `t = j / resolution`, `j = 0..resolution`.
    ///
    /// # Returns
    ///
    /// Samples, shape [n_segments, resolution].
    fn evaluate_segments(
        &self,
        coeffs: &CoefficientTable<R>,
        resolution: usize,
    ) -> PathResult<Tensor<R>>;

    /// Build the full sampled path through `points`.
    fn create_path(
        &self,
        points: &ControlSequence,
        options: &PathOptions,
    ) -> PathResult<PathBuffer<R>>;

    /// [`create_path`](Self::create_path) with default options and the given resolution.
    fn create_path_with_resolution(
        &self,
        points: &ControlSequence,
        resolution: usize,
    ) -> PathResult<PathBuffer<R>> {
        self.create_path(points, &PathOptions::with_resolution(resolution))
    }
}
