//! Boundary system for a natural cubic spline with unit knot spacing.
//!
//! ```text
//! | 1 0 0 ... 0 |
//! | 1 4 1     0 |
//! | 0 1 4 1   0 |
//! |     ...     |
//! | 0 ... 0 0 1 |
//! ```
//!
//! The first and last rows pin the curvature term to zero at both ends; every
//! interior row is the second-derivative continuity relation between neighbours.

use crate::path::error::{PathError, PathResult, try_buffer};
use numr::prelude::DType;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Minimum number of control points for a cubic spline.
pub const MIN_POINTS: usize = 3;

/// The three diagonals of the boundary system: (main, upper, lower).
pub(crate) struct Diagonals {
    pub main: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Reject point counts too small for a cubic spline.
pub(crate) fn check_point_count(n: usize, context: &str) -> PathResult<()> {
    if n < MIN_POINTS {
        return Err(PathError::InsufficientPoints {
            required: MIN_POINTS,
            actual: n,
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Diagonals of the n×n boundary system (n >= 3).
///
/// `upper[i]` sits at (i, i+1) and `lower[i]` at (i+1, i).
pub(crate) fn boundary_diagonals(n: usize) -> Diagonals {
    let mut main = vec![4.0; n];
    main[0] = 1.0;
    main[n - 1] = 1.0;

    let mut upper = vec![1.0; n - 1];
    upper[0] = 0.0;

    let mut lower = vec![1.0; n - 1];
    lower[n - 2] = 0.0;

    Diagonals { main, upper, lower }
}

/// Build the dense n×n boundary system.
///
/// The band is scattered into a zeroed host buffer and uploaded once.
pub fn build_system_impl<R, C>(client: &C, n: usize) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    check_point_count(n, "build_system")?;

    let elements = n.checked_mul(n).ok_or_else(|| PathError::InvalidParameter {
        parameter: "n".to_string(),
        message: format!("a {}x{} boundary system does not fit in memory", n, n),
    })?;
    let mut data = try_buffer(elements, "build_system")?;
    data.resize(elements, 0.0);

    let diagonals = boundary_diagonals(n);
    for (i, value) in diagonals.main.iter().enumerate() {
        data[i * n + i] = *value;
    }
    for (i, value) in diagonals.upper.iter().enumerate() {
        data[i * n + i + 1] = *value;
    }
    for (i, value) in diagonals.lower.iter().enumerate() {
        data[(i + 1) * n + i] = *value;
    }

    Ok(Tensor::from_slice(&data, &[n, n], client.device()))
}
