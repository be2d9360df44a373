//! Segment sampling via a power-basis matrix product.

use crate::path::error::{PathError, PathResult, try_buffer};
use crate::path::traits::spline_path::CoefficientTable;
use numr::ops::{MatmulOps, ScalarOps, TensorOps};
use numr::prelude::DType;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Reject a zero sampling resolution.
pub(crate) fn check_resolution(resolution: usize, context: &str) -> PathResult<()> {
    if resolution == 0 {
        return Err(PathError::InvalidParameter {
            parameter: "resolution".to_string(),
            message: format!("{} requires at least one sample per segment", context),
        });
    }
    Ok(())
}

/// Power basis `[1, t, t^2, t^3]` at `t_j = j / resolution`, shape [4, resolution].
///
/// Generated on the host; the matrix is tiny compared to the sample grid.
pub fn power_basis<R, C>(client: &C, resolution: usize) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    check_resolution(resolution, "power_basis")?;

    let elements = resolution.checked_mul(4).ok_or_else(|| PathError::InvalidParameter {
        parameter: "resolution".to_string(),
        message: format!("a [4, {}] power basis overflows the element count", resolution),
    })?;
    let mut data = try_buffer(elements, "power_basis")?;
    let ts = (0..resolution).map(|j| j as f64 / resolution as f64);
    data.extend(ts.clone().map(|_| 1.0));
    data.extend(ts.clone());
    data.extend(ts.clone().map(|t| t * t));
    data.extend(ts.map(|t| t * t * t));

    Ok(Tensor::from_slice(&data, &[4, resolution], client.device()))
}

/// Sample every segment of `coeffs` at `resolution` evenly spaced parameters in `[0, 1)`.
///
/// Returns `coeffs × T`, shape [n_segments, resolution].
pub fn evaluate_segments_impl<R, C>(
    client: &C,
    coeffs: &CoefficientTable<R>,
    resolution: usize,
) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + MatmulOps<R> + RuntimeClient<R>,
{
    check_resolution(resolution, "evaluate_segments")?;

    let shape = coeffs.coefficients.shape();
    if shape.len() != 2 || shape[1] != 4 {
        return Err(PathError::InvalidParameter {
            parameter: "coeffs".to_string(),
            message: format!("coefficient table must have shape [m, 4], got {:?}", shape),
        });
    }

    let basis = power_basis(client, resolution)?;
    Ok(client.matmul(&coeffs.coefficients.contiguous(), &basis)?)
}
