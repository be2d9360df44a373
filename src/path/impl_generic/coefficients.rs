//! Per-axis cubic coefficient solve.
//!
//! With unit spacing between knots the natural spline reduces to
//!
//! ```text
//! c[i-1] + 4 c[i] + c[i+1] = 3 (a[i+1] - 2 a[i] + a[i-1])    (interior)
//! c[0] = c[n-1] = 0                                          (ends)
//! b[i] = (a[i+1] - a[i]) - (2 c[i] + c[i+1]) / 3
//! d[i] = (c[i+1] - c[i]) / 3
//! ```
//!
//! where `a` are the control coordinates. The last knot starts no segment, so
//! only the first n-1 rows are returned.

use crate::path::error::{PathError, PathResult};
use crate::path::impl_generic::system::{boundary_diagonals, build_system_impl, check_point_count};
use crate::path::impl_generic::tridiagonal::solve_tridiagonal;
use crate::path::options::SystemSolver;
use crate::path::traits::spline_path::CoefficientTable;
use log::trace;
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::ops::{ScalarOps, ShapeOps, TensorOps};
use numr::prelude::DType;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Solve the cubic coefficients `[a, b, c, d]` of every segment along one axis.
pub fn solve_coefficients_impl<R, C>(
    client: &C,
    axis_coords: &Tensor<R>,
    solver: SystemSolver,
) -> PathResult<CoefficientTable<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + ShapeOps<R> + LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    let shape = axis_coords.shape();
    if shape.len() != 1 {
        return Err(PathError::InvalidParameter {
            parameter: "axis_coords".to_string(),
            message: format!("axis coordinates must be a 1D tensor, got shape {:?}", shape),
        });
    }
    if axis_coords.dtype() != DType::F64 {
        return Err(PathError::InvalidParameter {
            parameter: "axis_coords".to_string(),
            message: format!("axis coordinates must be F64, got {:?}", axis_coords.dtype()),
        });
    }

    let n = shape[0];
    check_point_count(n, "solve_coefficients")?;

    let host: Vec<f64> = axis_coords.contiguous().to_vec();
    if let Some(i) = host.iter().position(|v| !v.is_finite()) {
        return Err(PathError::InvalidParameter {
            parameter: "axis_coords".to_string(),
            message: format!("control coordinate {} is not finite", i),
        });
    }

    trace!("solving {}-point boundary system with {:?}", n, solver);

    let device = client.device();
    let a = axis_coords.contiguous();

    // rhs[i] = 3 * (a[i+1] - 2 a[i] + a[i-1]) for interior i, zero at both ends
    let a_prev = a.narrow(0, 0, n - 2)?.contiguous();
    let a_curr = a.narrow(0, 1, n - 2)?.contiguous();
    let a_next = a.narrow(0, 2, n - 2)?.contiguous();
    let second_diff = client.add(
        &client.sub(&a_next, &client.mul_scalar(&a_curr, 2.0)?)?,
        &a_prev,
    )?;
    let rhs_interior = client.mul_scalar(&second_diff, 3.0)?;
    let zero_1 = Tensor::zeros(&[1], DType::F64, device);
    let rhs = client.cat(&[&zero_1, &rhs_interior, &zero_1], 0)?;

    let c = match solver {
        SystemSolver::DenseLu => solve_dense(client, &rhs, n)?,
        SystemSolver::Banded => solve_banded(client, &rhs, n)?,
    };
    check_finite(&c)?;

    let a_lo = a.narrow(0, 0, n - 1)?.contiguous();
    let a_hi = a.narrow(0, 1, n - 1)?.contiguous();
    let c_left = c.narrow(0, 0, n - 1)?.contiguous();
    let c_right = c.narrow(0, 1, n - 1)?.contiguous();

    // b = (a[i+1] - a[i]) - (2 c[i] + c[i+1]) / 3
    let slopes = client.sub(&a_hi, &a_lo)?;
    let two_c_left = client.mul_scalar(&c_left, 2.0)?;
    let curvature = client.div_scalar(&client.add(&two_c_left, &c_right)?, 3.0)?;
    let b = client.sub(&slopes, &curvature)?;

    // d = (c[i+1] - c[i]) / 3
    let d = client.div_scalar(&client.sub(&c_right, &c_left)?, 3.0)?;

    let m = n - 1;
    let coefficients = client.cat(
        &[
            &a_lo.reshape(&[m, 1])?,
            &b.reshape(&[m, 1])?,
            &c_left.reshape(&[m, 1])?,
            &d.reshape(&[m, 1])?,
        ],
        1,
    )?;

    Ok(CoefficientTable { coefficients })
}

/// Dense LU solve of the full boundary system.
fn solve_dense<R, C>(client: &C, rhs: &Tensor<R>, n: usize) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + ShapeOps<R> + LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    let a_mat = build_system_impl(client, n)?;
    let rhs_col = rhs.reshape(&[n, 1])?;

    let c_col = LinearAlgebraAlgorithms::solve(client, &a_mat, &rhs_col).map_err(|e| {
        PathError::SingularSystem {
            context: "solve_coefficients".to_string(),
            message: format!("LU solve failed: {}", e),
        }
    })?;

    Ok(c_col.reshape(&[n])?)
}

/// Thomas elimination on the three diagonals of the boundary system.
fn solve_banded<R, C>(client: &C, rhs: &Tensor<R>, n: usize) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    let diagonals = boundary_diagonals(n);
    let rhs_host: Vec<f64> = rhs.contiguous().to_vec();
    let c = solve_tridiagonal(&diagonals.lower, &diagonals.main, &diagonals.upper, &rhs_host)?;
    Ok(Tensor::from_slice(&c, &[n], client.device()))
}

fn check_finite<R: Runtime>(c: &Tensor<R>) -> PathResult<()> {
    let values: Vec<f64> = c.contiguous().to_vec();
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(PathError::SingularSystem {
            context: "solve_coefficients".to_string(),
            message: format!("non-finite curvature term at knot {}", i),
        });
    }
    Ok(())
}
