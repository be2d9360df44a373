//! Host-side Thomas algorithm for the banded solver.

use crate::path::error::{PathError, PathResult, try_buffer};

/// Pivots smaller than this are treated as zero.
const PIVOT_EPS: f64 = 1e-14;

/// Solve a tridiagonal system using the Thomas algorithm.
///
/// `upper[i]` multiplies `x[i+1]` in row i, `lower[i]` multiplies `x[i]` in row i+1.
pub fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> PathResult<Vec<f64>> {
    let n = diag.len();
    if n == 0 || lower.len() + 1 != n || upper.len() + 1 != n || rhs.len() != n {
        return Err(PathError::InvalidParameter {
            parameter: "diagonals".to_string(),
            message: format!(
                "expected diag/rhs of length n and off-diagonals of length n-1, got {}, {}, {}, {}",
                diag.len(),
                upper.len(),
                lower.len(),
                rhs.len()
            ),
        });
    }

    let mut c_prime = try_buffer(n, "solve_tridiagonal")?;
    let mut d_prime = try_buffer(n, "solve_tridiagonal")?;
    c_prime.resize(n, 0.0);
    d_prime.resize(n, 0.0);

    // Forward sweep
    check_pivot(diag[0], 0)?;
    if n > 1 {
        c_prime[0] = upper[0] / diag[0];
    }
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - lower[i - 1] * c_prime[i - 1];
        check_pivot(denom, i)?;
        if i < n - 1 {
            c_prime[i] = upper[i] / denom;
        }
        d_prime[i] = (rhs[i] - lower[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = try_buffer(n, "solve_tridiagonal")?;
    x.resize(n, 0.0);
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

fn check_pivot(pivot: f64, row: usize) -> PathResult<()> {
    if !pivot.is_finite() || pivot.abs() < PIVOT_EPS {
        return Err(PathError::SingularSystem {
            context: "solve_tridiagonal".to_string(),
            message: format!("zero pivot at row {}", row),
        });
    }
    Ok(())
}
