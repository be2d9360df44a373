//! Configuration types for path generation.

/// Samples per segment used when the caller does not choose one.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Strategy for solving the boundary system of a natural cubic spline.
///
/// # Strategies
///
/// - **DenseLu**: Assemble the full n×n system and solve it with LU decomposition
///   (partial pivoting). Default.
/// - **Banded**: Thomas elimination on the three diagonals, O(n) instead of O(n³).
///
/// Both produce the same coefficients up to rounding; the system is strictly
/// diagonally dominant, so elimination without pivoting is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemSolver {
    /// Dense LU decomposition with partial pivoting (default).
    #[default]
    DenseLu,
    /// Tridiagonal (Thomas) elimination.
    Banded,
}

/// Options for [`create_path`](crate::path::SplinePathAlgorithms::create_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOptions {
    /// Number of samples per segment (default: 50). Must be at least 1.
    pub resolution: usize,

    /// Solver for the per-axis boundary system (default: dense LU).
    pub solver: SystemSolver,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            solver: SystemSolver::default(),
        }
    }
}

impl PathOptions {
    /// Default options with a custom sampling resolution.
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Switch to the banded solver.
    pub fn banded(self) -> Self {
        Self {
            solver: SystemSolver::Banded,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = PathOptions::default();
        assert_eq!(opts.resolution, 50);
        assert_eq!(opts.solver, SystemSolver::DenseLu);
    }

    #[test]
    fn test_builders() {
        let opts = PathOptions::with_resolution(8).banded();
        assert_eq!(opts.resolution, 8);
        assert_eq!(opts.solver, SystemSolver::Banded);
    }
}
