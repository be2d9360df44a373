pub mod assemble;
pub mod coefficients;
pub mod evaluate;
pub mod system;
pub mod tridiagonal;

pub use assemble::create_path_impl;
pub use coefficients::solve_coefficients_impl;
pub use evaluate::{evaluate_segments_impl, power_basis};
pub use system::{MIN_POINTS, build_system_impl};
pub use tridiagonal::solve_tridiagonal;
