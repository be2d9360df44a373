pub mod spline_path;

pub use spline_path::{CoefficientTable, PathBuffer, SplinePathAlgorithms};
