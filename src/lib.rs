//! antpath - Smooth paths through placed points
//!
//! antpath is the path-generation engine behind a "pebbles and ants" grid toy:
//! a user drops pebbles on a grid, and ants walk a smooth curve through them.
//! Given the ordered pebbles and a sampling resolution, antpath solves a
//! natural cubic spline per axis and returns a dense path buffer the animation
//! loop can walk one sample per tick.
//!
//! Built on numr's tensor primitives, it runs on the CPU runtime by default and
//! on CUDA behind a feature flag. Rendering, input handling and timing live
//! with the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     antpath                             │
//! │  build_system → solve_coefficients → evaluate_segments  │
//! │                      → create_path                      │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                              │
//! │        (tensors, matmul, cat, diagflat, LU solve)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//!
//! Paths are computed in F64, so numr's F32-only WebGPU backend is not wired up.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade (`debug` per path, `trace` per
//! axis solve). Install any logger to see them; failures are returned, never
//! logged.
//!
//! # Example
//!
//! ```ignore
//! use antpath::{ControlSequence, PathOptions, SplinePathAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let pebbles = ControlSequence::new(vec![[2.0, 1.0], [14.0, 9.0], [30.0, 4.0]])?;
//! let path = client.create_path(&pebbles, &PathOptions::default())?;
//! assert_eq!(path.shape(), [4, 50]);
//! ```

pub mod path;

// Re-export main types for convenience
pub use path::{
    Axis, CoefficientTable, ControlSequence, DEFAULT_RESOLUTION, PathBuffer, PathError,
    PathOptions, PathResult, PathTrack, SplinePathAlgorithms, SystemSolver,
};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
