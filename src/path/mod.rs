//! Spline path generation.
//!
//! Turns an ordered sequence of 2D control points into a dense sampled path
//! that passes through every point, using a natural cubic spline with unit
//! parametric spacing on each axis independently.
//!
//! # Pipeline
//!
//! ```text
//! ControlSequence ──axis──▶ [n] coords ──solve_coefficients──▶ [n-1, 4] table
//!                                                                   │
//!                                     evaluate_segments (× [4, R] power basis)
//!                                                                   ▼
//!                 PathBuffer [2(n-1), R] ◀──stack x over y── [n-1, R] samples
//! ```
//!
//! # Module Organization
//!
//! - [`traits`] - [`SplinePathAlgorithms`] and the tensor-backed result types
//! - [`impl_generic`] - Runtime-generic implementations
//! - [`ControlSequence`] / [`PathTrack`] - Host-side input and walkable output
//!
//! # Example
//!
//! ```ignore
//! use antpath::path::{ControlSequence, PathOptions, SplinePathAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let pebbles = ControlSequence::from_interleaved(&[1.0, 1.0, 12.0, 6.0, 30.0, 2.0])?;
//! let path = client.create_path(&pebbles, &PathOptions::default())?;
//! let track = path.to_track()?;
//!
//! // One tick per sample; the renderer draws the ant at (col, row)
//! for (col, row) in (0..track.len()).filter_map(|k| track.cell(k)) {
//!     // ...
//! }
//! ```

mod control;
mod cpu;
mod error;
mod options;
mod track;

#[cfg(feature = "cuda")]
mod cuda;

pub mod impl_generic;
pub mod traits;

pub use control::{Axis, ControlSequence};
pub use error::{PathError, PathResult};
pub use options::{DEFAULT_RESOLUTION, PathOptions, SystemSolver};
pub use track::PathTrack;
pub use traits::{CoefficientTable, PathBuffer, SplinePathAlgorithms};
