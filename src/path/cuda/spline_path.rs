use crate::path::control::ControlSequence;
use crate::path::error::PathResult;
use crate::path::impl_generic::{
    build_system_impl, create_path_impl, evaluate_segments_impl, solve_coefficients_impl,
};
use crate::path::options::{PathOptions, SystemSolver};
use crate::path::traits::spline_path::{CoefficientTable, PathBuffer, SplinePathAlgorithms};
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl SplinePathAlgorithms<CudaRuntime> for CudaClient {
    fn build_system(&self, n: usize) -> PathResult<Tensor<CudaRuntime>> {
        build_system_impl(self, n)
    }

    fn solve_coefficients(
        &self,
        axis_coords: &Tensor<CudaRuntime>,
        solver: SystemSolver,
    ) -> PathResult<CoefficientTable<CudaRuntime>> {
        solve_coefficients_impl(self, axis_coords, solver)
    }

    fn evaluate_segments(
        &self,
        coeffs: &CoefficientTable<CudaRuntime>,
        resolution: usize,
    ) -> PathResult<Tensor<CudaRuntime>> {
        evaluate_segments_impl(self, coeffs, resolution)
    }

    fn create_path(
        &self,
        points: &ControlSequence,
        options: &PathOptions,
    ) -> PathResult<PathBuffer<CudaRuntime>> {
        create_path_impl(self, points, options)
    }
}
