use crate::path::control::ControlSequence;
use crate::path::error::PathResult;
use crate::path::impl_generic::{
    build_system_impl, create_path_impl, evaluate_segments_impl, solve_coefficients_impl,
};
use crate::path::options::{PathOptions, SystemSolver};
use crate::path::traits::spline_path::{CoefficientTable, PathBuffer, SplinePathAlgorithms};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl SplinePathAlgorithms<CpuRuntime> for CpuClient {
    fn build_system(&self, n: usize) -> PathResult<Tensor<CpuRuntime>> {
        build_system_impl(self, n)
    }

    fn solve_coefficients(
        &self,
        axis_coords: &Tensor<CpuRuntime>,
        solver: SystemSolver,
    ) -> PathResult<CoefficientTable<CpuRuntime>> {
        solve_coefficients_impl(self, axis_coords, solver)
    }

    fn evaluate_segments(
        &self,
        coeffs: &CoefficientTable<CpuRuntime>,
        resolution: usize,
    ) -> PathResult<Tensor<CpuRuntime>> {
        evaluate_segments_impl(self, coeffs, resolution)
    }

    fn create_path(
        &self,
        points: &ControlSequence,
        options: &PathOptions,
    ) -> PathResult<PathBuffer<CpuRuntime>> {
        create_path_impl(self, points, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::error::PathError;
    use approx::assert_abs_diff_eq;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (device, client)
    }

    #[test]
    fn test_trait_pipeline() {
        let (device, client) = setup();

        let system = client.build_system(5).unwrap();
        assert_eq!(system.shape(), &[5, 5]);

        let x = Tensor::<CpuRuntime>::from_slice(&[2.0, 8.0, 3.0, 9.0, 1.0], &[5], &device);
        let coeffs = client.solve_coefficients(&x, SystemSolver::DenseLu).unwrap();
        assert_eq!(coeffs.segments(), 4);

        let samples = client.evaluate_segments(&coeffs, 25).unwrap();
        assert_eq!(samples.shape(), &[4, 25]);

        // Column 0 reproduces every segment's control coordinate
        let data: Vec<f64> = samples.contiguous().to_vec();
        for (i, expected) in [2.0, 8.0, 3.0, 9.0].iter().enumerate() {
            assert_abs_diff_eq!(data[i * 25], *expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_create_path_with_resolution() {
        let (_device, client) = setup();
        let points =
            ControlSequence::from_interleaved(&[1.0, 1.0, 6.0, 3.0, 11.0, 1.0, 16.0, 3.0]).unwrap();

        let path = client.create_path_with_resolution(&points, 50).unwrap();
        assert_eq!(path.shape(), [6, 50]);
        assert_eq!(path.to_track().unwrap().len(), 150);
    }

    #[test]
    fn test_build_system_error_class_matches_solver() {
        let (device, client) = setup();
        let x = Tensor::<CpuRuntime>::from_slice(&[1.0, 3.0], &[2], &device);

        assert!(matches!(
            client.build_system(2),
            Err(PathError::InsufficientPoints { .. })
        ));
        assert!(matches!(
            client.solve_coefficients(&x, SystemSolver::Banded),
            Err(PathError::InsufficientPoints { .. })
        ));
    }
}
