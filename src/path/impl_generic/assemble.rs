//! Path assembly: solve and sample both axes, then stack x rows over y rows.

use crate::path::control::{Axis, ControlSequence};
use crate::path::error::{PathError, PathResult};
use crate::path::impl_generic::coefficients::solve_coefficients_impl;
use crate::path::impl_generic::evaluate::{check_resolution, evaluate_segments_impl};
use crate::path::impl_generic::system::check_point_count;
use crate::path::options::PathOptions;
use crate::path::traits::spline_path::PathBuffer;
use log::debug;
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::ops::{MatmulOps, ScalarOps, ShapeOps, TensorOps};
use numr::prelude::DType;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Build the sampled path through `points`, shape [2 * (n - 1), resolution].
pub fn create_path_impl<R, C>(
    client: &C,
    points: &ControlSequence,
    options: &PathOptions,
) -> PathResult<PathBuffer<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R>
        + ScalarOps<R>
        + ShapeOps<R>
        + MatmulOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    let n = points.len();
    check_point_count(n, "create_path")?;
    check_resolution(options.resolution, "create_path")?;

    let segments = n - 1;
    let resolution = options.resolution;
    if (2 * segments).checked_mul(resolution).is_none() {
        return Err(PathError::InvalidParameter {
            parameter: "resolution".to_string(),
            message: format!(
                "{} segments x {} samples per segment overflows the sample count",
                segments, resolution
            ),
        });
    }

    debug!(
        "building path through {} control points: {} segments x {} samples ({:?})",
        n, segments, resolution, options.solver
    );

    let x_samples = sample_axis(client, points, Axis::X, options)?;
    let y_samples = sample_axis(client, points, Axis::Y, options)?;
    let samples = client.cat(&[&x_samples, &y_samples], 0)?;

    Ok(PathBuffer {
        samples,
        segments,
        resolution,
    })
}

/// Solve and sample one axis, shape [n - 1, resolution].
fn sample_axis<R, C>(
    client: &C,
    points: &ControlSequence,
    axis: Axis,
    options: &PathOptions,
) -> PathResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R>
        + ScalarOps<R>
        + ShapeOps<R>
        + MatmulOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    let coords = points.axis(axis);
    let coords = Tensor::from_slice(&coords, &[coords.len()], client.device());
    let coeffs = solve_coefficients_impl(client, &coords, options.solver)?;
    evaluate_segments_impl(client, &coeffs, options.resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (device, client)
    }

    fn pebbles() -> ControlSequence {
        ControlSequence::new(vec![[1.0, 1.0], [10.0, 5.0], [20.0, 2.0], [15.0, 12.0]]).unwrap()
    }

    #[test]
    fn test_create_path_shape() {
        let (_device, client) = setup();

        for resolution in [1, 7, 50] {
            let path: PathBuffer<CpuRuntime> =
                create_path_impl(&client, &pebbles(), &PathOptions::with_resolution(resolution))
                    .unwrap();
            assert_eq!(path.samples.shape(), &[6, resolution]);
            assert_eq!(path.shape(), [6, resolution]);
            assert_eq!(path.segments, 3);
        }
    }

    #[test]
    fn test_blocks_start_at_control_points() {
        let (_device, client) = setup();
        let points = pebbles();
        let resolution = 12;

        let path: PathBuffer<CpuRuntime> =
            create_path_impl(&client, &points, &PathOptions::with_resolution(resolution)).unwrap();
        let data: Vec<f64> = path.samples.contiguous().to_vec();

        for (i, [x, y]) in points.points()[..3].iter().enumerate() {
            assert_abs_diff_eq!(data[i * resolution], *x, epsilon = 1e-10);
            assert_abs_diff_eq!(data[(i + 3) * resolution], *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_last_sample_approaches_next_point() {
        let (_device, client) = setup();
        let points = pebbles();

        let path: PathBuffer<CpuRuntime> =
            create_path_impl(&client, &points, &PathOptions::with_resolution(2000)).unwrap();
        let track = path.to_track().unwrap();

        // Final sample sits just short of the last control point
        let [x, y] = track.point(track.len() - 1).unwrap();
        assert_abs_diff_eq!(x, 15.0, epsilon = 0.05);
        assert_abs_diff_eq!(y, 12.0, epsilon = 0.05);
    }

    #[test]
    fn test_axes_are_independent() {
        let (_device, client) = setup();
        let a = ControlSequence::new(vec![[0.0, 3.0], [5.0, 3.0], [9.0, 3.0]]).unwrap();
        let b = ControlSequence::new(vec![[0.0, -8.0], [5.0, 40.0], [9.0, 1.0]]).unwrap();

        let opts = PathOptions::with_resolution(16);
        let pa: PathBuffer<CpuRuntime> = create_path_impl(&client, &a, &opts).unwrap();
        let pb: PathBuffer<CpuRuntime> = create_path_impl(&client, &b, &opts).unwrap();

        let xa: Vec<f64> = pa.x_block().unwrap().to_vec();
        let xb: Vec<f64> = pb.x_block().unwrap().to_vec();
        assert_eq!(xa, xb);

        // Constant y stays constant
        let ya: Vec<f64> = pa.y_block().unwrap().to_vec();
        for y in ya {
            assert_abs_diff_eq!(y, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_banded_matches_dense() {
        let (_device, client) = setup();
        let points = pebbles();

        let dense: PathBuffer<CpuRuntime> =
            create_path_impl(&client, &points, &PathOptions::with_resolution(20)).unwrap();
        let banded: PathBuffer<CpuRuntime> =
            create_path_impl(&client, &points, &PathOptions::with_resolution(20).banded())
                .unwrap();

        let lhs: Vec<f64> = dense.samples.contiguous().to_vec();
        let rhs: Vec<f64> = banded.samples.contiguous().to_vec();
        for (l, r) in lhs.iter().zip(rhs.iter()) {
            assert_abs_diff_eq!(*l, *r, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_too_few_points() {
        let (_device, client) = setup();
        let points = ControlSequence::new(vec![[0.0, 0.0], [1.0, 1.0]]).unwrap();

        let result: PathResult<PathBuffer<CpuRuntime>> =
            create_path_impl(&client, &points, &PathOptions::default());
        assert!(matches!(
            result,
            Err(PathError::InsufficientPoints { actual: 2, .. })
        ));
    }

    #[test]
    fn test_resolution_overflow_names_request() {
        let (_device, client) = setup();

        let result: PathResult<PathBuffer<CpuRuntime>> =
            create_path_impl(&client, &pebbles(), &PathOptions::with_resolution(usize::MAX));
        match result {
            Err(PathError::InvalidParameter { parameter, message }) => {
                assert_eq!(parameter, "resolution");
                assert!(message.contains(&usize::MAX.to_string()), "{}", message);
            }
            other => panic!("expected InvalidParameter, got {:?}", other.map(|p| p.shape())),
        }
    }

    #[test]
    fn test_overflowing_pebbles_are_singular() {
        let (_device, client) = setup();
        let points = ControlSequence::new(vec![[0.0, 1.0], [1e308, 2.0], [-1e308, 3.0]]).unwrap();

        for options in [PathOptions::default(), PathOptions::default().banded()] {
            let result: PathResult<PathBuffer<CpuRuntime>> =
                create_path_impl(&client, &points, &options);
            assert!(matches!(result, Err(PathError::SingularSystem { .. })));
        }
    }

    #[test]
    fn test_zero_resolution() {
        let (_device, client) = setup();

        let result: PathResult<PathBuffer<CpuRuntime>> =
            create_path_impl(&client, &pebbles(), &PathOptions::with_resolution(0));
        assert!(matches!(result, Err(PathError::InvalidParameter { .. })));
    }
}
