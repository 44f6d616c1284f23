//! End-to-end scenarios across point construction, arithmetic and norms.

use crate::compare::{points_eq_comp_rel, points_eq_exact, points_eq_l2};
use crate::random::RandomRunner;
use approx::assert_relative_eq;
use ff_core::fp_math::constants::{pi_mult, sqrt_n};
use ff_core::prelude::*;

/// Every construction path yields the same components.
fn construction_paths<const N: usize, T: Real>(runner: &mut RandomRunner) {
    let source: Point<N, T> = runner.point();
    let values = source.into_array();

    let from_new = Point::<N, T>::new(values);
    let from_array = Point::<N, T>::from_array(values);
    let from_span = Point::<N, T>::from_span(&values);
    // SAFETY: values holds N elements
    let from_ptr = unsafe { Point::<N, T>::from_ptr(values.as_ptr()) };
    let from_slice = Point::<N, T>::try_from_slice(&values[..]).unwrap();
    let from_into: Point<N, T> = values.into();

    for p in [from_array, from_span, from_ptr, from_slice, from_into] {
        assert!(points_eq_exact(&p, &from_new));
    }
    assert_eq!(from_new.into_array(), values);
}

#[test]
fn test_construction_equivalence() {
    let mut runner = RandomRunner::default();
    construction_paths::<1, f32>(&mut runner);
    construction_paths::<2, f64>(&mut runner);
    construction_paths::<3, f32>(&mut runner);
    construction_paths::<7, f64>(&mut runner);
    construction_paths::<10, f32>(&mut runner);
    construction_paths::<255, f64>(&mut runner);
}

#[test]
fn test_zero_all_dims() {
    fn check<const N: usize, T: Real>() {
        assert!(Point::<N, T>::zero().iter().all(|&c| c == T::ZERO));
        assert_eq!(Point::<N, T>::default(), Point::<N, T>::ZERO);
    }
    check::<1, f32>();
    check::<4, f64>();
    check::<16, f32>();
    check::<255, f64>();
}

#[test]
fn test_add_eq_scenario() {
    let mut a = Point::<3, f32>::new([1.0, 2.0, 3.0]);
    PointMathBasic::add_eq(&mut a, &Point::new([4.0, 5.0, 6.0]));
    assert!(points_eq_exact(&a, &Point::new([5.0, 7.0, 9.0])));
}

#[test]
fn test_dot_product_scenario() {
    let a = Point::<4, f64>::new([1.4, -3.5, 0.7, -0.3]);
    let b = Point::<4, f64>::new([-1.6, -2.0, 1.0, 1.7]);
    assert_relative_eq!(PointMathBasic::dot_product(&a, &b), 4.95, max_relative = 1e-15);
}

#[test]
fn test_checked_access_scenario() {
    let p = Point::<3, f64>::new([1.01, 1.03, 1.05]);
    let err = p.at(3).unwrap_err();
    assert!(err.is_bounds_error());
    assert_eq!(err, Error::IndexOutOfRange { index: 3, dims: 3 });
    assert_eq!(*p.at(2).unwrap(), 1.05);
}

#[test]
fn test_interpolate_vs_midpoint_scenario() {
    let a = Point::<3, f64>::new([0.1, -7.3, 1e-3]);
    let b = Point::<3, f64>::new([2.9, 0.7, 5.5]);
    let half = PointMathBasic::interpolate(&a, &b, 0.5);
    let mid = PointMathBasic::midpoint(&a, &b);
    assert!(points_eq_comp_rel(&half, &mid, 4.0 * f64::EPSILON));
}

#[test]
fn test_norm_tags_agree_with_run_time_kinds() {
    let p = Point::<5, f64>::new([0.5, -1.5, 2.0, -0.25, 3.0]);
    let kinds: [NormKind; 5] = ["l1", "l2", "inf", "p=3", "p=1.5"].map(|s| s.parse().unwrap());

    assert_eq!(kinds[0].norm(&p), p.norm(TaxicabNorm::new()));
    assert_eq!(kinds[1].norm(&p), p.norm(EuclideanNorm::new()));
    assert_eq!(kinds[2].norm(&p), p.norm(MaxNorm::new()));
    assert_relative_eq!(kinds[3].norm(&p), p.norm(PNormIntCt::<3>::new()), max_relative = 8.0 * f64::EPSILON);
    assert_relative_eq!(kinds[4].norm(&p), p.norm(PNormRt::new(1.5f64)), max_relative = 8.0 * f64::EPSILON);

    // Exponent 1 is the plain sum of absolute values
    assert_eq!(p.norm(PNormIntCt::<1>::new()), 7.25);
    assert_eq!(p.norm_power_sum(L1Norm::new()), 7.25);
}

#[test]
fn test_flame_iteration_step() {
    // One affine-then-rotate step as a flame variation would apply it
    let mut points = [
        Point::<2, f32>::new([0.25, -0.5]),
        Point::new([1.0, 1.0]),
        Point::new([-0.75, 0.125]),
    ];
    let rotation = Rotation2d::new(pi_mult::<f32, 1, 2>());
    let scale = sqrt_n::<f32, 2>();

    for p in &mut points {
        let before = p.length();
        *p *= scale;
        rotation.apply_point(p);
        assert_relative_eq!(p.length(), before * scale, max_relative = 8.0 * f32::EPSILON);
    }
    assert!(points_eq_l2(&points[1], &Point::new([-scale, scale]), 4.0 * f32::EPSILON));
}

#[test]
fn test_flat_buffer_round_trip() {
    let mut flat = vec![0.0f64; 12];
    {
        let points = Point::<3, f64>::slice_from_flat_mut(&mut flat).unwrap();
        for (i, p) in points.iter_mut().enumerate() {
            *p = Point::from_array([i, i + 1, i + 2]);
        }
    }
    assert_eq!(&flat[..6], &[0.0, 1.0, 2.0, 1.0, 2.0, 3.0]);

    let points = Point::<3, f64>::slice_from_flat(&flat).unwrap();
    assert_eq!(Point::flatten_slice(points), &flat[..]);
    assert!(Point::<5, f64>::slice_from_flat(&flat).unwrap_err().is_length_error());
}

#[test]
fn test_special_values_propagate() {
    let zero = Point::<3, f64>::zero();
    let a = Point::<3, f64>::new([1.0, 2.0, 3.0]);

    let mut p = a;
    PointMathBasic::project_onto(&mut p, &zero);
    assert!(p.iter().all(|c| c.is_nan()));

    let mut q = a;
    PointMathBasic::div_eq(&mut q, 0.0);
    assert!(q.iter().all(|c| c.is_infinite()));

    let nan = Point::<3, f64>::new([f64::NAN, 0.0, 0.0]);
    assert!(PointMathBasic::norm(&nan, L2Norm::new()).is_nan());
    assert!(!points_eq_exact(&nan, &nan));
}
