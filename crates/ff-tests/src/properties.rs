//! Randomized properties of the point arithmetic.
//!
//! Tolerances on the products and angles are rounding-error bounds scaled
//! by the magnitude of the inputs, so they hold for any seed.

use crate::compare::{points_eq_comp_abs, points_eq_comp_rel, points_eq_exact};
use crate::random::{PairProperty, RandomRunner, ScalarProperty};
use ff_core::{InfNorm, L1Norm, L2Norm, PNormIntCt, PNormRt, Point, PointMathBasic, Real};

fn eps_times<T: Real>(k: usize) -> T {
    T::EPSILON * T::cast_from(k)
}

struct AddEq;

impl PairProperty for AddEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, b: Point<N, T>) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] + b[i]));
        PointMathBasic::add_eq(&mut a, &b);
        points_eq_exact(&a, &expected)
    }
}

struct SubEq;

impl PairProperty for SubEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, b: Point<N, T>) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] - b[i]));
        PointMathBasic::sub_eq(&mut a, &b);
        points_eq_exact(&a, &expected)
    }
}

struct AddSubInverse;

impl PairProperty for AddSubInverse {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        // Only the rounding of a + b is lost, and operands stay below 2^8
        let mut c = a;
        PointMathBasic::add_eq(&mut c, &b);
        PointMathBasic::sub_eq(&mut c, &b);
        let tol = eps_times::<T>(2) * T::cast_from(256u32);
        points_eq_comp_abs(&c, &a, tol)
    }
}

struct MulEq;

impl ScalarProperty for MulEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, s: T) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] * s));
        PointMathBasic::mul_eq(&mut a, s);
        points_eq_exact(&a, &expected)
    }
}

struct DivEq;

impl ScalarProperty for DivEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, s: T) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] / s));
        PointMathBasic::div_eq(&mut a, s);
        if N == 1 {
            points_eq_exact(&a, &expected)
        } else {
            points_eq_comp_rel(&a, &expected, eps_times(2))
        }
    }
}

struct MulDivRoundTrip;

impl ScalarProperty for MulDivRoundTrip {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, s: T) -> bool {
        let mut c = a;
        PointMathBasic::mul_eq(&mut c, s);
        PointMathBasic::div_eq(&mut c, s);
        points_eq_comp_rel(&c, &a, eps_times(2))
    }
}

struct ComponentMulEq;

impl PairProperty for ComponentMulEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, b: Point<N, T>) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] * b[i]));
        PointMathBasic::component_mul_eq(&mut a, &b);
        points_eq_exact(&a, &expected)
    }
}

struct ComponentDivEq;

impl PairProperty for ComponentDivEq {
    fn check<const N: usize, T: Real>(&self, mut a: Point<N, T>, b: Point<N, T>) -> bool {
        let expected = Point::new(std::array::from_fn(|i| a[i] / b[i]));
        PointMathBasic::component_div_eq(&mut a, &b);
        points_eq_exact(&a, &expected)
    }
}

/// Fused dot product against a plain multiply-then-add sum. Both are
/// within `N * eps / 2` of the exact value relative to the sum of
/// absolute products.
struct DotProduct;

impl PairProperty for DotProduct {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let mut naive = T::ZERO;
        let mut magnitude = T::ZERO;
        for i in 0..N {
            naive += a[i] * b[i];
            magnitude += (a[i] * b[i]).abs();
        }
        let fused = PointMathBasic::dot_product(&a, &b);
        let ok = (naive - fused).abs() <= eps_times::<T>(2 * (N + 1)) * magnitude;
        if !ok {
            eprintln!("naive {naive}, fused {fused}, magnitude {magnitude}");
        }
        ok
    }
}

struct DotIsPowerSum;

impl PairProperty for DotIsPowerSum {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, _: Point<N, T>) -> bool {
        let dot = PointMathBasic::dot_product(&a, &a);
        let sum = PointMathBasic::norm_power_sum(&a, L2Norm::new());
        (dot - sum).abs() <= eps_times::<T>(N + 1) * sum
    }
}

/// Half-angle result against the cosine from a plain dot product. The
/// comparison is done on cosines since `acos` is ill-conditioned near 0
/// and pi.
struct AngleBetween;

impl PairProperty for AngleBetween {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let angle = PointMathBasic::angle_between(&a, &b);
        if N == 1 {
            let expected = if (a[0] * b[0]).is_sign_negative() { T::PI } else { T::ZERO };
            return angle == expected;
        }
        if !(T::ZERO..=T::PI).contains(&angle) {
            eprintln!("angle {angle} outside [0, pi]");
            return false;
        }
        let (mut dot, mut aa, mut bb) = (T::ZERO, T::ZERO, T::ZERO);
        for i in 0..N {
            dot += a[i] * b[i];
            aa += a[i] * a[i];
            bb += b[i] * b[i];
        }
        let cos = (dot / (aa.sqrt() * bb.sqrt())).clamp(-T::ONE, T::ONE);
        let ok = (angle.cos() - cos).abs() <= eps_times::<T>(16 * (N + 2));
        if !ok {
            eprintln!("angle {angle}, cos {} vs {cos}", angle.cos());
        }
        ok
    }
}

struct AngleToSelf;

impl PairProperty for AngleToSelf {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, _: Point<N, T>) -> bool {
        let mut neg = a;
        PointMathBasic::mul_eq(&mut neg, -T::ONE);
        PointMathBasic::angle_between(&a, &a) == T::ZERO && PointMathBasic::angle_between(&a, &neg) == T::PI
    }
}

struct NormsAgree;

impl PairProperty for NormsAgree {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, _: Point<N, T>) -> bool {
        let abs_sum = a.iter().fold(T::ZERO, |acc, &x| acc + x.abs());
        let max_abs = a.iter().fold(T::ZERO, |acc, &x| acc.max(x.abs()));
        let l2 = PointMathBasic::norm(&a, L2Norm::new());
        let rt2 = PointMathBasic::norm(&a, PNormRt::new(2u32));
        let rt1 = PointMathBasic::norm(&a, PNormRt::new(1.0f64));

        PointMathBasic::norm(&a, L1Norm::new()) == abs_sum
            && PointMathBasic::norm(&a, InfNorm) == max_abs
            && PointMathBasic::norm(&a, PNormIntCt::<2>::new()) == l2
            && (rt2 - l2).abs() <= eps_times::<T>(4 * (N + 2)) * l2
            && (rt1 - abs_sum).abs() <= eps_times::<T>(4 * (N + 2)) * abs_sum
            && max_abs <= l2 * (T::ONE + T::EPSILON)
            && l2 <= abs_sum * (T::ONE + eps_times(N + 2))
    }
}

struct TriangleInequality;

impl PairProperty for TriangleInequality {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let sum = a + b;
        let lhs = sum.length();
        let rhs = a.length() + b.length();
        lhs <= rhs * (T::ONE + eps_times(4 * (N + 2)))
    }
}

struct ProjectionResidual;

impl PairProperty for ProjectionResidual {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let mut p = a;
        PointMathBasic::project_onto(&mut p, &b);
        let residual = a - p;
        let scale = a.length() * b.length();
        PointMathBasic::dot_product(&residual, &b).abs() <= eps_times::<T>(16 * (N + 2)) * scale
    }
}

struct ReflectionKeepsLength;

impl PairProperty for ReflectionKeepsLength {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let mut r = a;
        PointMathBasic::reflect_across(&mut r, &b);
        (r.length() - a.length()).abs() <= eps_times::<T>(16 * (N + 2)) * a.length()
    }
}

struct LerpEndpoints;

impl PairProperty for LerpEndpoints {
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
        let start = PointMathBasic::interpolate(&a, &b, T::ZERO);
        let end = PointMathBasic::interpolate(&a, &b, T::ONE);
        let half = PointMathBasic::interpolate(&a, &b, T::HALF);
        let mid = PointMathBasic::midpoint(&a, &b);
        let tol = eps_times::<T>(2) * T::cast_from(256u32);
        points_eq_exact(&start, &a)
            && points_eq_comp_abs(&end, &b, tol)
            && points_eq_comp_abs(&half, &mid, tol)
            && points_eq_exact(&mid, &PointMathBasic::midpoint(&b, &a))
    }
}

#[test]
fn test_add_eq_random() {
    RandomRunner::default().run_pairs_all(&AddEq);
}

#[test]
fn test_sub_eq_random() {
    RandomRunner::default().run_pairs_all(&SubEq);
}

#[test]
fn test_add_sub_inverse_random() {
    RandomRunner::default().run_pairs_all(&AddSubInverse);
}

#[test]
fn test_mul_eq_random() {
    RandomRunner::default().run_scalars_all(&MulEq);
}

#[test]
fn test_div_eq_random() {
    RandomRunner::default().run_scalars_all(&DivEq);
}

#[test]
fn test_mul_div_round_trip_random() {
    RandomRunner::default().run_scalars_all(&MulDivRoundTrip);
}

#[test]
fn test_component_mul_eq_random() {
    RandomRunner::default().run_pairs_all(&ComponentMulEq);
}

#[test]
fn test_component_div_eq_random() {
    RandomRunner::default().run_pairs_all(&ComponentDivEq);
}

#[test]
fn test_dot_product_random() {
    RandomRunner::default().run_pairs_all(&DotProduct);
}

#[test]
fn test_dot_is_power_sum_random() {
    RandomRunner::default().run_pairs_all(&DotIsPowerSum);
}

#[test]
fn test_angle_between_random() {
    RandomRunner::default().run_pairs_all(&AngleBetween);
}

#[test]
fn test_angle_to_self_random() {
    RandomRunner::default().run_pairs_all(&AngleToSelf);
}

#[test]
fn test_norms_random() {
    RandomRunner::default().run_pairs_all(&NormsAgree);
}

#[test]
fn test_triangle_inequality_random() {
    RandomRunner::default().run_pairs_all(&TriangleInequality);
}

#[test]
fn test_projection_random() {
    RandomRunner::default().run_pairs_all(&ProjectionResidual);
}

#[test]
fn test_reflection_random() {
    RandomRunner::default().run_pairs_all(&ReflectionKeepsLength);
}

#[test]
fn test_interpolation_random() {
    RandomRunner::default().run_pairs_all(&LerpEndpoints);
}

#[test]
fn test_rotation_keeps_length_random() {
    fn check<T: Real>(runner: &mut RandomRunner) {
        for _ in 0..500 {
            let p: Point<2, T> = runner.point();
            let angle: T = runner.sample();
            let (mut x, mut y) = (p[0], p[1]);
            PointMathBasic::rotate_2d(&mut x, &mut y, angle);
            let len = Point::new([x, y]).length();
            assert!(
                (len - p.length()).abs() <= eps_times::<T>(8) * p.length(),
                "rotating {p} by {angle} changed its length to {len}"
            );
        }
    }
    let mut runner = RandomRunner::default();
    check::<f32>(&mut runner);
    check::<f64>(&mut runner);
}

#[test]
fn test_cross_3d_orthogonal_random() {
    fn check<T: Real>(runner: &mut RandomRunner) {
        for _ in 0..500 {
            let a: Point<3, T> = runner.point();
            let b: Point<3, T> = runner.point();
            let c = PointMathBasic::cross_3d(&a, &b);
            let tol = eps_times::<T>(32) * a.length() * b.length();
            assert!(PointMathBasic::dot_product(&c, &a).abs() <= tol * a.length(), "{a} x {b} = {c}");
            assert!(PointMathBasic::dot_product(&c, &b).abs() <= tol * b.length(), "{a} x {b} = {c}");
        }
    }
    let mut runner = RandomRunner::default();
    check::<f32>(&mut runner);
    check::<f64>(&mut runner);
}
