//! Point comparison predicates.
//!
//! Each predicate takes the computed point first and the expected point
//! second. Failing comparisons print both points to stderr so the values
//! behind a failed randomized check can be reproduced.

use ff_core::{Point, Real};

fn report<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>) {
    eprintln!("Expected {expected} but computed {actual} (type is {})", T::NAME);
}

/// Every component within `err` of the expected component.
pub fn points_eq_comp_abs<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>, err: T) -> bool {
    let ok = actual.iter().zip(expected).all(|(&a, &e)| (a - e).abs() <= err);
    if !ok {
        report(actual, expected);
    }
    ok
}

/// Every component within relative error `err` of the expected component.
pub fn points_eq_comp_rel<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>, err: T) -> bool {
    let ok = actual
        .iter()
        .zip(expected)
        .all(|(&a, &e)| a == e || ((a - e) / e).abs() <= err);
    if !ok {
        report(actual, expected);
    }
    ok
}

/// Largest component difference at most `err`.
pub fn points_eq_max<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>, err: T) -> bool {
    let max = actual
        .iter()
        .zip(expected)
        .fold(T::ZERO, |acc, (&a, &e)| acc.max((a - e).abs()));
    let ok = max <= err;
    if !ok {
        report(actual, expected);
    }
    ok
}

/// Sum of component differences at most `err`.
pub fn points_eq_l1<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>, err: T) -> bool {
    let sum = actual
        .iter()
        .zip(expected)
        .fold(T::ZERO, |acc, (&a, &e)| acc + (a - e).abs());
    let ok = sum <= err;
    if !ok {
        report(actual, expected);
    }
    ok
}

/// Euclidean distance at most `err`.
pub fn points_eq_l2<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>, err: T) -> bool {
    let sum = actual.iter().zip(expected).fold(T::ZERO, |acc, (&a, &e)| {
        let d = a - e;
        d.mul_add(d, acc)
    });
    let ok = sum <= err * err;
    if !ok {
        report(actual, expected);
    }
    ok
}

/// Components compare equal with `==`. `0.0` equals `-0.0`, NaN equals nothing.
pub fn points_eq_exact<const N: usize, T: Real>(actual: &Point<N, T>, expected: &Point<N, T>) -> bool {
    let ok = actual == expected;
    if !ok {
        report(actual, expected);
    }
    ok
}
