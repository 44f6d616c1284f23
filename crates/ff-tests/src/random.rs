//! Seeded randomized property runner.
//!
//! Components are drawn uniformly from `[-1, 1)` and scaled by `2^k` for a
//! uniform `k` in `0..=7`, which covers a few binades without reaching
//! overflow. Special values (Inf, NaN, zero) need dedicated tests.
//!
//! # Usage
//!
//! ```rust
//! use ff_core::{Point, Real};
//! use ff_tests::random::{PairProperty, RandomRunner};
//!
//! struct AddCommutes;
//!
//! impl PairProperty for AddCommutes {
//!     fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool {
//!         a + b == b + a
//!     }
//! }
//!
//! RandomRunner::new(42, 50).run_pairs_all(&AddCommutes);
//! ```

use ff_core::{Point, Real};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by the property tests.
pub const DEFAULT_SEED: u64 = 42;

/// Trials per dimension and element type.
pub const DEFAULT_TRIALS: usize = 500;

/// Largest dimension covered by the `_all` runners.
pub const MAX_DIMS: usize = 10;

/// A property of two random points.
pub trait PairProperty {
    /// Returns `false` if the property does not hold for `a` and `b`.
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, b: Point<N, T>) -> bool;
}

/// A property of a random point and a random scalar.
pub trait ScalarProperty {
    /// Returns `false` if the property does not hold for `a` and `s`.
    fn check<const N: usize, T: Real>(&self, a: Point<N, T>, s: T) -> bool;
}

/// Runs properties against seeded random inputs.
///
/// A single generator is shared across all dimensions and both element
/// types, so a run is reproducible from its seed.
pub struct RandomRunner {
    rng: StdRng,
    trials: usize,
}

macro_rules! for_all_dims {
    ($self:ident, $method:ident, $prop:ident, $($n:literal)+) => {
        $(
            $self.$method::<$n, f32, _>($prop);
            $self.$method::<$n, f64, _>($prop);
        )+
    };
}

impl RandomRunner {
    /// Creates a runner with `trials` trials per dimension and type.
    pub fn new(seed: u64, trials: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            trials,
        }
    }

    /// Draws one component.
    pub fn sample<T: Real>(&mut self) -> T {
        let unit: f64 = self.rng.gen_range(-1.0..1.0);
        let k: u32 = self.rng.gen_range(0..=7);
        T::from_f64(unit * f64::from(1u32 << k))
    }

    /// Draws one point.
    pub fn point<const N: usize, T: Real>(&mut self) -> Point<N, T> {
        Point::new(std::array::from_fn(|_| self.sample()))
    }

    /// Checks `prop` on `trials` random pairs of `Point<N, T>`.
    ///
    /// # Panics
    ///
    /// On the first pair the property rejects.
    pub fn run_pairs<const N: usize, T: Real, P: PairProperty>(&mut self, prop: &P) {
        for trial in 0..self.trials {
            let a = self.point::<N, T>();
            let b = self.point::<N, T>();
            assert!(
                prop.check(a, b),
                "trial {trial} failed for {N} dimensions with {}: a={a} b={b}",
                T::NAME
            );
        }
    }

    /// Checks `prop` on `trials` random point and scalar pairs.
    ///
    /// # Panics
    ///
    /// On the first input the property rejects.
    pub fn run_scalars<const N: usize, T: Real, P: ScalarProperty>(&mut self, prop: &P) {
        for trial in 0..self.trials {
            let a = self.point::<N, T>();
            let s = self.sample::<T>();
            assert!(
                prop.check(a, s),
                "trial {trial} failed for {N} dimensions with {}: a={a} s={s}",
                T::NAME
            );
        }
    }

    /// [`run_pairs`](Self::run_pairs) for every dimension up to
    /// [`MAX_DIMS`], in `f32` and `f64`.
    pub fn run_pairs_all<P: PairProperty>(&mut self, prop: &P) {
        for_all_dims!(self, run_pairs, prop, 1 2 3 4 5 6 7 8 9 10);
    }

    /// [`run_scalars`](Self::run_scalars) for every dimension up to
    /// [`MAX_DIMS`], in `f32` and `f64`.
    pub fn run_scalars_all<P: ScalarProperty>(&mut self, prop: &P) {
        for_all_dims!(self, run_scalars, prop, 1 2 3 4 5 6 7 8 9 10);
    }
}

impl Default for RandomRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_TRIALS)
    }
}
