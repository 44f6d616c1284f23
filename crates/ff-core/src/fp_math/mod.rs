//! Floating point helpers shared by the point math.
//!
//! - [`constants`] - nearest-representable constants for `f32` and `f64`
//! - [`trig`] - simultaneous sine and cosine
//! - [`rotation`] - fixed rotations in the plane
//! - [`helpers`] - compile-time integer helpers for series coefficients

pub mod constants;
pub mod helpers;
pub mod rotation;
pub mod trig;

pub use constants::{Constant, constant};
pub use helpers::{FACTORIALS, factorial};
pub use rotation::Rotation2d;
pub use trig::sin_cos;
