//! Integration tests for the ff crates.
//!
//! Besides the tests themselves this crate exports the helpers they are
//! built from, for use by downstream test suites:
//!
//! - [`compare`] - point comparison predicates with different error measures
//! - [`random`] - a seeded runner checking properties over random points in
//!   every dimension from 1 to 10, for both `f32` and `f64`

pub mod compare;
pub mod random;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;
