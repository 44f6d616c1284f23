//! Conversions between [`Point`] and external representations.
//!
//! - flat float buffers, through [`bytemuck`]
//! - [`glam`] vectors of matching dimension and precision

use crate::error::{Error, Result};
use crate::point::Point;
use crate::real::Real;

// SAFETY: Point is repr(transparent) over [T; N] and T: Pod, so every bit
// pattern is valid, the all-zero pattern included, and there is no padding.
unsafe impl<const N: usize, T: Real> bytemuck::Zeroable for Point<N, T> {}
unsafe impl<const N: usize, T: Real> bytemuck::Pod for Point<N, T> {}

impl<const N: usize, T: Real> Point<N, T> {
    /// Views a flat buffer of components as a slice of points.
    ///
    /// ```rust
    /// use ff_core::Point;
    ///
    /// let flat = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let points = Point::<3, f32>::slice_from_flat(&flat).unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert_eq!(points[1], Point::new([4.0, 5.0, 6.0]));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::FlatBufferLength`] if the length is not a multiple of `N`.
    ///
    /// The dimension bound applies here too:
    ///
    /// ```compile_fail
    /// use ff_core::Point;
    ///
    /// let _ = Point::<0, f32>::slice_from_flat(&[1.0f32, 2.0]);
    /// ```
    pub fn slice_from_flat(flat: &[T]) -> Result<&[Self]> {
        let () = Self::VALID_DIMS;
        bytemuck::try_cast_slice(flat).map_err(|_| Error::flat_buffer_length(flat.len(), N))
    }

    /// Mutable variant of [`slice_from_flat`](Self::slice_from_flat).
    pub fn slice_from_flat_mut(flat: &mut [T]) -> Result<&mut [Self]> {
        let () = Self::VALID_DIMS;
        let len = flat.len();
        bytemuck::try_cast_slice_mut(flat).map_err(|_| Error::flat_buffer_length(len, N))
    }

    /// Views a slice of points as a flat buffer of components.
    #[inline]
    pub fn flatten_slice(points: &[Self]) -> &[T] {
        let () = Self::VALID_DIMS;
        bytemuck::cast_slice(points)
    }
}

macro_rules! impl_glam {
    ($n:literal, $t:ty, $glam:ty) => {
        impl From<Point<$n, $t>> for $glam {
            #[inline]
            fn from(p: Point<$n, $t>) -> Self {
                <$glam>::from_array(p.into_array())
            }
        }

        impl From<$glam> for Point<$n, $t> {
            #[inline]
            fn from(v: $glam) -> Self {
                Point::new(v.to_array())
            }
        }
    };
}

impl_glam!(2, f32, glam::Vec2);
impl_glam!(3, f32, glam::Vec3);
impl_glam!(4, f32, glam::Vec4);
impl_glam!(2, f64, glam::DVec2);
impl_glam!(3, f64, glam::DVec3);
impl_glam!(4, f64, glam::DVec4);
