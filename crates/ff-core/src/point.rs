//! Fixed dimension point type.
//!
//! [`Point`] is an `N`-dimensional point (or vector) stored as exactly `N`
//! contiguous floats. It carries no length field and no padding, so a
//! `Point<3, f32>` occupies 12 bytes and can be reinterpreted from a flat
//! float buffer (see [`Point::slice_from_flat`]).
//!
//! The dimension must be in `1..256`. Using `Point<0, _>` or
//! `Point<256, _>` is a compile error at the point of first use.
//!
//! # Usage
//!
//! ```rust
//! use ff_core::{point, Point};
//!
//! let p: Point<3, f64> = point![1.0, 2.0, 3.0];
//! assert_eq!(p[1], 2.0);
//! assert_eq!(p.to_string(), "(1,2,3)");
//!
//! // Components from any primitive number type
//! let q = Point::<3, f32>::from_array([1u8, 2, 3]);
//! assert_eq!(q.cast::<f64>(), p);
//!
//! // Checked access
//! assert!(p.at(3).is_err());
//! ```
//!
//! Arithmetic lives in [`PointMathBasic`](crate::PointMathBasic); the
//! operators on `Point` delegate to it.

use crate::error::{Error, Result};
use crate::real::{AsReal, Real};
use std::fmt;
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};

/// An `N`-dimensional point with elements of type `T`.
///
/// Layout is exactly `[T; N]`. Copies are bitwise and points never alias
/// each other.
///
/// # Example
///
/// ```rust
/// use ff_core::Point;
///
/// let mut p = Point::<2, f32>::zero();
/// p[0] = 1.5;
/// *p.get_mut::<1>() = -2.0;
/// assert_eq!(p.into_array(), [1.5, -2.0]);
/// ```
///
/// Dimensions outside `1..256` do not compile:
///
/// ```compile_fail
/// use ff_core::Point;
///
/// let _ = Point::<0, f32>::zero();
/// ```
///
/// ```compile_fail
/// use ff_core::Point;
///
/// let _ = Point::<256, f64>::new([0.0; 256]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Point<const N: usize, T: Real> {
    data: [T; N],
}

impl<const N: usize, T: Real> Point<N, T> {
    pub(crate) const VALID_DIMS: () = assert!(N >= 1 && N < 256, "point dimension must be in 1..256");

    /// Number of components.
    pub const DIMS: usize = N;

    /// The point with every component `+0.0`.
    pub const ZERO: Self = {
        let () = Self::VALID_DIMS;
        Self { data: [T::ZERO; N] }
    };

    /// Creates a point from its components.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = Self::VALID_DIMS;
        Self { data }
    }

    /// Creates a point with every component `+0.0`.
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Reserves storage for a point without initializing it.
    ///
    /// Every component must be written before calling
    /// [`MaybeUninit::assume_init`].
    ///
    /// ```rust
    /// use ff_core::Point;
    ///
    /// let mut slot = Point::<2, f64>::uninit();
    /// let p = slot.write(Point::new([1.0, 2.0]));
    /// assert_eq!(p[1], 2.0);
    /// ```
    #[inline]
    pub fn uninit() -> MaybeUninit<Self> {
        let () = Self::VALID_DIMS;
        MaybeUninit::uninit()
    }

    /// Creates a point from an array of any primitive numbers.
    ///
    /// Each value is converted with `as` semantics.
    #[inline]
    pub fn from_array<U: AsReal<T>>(values: [U; N]) -> Self {
        Self::new(values.map(AsReal::<T>::as_real))
    }

    /// Creates a point from a borrowed array of exactly `N` values.
    #[inline]
    pub fn from_span<U: AsReal<T>>(values: &[U; N]) -> Self {
        Self::from_array(*values)
    }

    /// Creates a point by reading `N` consecutive values at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `N` reads of `U` and properly aligned.
    /// No bounds check is performed.
    #[inline]
    pub unsafe fn from_ptr<U: AsReal<T>>(ptr: *const U) -> Self {
        // SAFETY: the caller guarantees N readable values at ptr
        Self::new(std::array::from_fn(|i| AsReal::<T>::as_real(unsafe { ptr.add(i).read() })))
    }

    /// Creates a point from a slice that must hold exactly `N` values.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `values.len() != N`.
    pub fn try_from_slice<U: AsReal<T>>(values: &[U]) -> Result<Self> {
        if values.len() != N {
            return Err(Error::length_mismatch(N, values.len()));
        }
        Ok(Self::new(std::array::from_fn(|i| AsReal::<T>::as_real(values[i]))))
    }

    /// Returns a reference to component `index`, or an error if the index is
    /// not below `N`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or_else(|| Error::index_out_of_range(index, N))
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data.get_mut(index).ok_or_else(|| Error::index_out_of_range(index, N))
    }

    /// Returns component `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded to the caller
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: forwarded to the caller
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Returns component `I`, checked at compile time.
    ///
    /// ```compile_fail
    /// use ff_core::Point;
    ///
    /// let p = Point::<2, f32>::zero();
    /// let _ = p.get::<2>();
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> &T {
        const { assert!(I < N, "component index out of range") };
        &self.data[I]
    }

    /// Mutable variant of [`get`](Self::get).
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "component index out of range") };
        &mut self.data[I]
    }

    /// Iterates components front to back. Use `.rev()` for back to front.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates components mutably.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Underlying array.
    #[inline]
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    /// Underlying array, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first component.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first component.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Consumes the point, returning its components.
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.data
    }

    /// Converts every component to another element type.
    #[inline]
    pub fn cast<U: Real>(self) -> Point<N, U>
    where
        T: AsReal<U>,
    {
        Point::new(self.data.map(AsReal::<U>::as_real))
    }

    /// Builds an `M`-dimensional point from the components at `indices`.
    ///
    /// ```rust
    /// use ff_core::Point;
    ///
    /// let p = Point::<4, f32>::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(p.select([3, 0]).unwrap(), Point::new([4.0, 1.0]));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for the first index not below `N`.
    pub fn select<const M: usize>(&self, indices: [usize; M]) -> Result<Point<M, T>> {
        let mut out = Point::<M, T>::ZERO;
        for (slot, &index) in out.iter_mut().zip(indices.iter()) {
            *slot = *self.at(index)?;
        }
        Ok(out)
    }
}

impl<const N: usize, T: Real> Default for Point<N, T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize, T: Real> From<[T; N]> for Point<N, T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize, T: Real> From<Point<N, T>> for [T; N] {
    #[inline]
    fn from(p: Point<N, T>) -> Self {
        p.data
    }
}

impl<const N: usize, T: Real> TryFrom<&[T]> for Point<N, T> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        let data: [T; N] = values
            .try_into()
            .map_err(|_| Error::length_mismatch(N, values.len()))?;
        Ok(Self::new(data))
    }
}

impl<const N: usize, T: Real> Index<usize> for Point<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<const N: usize, T: Real> IndexMut<usize> for Point<N, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<const N: usize, T: Real> IntoIterator for Point<N, T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, const N: usize, T: Real> IntoIterator for &'a Point<N, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, const N: usize, T: Real> IntoIterator for &'a mut Point<N, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<const N: usize, T: Real> AsRef<[T]> for Point<N, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<const N: usize, T: Real> AsMut<[T]> for Point<N, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<const N: usize, T: Real> fmt::Display for Point<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

/// Creates a [`Point`] from a list of components.
///
/// ```rust
/// use ff_core::{point, Point};
///
/// let p: Point<2, f32> = point![0.5, -1.0];
/// assert_eq!(p, Point::new([0.5, -1.0]));
/// ```
#[macro_export]
macro_rules! point {
    ($($x:expr),+ $(,)?) => {
        $crate::Point::new([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_layout() {
        assert_eq!(size_of::<Point<1, f32>>(), 4);
        assert_eq!(size_of::<Point<3, f32>>(), 12);
        assert_eq!(size_of::<Point<255, f64>>(), 255 * 8);
        assert_eq!(align_of::<Point<7, f64>>(), align_of::<f64>());
    }

    #[test]
    fn test_zero() {
        let p = Point::<5, f64>::zero();
        for c in p {
            assert_eq!(c, 0.0);
            assert!(!c.is_sign_negative());
        }
        assert_eq!(Point::<5, f64>::default(), p);
    }

    #[test]
    fn test_from_array_converts() {
        let p = Point::<3, f64>::from_array([1i32, -2, 3]);
        assert_eq!(p, Point::new([1.0, -2.0, 3.0]));

        let q = Point::<2, f32>::from_span(&[0.1f64, 0.2]);
        assert_eq!(q, Point::new([0.1f32, 0.2f32]));
    }

    #[test]
    fn test_from_ptr() {
        let buf = [1.0f32, 2.0, 3.0, 4.0];
        let p = unsafe { Point::<3, f64>::from_ptr(buf.as_ptr().add(1)) };
        assert_eq!(p, Point::new([2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_try_from_slice() {
        let p = Point::<3, f32>::try_from_slice(&[1u16, 2, 3]).unwrap();
        assert_eq!(p[2], 3.0);

        let err = Point::<3, f32>::try_from_slice(&[1.0f32, 2.0]).unwrap_err();
        assert_eq!(err, Error::length_mismatch(3, 2));

        let s: &[f64] = &[4.0, 5.0];
        let q: Point<2, f64> = s.try_into().unwrap();
        assert_eq!(q, Point::new([4.0, 5.0]));
        assert!(Point::<3, f64>::try_from(s).is_err());
    }

    fn build_every_way<const N: usize, T: Real>(values: [T; N]) -> [Point<N, T>; 5] {
        [
            Point::from_array(values),
            Point::from_span(&values),
            // SAFETY: values holds N elements
            unsafe { Point::from_ptr(values.as_ptr()) },
            Point::try_from_slice(&values[..]).unwrap(),
            values.into(),
        ]
    }

    #[test]
    fn test_generic_construction() {
        for p in build_every_way([0.25f32, -1.0, 3.5]) {
            assert_eq!(p, Point::new([0.25, -1.0, 3.5]));
        }
        for p in build_every_way([1e-300f64]) {
            assert_eq!(p.into_array(), [1e-300]);
        }
    }

    #[test]
    fn test_checked_access() {
        let mut p = Point::<3, f64>::new([1.01, 1.03, 1.05]);
        assert_eq!(*p.at(0).unwrap(), 1.01);
        assert_eq!(*p.at(2).unwrap(), 1.05);
        assert_eq!(p.at(3), Err(Error::index_out_of_range(3, 3)));
        assert!(p.at(usize::MAX).unwrap_err().is_bounds_error());

        *p.at_mut(1).unwrap() = 7.0;
        assert_eq!(p[1], 7.0);
        assert!(p.at_mut(5).is_err());
    }

    #[test]
    fn test_unchecked_and_const_access() {
        let mut p = Point::<4, f32>::new([1.0, 2.0, 3.0, 4.0]);
        unsafe {
            assert_eq!(*p.get_unchecked(3), 4.0);
            *p.get_unchecked_mut(0) = -1.0;
        }
        assert_eq!(*p.get::<0>(), -1.0);
        *p.get_mut::<3>() = 9.0;
        assert_eq!(p[3], 9.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let p = Point::<2, f32>::zero();
        let i = p.as_slice().len();
        let _ = p[i];
    }

    #[test]
    fn test_iteration() {
        let mut p = Point::<4, f64>::new([1.0, 2.0, 3.0, 4.0]);
        let reversed: Vec<f64> = p.iter().rev().copied().collect();
        assert_eq!(reversed, vec![4.0, 3.0, 2.0, 1.0]);

        for c in &mut p {
            *c *= 2.0;
        }
        let sum: f64 = (&p).into_iter().sum();
        assert_eq!(sum, 20.0);

        // Restartable
        assert_eq!(p.iter().count(), 4);
        assert_eq!(p.iter().count(), 4);
    }

    #[test]
    fn test_raw_storage() {
        let mut p = Point::<3, f32>::new([1.0, 2.0, 3.0]);
        assert_eq!(p.as_slice(), &[1.0, 2.0, 3.0]);
        p.data_mut()[2] = 5.0;
        p.as_mut_slice()[0] = 0.5;
        assert_eq!(*p.data(), [0.5, 2.0, 5.0]);
        assert_eq!(p.as_ptr(), p.as_slice().as_ptr());
        unsafe { *p.as_mut_ptr().add(1) = 8.0 };
        assert_eq!(p.into_array(), [0.5, 8.0, 5.0]);
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Point::<2, f64>::new([1.0, 2.0]);
        let mut b = a;
        b[0] = 3.0;
        assert_eq!(a[0], 1.0);
        assert_eq!(b[0], 3.0);
    }

    #[test]
    fn test_cast() {
        let p = Point::<2, f64>::new([0.1, 1e300]);
        let q: Point<2, f32> = p.cast();
        assert_eq!(q[0], 0.1f32);
        assert!(q[1].is_infinite());
    }

    #[test]
    fn test_select() {
        let p = Point::<3, f64>::new([1.0, 2.0, 3.0]);
        assert_eq!(p.select([2, 2, 0]).unwrap(), Point::new([3.0, 3.0, 1.0]));
        assert_eq!(p.select([0, 3]), Err(Error::index_out_of_range(3, 3)));
    }

    #[test]
    fn test_display() {
        let p = Point::<3, f32>::new([1.0, -0.5, 0.1]);
        assert_eq!(p.to_string(), "(1,-0.5,0.1)");
        assert_eq!(Point::<1, f64>::new([2.25]).to_string(), "(2.25)");
    }

    #[test]
    fn test_uninit() {
        let mut slot = Point::<3, f32>::uninit();
        let ptr = slot.as_mut_ptr().cast::<f32>();
        for i in 0..3 {
            unsafe { ptr.add(i).write(i as f32) };
        }
        let p = unsafe { slot.assume_init() };
        assert_eq!(p, Point::new([0.0, 1.0, 2.0]));
    }

    #[test]
    fn test_macro() {
        let p: Point<4, f64> = crate::point![1.0, 2.0, 3.0, 4.0,];
        assert_eq!(Point::<4, f64>::DIMS, 4);
        assert_eq!(p[3], 4.0);
    }
}
