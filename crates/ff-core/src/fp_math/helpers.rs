//! Compile-time integer helpers.
//!
//! Used to build Taylor series coefficients as constants.

/// `n!` for `n` in `0..=20`. `21!` overflows `u64`.
pub const FACTORIALS: [u64; 21] = {
    let mut table = [1u64; 21];
    let mut n = 1;
    while n < 21 {
        table[n] = table[n - 1] * n as u64;
        n += 1;
    }
    table
};

/// `N!`, with `N > 20` rejected at compile time.
///
/// ```rust
/// use ff_core::fp_math::factorial;
///
/// const INV_FACT_5: f64 = 1.0 / factorial::<5>() as f64;
/// assert_eq!(factorial::<5>(), 120);
/// assert_eq!(INV_FACT_5, 1.0 / 120.0);
/// ```
///
/// ```compile_fail
/// let _ = ff_core::fp_math::factorial::<21>();
/// ```
#[inline]
pub const fn factorial<const N: usize>() -> u64 {
    const { assert!(N <= 20, "factorial overflows u64 above 20") };
    FACTORIALS[N]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorials() {
        assert_eq!(factorial::<0>(), 1);
        assert_eq!(factorial::<1>(), 1);
        assert_eq!(factorial::<2>(), 2);
        assert_eq!(factorial::<10>(), 3_628_800);
        assert_eq!(factorial::<20>(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_table_recurrence() {
        for n in 1..FACTORIALS.len() {
            assert_eq!(FACTORIALS[n], FACTORIALS[n - 1] * n as u64);
        }
        assert!(FACTORIALS[20].checked_mul(21).is_none());
    }
}
