//! Nearest-representable floating point constants.
//!
//! Each table entry stores a separately rounded literal for `f32` and for
//! `f64`. Computing these at run time (for example `PI * 2.0 / 3.0`) can
//! accumulate an extra rounding step, so the render math reads them from
//! here instead.
//!
//! # Tabulated values
//!
//! | family | entries |
//! |--------|---------|
//! | `n/d * pi` | `1/1 2/1 1/2 3/2 1/3 2/3 4/3 5/3 1/4 3/4 5/4 7/4 1/6 5/6 7/6 11/6` |
//! | `n/(d * pi)` | `1/1 1/2 2/1 2/3 3/1 3/2 3/4 3/5 4/1 4/3 4/5 4/7 6/1 6/5 6/7 6/11` |
//! | `sqrt(n)`, `1/sqrt(n)` | non-square `n` in `2..=24` |
//! | `cbrt(n)`, `1/cbrt(n)` | non-cube `n` in `2..=26` |
//!
//! # Usage
//!
//! Compile-time lookups fail to build when an entry is missing:
//!
//! ```rust
//! use ff_core::fp_math::constants::{pi_mult, sqrt_n};
//!
//! let two_thirds_pi: f32 = pi_mult::<f32, 2, 3>();
//! assert!((two_thirds_pi - 2.0943951).abs() < 1e-7);
//! assert_eq!(sqrt_n::<f64, 2>(), std::f64::consts::SQRT_2);
//! ```
//!
//! ```compile_fail
//! let _ = ff_core::fp_math::constants::sqrt_n::<f64, 4>();
//! ```
//!
//! Run-time lookups return `None` instead:
//!
//! ```rust
//! use ff_core::fp_math::{constant, Constant};
//!
//! assert!(constant::<f64>(Constant::Sqrt(7)).is_some());
//! assert!(constant::<f64>(Constant::Sqrt(9)).is_none());
//! ```

use crate::error::{Error, Result};
use crate::real::Real;
use std::fmt;
use std::str::FromStr;

/// `(num, den, f32, f64)` entries of `num/den * pi`.
#[allow(clippy::excessive_precision)]
const PI_MULTS: [(u32, u32, f32, f64); 16] = [
    (1, 1, 3.1415927, 3.141592653589793),
    (2, 1, 6.2831853, 6.283185307179586),
    (1, 2, 1.57079633, 1.5707963267948966),
    (3, 2, 4.712389, 4.71238898038469),
    (1, 3, 1.0471976, 1.04719755119659775),
    (2, 3, 2.0943951, 2.0943951023931955),
    (4, 3, 4.1887902, 4.188790204786391),
    (5, 3, 5.2359878, 5.235987755982989),
    (1, 4, 0.7853982, 0.7853981633974483),
    (3, 4, 2.3561945, 2.356194490192345),
    (5, 4, 3.9269908, 3.9269908169872415),
    (7, 4, 5.497787, 5.497787143782138),
    (1, 6, 0.5235988, 0.523598775598298873),
    (5, 6, 2.6179939, 2.6179938779914944),
    (7, 6, 3.6651914, 3.6651914291880921),
    (11, 6, 5.7595865, 5.759586531581288),
];

/// `(num, den, f32, f64)` entries of `num/(den * pi)`.
#[allow(clippy::excessive_precision)]
const INV_PI_MULTS: [(u32, u32, f32, f64); 16] = [
    (1, 1, 0.318309886, 0.3183098861837907),
    (1, 2, 0.15915494, 0.15915494309189534),
    (2, 1, 0.63661977, 0.63661977236758134),
    (2, 3, 0.21220659, 0.212206590789193781),
    (3, 1, 0.95492966, 0.954929658551372),
    (3, 2, 0.47746483, 0.477464829275686),
    (3, 4, 0.23873241, 0.238732414637843),
    (3, 5, 0.19098593, 0.1909859317102744),
    (4, 1, 1.2732395, 1.2732395447351627),
    (4, 3, 0.42441318, 0.424413181578387562),
    (4, 5, 0.2546479, 0.25464790894703254),
    (4, 7, 0.18189136, 0.18189136353359467),
    (6, 1, 1.9098593, 1.909859317102744),
    (6, 5, 0.38197186, 0.3819718634205488),
    (6, 7, 0.27283705, 0.272837045300392),
    (6, 11, 0.17362357, 0.17362357428206764),
];

/// `(n, f32, f64)` entries of `sqrt(n)`.
#[allow(clippy::excessive_precision)]
const SQRTS: [(u32, f32, f64); 20] = [
    (2, 1.41421356, 1.41421356237309505),
    (3, 1.7320508, 1.7320508075688773),
    (5, 2.236068, 2.23606797749979),
    (6, 2.44948974, 2.449489742783178),
    (7, 2.6457513, 2.6457513110645906),
    (8, 2.828427, 2.8284271247461901),
    (10, 3.1622777, 3.16227766016837933),
    (11, 3.3166248, 3.3166247903554),
    (12, 3.4641016, 3.4641016151377546),
    (13, 3.6055513, 3.605551275463989),
    (14, 3.7416574, 3.7416573867739414),
    (15, 3.87298335, 3.872983346207417),
    (17, 4.1231056, 4.123105625617661),
    (18, 4.2426407, 4.242640687119285),
    (19, 4.358899, 4.358898943540674),
    (20, 4.472136, 4.4721359549995794),
    (21, 4.582576, 4.58257569495584),
    (22, 4.690416, 4.69041575982343),
    (23, 4.7958315, 4.7958315233127195),
    (24, 4.8989795, 4.898979485566356),
];

/// `(n, f32, f64)` entries of `1/sqrt(n)`.
#[allow(clippy::excessive_precision)]
const INV_SQRTS: [(u32, f32, f64); 20] = [
    (2, 0.70710678, 0.70710678118654752),
    (3, 0.57735027, 0.57735026918962576),
    (5, 0.4472136, 0.4472135954999579),
    (6, 0.4082482905, 0.408248290463863),
    (7, 0.37796447, 0.37796447300922723),
    (8, 0.35355339, 0.3535533905932738),
    (10, 0.31622777, 0.31622776601683793),
    (11, 0.30151134, 0.30151134457776362),
    (12, 0.28867513, 0.28867513459481288),
    (13, 0.2773501, 0.2773500981126146),
    (14, 0.26726124, 0.2672612419124244),
    (15, 0.2581989, 0.25819888974716113),
    (17, 0.242535625, 0.24253562503633297),
    (18, 0.23570226, 0.23570226039551584),
    (19, 0.22941573, 0.22941573387056177),
    (20, 0.2236068, 0.22360679774997897),
    (21, 0.2182179, 0.2182178902359924),
    (22, 0.21320072, 0.21320071635561043),
    (23, 0.2085144, 0.20851441405707476),
    (24, 0.20412414523, 0.2041241452319315),
];

/// `(n, f32, f64)` entries of `cbrt(n)`.
#[allow(clippy::excessive_precision)]
const CBRTS: [(u32, f32, f64); 24] = [
    (2, 1.25992105, 1.2599210498948732),
    (3, 1.44224957, 1.4422495703074084),
    (4, 1.58740105, 1.587401051968199475),
    (5, 1.709976, 1.709975946676697),
    (6, 1.8171206, 1.8171205928321397),
    (7, 1.9129312, 1.9129311827723891),
    (9, 2.0800838, 2.080083823051904),
    (10, 2.1544347, 2.154434690031884),
    (11, 2.2239801, 2.2239800905693155),
    (12, 2.2894285, 2.2894284851066637),
    (13, 2.35133469, 2.3513346877207575),
    (14, 2.4101423, 2.41014226417523),
    (15, 2.466212, 2.4662120743304701),
    (16, 2.5198421, 2.5198420997897463),
    (17, 2.5712816, 2.57128159065823536),
    (18, 2.6207414, 2.6207413942088966),
    (19, 2.6684016, 2.668401648721945),
    (20, 2.7144176, 2.7144176165949066),
    (21, 2.7589242, 2.7589241763811207),
    (22, 2.8020393, 2.8020393306553871),
    (23, 2.843867, 2.8438669798515655),
    (24, 2.884499, 2.8844991406148168),
    (25, 2.9240177, 2.924017738212866),
    (26, 2.962496, 2.9624960684073705),
];

/// `(n, f32, f64)` entries of `1/cbrt(n)`.
#[allow(clippy::excessive_precision)]
const INV_CBRTS: [(u32, f32, f64); 24] = [
    (2, 0.7937005, 0.79370052598409974),
    (3, 0.6933613, 0.6933612743506347),
    (4, 0.62996052, 0.6299605249474366),
    (5, 0.5848035, 0.5848035476425732),
    (6, 0.5503212, 0.55032120814910445),
    (7, 0.52275796, 0.5227579585747102),
    (9, 0.48074986, 0.4807498567691361),
    (10, 0.4641589, 0.46415888336127789),
    (11, 0.449644313, 0.44964431302260917),
    (12, 0.43679023, 0.43679023236814943),
    (13, 0.42529037, 0.42529037028299016),
    (14, 0.41491327, 0.41491326668312172),
    (15, 0.405480133, 0.40548013303822668),
    (16, 0.39685026, 0.3968502629920499),
    (17, 0.38891112, 0.3889111187328203),
    (18, 0.3815714, 0.38157141418444396),
    (19, 0.3747562, 0.37475617678431546),
    (20, 0.36840315, 0.36840314986403866),
    (21, 0.362460124, 0.36246012433429738),
    (22, 0.35688293, 0.3568829277518041),
    (23, 0.35163389, 0.3516338869169593),
    (24, 0.34668064, 0.34668063717531735),
    (25, 0.34199519, 0.3419951893353394),
    (26, 0.3375532, 0.33755319058958183),
];

const fn find_ratio(table: &[(u32, u32, f32, f64)], num: u32, den: u32) -> Option<usize> {
    let mut i = 0;
    while i < table.len() {
        if table[i].0 == num && table[i].1 == den {
            return Some(i);
        }
        i += 1;
    }
    None
}

const fn find_integer(table: &[(u32, f32, f64)], n: u32) -> Option<usize> {
    let mut i = 0;
    while i < table.len() {
        if table[i].0 == n {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Unwraps a table index during constant evaluation.
const fn expect_entry(index: Option<usize>, family: &str) -> usize {
    match index {
        Some(i) => i,
        None => panic!("{}", family),
    }
}

/// `NUM/DEN * pi`.
#[inline]
pub fn pi_mult<T: Real, const NUM: u32, const DEN: u32>() -> T {
    let i = const { expect_entry(find_ratio(&PI_MULTS, NUM, DEN), "multiple of pi not tabulated") };
    T::pick(PI_MULTS[i].2, PI_MULTS[i].3)
}

/// `NUM/(DEN * pi)`.
#[inline]
pub fn inv_pi_mult<T: Real, const NUM: u32, const DEN: u32>() -> T {
    let i = const {
        expect_entry(find_ratio(&INV_PI_MULTS, NUM, DEN), "multiple of 1/pi not tabulated")
    };
    T::pick(INV_PI_MULTS[i].2, INV_PI_MULTS[i].3)
}

/// `sqrt(N)`.
#[inline]
pub fn sqrt_n<T: Real, const N: u32>() -> T {
    let i = const { expect_entry(find_integer(&SQRTS, N), "square root not tabulated") };
    T::pick(SQRTS[i].1, SQRTS[i].2)
}

/// `1/sqrt(N)`.
#[inline]
pub fn inv_sqrt_n<T: Real, const N: u32>() -> T {
    let i = const { expect_entry(find_integer(&INV_SQRTS, N), "inverse square root not tabulated") };
    T::pick(INV_SQRTS[i].1, INV_SQRTS[i].2)
}

/// `cbrt(N)`.
#[inline]
pub fn cbrt_n<T: Real, const N: u32>() -> T {
    let i = const { expect_entry(find_integer(&CBRTS, N), "cube root not tabulated") };
    T::pick(CBRTS[i].1, CBRTS[i].2)
}

/// `1/cbrt(N)`.
#[inline]
pub fn inv_cbrt_n<T: Real, const N: u32>() -> T {
    let i = const { expect_entry(find_integer(&INV_CBRTS, N), "inverse cube root not tabulated") };
    T::pick(INV_CBRTS[i].1, INV_CBRTS[i].2)
}

/// A tabulated constant, selected at run time.
///
/// Parses from the names `eps`, `e`, `pi`, `pi:<n>/<d>`, `invpi:<n>/<d>`,
/// `sqrt:<n>`, `invsqrt:<n>`, `cbrt:<n>` and `invcbrt:<n>`.
///
/// ```rust
/// use ff_core::fp_math::Constant;
///
/// let c: Constant = "pi:3/2".parse().unwrap();
/// assert_eq!(c, Constant::PiMult { num: 3, den: 2 });
/// assert_eq!(c.to_string(), "pi:3/2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Machine epsilon.
    Epsilon,
    /// Euler's number.
    E,
    /// Pi.
    Pi,
    /// `num/den * pi`.
    PiMult {
        /// Numerator
        num: u32,
        /// Denominator
        den: u32,
    },
    /// `num/(den * pi)`.
    InvPiMult {
        /// Numerator
        num: u32,
        /// Denominator
        den: u32,
    },
    /// `sqrt(n)`.
    Sqrt(u32),
    /// `1/sqrt(n)`.
    InvSqrt(u32),
    /// `cbrt(n)`.
    Cbrt(u32),
    /// `1/cbrt(n)`.
    InvCbrt(u32),
}

/// Looks up a constant at run time. Returns `None` if it is not tabulated.
pub fn constant<T: Real>(c: Constant) -> Option<T> {
    let ratio = |table: &[(u32, u32, f32, f64)], num, den| {
        find_ratio(table, num, den).map(|i| T::pick(table[i].2, table[i].3))
    };
    let integer = |table: &[(u32, f32, f64)], n| {
        find_integer(table, n).map(|i| T::pick(table[i].1, table[i].2))
    };
    match c {
        Constant::Epsilon => Some(T::EPSILON),
        Constant::E => Some(T::E),
        Constant::Pi => Some(T::PI),
        Constant::PiMult { num, den } => ratio(&PI_MULTS, num, den),
        Constant::InvPiMult { num, den } => ratio(&INV_PI_MULTS, num, den),
        Constant::Sqrt(n) => integer(&SQRTS, n),
        Constant::InvSqrt(n) => integer(&INV_SQRTS, n),
        Constant::Cbrt(n) => integer(&CBRTS, n),
        Constant::InvCbrt(n) => integer(&INV_CBRTS, n),
    }
}

impl FromStr for Constant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let bad = || Error::unknown_constant(s);
        let ratio = |arg: &str| -> Result<(u32, u32)> {
            let (num, den) = arg.split_once('/').ok_or_else(bad)?;
            let num = num.trim().parse().map_err(|_| bad())?;
            let den = den.trim().parse().map_err(|_| bad())?;
            Ok((num, den))
        };
        let integer = |arg: &str| -> Result<u32> { arg.trim().parse().map_err(|_| bad()) };

        match name.split_once(':') {
            None => match name.as_str() {
                "eps" | "epsilon" => Ok(Self::Epsilon),
                "e" => Ok(Self::E),
                "pi" => Ok(Self::Pi),
                _ => Err(bad()),
            },
            Some((family, arg)) => match family {
                "pi" => ratio(arg).map(|(num, den)| Self::PiMult { num, den }),
                "invpi" => ratio(arg).map(|(num, den)| Self::InvPiMult { num, den }),
                "sqrt" => integer(arg).map(Self::Sqrt),
                "invsqrt" => integer(arg).map(Self::InvSqrt),
                "cbrt" => integer(arg).map(Self::Cbrt),
                "invcbrt" => integer(arg).map(Self::InvCbrt),
                _ => Err(bad()),
            },
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str("eps"),
            Self::E => f.write_str("e"),
            Self::Pi => f.write_str("pi"),
            Self::PiMult { num, den } => write!(f, "pi:{num}/{den}"),
            Self::InvPiMult { num, den } => write!(f, "invpi:{num}/{den}"),
            Self::Sqrt(n) => write!(f, "sqrt:{n}"),
            Self::InvSqrt(n) => write!(f, "invsqrt:{n}"),
            Self::Cbrt(n) => write!(f, "cbrt:{n}"),
            Self::InvCbrt(n) => write!(f, "invcbrt:{n}"),
        }
    }
}
