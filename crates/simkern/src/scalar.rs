use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::backend::Backend;

/// Floating-point lane type shared by every vector in the kernel.
///
/// Implemented for f32 and f64. Precision for client code is picked once per
/// build through [`Real`](crate::Real); the trait itself stays generic so the
/// backends can be exercised at both widths side by side.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    /// Machine epsilon. Also the magnitude tolerance used by `is_zero`.
    const EPSILON: Self;
    /// `EPSILON * EPSILON`, the squared-length tolerance of `safe_normalize`.
    const EPSILON_SQ: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const MAX: Self;

    /// Lane backend that `Vec3` arithmetic lowers to for this precision.
    type Backend: Backend<Self>;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self;
    fn recip(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn signum(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    fn trunc(self) -> Self;

    fn is_nan(self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    fn from_i32(v: i32) -> Self;
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("simkern needs either the `std` or the `libm` feature for float math");

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        x.floor()
    }
    #[inline(always)]
    pub fn floor_f64(x: f64) -> f64 {
        x.floor()
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        x.ceil()
    }
    #[inline(always)]
    pub fn ceil_f64(x: f64) -> f64 {
        x.ceil()
    }
    #[inline(always)]
    pub fn round_f32(x: f32) -> f32 {
        x.round()
    }
    #[inline(always)]
    pub fn round_f64(x: f64) -> f64 {
        x.round()
    }
    #[inline(always)]
    pub fn trunc_f32(x: f32) -> f32 {
        x.trunc()
    }
    #[inline(always)]
    pub fn trunc_f64(x: f64) -> f64 {
        x.trunc()
    }
    #[inline(always)]
    pub fn copysign_f32(x: f32, s: f32) -> f32 {
        x.copysign(s)
    }
    #[inline(always)]
    pub fn copysign_f64(x: f64, s: f64) -> f64 {
        x.copysign(s)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        libm::floorf(x)
    }
    #[inline(always)]
    pub fn floor_f64(x: f64) -> f64 {
        libm::floor(x)
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        libm::ceilf(x)
    }
    #[inline(always)]
    pub fn ceil_f64(x: f64) -> f64 {
        libm::ceil(x)
    }
    #[inline(always)]
    pub fn round_f32(x: f32) -> f32 {
        libm::roundf(x)
    }
    #[inline(always)]
    pub fn round_f64(x: f64) -> f64 {
        libm::round(x)
    }
    #[inline(always)]
    pub fn trunc_f32(x: f32) -> f32 {
        libm::truncf(x)
    }
    #[inline(always)]
    pub fn trunc_f64(x: f64) -> f64 {
        libm::trunc(x)
    }
    #[inline(always)]
    pub fn copysign_f32(x: f32, s: f32) -> f32 {
        libm::copysignf(x, s)
    }
    #[inline(always)]
    pub fn copysign_f64(x: f64, s: f64) -> f64 {
        libm::copysign(x, s)
    }
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $eps:expr, $inf:expr, $neg_inf:expr, $max:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $eps;
            const EPSILON_SQ: Self = $eps * $eps;
            const INFINITY: Self = $inf;
            const NEG_INFINITY: Self = $neg_inf;
            const MAX: Self = $max;

            type Backend = crate::backend::Active;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn floor(self) -> Self { float_ops::[<floor_ $suffix>](self) }
            #[inline] fn ceil(self) -> Self { float_ops::[<ceil_ $suffix>](self) }
            #[inline] fn round(self) -> Self { float_ops::[<round_ $suffix>](self) }
            #[inline] fn trunc(self) -> Self { float_ops::[<trunc_ $suffix>](self) }
            #[inline] fn copysign(self, sign: Self) -> Self { float_ops::[<copysign_ $suffix>](self, sign) }

            // Clearing the sign bit keeps abs available in core without libm.
            #[inline] fn abs(self) -> Self { <$t>::from_bits(self.to_bits() & !(1 << <$t as SignBit>::BITS_MINUS_ONE)) }

            // `a < b ? a : b`, the same selection SSE minps/maxps perform.
            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self {
                if self < lo { lo } else if self > hi { hi } else { self }
            }
            #[inline] fn recip(self) -> Self { 1.0 as $t / self }
            #[inline] fn signum(self) -> Self {
                if self > 0.0 as $t { 1.0 as $t } else if self < 0.0 as $t { -(1.0 as $t) } else { 0.0 as $t }
            }
            #[inline] fn is_nan(self) -> bool { <$t>::is_nan(self) }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
            #[inline] fn from_i32(v: i32) -> Self { v as $t }
        }
        }
    };
}

trait SignBit {
    const BITS_MINUS_ONE: u32;
}

impl SignBit for f32 {
    const BITS_MINUS_ONE: u32 = 31;
}

impl SignBit for f64 {
    const BITS_MINUS_ONE: u32 = 63;
}

impl_scalar_float!(f32, f32, f32::EPSILON, f32::INFINITY, f32::NEG_INFINITY, f32::MAX);
impl_scalar_float!(f64, f64, f64::EPSILON, f64::INFINITY, f64::NEG_INFINITY, f64::MAX);

/// `x * x`
#[inline]
pub fn sqr<S: Scalar>(x: S) -> S {
    x * x
}

/// `1 / sqrt(x)`. Unguarded: infinite for zero.
#[inline]
pub fn inv_sqrt<S: Scalar>(x: S) -> S {
    x.sqrt().recip()
}

/// True when `|x| < EPSILON`.
#[inline]
pub fn is_zero<S: Scalar>(x: S) -> bool {
    x.abs() < S::EPSILON
}

/// True when `a` and `b` differ by less than `EPSILON`.
#[inline]
pub fn is_equal<S: Scalar>(a: S, b: S) -> bool {
    (a - b).abs() < S::EPSILON
}

#[inline]
pub fn lerp<S: Scalar>(a: S, b: S, t: S) -> S {
    a + (b - a) * t
}

/// Sort three scalars ascending in place.
///
/// Three compare-and-swaps on (a, b), (b, c), (a, b). Swaps happen only on a
/// strict `>`, so equal values keep their slots.
#[inline]
pub fn sort3<S: Scalar>(a: &mut S, b: &mut S, c: &mut S) {
    if *a > *b {
        core::mem::swap(a, b);
    }
    if *b > *c {
        core::mem::swap(b, c);
    }
    if *a > *b {
        core::mem::swap(a, b);
    }
}
