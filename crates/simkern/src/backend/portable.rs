use super::{Backend, Lanes};
use crate::Scalar;

/// Reference backend: a plain loop over the lanes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

#[inline(always)]
fn map<S: Scalar>(a: Lanes<S>, f: impl Fn(S) -> S) -> Lanes<S> {
    [f(a[0]), f(a[1]), f(a[2]), f(a[3])]
}

#[inline(always)]
fn zip<S: Scalar>(a: Lanes<S>, b: Lanes<S>, f: impl Fn(S, S) -> S) -> Lanes<S> {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

impl<S: Scalar> Backend<S> for Portable {
    #[inline] fn add(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, |x, y| x + y) }
    #[inline] fn sub(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, |x, y| x - y) }
    #[inline] fn mul(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, |x, y| x * y) }
    #[inline] fn div(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, |x, y| x / y) }

    #[inline] fn add_scalar(a: Lanes<S>, s: S) -> Lanes<S> { map(a, |x| x + s) }
    #[inline] fn sub_scalar(a: Lanes<S>, s: S) -> Lanes<S> { map(a, |x| x - s) }
    #[inline] fn mul_scalar(a: Lanes<S>, s: S) -> Lanes<S> { map(a, |x| x * s) }
    #[inline] fn div_scalar(a: Lanes<S>, s: S) -> Lanes<S> { map(a, |x| x / s) }
    #[inline] fn scalar_div(s: S, a: Lanes<S>) -> Lanes<S> { map(a, |x| s / x) }

    #[inline] fn neg(a: Lanes<S>) -> Lanes<S> { map(a, |x| -x) }
    #[inline] fn min(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, S::min) }
    #[inline] fn max(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> { zip(a, b, S::max) }
    #[inline] fn abs(a: Lanes<S>) -> Lanes<S> { map(a, S::abs) }
    #[inline] fn sign(a: Lanes<S>) -> Lanes<S> { map(a, S::signum) }
    #[inline] fn sqrt(a: Lanes<S>) -> Lanes<S> { map(a, S::sqrt) }
    #[inline] fn round(a: Lanes<S>) -> Lanes<S> { map(a, S::round) }

    #[inline]
    fn dot3(a: Lanes<S>, b: Lanes<S>) -> S {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[inline]
    fn cross3(a: Lanes<S>, b: Lanes<S>) -> Lanes<S> {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
            S::ZERO,
        ]
    }

    #[inline] fn hmin3(a: Lanes<S>) -> S { a[0].min(a[1].min(a[2])) }
    #[inline] fn hmax3(a: Lanes<S>) -> S { a[0].max(a[1].max(a[2])) }
}
