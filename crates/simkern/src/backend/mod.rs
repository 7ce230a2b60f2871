//! Lane backends: the primitives `Vec3` lowers to.
//!
//! Every backend works on the 4-lane storage of a `Vec3` (`[x, y, z, w]`).
//! Lane-wise primitives may leave garbage in `w` (e.g. `0 / 0`); `Vec3`
//! clears it after every call, so backends never need to care.
//!
//! - [`Portable`]: a per-lane loop over [`Scalar`](crate::Scalar) ops, for any precision.
//! - [`Simd`]: SSE2 intrinsics for f32 and f64 (x86_64 only).
//! - [`Active`]: what `Vec3` uses in this build. `Simd` when the `simd`
//!   feature is on and the target supports it, `Portable` otherwise.
//!
//! The GPU lowering lives in the `simkern-gpu` crate.

mod portable;
#[cfg(target_arch = "x86_64")]
mod sse;

pub use portable::Portable;
#[cfg(target_arch = "x86_64")]
pub use sse::Simd;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type Active = Simd;

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type Active = Portable;

/// Four-lane storage of a `Vec3`.
pub type Lanes<S> = [S; 4];

/// Lane arithmetic for one precision `S`.
///
/// Contract shared by all implementations, so results agree across backends
/// within rounding:
/// - `min`/`max` select `a < b ? a : b` / `a > b ? a : b` per lane.
/// - `sign` gives -1, 0 or 1 (0 for ±0 and NaN).
/// - `round` rounds half away from zero.
/// - `dot3` sums as `(x*x' + y*y') + z*z'` and ignores `w`.
/// - `hmin3`/`hmax3` reduce over x, y, z as `x.min(y.min(z))`.
pub trait Backend<S> {
    fn add(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn sub(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn mul(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn div(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;

    fn add_scalar(a: Lanes<S>, s: S) -> Lanes<S>;
    fn sub_scalar(a: Lanes<S>, s: S) -> Lanes<S>;
    fn mul_scalar(a: Lanes<S>, s: S) -> Lanes<S>;
    fn div_scalar(a: Lanes<S>, s: S) -> Lanes<S>;
    /// `s / a` per lane.
    fn scalar_div(s: S, a: Lanes<S>) -> Lanes<S>;

    fn neg(a: Lanes<S>) -> Lanes<S>;
    fn min(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn max(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn abs(a: Lanes<S>) -> Lanes<S>;
    fn sign(a: Lanes<S>) -> Lanes<S>;
    fn sqrt(a: Lanes<S>) -> Lanes<S>;
    fn round(a: Lanes<S>) -> Lanes<S>;

    fn dot3(a: Lanes<S>, b: Lanes<S>) -> S;
    fn cross3(a: Lanes<S>, b: Lanes<S>) -> Lanes<S>;
    fn hmin3(a: Lanes<S>) -> S;
    fn hmax3(a: Lanes<S>) -> S;
}
