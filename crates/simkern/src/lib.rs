//! simkern: vector kernel for multicore multibody dynamics
//!
//! Fixed-width `Vec2`/`Vec3` value types and the geometric operations the
//! collision and contact-solver layers run in their innermost loops.
//!
//! # Design principles
//! - One lane type per build: [`Real`] is f64, or f32 with `single-precision`
//! - `Vec3` is four lanes wide (`w` always zero) so it maps onto one SIMD
//!   register and onto WGSL `vec3<f32>` storage
//! - Lane arithmetic goes through a [`Backend`]: portable loop, SSE2
//!   (`simd` feature), or the WGSL kernels in `simkern-gpu`; all agree
//!   within rounding
//! - Unguarded fast paths (`normalize`) next to guarded ones
//!   (`safe_normalize`, `safe_length`); no error types, only IEEE results
//! - `#[repr(C)]` everywhere for GPU interop

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod backend;
mod scalar;
mod vec2;
mod vec3;

#[cfg(feature = "std")]
pub mod diag;

pub use backend::Backend;
pub use scalar::{inv_sqrt, is_equal, is_zero, lerp, sort3, sqr, Scalar};
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Lane precision for this build.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Lane precision for this build.
#[cfg(feature = "single-precision")]
pub type Real = f32;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            // (Vec3's alignment of 16 equals the size of its four f32 lanes and
            // divides the size of its four f64 lanes).
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
}
