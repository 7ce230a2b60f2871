//! SSE2 lowering of the lane primitives.
//!
//! f32 lanes fill one `__m128`; f64 lanes are split across two `__m128d`
//! (`[x, y]` and `[z, w]`). SSE2 is part of the x86_64 baseline, so every
//! intrinsic below is always available on this target.
//!
//! Rounding is done by hand: SSE2 has no round instruction, and the SSE4.1
//! one rounds ties to even where the scalar path rounds ties away from zero.

use core::arch::x86_64::*;

use super::{Backend, Lanes};

/// x86_64 SSE2 backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simd;

// ---------------------------------------------------------------------------
// f32: one register
// ---------------------------------------------------------------------------

#[inline(always)]
fn load_ps(a: &Lanes<f32>) -> __m128 {
    // SAFETY: `a` is 4 contiguous f32; unaligned load; SSE is baseline.
    unsafe { _mm_loadu_ps(a.as_ptr()) }
}

#[inline(always)]
fn store_ps(v: __m128) -> Lanes<f32> {
    let mut out = [0.0f32; 4];
    // SAFETY: `out` has room for 4 f32; unaligned store; SSE is baseline.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
    out
}

macro_rules! lanewise_ps {
    ($($name:ident => $intr:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(a: Lanes<f32>, b: Lanes<f32>) -> Lanes<f32> {
                // SAFETY: SSE is baseline on x86_64.
                store_ps(unsafe { $intr(load_ps(&a), load_ps(&b)) })
            }
        )*
    };
}

macro_rules! scalar_ps {
    ($($name:ident => $intr:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(a: Lanes<f32>, s: f32) -> Lanes<f32> {
                // SAFETY: SSE is baseline on x86_64.
                store_ps(unsafe { $intr(load_ps(&a), _mm_set1_ps(s)) })
            }
        )*
    };
}

/// Round half away from zero, all four lanes.
#[inline(always)]
unsafe fn round_ps(a: __m128) -> __m128 {
    let sign_mask = _mm_set1_ps(-0.0);
    let one = _mm_set1_ps(1.0);
    let half = _mm_set1_ps(0.5);
    // At and above 2^23 every f32 is already an integer.
    let magic = _mm_set1_ps(8_388_608.0);

    let ax = _mm_andnot_ps(sign_mask, a);
    // (ax + 2^23) - 2^23 rounds to nearest even; step back to get trunc.
    let rne = _mm_sub_ps(_mm_add_ps(ax, magic), magic);
    let trunc = _mm_sub_ps(rne, _mm_and_ps(_mm_cmpgt_ps(rne, ax), one));
    let frac = _mm_sub_ps(ax, trunc);
    let rounded = _mm_add_ps(trunc, _mm_and_ps(_mm_cmpge_ps(frac, half), one));

    let big = _mm_cmpge_ps(ax, magic);
    let mag = _mm_or_ps(_mm_and_ps(big, ax), _mm_andnot_ps(big, rounded));
    _mm_or_ps(mag, _mm_and_ps(a, sign_mask))
}

impl Backend<f32> for Simd {
    lanewise_ps! {
        add => _mm_add_ps,
        sub => _mm_sub_ps,
        mul => _mm_mul_ps,
        div => _mm_div_ps,
        min => _mm_min_ps,
        max => _mm_max_ps,
    }

    scalar_ps! {
        add_scalar => _mm_add_ps,
        sub_scalar => _mm_sub_ps,
        mul_scalar => _mm_mul_ps,
        div_scalar => _mm_div_ps,
    }

    #[inline]
    fn scalar_div(s: f32, a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe { _mm_div_ps(_mm_set1_ps(s), load_ps(&a)) })
    }

    #[inline]
    fn neg(a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe { _mm_xor_ps(load_ps(&a), _mm_set1_ps(-0.0)) })
    }

    #[inline]
    fn abs(a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), load_ps(&a)) })
    }

    #[inline]
    fn sign(a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe {
            let v = load_ps(&a);
            let zero = _mm_setzero_ps();
            let pos = _mm_and_ps(_mm_cmpgt_ps(v, zero), _mm_set1_ps(1.0));
            let neg = _mm_and_ps(_mm_cmplt_ps(v, zero), _mm_set1_ps(-1.0));
            _mm_or_ps(pos, neg)
        })
    }

    #[inline]
    fn sqrt(a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe { _mm_sqrt_ps(load_ps(&a)) })
    }

    #[inline]
    fn round(a: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE2 is baseline on x86_64.
        store_ps(unsafe { round_ps(load_ps(&a)) })
    }

    #[inline]
    fn dot3(a: Lanes<f32>, b: Lanes<f32>) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let p = _mm_mul_ps(load_ps(&a), load_ps(&b));
            let xy = _mm_add_ss(p, _mm_shuffle_ps::<0b01>(p, p));
            _mm_cvtss_f32(_mm_add_ss(xy, _mm_shuffle_ps::<0b10>(p, p)))
        }
    }

    #[inline]
    fn cross3(a: Lanes<f32>, b: Lanes<f32>) -> Lanes<f32> {
        // SAFETY: SSE is baseline on x86_64.
        store_ps(unsafe {
            let a = load_ps(&a);
            let b = load_ps(&b);
            // yzx = [1, 2, 0, 3], zxy = [2, 0, 1, 3]
            let a_yzx = _mm_shuffle_ps::<0b11_00_10_01>(a, a);
            let a_zxy = _mm_shuffle_ps::<0b11_01_00_10>(a, a);
            let b_yzx = _mm_shuffle_ps::<0b11_00_10_01>(b, b);
            let b_zxy = _mm_shuffle_ps::<0b11_01_00_10>(b, b);
            _mm_sub_ps(_mm_mul_ps(a_yzx, b_zxy), _mm_mul_ps(a_zxy, b_yzx))
        })
    }

    #[inline]
    fn hmin3(a: Lanes<f32>) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let v = load_ps(&a);
            let yz = _mm_min_ss(_mm_shuffle_ps::<0b01>(v, v), _mm_shuffle_ps::<0b10>(v, v));
            _mm_cvtss_f32(_mm_min_ss(v, yz))
        }
    }

    #[inline]
    fn hmax3(a: Lanes<f32>) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let v = load_ps(&a);
            let yz = _mm_max_ss(_mm_shuffle_ps::<0b01>(v, v), _mm_shuffle_ps::<0b10>(v, v));
            _mm_cvtss_f32(_mm_max_ss(v, yz))
        }
    }
}

// ---------------------------------------------------------------------------
// f64: two registers, [x, y] and [z, w]
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct Pd(__m128d, __m128d);

#[inline(always)]
fn load_pd(a: &Lanes<f64>) -> Pd {
    // SAFETY: `a` is 4 contiguous f64; unaligned loads; SSE2 is baseline.
    unsafe { Pd(_mm_loadu_pd(a.as_ptr()), _mm_loadu_pd(a.as_ptr().add(2))) }
}

#[inline(always)]
fn store_pd(v: Pd) -> Lanes<f64> {
    let mut out = [0.0f64; 4];
    // SAFETY: `out` has room for 4 f64; unaligned stores; SSE2 is baseline.
    unsafe {
        _mm_storeu_pd(out.as_mut_ptr(), v.0);
        _mm_storeu_pd(out.as_mut_ptr().add(2), v.1);
    }
    out
}

macro_rules! lanewise_pd {
    ($($name:ident => $intr:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(a: Lanes<f64>, b: Lanes<f64>) -> Lanes<f64> {
                let (a, b) = (load_pd(&a), load_pd(&b));
                // SAFETY: SSE2 is baseline on x86_64.
                store_pd(unsafe { Pd($intr(a.0, b.0), $intr(a.1, b.1)) })
            }
        )*
    };
}

macro_rules! scalar_pd {
    ($($name:ident => $intr:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(a: Lanes<f64>, s: f64) -> Lanes<f64> {
                let a = load_pd(&a);
                // SAFETY: SSE2 is baseline on x86_64.
                store_pd(unsafe {
                    let s = _mm_set1_pd(s);
                    Pd($intr(a.0, s), $intr(a.1, s))
                })
            }
        )*
    };
}

#[inline(always)]
unsafe fn round_pd(a: __m128d) -> __m128d {
    let sign_mask = _mm_set1_pd(-0.0);
    let one = _mm_set1_pd(1.0);
    let half = _mm_set1_pd(0.5);
    // 2^52
    let magic = _mm_set1_pd(4_503_599_627_370_496.0);

    let ax = _mm_andnot_pd(sign_mask, a);
    let rne = _mm_sub_pd(_mm_add_pd(ax, magic), magic);
    let trunc = _mm_sub_pd(rne, _mm_and_pd(_mm_cmpgt_pd(rne, ax), one));
    let frac = _mm_sub_pd(ax, trunc);
    let rounded = _mm_add_pd(trunc, _mm_and_pd(_mm_cmpge_pd(frac, half), one));

    let big = _mm_cmpge_pd(ax, magic);
    let mag = _mm_or_pd(_mm_and_pd(big, ax), _mm_andnot_pd(big, rounded));
    _mm_or_pd(mag, _mm_and_pd(a, sign_mask))
}

#[inline(always)]
unsafe fn swap_pd(v: __m128d) -> __m128d {
    _mm_shuffle_pd::<0b01>(v, v)
}

impl Backend<f64> for Simd {
    lanewise_pd! {
        add => _mm_add_pd,
        sub => _mm_sub_pd,
        mul => _mm_mul_pd,
        div => _mm_div_pd,
        min => _mm_min_pd,
        max => _mm_max_pd,
    }

    scalar_pd! {
        add_scalar => _mm_add_pd,
        sub_scalar => _mm_sub_pd,
        mul_scalar => _mm_mul_pd,
        div_scalar => _mm_div_pd,
    }

    #[inline]
    fn scalar_div(s: f64, a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe {
            let s = _mm_set1_pd(s);
            Pd(_mm_div_pd(s, a.0), _mm_div_pd(s, a.1))
        })
    }

    #[inline]
    fn neg(a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe {
            let m = _mm_set1_pd(-0.0);
            Pd(_mm_xor_pd(a.0, m), _mm_xor_pd(a.1, m))
        })
    }

    #[inline]
    fn abs(a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe {
            let m = _mm_set1_pd(-0.0);
            Pd(_mm_andnot_pd(m, a.0), _mm_andnot_pd(m, a.1))
        })
    }

    #[inline]
    fn sign(a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe {
            let zero = _mm_setzero_pd();
            let one = _mm_set1_pd(1.0);
            let minus_one = _mm_set1_pd(-1.0);
            let sign = |v: __m128d| {
                _mm_or_pd(
                    _mm_and_pd(_mm_cmpgt_pd(v, zero), one),
                    _mm_and_pd(_mm_cmplt_pd(v, zero), minus_one),
                )
            };
            Pd(sign(a.0), sign(a.1))
        })
    }

    #[inline]
    fn sqrt(a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe { Pd(_mm_sqrt_pd(a.0), _mm_sqrt_pd(a.1)) })
    }

    #[inline]
    fn round(a: Lanes<f64>) -> Lanes<f64> {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe { Pd(round_pd(a.0), round_pd(a.1)) })
    }

    #[inline]
    fn dot3(a: Lanes<f64>, b: Lanes<f64>) -> f64 {
        let (a, b) = (load_pd(&a), load_pd(&b));
        // SAFETY: SSE2 is baseline on x86_64.
        unsafe {
            let xy = _mm_mul_pd(a.0, b.0);
            let sum = _mm_add_sd(xy, _mm_unpackhi_pd(xy, xy));
            let z = _mm_mul_sd(a.1, b.1);
            _mm_cvtsd_f64(_mm_add_sd(sum, z))
        }
    }

    #[inline]
    fn cross3(a: Lanes<f64>, b: Lanes<f64>) -> Lanes<f64> {
        let (a, b) = (load_pd(&a), load_pd(&b));
        // SAFETY: SSE2 is baseline on x86_64.
        store_pd(unsafe {
            let a_yz = _mm_shuffle_pd::<0b01>(a.0, a.1);
            let a_zx = _mm_shuffle_pd::<0b00>(a.1, a.0);
            let b_yz = _mm_shuffle_pd::<0b01>(b.0, b.1);
            let b_zx = _mm_shuffle_pd::<0b00>(b.1, b.0);
            let xy = _mm_sub_pd(_mm_mul_pd(a_yz, b_zx), _mm_mul_pd(a_zx, b_yz));

            let z = _mm_sub_sd(_mm_mul_sd(a.0, swap_pd(b.0)), _mm_mul_sd(swap_pd(a.0), b.0));
            Pd(xy, _mm_unpacklo_pd(z, _mm_setzero_pd()))
        })
    }

    #[inline]
    fn hmin3(a: Lanes<f64>) -> f64 {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        unsafe {
            let yz = _mm_min_sd(_mm_unpackhi_pd(a.0, a.0), a.1);
            _mm_cvtsd_f64(_mm_min_sd(a.0, yz))
        }
    }

    #[inline]
    fn hmax3(a: Lanes<f64>) -> f64 {
        let a = load_pd(&a);
        // SAFETY: SSE2 is baseline on x86_64.
        unsafe {
            let yz = _mm_max_sd(_mm_unpackhi_pd(a.0, a.0), a.1);
            _mm_cvtsd_f64(_mm_max_sd(a.0, yz))
        }
    }
}
