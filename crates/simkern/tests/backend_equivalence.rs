//! Portable vs SSE2 lowering: every lane primitive on the same seeded batch.

#![cfg(target_arch = "x86_64")]

mod common;

use common::{close, close_lanes, close_lanes_scaled, magnitude, rng};
use simkern::backend::{Backend, Lanes, Portable, Simd};
use simkern::{Scalar, Vec3};

const BATCH: usize = 4096;

fn check_all<S>(tol: f64)
where
    S: Scalar,
    Portable: Backend<S>,
    Simd: Backend<S>,
{
    let mut rng = rng();
    let a: Vec<Vec3<S>> = rng.batch(BATCH);
    let b: Vec<Vec3<S>> = rng.batch(BATCH);

    macro_rules! same_lanes {
        ($op:ident($($arg:expr),*)) => {{
            let p: Lanes<S> = <Portable as Backend<S>>::$op($($arg),*);
            let s: Lanes<S> = <Simd as Backend<S>>::$op($($arg),*);
            assert!(close_lanes(p, s, tol), "{}: portable {:?} vs simd {:?}", stringify!($op), p, s);
        }};
    }

    // Cancelling ops get a bound scaled to their inputs instead of the result.
    macro_rules! same_lanes_scaled {
        ($op:ident($($arg:expr),*), $scale:expr) => {{
            let p: Lanes<S> = <Portable as Backend<S>>::$op($($arg),*);
            let s: Lanes<S> = <Simd as Backend<S>>::$op($($arg),*);
            assert!(
                close_lanes_scaled(p, s, tol, $scale),
                "{}: portable {:?} vs simd {:?}",
                stringify!($op),
                p,
                s
            );
        }};
    }

    macro_rules! same_scalar {
        ($op:ident($($arg:expr),*)) => {{
            let p: S = <Portable as Backend<S>>::$op($($arg),*);
            let s: S = <Simd as Backend<S>>::$op($($arg),*);
            assert!(close(p, s, tol), "{}: portable {:?} vs simd {:?}", stringify!($op), p, s);
        }};
    }

    for (va, vb) in a.iter().zip(&b) {
        let (x, y) = (va.lanes(), vb.lanes());
        let s = vb.x;
        let (mx, my) = (magnitude(x), magnitude(y));

        same_lanes_scaled!(add(x, y), mx.max(my));
        same_lanes_scaled!(sub(x, y), mx.max(my));
        same_lanes!(mul(x, y));
        same_lanes!(div(x, y));
        same_lanes!(add_scalar(x, s));
        same_lanes!(sub_scalar(x, s));
        same_lanes!(mul_scalar(x, s));
        same_lanes!(div_scalar(x, s));
        same_lanes!(scalar_div(s, x));
        same_lanes!(neg(x));
        same_lanes!(min(x, y));
        same_lanes!(max(x, y));
        same_lanes!(abs(x));
        same_lanes!(sign(x));
        same_lanes!(sqrt(x));
        same_lanes!(round(x));
        same_lanes_scaled!(cross3(x, y), mx * my);
        same_scalar!(dot3(x, y));
        same_scalar!(hmin3(x));
        same_scalar!(hmax3(x));
    }
}

#[test]
fn f32_backends_agree() {
    check_all::<f32>(1e-6);
}

#[test]
fn f64_backends_agree() {
    check_all::<f64>(1e-12);
}

#[test]
fn tolerance_is_relative_below_one() {
    assert!(!close(1e-7_f32, 0.0, 1e-6));
    assert!(!close(5e-13_f64, 0.0, 1e-12));
    assert!(!close(1e-30_f64, 2e-30, 1e-12));
    assert!(close(1e-30_f64, 1e-30 * (1.0 + 1e-13), 1e-12));
    assert!(close(f64::NAN, f64::NAN, 0.0));
    assert!(!close(f64::NAN, 0.0, 1.0));
    // A flushed result only passes when it is small against the inputs.
    assert!(close_lanes_scaled([1e-13_f64, 0.0, 0.0, 0.0], [0.0; 4], 1e-12, 1.0));
    assert!(!close_lanes_scaled([1e-13_f64, 0.0, 0.0, 0.0], [0.0; 4], 1e-12, 1e-3));
}

#[test]
fn special_values_agree_f32() {
    let specials = [
        0.0_f32,
        -0.0,
        0.5,
        -0.5,
        1.5,
        -2.5,
        0.49999997,
        8_388_607.5,
        1e30,
        -1e-30,
        f32::MIN_POSITIVE,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ];
    for &p in &specials {
        for &q in &specials {
            let x = [p, q, p, 0.0];
            let y = [q, p, q, 0.0];
            assert!(close_lanes(
                <Portable as Backend<f32>>::round(x),
                <Simd as Backend<f32>>::round(x),
                0.0
            ));
            assert!(close_lanes(
                <Portable as Backend<f32>>::min(x, y),
                <Simd as Backend<f32>>::min(x, y),
                0.0
            ));
            assert!(close_lanes(
                <Portable as Backend<f32>>::max(x, y),
                <Simd as Backend<f32>>::max(x, y),
                0.0
            ));
            assert!(close_lanes(
                <Portable as Backend<f32>>::sign(x),
                <Simd as Backend<f32>>::sign(x),
                0.0
            ));
            assert!(close(
                <Portable as Backend<f32>>::hmax3(x),
                <Simd as Backend<f32>>::hmax3(x),
                0.0
            ));
        }
    }
}

#[test]
fn dot_is_bit_identical() {
    // Same summation order on both paths, so not even rounding may differ.
    let mut rng = rng();
    for _ in 0..BATCH {
        let a: Vec3<f64> = rng.vec3();
        let b: Vec3<f64> = rng.vec3();
        let p = <Portable as Backend<f64>>::dot3(a.lanes(), b.lanes());
        let s = <Simd as Backend<f64>>::dot3(a.lanes(), b.lanes());
        assert_eq!(p.to_bits(), s.to_bits());
    }
}
