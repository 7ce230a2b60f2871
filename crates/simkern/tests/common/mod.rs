//! Seeded inputs shared by the integration tests.

#![allow(dead_code)]

use simkern::{Scalar, Vec3};

/// SplitMix64 stream, so every run sees the same batch.
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1]
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform in [-1, 1] times a power of ten in [1e-3, 1e3], with the odd
    /// exact half-integer mixed in to hit rounding ties.
    pub fn lane(&mut self) -> f64 {
        let pick = self.next_u64() % 16;
        if pick == 0 {
            return (self.next_u64() % 41) as f64 * 0.5 - 10.0;
        }
        if pick == 1 {
            return 0.0;
        }
        let exp = (self.next_u64() % 7) as i32 - 3;
        self.unit() * 10f64.powi(exp)
    }

    pub fn vec3<S: Scalar>(&mut self) -> Vec3<S> {
        Vec3::new(
            S::from_f64(self.lane()),
            S::from_f64(self.lane()),
            S::from_f64(self.lane()),
        )
    }

    pub fn batch<S: Scalar>(&mut self, n: usize) -> Vec<Vec3<S>> {
        (0..n).map(|_| self.vec3()).collect()
    }
}

pub fn rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

/// Relative: `|a - b| <= tol * max(|a|, |b|)`, with NaN only matching NaN.
pub fn close<S: Scalar>(a: S, b: S, tol: f64) -> bool {
    close_scaled(a, b, tol, 0.0)
}

/// [`close`] with the bound widened to `tol * scale`. For results that may
/// cancel far below their inputs (`sub`, `cross3`); pass the input magnitude.
pub fn close_scaled<S: Scalar>(a: S, b: S, tol: f64, scale: f64) -> bool {
    let (a, b) = (a.to_f64(), b.to_f64());
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a == b {
        return true;
    }
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(scale)
}

pub fn close_lanes<S: Scalar>(a: [S; 4], b: [S; 4], tol: f64) -> bool {
    close_lanes_scaled(a, b, tol, 0.0)
}

pub fn close_lanes_scaled<S: Scalar>(a: [S; 4], b: [S; 4], tol: f64, scale: f64) -> bool {
    (0..3).all(|i| close_scaled(a[i], b[i], tol, scale))
}

/// Largest |lane| over x, y, z.
pub fn magnitude<S: Scalar>(v: [S; 4]) -> f64 {
    v[..3].iter().fold(0.0, |m: f64, l| m.max(l.to_f64().abs()))
}
