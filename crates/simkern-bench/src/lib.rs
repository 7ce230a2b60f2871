//! Shared helpers for simkern benchmarks: seeded RNG, input generators.

use simkern::{Scalar, Vec3};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform lane in [-scale, scale] for any precision.
    pub fn lane<S: Scalar>(&mut self, scale: f64) -> S {
        S::from_f64(self.f64() * scale)
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

/// `n` vectors with lanes in [-100, 100].
pub fn random_vec3<S: Scalar>(n: usize) -> Vec<Vec3<S>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.lane(100.0), rng.lane(100.0), rng.lane(100.0)))
        .collect()
}

/// `n` vectors below the `safe_normalize` tolerance, interleaved with regular ones.
pub fn mixed_degenerate_vec3<S: Scalar>(n: usize) -> Vec<Vec3<S>> {
    let tiny = S::from_f64(1e-20);
    random_vec3::<S>(n)
        .into_iter()
        .enumerate()
        .map(|(i, v)| if i % 2 == 0 { v * tiny } else { v })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_seeded() {
        assert_eq!(random_vec3::<f64>(8), random_vec3::<f64>(8));
        assert!(random_vec3::<f32>(64)
            .iter()
            .all(|v| v.abs().max_element() <= 100.0));
    }

    #[test]
    fn degenerate_mix_alternates() {
        let v = mixed_degenerate_vec3::<f64>(4);
        assert!(v[0].is_zero());
        assert!(!v[1].is_zero());
    }
}
