use crate::backend::{Backend, Lanes};
use crate::{Real, Scalar};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Three-component vector stored in a four-lane, 16-byte aligned layout.
///
/// The fourth lane `w` only pads the value out to a full hardware register
/// (and to WGSL `vec3<f32>` storage layout). It is private, always zero, and
/// never takes part in equality, ordering or any reduction.
///
/// Indexing reads all four lanes (`v[3]` is always `0`), but `v[i] = ..`
/// only accepts lanes 0..3: writing `v[3]` panics. Set lanes through
/// `x`/`y`/`z` or build a new value instead.
///
/// All arithmetic is routed through the scalar type's [`Backend`].
#[derive(Clone, Copy)]
#[repr(C, align(16))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S = Real> {
    pub x: S,
    pub y: S,
    pub z: S,
    #[cfg_attr(feature = "serde", serde(skip))]
    w: S,
}

// Lower a call onto the active backend of `S`.
macro_rules! lanes {
    ($op:ident($($arg:expr),* $(,)?)) => {
        <S::Backend as Backend<S>>::$op($($arg),*)
    };
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z, w: S::ZERO }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO)
    }

    /// Same value in x, y and z; `w` stays zero.
    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE)
    }

    /// Build from backend lanes. The incoming fourth lane is discarded.
    #[inline]
    pub fn from_lanes(l: Lanes<S>) -> Self {
        Self::new(l[0], l[1], l[2])
    }

    /// All four storage lanes, `w` last (always zero).
    #[inline]
    pub fn lanes(self) -> Lanes<S> {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn as_array(&self) -> [S; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        lanes!(dot3(self.lanes(), rhs.lanes()))
    }

    /// `self · self`
    #[inline]
    pub fn dot_self(self) -> S {
        self.dot(self)
    }

    /// Right-handed cross product. Parallel or zero inputs give zero.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_lanes(lanes!(cross3(self.lanes(), rhs.lanes())))
    }

    #[inline]
    pub fn length2(self) -> S {
        self.dot_self()
    }

    #[inline]
    pub fn length(self) -> S {
        self.length2().sqrt()
    }

    /// Unguarded: NaN/Inf for a zero vector. See [`safe_normalize`](Self::safe_normalize).
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Length computed on a copy scaled by its largest lane, so inputs whose
    /// squared length would overflow or underflow still come out right.
    pub fn safe_length(self) -> S {
        let m = self.abs().max_element();
        if m == S::ZERO || m == S::INFINITY {
            return m;
        }
        m * (self / m).length()
    }

    /// `normalize()` unless `length2() < EPSILON_SQ`, in which case `safe` is
    /// returned untouched.
    #[inline]
    pub fn safe_normalize(self, safe: Self) -> Self {
        let len2 = self.length2();
        if len2 < S::EPSILON_SQ {
            safe
        } else {
            self / len2.sqrt()
        }
    }

    /// [`safe_normalize`](Self::safe_normalize) with a zero fallback.
    #[inline]
    pub fn safe_normalize_or_zero(self) -> Self {
        self.safe_normalize(Self::zero())
    }

    /// Largest of x, y, z.
    #[inline]
    pub fn max_element(self) -> S {
        lanes!(hmax3(self.lanes()))
    }

    /// Smallest of x, y, z.
    #[inline]
    pub fn min_element(self) -> S {
        lanes!(hmin3(self.lanes()))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::from_lanes(lanes!(max(self.lanes(), other.lanes())))
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::from_lanes(lanes!(min(self.lanes(), other.lanes())))
    }

    /// Every lane raised to at least `s`.
    #[inline]
    pub fn max_scalar(self, s: S) -> Self {
        self.component_max(Self::splat(s))
    }

    /// Every lane lowered to at most `s`.
    #[inline]
    pub fn min_scalar(self, s: S) -> Self {
        self.component_min(Self::splat(s))
    }

    /// True when every lane is smaller in magnitude than `EPSILON`.
    #[inline]
    pub fn is_zero(self) -> bool {
        let a = self.abs();
        a.x < S::EPSILON && a.y < S::EPSILON && a.z < S::EPSILON
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_lanes(lanes!(abs(self.lanes())))
    }

    /// Per-lane -1, 0 or 1.
    #[inline]
    pub fn sign(self) -> Self {
        Self::from_lanes(lanes!(sign(self.lanes())))
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_lanes(lanes!(sqrt(self.lanes())))
    }

    /// Per-lane rounding, half away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::from_lanes(lanes!(round(self.lanes())))
    }

    /// Saturate the magnitude at `max_length` (expected non-negative).
    /// Vectors already within the bound come back unchanged.
    ///
    /// Compares and rescales through the max-lane scaled form of
    /// [`safe_length`](Self::safe_length), so lanes whose squares overflow
    /// or underflow still clamp to exactly `max_length`.
    pub fn clamp_length(self, max_length: S) -> Self {
        if self.safe_length() > max_length {
            let unit = self / self.abs().max_element();
            unit * (max_length / unit.length())
        } else {
            self
        }
    }

    /// Per-lane clamp between two bound vectors. A NaN lane comes out as the
    /// lower bound.
    #[inline]
    pub fn clamp(self, clamp_min: Self, clamp_max: Self) -> Self {
        self.component_max(clamp_min).component_min(clamp_max)
    }

    /// Some vector orthogonal to `self`.
    ///
    /// Crosses with the basis axis along the smallest-magnitude lane, which
    /// is the axis furthest from parallel. Ties resolve toward z, then y, so
    /// the choice is deterministic. Non-zero for any non-zero input.
    pub fn orthogonal(self) -> Self {
        let a = self.abs();
        if a.x < a.y {
            if a.x < a.z {
                self.cross(Self::unit_x())
            } else {
                self.cross(Self::unit_z())
            }
        } else if a.y < a.z {
            self.cross(Self::unit_y())
        } else {
            self.cross(Self::unit_z())
        }
    }

    /// Unguarded: `self` must be non-zero.
    #[inline]
    pub fn unit_orthogonal(self) -> Self {
        self.orthogonal().normalize()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self + (other - self) * t
    }

    /// Returns the element-wise product (Hadamard product)
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        self * other
    }

    /// Write `name` and the three lanes to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self, name: &str) {
        crate::diag::print(name, &self.as_array());
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self {
        v.as_array()
    }
}

impl<S: Scalar> PartialEq for Vec3<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

/// Lexicographic on (x, y, z): the first lane that differs decides. A NaN
/// in the deciding position leaves the pair unordered.
impl<S: Scalar> PartialOrd for Vec3<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.as_array().into_iter().zip(other.as_array()) {
            match a.partial_cmp(&b) {
                Some(Ordering::Equal) => continue,
                decided => return decided,
            }
        }
        Some(Ordering::Equal)
    }
}

impl<S: Scalar> Index<usize> for Vec3<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec3 lane index {i} out of range (0..4)"),
        }
    }
}

/// Lanes 0..3 only; the padding lane is read-only.
impl<S: Scalar> IndexMut<usize> for Vec3<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => panic!("Vec3 lane 3 is padding and cannot be written"),
            _ => panic!("Vec3 lane index {i} out of range (0..4)"),
        }
    }
}

macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $scalar_op:ident) => {
        impl<S: Scalar> $Op for Vec3<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::from_lanes(lanes!($op(self.lanes(), rhs.lanes())))
            }
        }

        impl<S: Scalar> $Op<S> for Vec3<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: S) -> Self {
                Self::from_lanes(lanes!($scalar_op(self.lanes(), rhs)))
            }
        }

        impl<S: Scalar> $OpAssign for Vec3<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<S: Scalar> $OpAssign<S> for Vec3<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add_scalar);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_scalar);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul_scalar);
impl_binop!(Div, div, DivAssign, div_assign, div_scalar);

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_lanes(lanes!(neg(self.lanes())))
    }
}

// Scalar * Vec3 (commutative) and scalar / Vec3 (lane-wise s / v)
macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;
            #[inline]
            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                rhs * self
            }
        }

        impl Div<Vec3<$t>> for $t {
            type Output = Vec3<$t>;
            #[inline]
            fn div(self, rhs: Vec3<$t>) -> Vec3<$t> {
                Vec3::from_lanes(<<$t as Scalar>::Backend as Backend<$t>>::scalar_div(
                    self,
                    rhs.lanes(),
                ))
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

impl<S: Scalar> fmt::Debug for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<S: Scalar> fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f64>, b: Vec3<f64>) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn constructors_zero_the_padding_lane() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0)[3], 0.0);
        assert_eq!(Vec3::splat(7.0)[3], 0.0);
        assert_eq!(Vec3::<f32>::from([1.0, 2.0, 3.0])[3], 0.0);
        assert_eq!(Vec3::from_lanes([1.0, 2.0, 3.0, 9.0])[3], 0.0);
        assert_eq!(Vec3::<f64>::default()[3], 0.0);
    }

    #[test]
    fn operators_zero_the_padding_lane() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let zero = Vec3::<f64>::zero();
        // 0 / 0 in the padding lane would be NaN if it leaked.
        assert_eq!((a / zero)[3], 0.0);
        assert_eq!((a + 1.0)[3], 0.0);
        assert_eq!((a - a)[3], 0.0);
        assert_eq!((2.0 / a)[3], 0.0);
        assert_eq!((-a)[3], 0.0);
        assert_eq!(a.cross(a)[3], 0.0);
        let mut b = a;
        b /= 0.0;
        assert_eq!(b[3], 0.0);
    }

    #[test]
    fn layout_is_one_hardware_register() {
        assert_eq!(core::mem::size_of::<Vec3<f32>>(), 16);
        assert_eq!(core::mem::align_of::<Vec3<f32>>(), 16);
        assert_eq!(core::mem::size_of::<Vec3<f64>>(), 32);
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length2(), 25.0);
        assert!(close(v.normalize(), Vec3::new(0.6, 0.8, 0.0)));
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec3::<f64>::zero().normalize();
        assert!(n.x.is_nan());
    }

    #[test]
    fn cross_product() {
        let x = Vec3::<f64>::unit_x();
        let y = Vec3::<f64>::unit_y();
        let z = x.cross(y);
        assert_eq!(z, Vec3::unit_z());
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
        // Parallel
        assert_eq!(x.cross(x * 3.0), Vec3::zero());
    }

    #[test]
    fn safe_normalize_falls_back() {
        let fb = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(Vec3::zero().safe_normalize(fb), fb);
        assert_eq!(Vec3::splat(1e-170).safe_normalize(fb), fb);
        assert_eq!(Vec3::<f64>::zero().safe_normalize_or_zero(), Vec3::zero());
        let v = Vec3::new(0.0, 2.0, 0.0);
        assert_eq!(v.safe_normalize(fb), Vec3::unit_y());
    }

    #[test]
    fn safe_length_survives_extremes() {
        let big = Vec3::<f64>::new(3e200, 4e200, 0.0);
        assert!(big.length().is_infinite());
        assert!((big.safe_length() / 5e200 - 1.0).abs() < 1e-15);

        let tiny = Vec3::<f64>::new(3e-200, 4e-200, 0.0);
        assert_eq!(tiny.length(), 0.0);
        assert!((tiny.safe_length() / 5e-200 - 1.0).abs() < 1e-15);

        assert_eq!(Vec3::<f64>::zero().safe_length(), 0.0);
        assert_eq!(Vec3::new(f64::INFINITY, 1.0, 0.0).safe_length(), f64::INFINITY);
        assert!(Vec3::new(1.0, 2.0, f64::NAN).safe_length().is_nan());
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).safe_length(), 5.0);
    }

    #[test]
    fn reductions_and_componentwise() {
        let a = Vec3::new(3.0, -1.0, 2.0);
        let b = Vec3::new(1.0, 5.0, 2.0);
        assert_eq!(a.max_element(), 3.0);
        assert_eq!(a.min_element(), -1.0);
        assert_eq!(a.component_max(b), Vec3::new(3.0, 5.0, 2.0));
        assert_eq!(a.component_min(b), Vec3::new(1.0, -1.0, 2.0));
        assert_eq!(a.max_scalar(0.0), Vec3::new(3.0, 0.0, 2.0));
        assert_eq!(a.min_scalar(0.0), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn is_zero_uses_a_tolerance() {
        assert!(Vec3::<f64>::zero().is_zero());
        assert!(Vec3::new(1e-20, -1e-20, 0.0).is_zero());
        assert!(!Vec3::new(0.0, 0.0, 1e-3).is_zero());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_zero());
    }

    #[test]
    fn abs_sign_round_sqrt() {
        let v = Vec3::new(-2.5, 0.0, 1.4);
        assert_eq!(v.abs(), Vec3::new(2.5, 0.0, 1.4));
        assert_eq!(v.sign(), Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(v.round(), Vec3::new(-3.0, 0.0, 1.0));
        assert_eq!(Vec3::new(4.0, 9.0, 16.0).sqrt(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn clamp_length_saturates() {
        assert_eq!(Vec3::new(10.0, 0.0, 0.0).clamp_length(5.0), Vec3::new(5.0, 0.0, 0.0));
        let v = Vec3::new(0.1, 0.2, 0.3);
        let c = v.clamp_length(1.0);
        assert_eq!(c.lanes(), v.lanes());
        let long = Vec3::new(7.0, -3.0, 12.0);
        assert!(long.clamp_length(2.0).length() <= 2.0 + 1e-12);
    }

    #[test]
    fn clamp_length_near_float_limits() {
        // Squared lengths overflow here.
        let big = Vec3::new(1e200, 0.0, 0.0);
        let c = big.clamp_length(1e199);
        assert!((c.x / 1e199 - 1.0).abs() < 1e-15 && c.y == 0.0 && c.z == 0.0);
        let c = big.clamp_length(1e150);
        assert!((c.safe_length() / 1e150 - 1.0).abs() < 1e-15);
        let c = Vec3::new(3e200, -4e200, 0.0).clamp_length(1e200);
        assert!((c.x / 0.6e200 - 1.0).abs() < 1e-14);
        assert!((c.y / -0.8e200 - 1.0).abs() < 1e-14);

        // Squared lengths underflow here.
        let tiny = Vec3::new(2e-200, 0.0, 0.0);
        let c = tiny.clamp_length(1e-200);
        assert!((c.x / 1e-200 - 1.0).abs() < 1e-15);
        assert_eq!(tiny.clamp_length(3e-200), tiny);

        // Single precision overflows from about 1.8e19.
        let v = Vec3::<f32>::new(3e19, 4e19, 0.0);
        let c = v.clamp_length(1e19);
        assert!((c.safe_length() / 1e19 - 1.0).abs() < 1e-6);
        assert_eq!(Vec3::<f32>::new(3e19, 0.0, 0.0).clamp_length(5e19).x, 3e19);
    }

    #[test]
    fn clamp_between_bounds() {
        let v = Vec3::new(-5.0, 0.5, 5.0);
        let c = v.clamp(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(c, Vec3::new(-1.0, 0.5, 1.0));
    }

    #[test]
    fn orthogonal_picks_smallest_lane_axis() {
        // x smallest -> v × X
        let v = Vec3::new(0.1, 2.0, 3.0);
        assert_eq!(v.orthogonal(), Vec3::new(0.0, 3.0, -2.0));
        // y smallest -> v × Y
        let v = Vec3::new(2.0, 0.1, 3.0);
        assert_eq!(v.orthogonal(), Vec3::new(-3.0, 0.0, 2.0));
        // z smallest -> v × Z
        let v = Vec3::new(2.0, 3.0, 0.1);
        assert_eq!(v.orthogonal(), Vec3::new(3.0, -2.0, 0.0));
        // all tied -> v × Z
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v.orthogonal(), Vec3::new(1.0, -1.0, 0.0));
        // axis-aligned input never yields zero
        assert!(!Vec3::<f64>::unit_x().orthogonal().is_zero());
        assert!(!Vec3::<f64>::unit_z().orthogonal().is_zero());
    }

    #[test]
    fn unit_orthogonal_is_unit_and_orthogonal() {
        let v = Vec3::new(0.3, -1.7, 0.2);
        let u = v.unit_orthogonal();
        assert!((u.length2() - 1.0).abs() < 1e-12);
        assert!(u.dot(v).abs() < 1e-12);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Vec3::new(1.0, 5.0, 5.0) < Vec3::new(2.0, 0.0, 0.0));
        assert!(Vec3::new(1.0, 1.0, 5.0) < Vec3::new(1.0, 2.0, 0.0));
        assert!(Vec3::new(1.0, 1.0, 2.0) > Vec3::new(1.0, 1.0, 1.0));
        assert!(!(Vec3::new(1.0, 1.0, 1.0) < Vec3::new(1.0, 1.0, 1.0)));
        let nan = Vec3::new(f64::NAN, 0.0, 0.0);
        assert_eq!(nan.partial_cmp(&Vec3::zero()), None);
        // A NaN after the deciding lane does not matter.
        assert!(Vec3::new(0.0, 0.0, f64::NAN) < Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn equality_is_float_equality() {
        assert_eq!(Vec3::new(0.0, 0.0, 0.0), Vec3::new(-0.0, -0.0, -0.0));
        let nan = Vec3::new(f64::NAN, 0.0, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn index_reads_all_four_lanes() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!([v[0], v[1], v[2], v[3]], [1.0, 2.0, 3.0, 0.0]);
        v[1] = 8.0;
        assert_eq!(v.y, 8.0);
    }

    #[test]
    fn xyz_lanes_are_writable_in_place() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[0] = 4.0;
        v[2] += 1.0;
        assert_eq!(v, Vec3::new(4.0, 2.0, 4.0));
        assert_eq!(v[3], 0.0);
    }

    #[test]
    #[should_panic(expected = "padding")]
    fn padding_lane_is_not_writable() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[3] = 1.0;
    }

    #[test]
    fn scalar_lhs_ops() {
        let v = Vec3::new(1.0, 2.0, 4.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(8.0 / v, Vec3::new(8.0, 4.0, 2.0));
        assert_eq!(v / v, Vec3::splat(1.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::splat(1.0);
        v -= 0.5;
        v *= Vec3::new(2.0, 2.0, 2.0);
        v /= 3.0;
        assert!(close(v, Vec3::new(1.0, 5.0 / 3.0, 7.0 / 3.0)));
    }

    #[test]
    fn lerp() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn debug_hides_padding() {
        let s = std::format!("{:?}", Vec3::new(1.0, 2.0, 3.0));
        assert!(!s.contains('w'));
    }
}
