use crate::{Real, Scalar};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Two-component vector. Plain lanes, no padding, no backend dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S = Real> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn dot_self(self) -> S {
        self.dot(self)
    }

    /// Squared length; compare against squared bounds to skip the root.
    #[inline]
    pub fn length2(self) -> S {
        self.dot_self()
    }

    #[inline]
    pub fn length(self) -> S {
        self.length2().sqrt()
    }

    /// `self / sqrt(dot(self))`. Unguarded: NaN for a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.dot_self().sqrt()
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn as_array(&self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Write `name` and both lanes to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self, name: &str) {
        crate::diag::print(name, &self.as_array());
    }
}

impl<S: Scalar> Default for Vec2<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(a: [S; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<S: Scalar> From<Vec2<S>> for [S; 2] {
    fn from(v: Vec2<S>) -> Self {
        v.as_array()
    }
}

impl<S: Scalar> Index<usize> for Vec2<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 lane index {i} out of range (0..2)"),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for Vec2<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 lane index {i} out of range (0..2)"),
        }
    }
}

macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<S: Scalar> $Op for Vec2<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl<S: Scalar> $Op<S> for Vec2<S> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: S) -> Self {
                Self::new(self.x $sym rhs, self.y $sym rhs)
            }
        }

        impl<S: Scalar> $OpAssign for Vec2<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<S: Scalar> $OpAssign<S> for Vec2<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, +);
impl_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_binop!(Div, div, DivAssign, div_assign, /);

impl<S: Scalar> Neg for Vec2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Scalar * Vec2 (commutative)
impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;
    #[inline]
    fn mul(self, rhs: Vec2<f64>) -> Vec2<f64> {
        rhs * self
    }
}

impl Mul<Vec2<f32>> for f32 {
    type Output = Vec2<f32>;
    #[inline]
    fn mul(self, rhs: Vec2<f32>) -> Vec2<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
