mod matrix;
mod quaternion;
mod transform;
mod vector;

pub use matrix::*;
pub use quaternion::*;
pub use transform::*;
pub use vector::*;

use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// The floating-point types the vector, matrix and transform code is generic over.
pub trait Scalar:
    bytemuck::Pod
    + Default
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const PI: Self;
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn abs(self) -> Self;

    /// Degrees to radians, `degrees * PI / 180`.
    fn radians(self) -> Self;

    /// Radians to degrees.
    fn degrees(self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ident) => {
        impl Scalar for $t {
            const ZERO: $t = 0.0;
            const ONE: $t = 1.0;
            const TWO: $t = 2.0;
            const PI: $t = std::$t::consts::PI;
            const EPSILON: $t = std::$t::EPSILON;

            #[inline]
            fn sqrt(self) -> $t {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> $t {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> $t {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> $t {
                $t::tan(self)
            }

            #[inline]
            fn abs(self) -> $t {
                $t::abs(self)
            }

            #[inline]
            fn radians(self) -> $t {
                self * Self::PI / 180.0
            }

            #[inline]
            fn degrees(self) -> $t {
                self * 180.0 / Self::PI
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

/// Wrap an angle in degrees into `[0, 360)`, however many turns it is past.
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
