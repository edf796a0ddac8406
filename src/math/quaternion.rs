use crate::math::{Vector3, Vector4};
use std::ops::{Mul, MulAssign};

/// Rotations as glTF nodes store them: `(x, y, z, w)` with `w` the scalar part.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Quaternion(pub Vector4);

unsafe impl bytemuck::Zeroable for Quaternion {}

unsafe impl bytemuck::Pod for Quaternion {}

/// Think of it like a unit vector with a 4th "twist" component.
impl Quaternion {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quaternion {
        Quaternion(Vector4([x, y, z, w]))
    }

    #[inline]
    pub const fn identity() -> Quaternion {
        Quaternion(Vector4([0.0, 0.0, 0.0, 1.0]))
    }

    /// `axis` must be a unit vector; `angle` is in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Quaternion {
        let half_theta = angle / 2.0;
        let sin_half_theta = half_theta.sin();
        let cos_half_theta = half_theta.cos();
        Quaternion((axis * sin_half_theta).widened(cos_half_theta))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn normalized(&self) -> Quaternion {
        Quaternion(self.0.normalized())
    }

    #[inline]
    pub fn conjugated(&self) -> Quaternion {
        Quaternion(Vector4([-self.0[0], -self.0[1], -self.0[2], self.0[3]]))
    }

    /// Rotate a vector by this (unit) quaternion.
    #[inline]
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        (*self * v * self.conjugated()).0.narrowed()
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    #[rustfmt::skip]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion(Vector4([
            self.0[0] * rhs.0[3] + self.0[3] * rhs.0[0] + self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[1] * rhs.0[3] + self.0[3] * rhs.0[1] + self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[2] * rhs.0[3] + self.0[3] * rhs.0[2] + self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
            self.0[3] * rhs.0[3] - self.0[0] * rhs.0[0] - self.0[1] * rhs.0[1] - self.0[2] * rhs.0[2],
        ]))
    }
}

/// Product with the pure quaternion `(v, 0)`.
impl Mul<Vector3> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Vector3) -> Quaternion {
        Quaternion(Vector4([
            self.0[3] * rhs.0[0] + self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[3] * rhs.0[1] + self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[3] * rhs.0[2] + self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
            -self.0[0] * rhs.0[0] - self.0[1] * rhs.0[1] - self.0[2] * rhs.0[2],
        ]))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{rotate, Matrix4};

    #[test]
    fn rotates_vectors() {
        let q = Quaternion::from_axis_angle(Vector3::up(), std::f32::consts::FRAC_PI_2);
        let v = q.rotate(Vector3::right());
        assert!((v - Vector3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn composes() {
        let quarter = Quaternion::from_axis_angle(Vector3::right(), std::f32::consts::FRAC_PI_2);
        let mut half = quarter;
        half *= quarter;
        let v = half.rotate(Vector3::up());
        assert!((v - Vector3::new(0.0, -1.0, 0.0)).length() < 1e-6);
        assert!((half.normalized().0.length() - 1.0).abs() < 1e-6);
        let unit = quarter * quarter.conjugated();
        assert!((unit.0 - Quaternion::identity().0).length() < 1e-6);
    }

    #[test]
    fn matches_axis_angle_matrices() {
        let axis = Vector3::new(1.0, 2.0, -2.0).normalized();
        let q = Quaternion::from_axis_angle(axis, 40.0f32.to_radians());
        let from_quaternion: Matrix4 = q.into();
        let from_axis_angle: Matrix4 = rotate(40.0, 1.0, 2.0, -2.0);
        assert!(from_quaternion.approx_eq(&from_axis_angle, 1e-6));
    }
}
