use crate::math::Scalar;
use std::{
    cmp::PartialEq,
    convert::From,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector2<T = f32>(pub [T; 2]);

unsafe impl<T: Scalar> bytemuck::Zeroable for Vector2<T> {}

unsafe impl<T: Scalar> bytemuck::Pod for Vector2<T> {}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Vector2<T> {
        Vector2([x, y])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn widened(&self, z: T) -> Vector3<T> {
        Vector3([self.0[0], self.0[1], z])
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Scalar> PartialEq for Vector2<T> {
    #[inline]
    fn eq(&self, rhs: &Vector2<T>) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= T::EPSILON && (self.0[1] - rhs.0[1]).abs() <= T::EPSILON
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector2<T> {
        Vector2([self.0[0] * rhs, self.0[1] * rhs])
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector2<T> {
        Vector2([self.0[0] / rhs, self.0[1] / rhs])
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Vector2<T> {
        Vector2([-self.0[0], -self.0[1]])
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from(value: (T, T)) -> Vector2<T> {
        Vector2([value.0, value.1])
    }
}

impl From<(u32, u32)> for Vector2<f32> {
    #[inline]
    fn from(value: (u32, u32)) -> Vector2<f32> {
        Vector2([value.0 as f32, value.1 as f32])
    }
}

#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector3<T = f32>(pub [T; 3]);

unsafe impl<T: Scalar> bytemuck::Zeroable for Vector3<T> {}

unsafe impl<T: Scalar> bytemuck::Pod for Vector3<T> {}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Vector3<T> {
        Vector3([x, y, z])
    }

    #[inline]
    pub const fn splat(f: T) -> Vector3<T> {
        Vector3([f, f, f])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.0[0] = x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.0[1] = y
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.0[2] = z
    }

    /// +Y, the default camera up direction.
    #[inline]
    pub fn up() -> Vector3<T> {
        Vector3([T::ZERO, T::ONE, T::ZERO])
    }

    #[inline]
    pub fn right() -> Vector3<T> {
        Vector3([T::ONE, T::ZERO, T::ZERO])
    }

    /// -Z. OpenGL cameras look down the negative z-axis.
    #[inline]
    pub fn forward() -> Vector3<T> {
        Vector3([T::ZERO, T::ZERO, -T::ONE])
    }

    #[inline]
    pub fn widened(&self, w: T) -> Vector4<T> {
        Vector4([self.0[0], self.0[1], self.0[2], w])
    }

    #[inline]
    pub fn length(&self) -> T {
        self.squared_normal().sqrt()
    }

    #[inline]
    pub fn squared_normal(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn normalized(&self) -> Vector3<T> {
        *self / self.length()
    }

    #[inline]
    pub fn cross(&self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector3<T>) -> T {
        (self.0[0] * rhs.0[0]) + (self.0[1] * rhs.0[1]) + (self.0[2] * rhs.0[2])
    }

    /// Reflect this (incident) vector about the plane with the given unit normal.
    #[inline]
    pub fn reflected(&self, normal: Vector3<T>) -> Vector3<T> {
        *self - normal * (T::TWO * normal.dot(*self))
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Scalar> PartialEq for Vector3<T> {
    #[inline]
    fn eq(&self, rhs: &Vector3<T>) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= T::EPSILON
            && (self.0[1] - rhs.0[1]).abs() <= T::EPSILON
            && (self.0[2] - rhs.0[2]).abs() <= T::EPSILON
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3<T>) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
        self.0[2] += rhs.0[2];
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        self.0[0] -= rhs.0[0];
        self.0[1] -= rhs.0[1];
        self.0[2] -= rhs.0[2];
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl<T: Scalar> Mul for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
        ])
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn neg(self) -> Vector3<T> {
        Vector3([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector3<T> {
        Vector3([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector3<T> {
        Vector3([self.0[0] / rhs, self.0[1] / rhs, self.0[2] / rhs])
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> AsRef<[T]> for Vector3<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from(value: (T, T, T)) -> Vector3<T> {
        Vector3([value.0, value.1, value.2])
    }
}

#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector4<T = f32>(pub [T; 4]);

unsafe impl<T: Scalar> bytemuck::Zeroable for Vector4<T> {}

unsafe impl<T: Scalar> bytemuck::Pod for Vector4<T> {}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Vector4<T> {
        Vector4([x, y, z, w])
    }

    #[inline]
    pub const fn splat(f: T) -> Vector4<T> {
        Vector4([f, f, f, f])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.0[3]
    }

    #[inline]
    pub fn length(&self) -> T {
        self.squared_normal().sqrt()
    }

    #[inline]
    pub fn squared_normal(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn normalized(&self) -> Vector4<T> {
        *self / self.length()
    }

    #[inline]
    pub fn narrowed(&self) -> Vector3<T> {
        Vector3([self.0[0], self.0[1], self.0[2]])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector4<T>) -> T {
        (self.0[0] * rhs.0[0])
            + (self.0[1] * rhs.0[1])
            + (self.0[2] * rhs.0[2])
            + (self.0[3] * rhs.0[3])
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Scalar> PartialEq for Vector4<T> {
    #[inline]
    fn eq(&self, rhs: &Vector4<T>) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= T::EPSILON
            && (self.0[1] - rhs.0[1]).abs() <= T::EPSILON
            && (self.0[2] - rhs.0[2]).abs() <= T::EPSILON
            && (self.0[3] - rhs.0[3]).abs() <= T::EPSILON
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn neg(self) -> Vector4<T> {
        Vector4([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}

impl<T> Index<usize> for Vector4<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn add(self, rhs: Vector4<T>) -> Vector4<T> {
        Vector4([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn sub(self, rhs: Vector4<T>) -> Vector4<T> {
        Vector4([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

/// Componentwise, e.g. modulating a light color by a material color.
impl<T: Scalar> Mul for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        Vector4([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector4<T> {
        Vector4([
            self.0[0] / rhs,
            self.0[1] / rhs,
            self.0[2] / rhs,
            self.0[3] / rhs,
        ])
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector4<T> {
        Vector4([
            self.0[0] * rhs,
            self.0[1] * rhs,
            self.0[2] * rhs,
            self.0[3] * rhs,
        ])
    }
}

impl<T> AsRef<[T]> for Vector4<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<(T, T, T, T)> for Vector4<T> {
    #[inline]
    fn from(value: (T, T, T, T)) -> Vector4<T> {
        Vector4([value.0, value.1, value.2, value.3])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crosses() {
        let x = Vector3::<f32>::right();
        let y = Vector3::<f32>::up();
        assert_eq!(Vector3::new(0.0, 0.0, 1.0), x.cross(y));
        assert_eq!(Vector3::new(0.0, 0.0, -1.0), y.cross(x));
        assert_eq!(x, y.cross(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn normalizes() {
        let v = Vector3::new(3.0f64, 0.0, 4.0);
        assert_eq!(5.0, v.length());
        assert_eq!(Vector3::new(0.6, 0.0, 0.8), v.normalized());

        let v = Vector4::new(0.0f32, 2.0, 0.0, 0.0).normalized();
        assert_eq!(Vector4::new(0.0, 1.0, 0.0, 0.0), v);
    }

    #[test]
    fn reflects() {
        let incident = Vector3::new(1.0f32, -1.0, 0.0);
        assert_eq!(
            Vector3::new(1.0, 1.0, 0.0),
            incident.reflected(Vector3::up())
        );
    }

    #[test]
    fn widens_and_narrows() {
        let v = Vector2::new(1.0f32, 2.0).widened(3.0);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0), v);
        assert_eq!(Vector4::new(1.0, 2.0, 3.0, 1.0), v.widened(1.0));
        assert_eq!(v, v.widened(0.0).narrowed());
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = Vector4::new(1.0f32, 0.5, 0.0, 1.0);
        let b = Vector4::new(0.5f32, 0.5, 1.0, 1.0);
        assert_eq!(Vector4::new(0.5, 0.25, 0.0, 1.0), a * b);
        assert_eq!(Vector4::new(1.5, 1.0, 1.0, 2.0), a + b);
        assert_eq!(Vector4::new(2.0, 1.0, 0.0, 2.0), a * 2.0);

        let mut p = Vector3::new(1.0f32, 2.0, 3.0);
        p += Vector3::splat(1.0);
        p -= Vector3::new(0.0, 0.0, 4.0);
        assert_eq!(Vector3::new(2.0, 3.0, 0.0), p);
        assert_eq!(12, p.to_bytes().len());
    }
}
