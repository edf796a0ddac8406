use crate::math::{Quaternion, Scalar, Vector3, Vector4};

use std::ops::{Index, IndexMut, Mul};

/// A column-major 4x4 matrix, laid out the way `glUniformMatrix4fv` expects it without
/// transposing. `self[c]` is column `c`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Matrix4<T = f32>(pub [Vector4<T>; 4]);

unsafe impl<T: Scalar> bytemuck::Zeroable for Matrix4<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Matrix4<T> {}

impl<T: Scalar> Matrix4<T> {
    #[inline]
    pub const fn new(x: Vector4<T>, y: Vector4<T>, z: Vector4<T>, w: Vector4<T>) -> Matrix4<T> {
        Matrix4([x, y, z, w])
    }

    #[inline]
    pub fn identity() -> Matrix4<T> {
        let (o, i) = (T::ZERO, T::ONE);
        Matrix4([
            Vector4([i, o, o, o]),
            Vector4([o, i, o, o]),
            Vector4([o, o, i, o]),
            Vector4([o, o, o, i]),
        ])
    }

    /// Build from 16 scalars in column-major order (the glTF `node.matrix` layout).
    #[inline]
    #[rustfmt::skip]
    pub fn from_cols_array(m: &[T; 16]) -> Matrix4<T> {
        Matrix4([
            Vector4([m[0], m[1], m[2], m[3]]),
            Vector4([m[4], m[5], m[6], m[7]]),
            Vector4([m[8], m[9], m[10], m[11]]),
            Vector4([m[12], m[13], m[14], m[15]]),
        ])
    }

    #[inline]
    pub fn element(&self, row: usize, col: usize) -> T {
        self.0[col].0[row]
    }

    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        self.0[col].0[row] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vector4<T> {
        Vector4([
            self.0[0].0[row],
            self.0[1].0[row],
            self.0[2].0[row],
            self.0[3].0[row],
        ])
    }

    #[inline]
    #[rustfmt::skip]
    pub fn transpose(&self) -> Matrix4<T> {
        Matrix4([
            Vector4([self.0[0].0[0], self.0[1].0[0], self.0[2].0[0], self.0[3].0[0]]),
            Vector4([self.0[0].0[1], self.0[1].0[1], self.0[2].0[1], self.0[3].0[1]]),
            Vector4([self.0[0].0[2], self.0[1].0[2], self.0[2].0[2], self.0[3].0[2]]),
            Vector4([self.0[0].0[3], self.0[1].0[3], self.0[2].0[3], self.0[3].0[3]]),
        ])
    }

    /// Whether the bottom row is exactly `[0, 0, 0, 1]`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        let row = self.row(3);
        row.0 == [T::ZERO, T::ZERO, T::ZERO, T::ONE]
    }

    /// Invert an affine matrix (bottom row `[0, 0, 0, 1]`).
    ///
    /// The upper 3x3 block must be invertible; a singular block yields non-finite entries.
    pub fn inverse_affine(&self) -> Matrix4<T> {
        let m = |r: usize, c: usize| self.element(r, c);

        // Cofactors of the upper 3x3 block
        let c00 = m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1);
        let c01 = m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2);
        let c02 = m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0);
        let c10 = m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2);
        let c11 = m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0);
        let c12 = m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1);
        let c20 = m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1);
        let c21 = m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2);
        let c22 = m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0);

        let inv_det = T::ONE / (m(0, 0) * c00 + m(0, 1) * c01 + m(0, 2) * c02);

        // inverse = adjugate / det, where the adjugate is the transposed cofactor matrix
        let mut ret = Matrix4::identity();
        ret.set_element(0, 0, c00 * inv_det);
        ret.set_element(0, 1, c10 * inv_det);
        ret.set_element(0, 2, c20 * inv_det);
        ret.set_element(1, 0, c01 * inv_det);
        ret.set_element(1, 1, c11 * inv_det);
        ret.set_element(1, 2, c21 * inv_det);
        ret.set_element(2, 0, c02 * inv_det);
        ret.set_element(2, 1, c12 * inv_det);
        ret.set_element(2, 2, c22 * inv_det);

        let t = Vector3([m(0, 3), m(1, 3), m(2, 3)]);
        for r in 0..3 {
            let row = ret.row(r).narrowed();
            ret.set_element(r, 3, -row.dot(t));
        }
        ret
    }

    /// Compare every entry within an absolute tolerance.
    pub fn approx_eq(&self, rhs: &Matrix4<T>, tolerance: T) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(a, b)| a.0.iter().zip(b.0.iter()).all(|(a, b)| (*a - *b).abs() <= tolerance))
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Quaternion> for Matrix4<f32> {
    /// The rotation a unit quaternion represents.
    #[inline]
    fn from(q: Quaternion) -> Matrix4<f32> {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (xx, xy, xz, xw) = (x * x, x * y, x * z, x * w);
        let (yy, yz, yw) = (y * y, y * z, y * w);
        let (zz, zw) = (z * z, z * w);
        Matrix4([
            Vector4([1.0 - 2.0 * (yy + zz), 2.0 * (xy + zw), 2.0 * (xz - yw), 0.0]),
            Vector4([2.0 * (xy - zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + xw), 0.0]),
            Vector4([2.0 * (xz + yw), 2.0 * (yz - xw), 1.0 - 2.0 * (xx + yy), 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn index(&self, index: usize) -> &Vector4<T> {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4<T> {
        &mut self.0[index]
    }
}

impl<T: Scalar> Mul<&Matrix4<T>> for &Matrix4<T> {
    type Output = Matrix4<T>;

    /// The usual product: `(a * b) * v == a * (b * v)`.
    fn mul(self, rhs: &Matrix4<T>) -> Matrix4<T> {
        let mut ret = Matrix4::default();
        for col in 0..4 {
            for k in 0..4 {
                let factor = rhs[col][k];
                ret[col][0] += self[k][0] * factor;
                ret[col][1] += self[k][1] * factor;
                ret[col][2] += self[k][2] * factor;
                ret[col][3] += self[k][3] * factor;
            }
        }
        ret
    }
}

impl<T: Scalar> Mul for Matrix4<T> {
    type Output = Matrix4<T>;
    #[inline]
    fn mul(self, rhs: Matrix4<T>) -> Matrix4<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2] + self[3] * rhs[3]
    }
}
