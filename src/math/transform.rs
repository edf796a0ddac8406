//! Builders for the classic OpenGL fixed-function transform matrices.
//!
//! All of them produce column-major matrices for column vectors (`p' = M * p`) in a right-handed
//! world. Angles are in degrees. None of the builders check their inputs: a zero rotation axis,
//! a zero aspect ratio or `near == far` produce non-finite entries rather than an error.

use crate::math::{Matrix4, Scalar, Vector3, Vector4};

/// Identity with the translation column set to `(dx, dy, dz)`.
#[inline]
pub fn translate<T: Scalar>(dx: T, dy: T, dz: T) -> Matrix4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    Matrix4([
        Vector4([i, o, o, o]),
        Vector4([o, i, o, o]),
        Vector4([o, o, i, o]),
        Vector4([dx, dy, dz, i]),
    ])
}

#[inline]
pub fn scale<T: Scalar>(sx: T, sy: T, sz: T) -> Matrix4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    Matrix4([
        Vector4([sx, o, o, o]),
        Vector4([o, sy, o, o]),
        Vector4([o, o, sz, o]),
        Vector4([o, o, o, i]),
    ])
}

/// Counter-clockwise rotation of `angle` degrees about the axis `(x, y, z)` (Rodrigues' formula).
///
/// The axis is normalized here but must not be the zero vector.
pub fn rotate<T: Scalar>(angle: T, x: T, y: T, z: T) -> Matrix4<T> {
    let axis = Vector3([x, y, z]).normalized();
    let (x, y, z) = (axis.x(), axis.y(), axis.z());

    let theta = angle.radians();
    let (s, c) = (theta.sin(), theta.cos());
    let t = T::ONE - c;
    let o = T::ZERO;

    Matrix4([
        Vector4([t * x * x + c, t * x * y + s * z, t * x * z - s * y, o]),
        Vector4([t * x * y - s * z, t * y * y + c, t * y * z + s * x, o]),
        Vector4([t * x * z + s * y, t * y * z - s * x, t * z * z + c, o]),
        Vector4([o, o, o, T::ONE]),
    ])
}

/// The view matrix of a camera at `eye` looking at `center` (`gluLookAt`).
///
/// Rotates the world into camera space (side, up, -forward as rows) after translating by `-eye`.
/// `up` must not be parallel to `center - eye`.
pub fn look_at<T: Scalar>(eye: Vector3<T>, center: Vector3<T>, up: Vector3<T>) -> Matrix4<T> {
    let f = (center - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);
    let o = T::ZERO;
    Matrix4([
        Vector4([s.x(), u.x(), -f.x(), o]),
        Vector4([s.y(), u.y(), -f.y(), o]),
        Vector4([s.z(), u.z(), -f.z(), o]),
        Vector4([-s.dot(eye), -u.dot(eye), f.dot(eye), T::ONE]),
    ])
}

/// Maps the box `[left, right] x [bottom, top] x [near, far]` onto the cube `[-1, 1]^3`,
/// `near` going to -1 and `far` to +1.
pub fn ortho<T: Scalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
    let o = T::ZERO;
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    Matrix4([
        Vector4([T::TWO / width, o, o, o]),
        Vector4([o, T::TWO / height, o, o]),
        Vector4([o, o, T::TWO / depth, o]),
        Vector4([
            -((right + left) / width),
            -((top + bottom) / height),
            -((far + near) / depth),
            T::ONE,
        ]),
    ])
}

/// Off-axis perspective projection (`glFrustum`). Expects `0 < near < far`.
pub fn frustum<T: Scalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
    let o = T::ZERO;
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    let two_near = T::TWO * near;
    Matrix4([
        Vector4([two_near / width, o, o, o]),
        Vector4([o, two_near / height, o, o]),
        Vector4([
            (right + left) / width,
            (top + bottom) / height,
            -((far + near) / depth),
            -T::ONE,
        ]),
        Vector4([o, o, -(two_near * far / depth), o]),
    ])
}

/// Symmetric perspective projection of `fovy` degrees.
///
/// The half extents are `right = z_near * tan(fovy / 2)` and `top = right / aspect`, handed to
/// [`frustum`].
pub fn perspective<T: Scalar>(fovy: T, aspect: T, z_near: T, z_far: T) -> Matrix4<T> {
    let right = z_near * (fovy.radians() / T::TWO).tan();
    let top = right / aspect;
    frustum(-right, right, -top, top, z_near, z_far)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const TOLERANCE: f32 = 1e-5;

    fn random_unit_axis(rng: &mut StdRng) -> Vector3 {
        loop {
            let v = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length() > 0.1 {
                return v.normalized();
            }
        }
    }

    #[test]
    fn translates_points_not_directions() {
        let m = translate(1.0f32, -2.0, 3.0);
        assert_eq!(Vector4::new(1.0, -1.0, 4.0, 1.0), m * Vector4::new(0.0, 1.0, 1.0, 1.0));
        assert_eq!(Vector4::new(0.0, 1.0, 1.0, 0.0), m * Vector4::new(0.0, 1.0, 1.0, 0.0));
        assert!(m.is_affine());
    }

    #[test]
    fn translation_cancels_its_negation() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..100 {
            let (dx, dy, dz) = (
                rng.gen_range(-100.0f32..100.0),
                rng.gen_range(-100.0f32..100.0),
                rng.gen_range(-100.0f32..100.0),
            );
            let m = translate(dx, dy, dz) * translate(-dx, -dy, -dz);
            assert!(m.approx_eq(&Matrix4::identity(), TOLERANCE), "{:?}", m);
        }
    }

    #[test]
    fn scales() {
        let m = scale(2.0f64, 3.0, 4.0);
        assert_eq!(Vector4::new(2.0, 3.0, 4.0, 1.0), m * Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert!(m.is_affine());
        assert!(scale(1.0f32, 1.0, 1.0).approx_eq(&Matrix4::identity(), 0.0));
    }

    #[test]
    fn zero_rotation_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let axis = random_unit_axis(&mut rng);
            let m = rotate(0.0, axis.x(), axis.y(), axis.z());
            assert!(m.approx_eq(&Matrix4::identity(), TOLERANCE), "{:?}", m);
        }
    }

    #[test]
    fn rotates_right_handed() {
        let m = rotate(90.0f32, 0.0, 1.0, 0.0);
        let v = m * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert!((v - Vector4::new(0.0, 0.0, -1.0, 0.0)).length() < TOLERANCE, "{:?}", v);

        let m = rotate(90.0f32, 0.0, 0.0, 1.0);
        let v = m * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert!((v - Vector4::new(0.0, 1.0, 0.0, 0.0)).length() < TOLERANCE, "{:?}", v);

        let m = rotate(90.0f32, 1.0, 0.0, 0.0);
        let v = m * Vector4::new(0.0, 1.0, 0.0, 0.0);
        assert!((v - Vector4::new(0.0, 0.0, 1.0, 0.0)).length() < TOLERANCE, "{:?}", v);
    }

    #[test]
    fn rotation_normalizes_its_axis() {
        let a = rotate(33.0f32, 0.0, 5.0, 0.0);
        let b = rotate(33.0f32, 0.0, 1.0, 0.0);
        assert!(a.approx_eq(&b, TOLERANCE));
    }

    #[test]
    fn rotations_are_orthonormal_and_affine() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let axis = random_unit_axis(&mut rng);
            let angle = rng.gen_range(-360.0f32..360.0);
            let m = rotate(angle, axis.x(), axis.y(), axis.z());
            assert!(m.is_affine());
            assert!((m * m.transpose()).approx_eq(&Matrix4::identity(), TOLERANCE));
            // The axis itself is left alone
            let v = m * axis.widened(0.0);
            assert!((v.narrowed() - axis).length() < TOLERANCE);
        }
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let eye = Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let front = random_unit_axis(&mut rng);
            if front.cross(Vector3::up()).length() < 0.1 {
                continue;
            }
            let view = look_at(eye, eye + front, Vector3::up());
            let p = view * eye.widened(1.0);
            assert!((p - Vector4::new(0.0, 0.0, 0.0, 1.0)).length() < 1e-4, "{:?}", p);

            // The point straight ahead ends up on the negative z-axis
            let ahead = view * (eye + front).widened(1.0);
            assert!((ahead - Vector4::new(0.0, 0.0, -1.0, 1.0)).length() < 1e-4);
        }
    }

    #[test]
    fn look_at_down_negative_z_is_identity() {
        let view = look_at(
            Vector3::splat(0.0f32),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::up(),
        );
        assert!(view.approx_eq(&Matrix4::identity(), TOLERANCE));

        let view = look_at(
            Vector3::new(0.0f32, 0.0, 5.0),
            Vector3::splat(0.0),
            Vector3::up(),
        );
        assert!(view.approx_eq(&translate(0.0, 0.0, -5.0), TOLERANCE));
    }

    #[test]
    fn unit_ortho_is_identity() {
        let m = ortho(-1.0f32, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(m.approx_eq(&Matrix4::identity(), 0.0), "{:?}", m);
    }

    #[test]
    fn ortho_maps_box_corners() {
        let m = ortho(-2.0f32, 6.0, 1.0, 3.0, 0.5, 10.5);
        let near_corner = m * Vector4::new(-2.0, 1.0, 0.5, 1.0);
        let far_corner = m * Vector4::new(6.0, 3.0, 10.5, 1.0);
        assert!((near_corner - Vector4::new(-1.0, -1.0, -1.0, 1.0)).length() < TOLERANCE);
        assert!((far_corner - Vector4::new(1.0, 1.0, 1.0, 1.0)).length() < TOLERANCE);
        assert!(m.is_affine());
    }

    #[test]
    fn frustum_maps_near_and_far_planes() {
        let (n, f) = (1.0f32, 11.0);
        let m = frustum(-1.0, 1.0, -0.5, 0.5, n, f);

        let near = m * Vector4::new(1.0, 0.5, -n, 1.0);
        let near = near / near.w();
        assert!((near - Vector4::new(1.0, 1.0, -1.0, 1.0)).length() < TOLERANCE, "{:?}", near);

        let far = m * Vector4::new(0.0, 0.0, -f, 1.0);
        let far = far / far.w();
        assert!((far - Vector4::new(0.0, 0.0, 1.0, 1.0)).length() < TOLERANCE, "{:?}", far);

        assert_eq!(Vector4::new(0.0, 0.0, -1.0, 0.0), m.row(3));
    }

    #[test]
    fn perspective_is_a_symmetric_frustum() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let fovy = rng.gen_range(10.0f64..120.0);
            let aspect = rng.gen_range(0.25..4.0);
            let near = rng.gen_range(0.01..1.0);
            let far = near + rng.gen_range(1.0..1000.0);

            let r = near * (fovy.radians() / 2.0).tan();
            let t = r / aspect;
            let expected = frustum(-r, r, -t, t, near, far);
            assert!(perspective(fovy, aspect, near, far).approx_eq(&expected, 0.0));
        }
    }

    #[test]
    fn generic_over_precision() {
        let single = rotate(30.0f32, 1.0, 1.0, 0.0);
        let double = rotate(30.0f64, 1.0, 1.0, 0.0);
        for c in 0..4 {
            for r in 0..4 {
                assert!((single.element(r, c) as f64 - double.element(r, c)).abs() < 1e-6);
            }
        }
    }
}
