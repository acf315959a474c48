use crate::Vec3;

/// 4x4 transform matrix, stored as a flat 16-element array in column-major
/// order (the layout GPU uniform buffers expect).
///
/// Construction is limited to the three named constructors the renderer
/// needs; the raw array is never exposed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4([f32; 16]);

impl Mat4 {
    pub const IDENTITY: Self = {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self(m)
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y_degrees` is the full vertical field of view. Preconditions
    /// (debug-asserted, undefined results otherwise): `aspect != 0`,
    /// `near != far`, `fov_y_degrees` in (0, 180).
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(aspect != 0.0, "aspect must be non-zero");
        debug_assert!(near != far, "near and far planes must differ");
        debug_assert!(
            fov_y_degrees > 0.0 && fov_y_degrees < 180.0,
            "fov must be in (0, 180) degrees"
        );

        // fov/2, degrees to radians
        let f = 1.0 / (fov_y_degrees * std::f32::consts::PI / 360.0).tan();

        let mut m = [0.0; 16];
        m[0] = f / aspect;
        m[5] = f;
        m[10] = (far + near) / (near - far);
        m[11] = -1.0;
        m[14] = (2.0 * far * near) / (near - far);
        Self(m)
    }

    /// Camera view matrix looking from `eye` toward `target`.
    ///
    /// Builds the camera basis from cross products: forward toward the
    /// target, right = forward x up, true up = right x forward. `up` must
    /// not be parallel to the viewing direction; that case is a documented
    /// precondition, not a runtime check.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        let mut m = [0.0; 16];
        m[0] = right.x;
        m[4] = right.y;
        m[8] = right.z;
        m[1] = true_up.x;
        m[5] = true_up.y;
        m[9] = true_up.z;
        m[2] = -forward.x;
        m[6] = -forward.y;
        m[10] = -forward.z;
        m[15] = 1.0;

        // Translation: project the eye position onto the camera basis.
        m[12] = -right.dot(eye);
        m[13] = -true_up.dot(eye);
        m[14] = forward.dot(eye);
        Self(m)
    }

    /// Column-major 2D array form for uniform-buffer upload.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let m = &self.0;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    fn assert_mat_close(a: Mat4, b: Mat4) {
        for (ca, cb) in a
            .to_cols_array_2d()
            .iter()
            .zip(b.to_cols_array_2d().iter())
        {
            for (x, y) in ca.iter().zip(cb.iter()) {
                assert_close(*x, *y);
            }
        }
    }

    #[test]
    fn identity_diagonal() {
        let cols = Mat4::identity().to_cols_array_2d();
        for (i, col) in cols.iter().enumerate() {
            for (j, v) in col.iter().enumerate() {
                assert_eq!(*v, if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn perspective_90_degrees_unit_aspect() {
        // tan(45 deg) = 1, so the focal scale is exactly 1.
        let cols = Mat4::perspective(90.0, 1.0, 1.0, 2000.0).to_cols_array_2d();
        assert_close(cols[0][0], 1.0);
        assert_close(cols[1][1], 1.0);
        assert_close(cols[2][2], 2001.0 / -1999.0);
        assert_close(cols[2][3], -1.0);
        assert_close(cols[3][2], 4000.0 / -1999.0);
    }

    #[test]
    fn perspective_aspect_scales_x_only() {
        let wide = Mat4::perspective(45.0, 2.0, 1.0, 100.0).to_cols_array_2d();
        let square = Mat4::perspective(45.0, 1.0, 1.0, 100.0).to_cols_array_2d();
        assert_close(wide[0][0] * 2.0, square[0][0]);
        assert_close(wide[1][1], square[1][1]);
    }

    #[test]
    fn look_at_from_origin_down_negative_z_is_identity() {
        let m = Mat4::look_at(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        assert_mat_close(m, Mat4::IDENTITY);
    }

    #[test]
    fn look_at_with_eye_at_origin_has_zero_translation() {
        let m = Mat4::look_at(Vec3::ZERO, Vec3::new(3.0, -1.0, -5.0), Vec3::Y);
        let cols = m.to_cols_array_2d();
        assert_close(cols[3][0], 0.0);
        assert_close(cols[3][1], 0.0);
        assert_close(cols[3][2], 0.0);
    }

    #[test]
    fn look_at_translates_eye_to_origin() {
        // Camera on the +z axis looking at the origin: view space pushes the
        // scene back by the eye distance.
        let m = Mat4::look_at(Vec3::new(0.0, 0.0, 1300.0), Vec3::ZERO, Vec3::Y);
        let cols = m.to_cols_array_2d();
        assert_close(cols[3][2], -1300.0);
        // Rotation part stays the identity for an axis-aligned view.
        assert_close(cols[0][0], 1.0);
        assert_close(cols[1][1], 1.0);
        assert_close(cols[2][2], 1.0);
    }
}
