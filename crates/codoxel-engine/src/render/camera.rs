use glam::{Mat4, Vec3};

/// Static perspective camera.
///
/// The view is fixed at construction. The projection depends only on the
/// aspect ratio and is rebuilt whenever [`resize`](Self::resize) reports a
/// change. Depth maps to `0..=1` (wgpu clip space).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    aspect: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 70.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 100.0;

    pub fn new(fov_y_degrees: f32, near: f32, far: f32, width: u32, height: u32) -> Self {
        let aspect = aspect_ratio(width, height).unwrap_or(1.0);
        Self {
            fov_y_degrees,
            near,
            far,
            aspect,
            view: Mat4::IDENTITY,
            projection: perspective(fov_y_degrees, aspect, near, far),
        }
    }

    /// Camera with the default lens, looking down -Z from `(0, 0, distance)`.
    pub fn looking_at_origin(distance: f32, width: u32, height: u32) -> Self {
        Self::new(
            Self::DEFAULT_FOV_Y_DEGREES,
            Self::DEFAULT_NEAR,
            Self::DEFAULT_FAR,
            width,
            height,
        )
        .with_view(Mat4::from_translation(Vec3::new(0.0, 0.0, -distance)))
    }

    pub fn with_view(mut self, view: Mat4) -> Self {
        self.view = view;
        self
    }

    /// Recomputes the projection for a new drawable size.
    ///
    /// Returns `true` if the projection changed. Zero-sized (minimized)
    /// surfaces leave the camera untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let Some(aspect) = aspect_ratio(width, height) else {
            return false;
        };
        if aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        self.projection = perspective(self.fov_y_degrees, aspect, self.near, self.far);
        true
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    (width > 0 && height > 0).then(|| width as f32 / height as f32)
}

fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// Right-handed perspective with 0..1 depth, written out element by element.
    fn expected_projection(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
        let f = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
        let range = near - far;
        [
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, far / range, -1.0],
            [0.0, 0.0, near * far / range, 0.0],
        ]
    }

    fn assert_mat_close(actual: Mat4, expected: [[f32; 4]; 4]) {
        let actual = actual.to_cols_array_2d();
        for (c, (a_col, e_col)) in actual.iter().zip(expected.iter()).enumerate() {
            for (r, (a, e)) in a_col.iter().zip(e_col.iter()).enumerate() {
                assert!((a - e).abs() < EPS, "m[{c}][{r}]: {a} != {e}");
            }
        }
    }

    #[test]
    fn projection_after_resize_matches_fresh_projection() {
        let mut camera = Camera::looking_at_origin(3.0, 800, 600);
        camera.resize(400, 300);
        assert_mat_close(
            camera.projection(),
            expected_projection(70.0, 400.0 / 300.0, 0.1, 100.0),
        );
    }

    #[test]
    fn resize_reports_aspect_changes() {
        let mut camera = Camera::looking_at_origin(3.0, 800, 800);
        assert!(camera.resize(400, 300));
        assert_mat_close(
            camera.projection(),
            expected_projection(70.0, 400.0 / 300.0, 0.1, 100.0),
        );

        // 800x600 has the same aspect ratio as 400x300.
        assert!(!camera.resize(800, 600));
    }

    #[test]
    fn resize_to_wider_window_changes_only_x_scale() {
        let mut camera = Camera::looking_at_origin(3.0, 800, 600);
        let before = camera.projection();
        assert!(camera.resize(1600, 600));
        let after = camera.projection();

        assert!((after.x_axis.x - before.x_axis.x / 2.0).abs() < EPS);
        assert_eq!(after.y_axis, before.y_axis);
        assert_eq!(after.z_axis, before.z_axis);
        assert_eq!(after.w_axis, before.w_axis);
    }

    #[test]
    fn zero_size_is_ignored() {
        let mut camera = Camera::looking_at_origin(3.0, 800, 600);
        let before = camera.clone();
        assert!(!camera.resize(0, 600));
        assert!(!camera.resize(800, 0));
        assert_eq!(camera, before);
    }

    #[test]
    fn view_translates_scene_away_from_camera() {
        let camera = Camera::looking_at_origin(3.0, 640, 480);
        let p = camera.view().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(0.0, 0.0, -3.0));
    }
}
