//! Camera description and screen/world mapping.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for any front-end. Pointer routing unprojects pixel
//! coordinates through this camera, so the core logic never touches a
//! windowing layer.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Viewport size in pixels; pointer coordinates live in this space.
    pub viewport: Vec2,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target` with the app's default lens.
    pub fn looking_at(eye: Vec3, target: Vec3, viewport: Vec2) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            viewport,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect(), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Depth of a world point along the camera forward axis.
    pub fn view_depth(&self, world: Vec3) -> f32 {
        (world - self.eye).dot(self.forward())
    }

    /// Compute a world-space ray from pixel coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_ray(&self, screen: Vec2) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * screen.x / self.viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.viewport.y);
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let rd = (far - self.eye).normalize();
        (self.eye, rd)
    }

    /// World position under a pixel at a given forward depth.
    ///
    /// The depth is measured along the camera forward axis, not along the
    /// ray, so a gesture keeps its captured depth as the pointer sweeps
    /// across the viewport.
    pub fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        let (ro, rd) = self.screen_to_ray(screen);
        let along_forward = rd.dot(self.forward()).max(1e-6);
        ro + rd * (depth / along_forward)
    }

    /// Project a world position to pixel coordinates.
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }
}
