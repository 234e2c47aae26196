use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera looking at a target point.
/// Produces the view and projection matrices the host renders with.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Viewport width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

/// GPU-side uniform data for the camera.
/// 36 floats: view, projection, then the world position padded to a vec4.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

impl Camera3D {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y: 75.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 2.5, 4.0),
            target: Vec3::ZERO,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Resize the viewport. A collapsed viewport keeps the previous aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Swing around the origin at scene time `t`.
    ///
    /// The path is `(cos(0.75t)·d, cos(0.75t), sin(0.75t)·d)`: a circle of
    /// radius `d` that bobs above and below the ecliptic once per lap.
    pub fn orbit(&mut self, t: f32, distance: f32) {
        let a = t * 0.75;
        self.position = Vec3::new(a.cos() * distance, a.cos(), a.sin() * distance);
        self.target = Vec3::ZERO;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_36_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
        assert_eq!(Camera3D::default().uniform().as_floats().len(), CameraUniform::FLOATS);
    }

    #[test]
    fn starts_above_and_behind() {
        let cam = Camera3D::default();
        assert_eq!(cam.position, Vec3::new(0.0, 2.5, 4.0));
        assert_eq!(cam.fov_y, 75.0);
    }

    #[test]
    fn orbit_keeps_horizontal_distance() {
        let mut cam = Camera3D::default();
        for t in [0.0, 0.5, 2.0, 9.0] {
            cam.orbit(t, 5.0);
            let horizontal = Vec3::new(cam.position.x, 0.0, cam.position.z).length();
            assert!((horizontal - 5.0).abs() < 1e-4);
            assert!(cam.position.y.abs() <= 1.0);
        }
        cam.orbit(0.0, 5.0);
        assert_eq!(cam.position, Vec3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn view_centres_target() {
        let mut cam = Camera3D::default();
        cam.orbit(1.3, 5.0);
        let in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(in_view.x.abs() < 1e-4 && in_view.y.abs() < 1e-4);
        assert!(in_view.z < 0.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera3D::default();
        cam.resize(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(0.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
