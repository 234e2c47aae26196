//! Renderer trait for native GPU backends.
//!
//! In the browser all drawing happens on the host side, which reads the flat
//! buffers directly. This trait is the same contract expressed in Rust, for
//! native backends and for tests that want to observe exactly what a frame
//! hands over.

use super::camera::CameraUniform;
use super::descriptor::SceneDescriptor;
use super::instance::NodeInstance;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
    /// Time spent in GPU rasterization (microseconds, if measurable)
    pub raster_us: u32,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Scene time the frame was updated to.
    pub time: f32,
    /// One world matrix per drawable, in descriptor order.
    pub instances: &'a [NodeInstance],
    /// Packed xyz vertices of every deformable surface.
    pub surface_vertices: &'a [f32],
    pub camera: CameraUniform,
}

/// Renderer trait for GPU backends.
///
/// ```ignore
/// struct WgpuRenderer { /* device, queue, pipelines */ }
///
/// impl Renderer for WgpuRenderer {
///     fn backend(&self) -> &'static str { "wgpu" }
///     fn prepare(&mut self, scene: &SceneDescriptor) { /* build meshes */ }
///     fn render(&mut self, frame: &FrameData) -> DrawTiming { /* encode */ }
///     fn resize(&mut self, width: u32, height: u32) { /* swap chain */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "webgl", "wgpu").
    fn backend(&self) -> &'static str;

    /// Build GPU resources for every drawable. Called once after assembly.
    fn prepare(&mut self, scene: &SceneDescriptor);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle viewport resize.
    fn resize(&mut self, width: u32, height: u32);
}
