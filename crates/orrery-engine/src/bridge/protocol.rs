//! SharedArrayBuffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 36 floats]
//! [Nodes: max_nodes × 16 floats]
//! [Surfaces: max_surface_vertices × 3 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::recipe::SceneConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{NodeInstance, RenderBuffer};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_NODES: usize = 2;
pub const HEADER_NODE_COUNT: usize = 3;
pub const HEADER_MAX_SURFACE_VERTICES: usize = 4;
pub const HEADER_SURFACE_VERTEX_COUNT: usize = 5;
pub const HEADER_SCENE_TIME: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_ASSEMBLED: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per node matrix (wire format, never changes).
pub const NODE_FLOATS: usize = NodeInstance::FLOATS;

/// Floats per surface vertex: x, y, z (wire format, never changes).
pub const SURFACE_VERTEX_FLOATS: usize = 3;

/// Floats in the camera section.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum drawable nodes.
    pub max_nodes: usize,
    /// Maximum deformable surface vertices.
    pub max_surface_vertices: usize,

    /// Size of node data section in floats.
    pub node_data_floats: usize,
    /// Size of surface data section in floats.
    pub surface_data_floats: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_data_offset: usize,
    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where surface data begins.
    pub surface_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_nodes: usize, max_surface_vertices: usize) -> Self {
        let node_data_floats = max_nodes * NODE_FLOATS;
        let surface_data_floats = max_surface_vertices * SURFACE_VERTEX_FLOATS;

        let camera_data_offset = HEADER_FLOATS;
        let node_data_offset = camera_data_offset + CAMERA_FLOATS;
        let surface_data_offset = node_data_offset + node_data_floats;

        let buffer_total_floats = surface_data_offset + surface_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_nodes,
            max_surface_vertices,
            node_data_floats,
            surface_data_floats,
            camera_data_offset,
            node_data_offset,
            surface_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SceneConfig.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_nodes, config.max_surface_vertices)
    }

    /// Header with capacities filled in and every per-frame field zeroed.
    pub fn initial_header(&self, config: &SceneConfig) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_NODES] = self.max_nodes as f32;
        header[HEADER_MAX_SURFACE_VERTICES] = self.max_surface_vertices as f32;
        header[HEADER_VIEWPORT_WIDTH] = config.resolution.width;
        header[HEADER_VIEWPORT_HEIGHT] = config.resolution.height;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }

    /// Copy one frame into `out`, clamping each section to its capacity.
    ///
    /// `out` must be `buffer_total_floats` long; the header's capacity and
    /// viewport fields are left as they are.
    pub fn write_frame(&self, out: &mut [f32], frame: u64, time: f32, camera: &CameraUniform, buffer: &RenderBuffer) {
        if out.len() < self.buffer_total_floats {
            log::warn!(
                "protocol buffer too small: {} < {} floats",
                out.len(),
                self.buffer_total_floats
            );
            return;
        }

        let nodes = buffer.instance_floats();
        let node_count = (nodes.len() / NODE_FLOATS).min(self.max_nodes);
        let surface_count = (buffer.surface_vertices.len() / SURFACE_VERTEX_FLOATS).min(self.max_surface_vertices);

        out[self.camera_data_offset..self.camera_data_offset + CAMERA_FLOATS].copy_from_slice(camera.as_floats());

        let n = node_count * NODE_FLOATS;
        out[self.node_data_offset..self.node_data_offset + n].copy_from_slice(&nodes[..n]);

        let s = surface_count * SURFACE_VERTEX_FLOATS;
        out[self.surface_data_offset..self.surface_data_offset + s].copy_from_slice(&buffer.surface_vertices[..s]);

        out[HEADER_NODE_COUNT] = node_count as f32;
        out[HEADER_SURFACE_VERTEX_COUNT] = surface_count as f32;
        out[HEADER_SCENE_TIME] = time;
        out[HEADER_ASSEMBLED] = 1.0;
        out[HEADER_FRAME_COUNTER] = frame as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::Camera3D;
    use glam::{Mat4, Vec3};

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());
        assert_eq!(layout.max_nodes, 256);
        assert_eq!(layout.max_surface_vertices, 4096);
        assert_eq!(layout.node_data_floats, 256 * 16);
        assert_eq!(layout.surface_data_floats, 4096 * 3);
        assert_eq!(layout.buffer_total_floats, 16 + 36 + 256 * 16 + 4096 * 3);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 200);
        assert_eq!(layout.camera_data_offset, HEADER_FLOATS);
        assert_eq!(layout.node_data_offset, layout.camera_data_offset + CAMERA_FLOATS);
        assert_eq!(layout.surface_data_offset, layout.node_data_offset + layout.node_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.surface_data_offset + layout.surface_data_floats);
    }

    #[test]
    fn header_carries_capacities() {
        let config = SceneConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        let header = layout.initial_header(&config);
        assert_eq!(header[HEADER_MAX_NODES], 256.0);
        assert_eq!(header[HEADER_VIEWPORT_WIDTH], 1280.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_ASSEMBLED], 0.0);
    }

    #[test]
    fn write_frame_clamps_to_capacity() {
        let layout = ProtocolLayout::new(2, 1);
        let mut out = vec![0.0; layout.buffer_total_floats];

        let mut buffer = RenderBuffer::new();
        for i in 0..3 {
            buffer.push(Mat4::from_translation(Vec3::splat(i as f32)));
        }
        buffer.push_surface(&[Vec3::X, Vec3::Y]);

        layout.write_frame(&mut out, 7, 0.25, &Camera3D::default().uniform(), &buffer);
        assert_eq!(out[HEADER_NODE_COUNT], 2.0);
        assert_eq!(out[HEADER_SURFACE_VERTEX_COUNT], 1.0);
        assert_eq!(out[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(out[HEADER_SCENE_TIME], 0.25);
        // translation of the second node
        assert_eq!(out[layout.node_data_offset + NODE_FLOATS + 12], 1.0);
        assert_eq!(&out[layout.surface_data_offset..], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn write_frame_ignores_short_buffers() {
        let layout = ProtocolLayout::new(2, 1);
        let mut out = vec![0.0; 4];
        layout.write_frame(&mut out, 1, 0.0, &Camera3D::default().uniform(), &RenderBuffer::new());
        assert_eq!(out, vec![0.0; 4]);
    }
}
