use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-node render data read by the host renderer.
/// Must match the host protocol: 16 floats = 64 bytes stride, column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    /// World matrix of the drawable node.
    pub world: [f32; 16],
}

impl NodeInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(world: Mat4) -> Self {
        Self {
            world: world.to_cols_array(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.world)
    }
}

impl Default for NodeInstance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// Per-frame buffers: one world matrix per drawable node, in walk order,
/// followed by the packed vertices of every deformable surface.
pub struct RenderBuffer {
    pub instances: Vec<NodeInstance>,
    /// xyz triples, surfaces concatenated in walk order.
    pub surface_vertices: Vec<f32>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256, 4096)
    }

    pub fn with_capacity(max_nodes: usize, max_surface_vertices: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_nodes),
            surface_vertices: Vec::with_capacity(max_surface_vertices * 3),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.surface_vertices.clear();
    }

    pub fn push(&mut self, world: Mat4) {
        self.instances.push(NodeInstance::new(world));
    }

    pub fn push_surface(&mut self, positions: &[Vec3]) {
        self.surface_vertices
            .extend(positions.iter().flat_map(|p| p.to_array()));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn surface_vertex_count(&self) -> u32 {
        (self.surface_vertices.len() / 3) as u32
    }

    /// Instance data as a flat float slice.
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn surface_vertices_ptr(&self) -> *const f32 {
        self.surface_vertices.as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
