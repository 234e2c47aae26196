pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod procgen;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::recipe::{AssemblyContext, Resolution, SceneConfig, SceneRecipe};
pub use api::types::{MeshId, TextureId};
pub use assets::gate::AssetGate;
pub use assets::manifest::AssetManifest;
pub use assets::registry::AssetRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use components::{Drawable, Geometry, InstancedMesh, Light, LineComponent, Material, MeshComponent, Side};
pub use core::node::{AnimatedNode, NodeBehavior, NodeState};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use core::transform::Transform;
pub use error::{SceneError, SceneResult};
pub use procgen::rng::SceneRng;
pub use renderer::camera::Camera3D;
pub use renderer::descriptor::SceneDescriptor;
pub use renderer::instance::{NodeInstance, RenderBuffer};
pub use systems::render::build_render_buffer;
