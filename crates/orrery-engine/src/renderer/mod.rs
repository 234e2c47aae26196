pub mod camera;
pub mod descriptor;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera3D, CameraUniform};
pub use descriptor::{DrawableEntry, SceneDescriptor};
pub use instance::{NodeInstance, RenderBuffer};
pub use traits::{DrawTiming, FrameData, Renderer};
