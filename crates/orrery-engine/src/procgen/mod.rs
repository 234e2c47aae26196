pub mod backdrop;
pub mod belt;
pub mod color;
pub mod corona;
pub mod ecliptic;
pub mod icosphere;
pub mod orbit;
pub mod rng;
pub mod sun;

pub use backdrop::{fill_light, nebula, starfield, NebulaParams};
pub use belt::{asteroid_belt, belt_instance, BeltParams};
pub use color::hsl;
pub use corona::{corona, CoronaSurface};
pub use ecliptic::{ecliptic_field, guide_line, ring};
pub use orbit::{orbit_group, planet, OrbitPlacement, OrbitSpec};
pub use rng::SceneRng;
pub use sun::sun;
