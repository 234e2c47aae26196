use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::{
    build_render_buffer, AssemblyContext, AssetGate, AssetManifest, Camera3D, FrameClock, ProtocolLayout,
    RenderBuffer, Scene, SceneConfig, SceneDescriptor, SceneRecipe,
};

/// Generic scene runner that wires up the frame loop.
///
/// Each concrete scene (e.g., `solar-system`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<S: SceneRecipe> {
    recipe: S,
    config: SceneConfig,
    manifest: AssetManifest,
    gate: AssetGate,
    clock: FrameClock,
    camera: Camera3D,
    scene: Option<Scene>,
    render_buffer: RenderBuffer,
    layout: ProtocolLayout,
    /// Flat buffer the host reads every frame.
    shared: Vec<f32>,
    /// JSON scene descriptor, produced once after assembly.
    descriptor: String,
}

impl<S: SceneRecipe> SceneRunner<S> {
    pub fn new(recipe: S) -> Self {
        let config = recipe.config();
        let manifest = recipe.manifest();
        let layout = ProtocolLayout::from_config(&config);
        let mut shared = vec![0.0; layout.buffer_total_floats];
        shared[..HEADER_FLOATS].copy_from_slice(&layout.initial_header(&config));

        Self {
            gate: AssetGate::new(&manifest),
            clock: FrameClock::new(config.time_scale),
            camera: Camera3D::new(config.resolution.aspect()),
            scene: None,
            render_buffer: RenderBuffer::with_capacity(config.max_nodes, config.max_surface_vertices),
            layout,
            shared,
            descriptor: String::new(),
            manifest,
            config,
            recipe,
        }
    }

    /// Initialize the runner. Call once after construction.
    ///
    /// A `seed` from the host overrides the recipe's default. A manifest
    /// with no entries opens the gate immediately.
    pub fn init(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.config.seed = seed;
        }
        log::info!(
            "scene runner: waiting for {} assets (seed {})",
            self.manifest.asset_count(),
            self.config.seed
        );
        self.try_assemble();
    }

    /// The asset manifest as JSON, for the host to start loading.
    pub fn manifest_json(&self) -> String {
        self.manifest.to_json().unwrap_or_else(|e| {
            log::error!("manifest serialization failed: {e}");
            String::from("{}")
        })
    }

    /// Host callback: a texture finished loading.
    pub fn texture_loaded(&mut self, name: &str) -> bool {
        match self.gate.texture_loaded(name) {
            Ok(()) => {
                self.try_assemble();
                true
            }
            Err(e) => {
                log::error!("{e}");
                false
            }
        }
    }

    /// Host callback: a mesh file finished loading with `parts` parts.
    /// Returns the mesh ids allocated to those parts, in order.
    pub fn mesh_loaded(&mut self, name: &str, parts: u32) -> Vec<u32> {
        match self.gate.mesh_loaded(name, parts) {
            Ok(ids) => {
                self.try_assemble();
                ids.into_iter().map(|id| id.0).collect()
            }
            Err(e) => {
                log::error!("{e}");
                Vec::new()
            }
        }
    }

    /// Assemble the scene once the gate opens. Runs at most once.
    fn try_assemble(&mut self) {
        let Some(registry) = self.gate.take_ready() else {
            return;
        };
        let mut ctx = AssemblyContext::new(&self.config, &registry);
        match self.recipe.assemble(&mut ctx) {
            Ok(scene) => {
                self.descriptor = SceneDescriptor::from_scene(&scene).to_json().unwrap_or_else(|e| {
                    log::error!("scene descriptor serialization failed: {e}");
                    String::new()
                });
                log::info!(
                    "scene assembled: {} nodes, {} animated",
                    scene.len(),
                    scene.root().animated_count()
                );
                self.scene = Some(scene);
            }
            Err(e) => log::error!("scene assembly failed: {e}"),
        }
    }

    /// Run one frame for the host timestamp `timestamp_ms`.
    pub fn frame(&mut self, timestamp_ms: f64) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let t = self.clock.advance(timestamp_ms);
        scene.update(t);
        if self.config.animated_camera {
            self.camera.orbit(t, self.config.camera_distance);
        }

        build_render_buffer(scene, &mut self.render_buffer);
        self.layout.write_frame(
            &mut self.shared,
            self.clock.frames(),
            t,
            &self.camera.uniform(),
            &self.render_buffer,
        );
    }

    /// Host callback: the viewport changed size.
    ///
    /// Only the camera and the buffer header see the new size. Line
    /// materials in the scene descriptor keep the resolution they were
    /// assembled with, so the host should take fat-line resolution from the
    /// header's viewport fields after a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.resolution.width = width;
        self.config.resolution.height = height;
        self.camera.resize(width, height);
        let header = self.layout.initial_header(&self.config);
        self.shared[..HEADER_FLOATS].copy_from_slice(&header);
    }

    // ---- Accessors for SharedArrayBuffer reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.shared.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn buffer(&self) -> &[f32] {
        &self.shared
    }

    pub fn is_assembled(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn pending_assets(&self) -> u32 {
        self.gate.pending() as u32
    }

    pub fn max_nodes(&self) -> u32 {
        self.layout.max_nodes as u32
    }

    pub fn max_surface_vertices(&self) -> u32 {
        self.layout.max_surface_vertices as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::{HEADER_ASSEMBLED, HEADER_NODE_COUNT, HEADER_SCENE_TIME};
    use orrery_engine::procgen::orbit::{planet, OrbitSpec};
    use orrery_engine::{AnimatedNode, SceneResult};

    /// One planet around an empty origin.
    struct Tiny {
        fail: bool,
    }

    impl SceneRecipe for Tiny {
        fn manifest(&self) -> AssetManifest {
            AssetManifest::new().with_texture("earth.png").with_mesh("Rock1", "rocks/Rock1.obj")
        }

        fn assemble(&mut self, ctx: &mut AssemblyContext) -> SceneResult<Scene> {
            let texture = if self.fail { "pluto.png" } else { "earth.png" };
            let earth = planet(OrbitSpec::new(0.225, 2.0, texture), ctx.assets, &mut ctx.rng)?;
            Ok(Scene::new(AnimatedNode::group("solar_system").with_child(earth)))
        }
    }

    #[test]
    fn assembles_after_all_assets() {
        let mut runner = SceneRunner::new(Tiny { fail: false });
        runner.init(Some(9));
        assert!(!runner.is_assembled());

        assert!(runner.texture_loaded("earth.png"));
        assert!(!runner.is_assembled());
        assert_eq!(runner.mesh_loaded("Rock1", 2), vec![0, 1]);
        assert!(runner.is_assembled());
        assert!(runner.scene_descriptor().contains("earth_rim"));
    }

    #[test]
    fn frames_are_ignored_until_assembled() {
        let mut runner = SceneRunner::new(Tiny { fail: false });
        runner.init(None);
        runner.frame(1000.0);
        assert_eq!(runner.buffer()[HEADER_ASSEMBLED], 0.0);
    }

    #[test]
    fn frame_writes_the_shared_buffer() {
        let mut runner = SceneRunner::new(Tiny { fail: false });
        runner.init(None);
        runner.texture_loaded("earth.png");
        runner.mesh_loaded("Rock1", 1);

        runner.frame(5000.0);
        let buffer = runner.buffer();
        assert_eq!(buffer[HEADER_ASSEMBLED], 1.0);
        assert!((buffer[HEADER_SCENE_TIME] - 1.0).abs() < 1e-6);
        // earth + its rim
        assert_eq!(buffer[HEADER_NODE_COUNT], 2.0);
        assert!((runner.camera().position.x - 0.75f32.cos() * 5.0).abs() < 1e-5);
    }

    #[test]
    fn failed_assembly_leaves_scene_empty() {
        let mut runner = SceneRunner::new(Tiny { fail: true });
        runner.init(None);
        runner.texture_loaded("earth.png");
        runner.mesh_loaded("Rock1", 1);
        assert!(!runner.is_assembled());
    }

    #[test]
    fn resize_updates_header_viewport() {
        use orrery_engine::bridge::protocol::{HEADER_VIEWPORT_HEIGHT, HEADER_VIEWPORT_WIDTH};
        let mut runner = SceneRunner::new(Tiny { fail: false });
        runner.init(None);
        runner.resize(800.0, 400.0);
        assert_eq!(runner.buffer()[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(runner.buffer()[HEADER_VIEWPORT_HEIGHT], 400.0);
        assert!((runner.camera().aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_assets_are_reported() {
        let mut runner = SceneRunner::new(Tiny { fail: false });
        assert!(!runner.texture_loaded("venus.png"));
        assert!(runner.mesh_loaded("Rock7", 1).is_empty());
        assert_eq!(runner.pending_assets(), 2);
    }
}
