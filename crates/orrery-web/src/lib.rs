pub mod runner;

pub use runner::SceneRunner;

#[doc(hidden)]
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_frame, asset callbacks, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The scene struct type that implements `orrery_engine::SceneRecipe`
///   and has a `new()` constructor
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Calls made before `scene_init` are
        /// logged and answered with `R::default()`.
        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: not initialized, call scene_init() first", $scene_name);
                    R::default()
                }
            })
        }

        /// Create the runner. A non-negative `seed` overrides the scene's default seed.
        #[wasm_bindgen]
        pub fn scene_init(seed: f64) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::SceneRunner::new(<$scene_type>::new());
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            let seed = (seed.is_finite() && seed >= 0.0).then_some(seed as u64);
            with_runner(|r| r.init(seed));
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_manifest() -> String {
            with_runner(|r| r.manifest_json())
        }

        #[wasm_bindgen]
        pub fn scene_texture_loaded(name: &str) -> bool {
            with_runner(|r| r.texture_loaded(name))
        }

        /// Returns the mesh ids allocated to the file's parts.
        #[wasm_bindgen]
        pub fn scene_mesh_loaded(name: &str, parts: u32) -> $crate::js_sys::Uint32Array {
            let ids = with_runner(|r| r.mesh_loaded(name, parts));
            $crate::js_sys::Uint32Array::from(ids.as_slice())
        }

        #[wasm_bindgen]
        pub fn scene_frame(timestamp_ms: f64) {
            with_runner(|r| r.frame(timestamp_ms));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.buffer_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_scene_descriptor() -> String {
            with_runner(|r| r.scene_descriptor().to_string())
        }

        #[wasm_bindgen]
        pub fn get_is_assembled() -> bool {
            with_runner(|r| r.is_assembled())
        }

        #[wasm_bindgen]
        pub fn get_pending_assets() -> u32 {
            with_runner(|r| r.pending_assets())
        }

        /// Camera view and projection matrices plus position, 36 floats.
        #[wasm_bindgen]
        pub fn get_camera() -> $crate::js_sys::Float32Array {
            let floats: Vec<f32> = with_runner(|r| r.camera().uniform().as_floats().to_vec());
            $crate::js_sys::Float32Array::from(floats.as_slice())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_nodes() -> u32 {
            with_runner(|r| r.max_nodes())
        }

        #[wasm_bindgen]
        pub fn get_max_surface_vertices() -> u32 {
            with_runner(|r| r.max_surface_vertices())
        }
    };
}
