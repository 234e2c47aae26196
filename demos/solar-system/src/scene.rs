//! Solar System: a stylized, self-animating orrery.
//!
//! Sun with a churning corona, eight textured planets on tilted orbits,
//! Earth's moon, Saturn and Uranus rings, an instanced asteroid belt, the
//! ecliptic decoration, and a starfield with two nebulae behind it all.

use orrery_engine::procgen::{
    asteroid_belt, ecliptic_field, fill_light, nebula, planet, starfield, sun, BeltParams, NebulaParams, OrbitSpec,
};
use orrery_engine::{
    AnimatedNode, AssemblyContext, AssetManifest, AssetRegistry, Scene, SceneConfig, SceneRecipe, SceneResult,
    SceneRng,
};

use crate::bodies::{self, Companion, PlanetRow};

const NUM_STARS: usize = 500;
const STAR_SIZE: f32 = 0.35;
/// Nebula depth in front of and behind the system.
const NEBULA_DEPTH: f32 = 50.5;

pub struct SolarSystem {
    config: SceneConfig,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            config: SceneConfig::default(),
        }
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// One planet's orbit group, companions attached.
fn planet_from(row: &PlanetRow, assets: &AssetRegistry, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    let mut spec = OrbitSpec::new(row.size, row.distance, row.texture);
    match row.companion {
        Companion::None => {}
        Companion::Moon => {
            let moon = planet(
                OrbitSpec::new(bodies::MOON_SIZE, bodies::MOON_DISTANCE, bodies::MOON_TEXTURE),
                assets,
                rng,
            )?;
            spec = spec.with_child(moon);
        }
        Companion::Ring { radius, tube, tilted } => {
            let ring = bodies::planet_ring(spec.name(), radius, tube, tilted);
            spec = spec.with_child(ring);
        }
    }
    planet(spec, assets, rng)
}

impl SceneRecipe for SolarSystem {
    fn config(&self) -> SceneConfig {
        self.config.clone()
    }

    fn manifest(&self) -> AssetManifest {
        let manifest = bodies::textures().fold(AssetManifest::new(), AssetManifest::with_texture);
        bodies::ROCKS
            .iter()
            .fold(manifest, |m, rock| m.with_mesh(*rock, format!("rocks/{rock}.obj")))
    }

    fn assemble(&mut self, ctx: &mut AssemblyContext) -> SceneResult<Scene> {
        let assets = ctx.assets;
        let rng = &mut ctx.rng;

        let mut system = AnimatedNode::group("solar_system");
        system.add(sun(rng.next_seed() as u32)?);

        for row in &bodies::INNER {
            system.add(planet_from(row, assets, rng)?);
        }

        let belt = BeltParams::new(bodies::BELT_DISTANCE, bodies::BELT_ROCK_SIZE, bodies::BELT_RATE)?;
        system.add(asteroid_belt(&assets.all_mesh_parts(), belt, rng)?);

        for row in &bodies::OUTER {
            system.add(planet_from(row, assets, rng)?);
        }

        system.add(ecliptic_field(ctx.config.resolution, rng)?);

        let scene = Scene::new(system)
            .with_backdrop(starfield(NUM_STARS, STAR_SIZE, rng)?)
            .with_backdrop(nebula(NebulaParams::new(0.6, -NEBULA_DEPTH), rng)?)
            .with_backdrop(nebula(NebulaParams::new(0.0, NEBULA_DEPTH), rng)?)
            .with_backdrop(fill_light());

        log::info!(
            "solar system: {} nodes, {} animated",
            scene.len(),
            scene.root().animated_count()
        );
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{AssetGate, Drawable, SceneDescriptor};

    /// Registry with every manifest entry delivered, one part per rock.
    fn loaded_assets(recipe: &SolarSystem) -> AssetRegistry {
        let manifest = recipe.manifest();
        let mut gate = AssetGate::new(&manifest);
        for texture in &manifest.textures {
            gate.texture_loaded(&texture.name).unwrap();
        }
        for mesh in &manifest.meshes {
            gate.mesh_loaded(&mesh.name, 1).unwrap();
        }
        gate.take_ready().expect("all assets delivered")
    }

    fn assemble(seed: u64) -> Scene {
        let mut recipe = SolarSystem::with_config(SceneConfig {
            seed,
            ..SceneConfig::default()
        });
        let assets = loaded_assets(&recipe);
        let config = recipe.config();
        let mut ctx = AssemblyContext::new(&config, &assets);
        recipe.assemble(&mut ctx).unwrap()
    }

    #[test]
    fn manifest_lists_textures_and_rocks() {
        let manifest = SolarSystem::new().manifest();
        assert_eq!(manifest.textures.len(), 9);
        assert_eq!(manifest.meshes.len(), 3);
        assert_eq!(manifest.meshes[0].path, "rocks/Rock1.obj");
    }

    #[test]
    fn assembles_every_body() {
        let scene = assemble(42);
        for tag in [
            "sun", "corona", "mercury", "venus", "earth", "moon", "mars", "jupiter", "saturn", "saturn_ring",
            "uranus", "uranus_ring", "neptune", "asteroid_belt", "ecliptic", "starfield", "nebula", "fill_light",
        ] {
            assert!(scene.find_by_tag(tag).is_some(), "missing {tag}");
        }
        assert_eq!(scene.backdrop().len(), 4);
        assert_eq!(scene.find_by_tag("asteroid_belt").unwrap().children().len(), 3);
    }

    #[test]
    fn moon_rides_with_earth() {
        let scene = assemble(7);
        let earth_orbit = scene.find_by_tag("earth_orbit").unwrap();
        let earth = earth_orbit.find("earth").unwrap().transform().position;
        let moon_orbit = earth_orbit.find("moon_orbit").unwrap().transform().position;
        assert!(earth.abs_diff_eq(moon_orbit, 1e-6));
        assert!((earth.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn rings_ride_with_their_planet() {
        let scene = assemble(7);
        let orbit = scene.find_by_tag("saturn_orbit").unwrap();
        let saturn = orbit.find("saturn").unwrap().transform().position;
        let ring = orbit.find("saturn_ring").unwrap().transform().position;
        assert_eq!(saturn, ring);
    }

    #[test]
    fn same_seed_same_scene() {
        let a = assemble(3);
        let b = assemble(3);
        let json_a = SceneDescriptor::from_scene(&a).to_json().unwrap();
        let json_b = SceneDescriptor::from_scene(&b).to_json().unwrap();
        assert_eq!(json_a, json_b);

        let c = assemble(4);
        assert_ne!(json_a, SceneDescriptor::from_scene(&c).to_json().unwrap());
    }

    #[test]
    fn update_is_replayable() {
        let mut a = assemble(11);
        let mut b = assemble(11);
        a.update(0.3);
        a.update(1.7);
        b.update(1.7);
        let yaw = |s: &Scene| s.find_by_tag("jupiter_orbit").unwrap().transform().rotation.y;
        assert_eq!(yaw(&a), yaw(&b));

        let surface = |s: &Scene| match s.find_by_tag("corona").and_then(AnimatedNode::drawable) {
            Some(Drawable::Surface(surface)) => surface.positions.clone(),
            _ => panic!("corona should be a surface"),
        };
        assert_eq!(surface(&a), surface(&b));
    }

    #[test]
    fn corona_stays_bounded_in_the_full_scene() {
        let mut scene = assemble(5);
        for t in [0.0, 0.2, 1.0, 30.0] {
            scene.update(t);
            let Some(Drawable::Surface(surface)) = scene.find_by_tag("corona").and_then(AnimatedNode::drawable) else {
                panic!("corona should be a surface");
            };
            for v in &surface.positions {
                let len = v.length();
                assert!((0.9 * 0.6 - 1e-5..=0.9 * 1.4 + 1e-5).contains(&len));
            }
        }
    }

    #[test]
    fn missing_rocks_abort_assembly() {
        let mut recipe = SolarSystem::new();
        let manifest = recipe.manifest();
        let mut gate = AssetGate::new(&manifest);
        for texture in &manifest.textures {
            gate.texture_loaded(&texture.name).unwrap();
        }
        for mesh in &manifest.meshes {
            gate.mesh_loaded(&mesh.name, 0).unwrap();
        }
        let assets = gate.take_ready().unwrap();
        let config = recipe.config();
        let mut ctx = AssemblyContext::new(&config, &assets);
        assert!(recipe.assemble(&mut ctx).is_err());
    }
}
