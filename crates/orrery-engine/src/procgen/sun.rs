use crate::components::light::Light;
use crate::components::material::Material;
use crate::components::mesh::MeshComponent;
use crate::core::node::AnimatedNode;
use crate::core::transform::Transform;
use crate::error::SceneResult;
use crate::procgen::corona::corona;
use crate::procgen::orbit::RIM_SCALE;

/// Corona shell radius around the unit sun.
pub const CORONA_RADIUS: f32 = 0.9;
/// Subdivision level of the corona icosphere.
pub const CORONA_DETAIL: u32 = 6;

/// The sun: a spinning emissive sphere with a rim, a churning corona and a
/// point light at its centre. Spins with `rotation.y = t`.
pub fn sun(noise_seed: u32) -> SceneResult<AnimatedNode> {
    let rim = AnimatedNode::group("sun_rim")
        .with_transform(Transform::new().with_uniform_scale(RIM_SCALE))
        .with_drawable(MeshComponent::sphere(Material::fresnel(0xffff99, 0x000000)));

    let light = AnimatedNode::group("sun_light").with_drawable(Light::point(0xffff99, 10.0));

    Ok(AnimatedNode::group("sun")
        .with_drawable(MeshComponent::sphere(Material::emissive(0xff0000)))
        .with_update(|t, state| state.transform.rotation.y = t)
        .with_child(rim)
        .with_child(corona(CORONA_RADIUS, CORONA_DETAIL, noise_seed)?)
        .with_child(light))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Drawable;

    #[test]
    fn sun_spins_with_time() {
        let mut sun = sun(1).unwrap();
        sun.update(0.75);
        assert_eq!(sun.transform().rotation.y, 0.75);
    }

    #[test]
    fn sun_carries_rim_corona_and_light() {
        let sun = sun(1).unwrap();
        let tags: Vec<&str> = sun.children().iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["sun_rim", "corona", "sun_light"]);

        let corona = sun.find("corona").unwrap();
        let surface = corona.drawable().and_then(Drawable::as_surface).unwrap();
        assert_eq!(surface.vertex_count, 2940);

        match sun.find("sun_light").and_then(AnimatedNode::drawable) {
            Some(Drawable::Light(light)) => assert_eq!(light.intensity(), 10.0),
            other => panic!("expected a light, got {other:?}"),
        }
    }
}
