use crate::core::scene::Scene;
use crate::renderer::instance::RenderBuffer;

/// Flatten the scene into the render buffer.
///
/// Walks the tree depth-first (root first, then backdrops) and pushes the
/// world matrix of every node that carries a drawable. Deformable surfaces
/// additionally append their current vertices. Group-only nodes contribute
/// their transform to descendants but take no slot.
pub fn build_render_buffer(scene: &Scene, buffer: &mut RenderBuffer) {
    buffer.clear();
    scene.walk(&mut |node, world| {
        let Some(drawable) = node.drawable() else {
            return;
        };
        buffer.push(world);
        if let Some(surface) = drawable.as_surface() {
            buffer.push_surface(&surface.positions);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::material::{Material, Side};
    use crate::components::mesh::{MeshComponent, SurfaceComponent};
    use crate::core::node::AnimatedNode;
    use crate::core::transform::Transform;
    use glam::{Mat4, Vec3};

    fn body(tag: &str) -> AnimatedNode {
        AnimatedNode::group(tag).with_drawable(MeshComponent::sphere(Material::standard()))
    }

    #[test]
    fn one_matrix_per_drawable() {
        let root = AnimatedNode::group("root")
            .with_child(body("a"))
            .with_child(AnimatedNode::group("group").with_child(body("b")));
        let scene = Scene::new(root).with_backdrop(body("stars"));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer);
        assert_eq!(buffer.instance_count(), 3);
    }

    #[test]
    fn child_world_is_parent_times_local() {
        let parent_local = Transform::new()
            .with_position(Vec3::new(0.0, 0.0, 1.0))
            .with_rotation(Vec3::new(0.0, 0.7, 0.0));
        let child_local = Transform::new()
            .with_position(Vec3::new(2.0, 0.0, 0.0))
            .with_uniform_scale(0.5);
        let root = body("planet_orbit")
            .with_transform(parent_local)
            .with_child(body("planet").with_transform(child_local));
        let scene = Scene::new(root);

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer);
        let expected: Mat4 = parent_local.matrix() * child_local.matrix();
        assert!(buffer.instances[1].matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn surfaces_append_vertices_and_rebuild_clears() {
        let surface = SurfaceComponent::new(vec![Vec3::X, Vec3::Y, Vec3::Z], Material::basic(0xffff99, Side::Back));
        let scene = Scene::new(AnimatedNode::group("corona").with_drawable(surface));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer);
        build_render_buffer(&scene, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.surface_vertex_count(), 3);
    }
}
