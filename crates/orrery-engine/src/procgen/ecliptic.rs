//! Ecliptic decoration: concentric coloured rings and radial guide lines.
//! Everything here is static; the nodes carry no behaviour.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::api::recipe::Resolution;
use crate::components::line::{LineComponent, LineMaterial};
use crate::components::material::Rgb;
use crate::core::node::AnimatedNode;
use crate::core::transform::Transform;
use crate::error::{require_non_negative, require_positive, SceneResult};
use crate::procgen::color::hsl;
use crate::procgen::rng::SceneRng;

/// Segments per ring; the ring has one more point so it closes on itself.
pub const RING_SEGMENTS: usize = 128;
/// Points per guide line.
pub const LINE_POINTS: usize = 10;
pub const NUM_RINGS: usize = 20;
pub const NUM_LINES: usize = 40;
/// Radius of the innermost ring.
pub const INNER_RADIUS: f32 = 1.1;

fn line_material(color: Rgb, width: f32, resolution: Resolution) -> LineMaterial {
    LineMaterial {
        color,
        width,
        vertex_colors: false,
        resolution,
    }
}

/// Points of a closed circle of `radius` in the XY plane.
pub fn circle_points(radius: f32) -> Vec<Vec3> {
    (0..=RING_SEGMENTS)
        .map(|i| {
            let a = i as f32 / RING_SEGMENTS as f32 * TAU;
            Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
        })
        .collect()
}

/// One flat ring lying in the ecliptic plane.
pub fn ring(
    distance: f32,
    hue: f32,
    lightness: f32,
    width: f32,
    resolution: Resolution,
) -> SceneResult<AnimatedNode> {
    let distance = require_positive("distance", distance)?;
    let width = require_positive("width", width)?;
    let line = LineComponent::new(
        circle_points(distance),
        line_material(hsl(hue, 1.0, lightness), width, resolution),
    );
    Ok(AnimatedNode::group("ecliptic_ring")
        .with_transform(Transform::new().with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)))
        .with_drawable(line))
}

/// A short radial line fading from green to orange, starting just outside the sun.
pub fn guide_line(width: f32, resolution: Resolution, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    let width = require_positive("width", width)?;
    let min_radius = rng.range(INNER_RADIUS, INNER_RADIUS + 0.1);
    let angle = rng.angle();

    let mut points = Vec::with_capacity(LINE_POINTS);
    let mut colors = Vec::with_capacity(LINE_POINTS);
    for i in 0..LINE_POINTS {
        let r = min_radius + i as f32 / 8.0;
        points.push(Vec3::new(angle.cos() * r, 0.0, angle.sin() * r));
        let hue = 0.25 - i as f32 / LINE_POINTS as f32 * 0.27;
        colors.push(hsl(hue, 1.0, 0.5));
    }

    let line = LineComponent::new(points, line_material([1.0, 1.0, 1.0], width, resolution)).with_colors(colors);
    Ok(AnimatedNode::group("ecliptic_line").with_drawable(line))
}

/// Twenty rings stepping outward from the sun plus forty guide lines.
pub fn ecliptic_field(resolution: Resolution, rng: &mut SceneRng) -> SceneResult<AnimatedNode> {
    require_non_negative("resolution.width", resolution.width)?;
    require_non_negative("resolution.height", resolution.height)?;

    let mut field = AnimatedNode::group("ecliptic");
    for i in 0..NUM_RINGS {
        let gap = 0.075 + rng.unit() * 0.005;
        let f = i as f32 / NUM_RINGS as f32;
        let width = 0.5 + rng.unit();
        field.add(ring(INNER_RADIUS + i as f32 * gap, 0.25 - f * 0.27, 0.5 - f * 0.5, width, resolution)?);
    }
    for _ in 0..NUM_LINES {
        let width = 0.5 + rng.unit();
        field.add(guide_line(width, resolution, rng)?);
    }
    Ok(field)
}
