use glam::Vec3;
use serde::Serialize;

use crate::api::recipe::Resolution;
use crate::components::material::Rgb;

/// Fat-line material: widths are in pixels, so the material carries the
/// viewport resolution it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineMaterial {
    pub color: Rgb,
    pub width: f32,
    /// Use the per-vertex colours of the line instead of `color`.
    pub vertex_colors: bool,
    pub resolution: Resolution,
}

/// A polyline with optional per-vertex colours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineComponent {
    pub points: Vec<Vec3>,
    pub colors: Option<Vec<Rgb>>,
    /// Cumulative distance along the line at each point.
    pub distances: Vec<f32>,
    pub material: LineMaterial,
}

impl LineComponent {
    pub fn new(points: Vec<Vec3>, material: LineMaterial) -> Self {
        let distances = line_distances(&points);
        Self {
            points,
            colors: None,
            distances,
            material,
        }
    }

    pub fn with_colors(mut self, colors: Vec<Rgb>) -> Self {
        self.colors = Some(colors);
        self.material.vertex_colors = true;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last point coincide.
    pub fn is_closed(&self, tolerance: f32) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 1 => a.distance(*b) <= tolerance,
            _ => false,
        }
    }
}

/// Running arc length along `points`, starting at 0.
pub fn line_distances(points: &[Vec3]) -> Vec<f32> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += p.distance(points[i - 1]);
        }
        distances.push(total);
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> LineMaterial {
        LineMaterial {
            color: [1.0, 1.0, 1.0],
            width: 1.0,
            vertex_colors: false,
            resolution: Resolution::default(),
        }
    }

    #[test]
    fn distances_accumulate() {
        let d = line_distances(&[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 2.0, 0.0)]);
        assert_eq!(d, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn with_colors_switches_to_vertex_colors() {
        let line = LineComponent::new(vec![Vec3::ZERO, Vec3::X], material())
            .with_colors(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!(line.material.vertex_colors);
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn single_point_is_not_closed() {
        let line = LineComponent::new(vec![Vec3::ZERO], material());
        assert!(!line.is_closed(1e-6));
    }
}
