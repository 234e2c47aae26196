//! One-time description of everything the host must build GPU objects for.
//!
//! Entries are listed in the same depth-first order the per-frame buffers
//! use, so entry `i` owns instance slot `i`. The tree's shape is fixed after
//! assembly, which keeps that correspondence stable for the whole session.

use serde::Serialize;

use crate::components::Drawable;
use crate::core::scene::Scene;

#[derive(Debug, Serialize)]
pub struct DrawableEntry<'a> {
    /// Slot in the per-frame instance buffer.
    pub slot: usize,
    pub tag: &'a str,
    /// Offset (in vertices) into the surface buffer; surfaces only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_offset: Option<usize>,
    pub drawable: &'a Drawable,
}

/// Serializable snapshot of a scene's drawables.
#[derive(Debug, Serialize)]
pub struct SceneDescriptor<'a> {
    pub drawables: Vec<DrawableEntry<'a>>,
    pub surface_vertices: usize,
}

impl<'a> SceneDescriptor<'a> {
    pub fn from_scene(scene: &'a Scene) -> Self {
        let mut drawables = Vec::new();
        let mut surface_vertices = 0;
        scene.walk(&mut |node, _| {
            let Some(drawable) = node.drawable() else {
                return;
            };
            let surface_offset = drawable.as_surface().map(|surface| {
                let offset = surface_vertices;
                surface_vertices += surface.vertex_count;
                offset
            });
            drawables.push(DrawableEntry {
                slot: drawables.len(),
                tag: &node.tag,
                surface_offset,
                drawable,
            });
        });
        Self {
            drawables,
            surface_vertices,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}
