use glam::Mat4;

use crate::core::node::AnimatedNode;

/// A complete assembled scene: one animated root plus static backdrop nodes.
///
/// Only the root is updated per frame. Backdrops (starfield, nebulae,
/// fill lights) sit outside the animated tree and never move.
#[derive(Debug)]
pub struct Scene {
    root: AnimatedNode,
    backdrop: Vec<AnimatedNode>,
}

impl Scene {
    pub fn new(root: AnimatedNode) -> Self {
        Self {
            root,
            backdrop: Vec::new(),
        }
    }

    /// Add a static node outside the animated tree.
    pub fn add_backdrop(&mut self, node: AnimatedNode) {
        self.backdrop.push(node);
    }

    pub fn with_backdrop(mut self, node: AnimatedNode) -> Self {
        self.backdrop.push(node);
        self
    }

    /// Advance the animated tree to scene time `t`.
    pub fn update(&mut self, t: f32) {
        self.root.update(t);
    }

    pub fn root(&self) -> &AnimatedNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut AnimatedNode {
        &mut self.root
    }

    pub fn backdrop(&self) -> &[AnimatedNode] {
        &self.backdrop
    }

    /// Iterate over the root and the backdrop nodes, root first.
    pub fn iter(&self) -> impl Iterator<Item = &AnimatedNode> {
        std::iter::once(&self.root).chain(self.backdrop.iter())
    }

    /// Visit every node in draw order with its world matrix.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a AnimatedNode, Mat4)) {
        for top in self.iter() {
            top.walk(Mat4::IDENTITY, visit);
        }
    }

    /// Find the first node with the given tag, searching the root tree first.
    pub fn find_by_tag(&self, tag: &str) -> Option<&AnimatedNode> {
        self.iter().find_map(|n| n.find(tag))
    }

    /// Number of nodes across the root tree and all backdrops.
    pub fn len(&self) -> usize {
        self.iter().map(AnimatedNode::node_count).sum()
    }

    /// Whether the scene holds nothing but an empty root.
    pub fn is_empty(&self) -> bool {
        self.backdrop.is_empty() && self.root.children().is_empty()
    }
}
