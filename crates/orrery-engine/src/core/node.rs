//! Animated scene-graph nodes.
//!
//! A node owns its children outright and may carry a behaviour: a closure
//! of the scene time that rewrites the node's own state. Calling
//! [`AnimatedNode::update`] on the root runs every behaviour in the tree
//! exactly once, parents before children, children in insertion order.

use std::fmt;

use glam::Mat4;

use crate::components::Drawable;
use crate::core::transform::Transform;

/// The part of a node a behaviour is allowed to mutate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeState {
    pub transform: Transform,
    pub drawable: Option<Drawable>,
}

/// Per-frame behaviour closure.
///
/// Receives the scene time and the node's own state. Closures are `Fn`:
/// whatever they capture is fixed at generation time, so the result depends
/// on `t` alone and replaying the same times reproduces the same frames.
pub type UpdateFn = Box<dyn Fn(f32, &mut NodeState)>;

/// Whether a node animates.
#[derive(Default)]
pub enum NodeBehavior {
    #[default]
    Static,
    Animated(UpdateFn),
}

impl NodeBehavior {
    pub fn is_animated(&self) -> bool {
        matches!(self, NodeBehavior::Animated(_))
    }
}

impl fmt::Debug for NodeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeBehavior::Static => f.write_str("Static"),
            NodeBehavior::Animated(_) => f.write_str("Animated(..)"),
        }
    }
}

/// A scene-graph node with an optional per-frame behaviour.
#[derive(Debug, Default)]
pub struct AnimatedNode {
    /// Name for finding nodes and for logs.
    pub tag: String,
    pub state: NodeState,
    children: Vec<AnimatedNode>,
    behavior: NodeBehavior,
}

impl AnimatedNode {
    /// An empty static group at the origin.
    pub fn group(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    // -- Builder pattern --

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.state.transform = transform;
        self
    }

    pub fn with_drawable(mut self, drawable: impl Into<Drawable>) -> Self {
        self.state.drawable = Some(drawable.into());
        self
    }

    pub fn with_child(mut self, child: AnimatedNode) -> Self {
        self.children.push(child);
        self
    }

    /// Attach a behaviour, replacing any previous one.
    pub fn with_update<F>(mut self, f: F) -> Self
    where
        F: Fn(f32, &mut NodeState) + 'static,
    {
        self.behavior = NodeBehavior::Animated(Box::new(f));
        self
    }

    // -- Accessors --

    pub fn add(&mut self, child: AnimatedNode) {
        self.children.push(child);
    }

    pub fn transform(&self) -> &Transform {
        &self.state.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.state.transform
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.state.drawable.as_ref()
    }

    pub fn children(&self) -> &[AnimatedNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [AnimatedNode] {
        &mut self.children
    }

    pub fn behavior(&self) -> &NodeBehavior {
        &self.behavior
    }

    pub fn is_animated(&self) -> bool {
        self.behavior.is_animated()
    }

    // -- Update propagation --

    /// Run this node's behaviour at time `t`, then forward `t` to every child.
    pub fn update(&mut self, t: f32) {
        if let NodeBehavior::Animated(f) = &self.behavior {
            f(t, &mut self.state);
        }
        for child in &mut self.children {
            child.update(t);
        }
    }

    // -- Traversal --

    /// Visit this node and all descendants depth-first, with world matrices.
    pub fn walk<'a>(&'a self, parent: Mat4, visit: &mut impl FnMut(&'a AnimatedNode, Mat4)) {
        let world = parent * self.state.transform.matrix();
        visit(self, world);
        for child in &self.children {
            child.walk(world, visit);
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AnimatedNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that carry a behaviour.
    pub fn animated_count(&self) -> usize {
        usize::from(self.is_animated())
            + self.children.iter().map(AnimatedNode::animated_count).sum::<usize>()
    }

    /// Depth-first search for the first node with the given tag.
    pub fn find(&self, tag: &str) -> Option<&AnimatedNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(tag))
    }

    /// Depth-first search for the first node with the given tag (mutable).
    pub fn find_mut(&mut self, tag: &str) -> Option<&mut AnimatedNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(tag))
    }
}
