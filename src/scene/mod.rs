//! Renderer collaborator contract
//!
//! The interaction layer never owns the display list. Everything it needs
//! from the renderer is expressed through the [`Stage`] trait: positions,
//! sizes, global-position queries, z-order mutation, and (for button
//! sprites) frame display. Any renderer adapter that implements `Stage`
//! can be driven by [`crate::Interaction`].
//!
//! The [`Scene`] arena in this module is the reference implementation: a
//! minimal parent/child scene graph that the demo binary and the test
//! suite run against.

/// Identifies a node in a scene graph
///
/// Ids are opaque handles minted by the renderer (or by [`Scene`]). All
/// `Stage` methods require ids to refer to live nodes; passing a dangling
/// id is a contract violation, not a recoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Capability contract a renderer must implement for interaction
///
/// `velocity` and frame display have neutral defaults so adapters for
/// renderers without those concepts stay small.
pub trait Stage {
    /// Node position relative to its parent
    fn position(&self, id: NodeId) -> [f32; 2];

    /// Move a node, in parent-relative coordinates
    fn set_position(&mut self, id: NodeId, pos: [f32; 2]);

    /// Node position in global (scene) coordinates
    fn global_position(&self, id: NodeId) -> [f32; 2];

    /// Node width and height
    fn size(&self, id: NodeId) -> [f32; 2];

    /// Fractional pivot offsetting the node's bounds from its origin
    fn anchor(&self, id: NodeId) -> Option<[f32; 2]>;

    /// True if the node's bounds are a circle of diameter `size()[0]`
    fn circular(&self, id: NodeId) -> bool;

    /// Move a node to the end of its parent's child list so it renders
    /// above its siblings
    fn bring_to_front(&mut self, id: NodeId);

    /// Current velocity, in units per frame
    fn velocity(&self, _id: NodeId) -> [f32; 2] {
        [0.0, 0.0]
    }

    /// Set the node's velocity, in units per frame
    fn set_velocity(&mut self, _id: NodeId, _velocity: [f32; 2]) {}

    /// Number of display frames a button sprite carries
    fn frame_count(&self, _id: NodeId) -> usize {
        1
    }

    /// Display the given frame of a button sprite
    fn set_frame(&mut self, _id: NodeId, _frame: usize) {}
}

/// Node description for inserting into a [`Scene`]
#[derive(Debug, Clone)]
pub struct Node {
    /// Position relative to the parent
    pub pos: [f32; 2],
    /// Width and height
    pub size: [f32; 2],
    /// Optional fractional pivot
    pub anchor: Option<[f32; 2]>,
    /// Circular bounds flag
    pub circular: bool,
    /// Display frame count (1 for plain sprites, 2-3 for buttons)
    pub frames: usize,
}

impl Node {
    /// Creates a rectangular node
    pub fn rect(pos: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            pos,
            size,
            anchor: None,
            circular: false,
            frames: 1,
        }
    }

    /// Creates a circular node with the given diameter
    pub fn circle(pos: [f32; 2], diameter: f32) -> Self {
        Self {
            pos,
            size: [diameter, diameter],
            anchor: None,
            circular: true,
            frames: 1,
        }
    }

    /// Builder method to set the anchor pivot
    pub fn with_anchor(mut self, anchor: [f32; 2]) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Builder method to set the display frame count
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }
}

struct NodeData {
    pos: [f32; 2],
    size: [f32; 2],
    anchor: Option<[f32; 2]>,
    circular: bool,
    velocity: [f32; 2],
    frame: usize,
    frames: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Reference scene graph: a flat arena of nodes with parent/child links
///
/// Child order doubles as draw order; the last child of a parent renders
/// on top.
pub struct Scene {
    nodes: Vec<NodeData>,
}

impl Scene {
    /// Creates a scene containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                pos: [0.0, 0.0],
                size: [0.0, 0.0],
                anchor: None,
                circular: false,
                velocity: [0.0, 0.0],
                frame: 0,
                frames: 1,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node id
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Inserts a node as the last (topmost) child of `parent`
    pub fn add(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            pos: node.pos,
            size: node.size,
            anchor: node.anchor,
            circular: node.circular,
            velocity: [0.0, 0.0],
            frame: 0,
            frames: node.frames,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Child ids of a node, bottom-most first
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].children
    }

    /// Currently displayed frame of a node
    pub fn frame(&self, id: NodeId) -> usize {
        self.nodes[id.0 as usize].frame
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Scene {
    fn position(&self, id: NodeId) -> [f32; 2] {
        self.nodes[id.0 as usize].pos
    }

    fn set_position(&mut self, id: NodeId, pos: [f32; 2]) {
        self.nodes[id.0 as usize].pos = pos;
    }

    fn global_position(&self, id: NodeId) -> [f32; 2] {
        let mut pos = [0.0, 0.0];
        let mut current = Some(id);
        while let Some(node) = current {
            let data = &self.nodes[node.0 as usize];
            pos[0] += data.pos[0];
            pos[1] += data.pos[1];
            current = data.parent;
        }
        pos
    }

    fn size(&self, id: NodeId) -> [f32; 2] {
        self.nodes[id.0 as usize].size
    }

    fn anchor(&self, id: NodeId) -> Option<[f32; 2]> {
        self.nodes[id.0 as usize].anchor
    }

    fn circular(&self, id: NodeId) -> bool {
        self.nodes[id.0 as usize].circular
    }

    fn bring_to_front(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0 as usize].parent else {
            return;
        };
        let children = &mut self.nodes[parent.0 as usize].children;
        if let Some(index) = children.iter().position(|c| *c == id) {
            children.remove(index);
            children.push(id);
        }
    }

    fn velocity(&self, id: NodeId) -> [f32; 2] {
        self.nodes[id.0 as usize].velocity
    }

    fn set_velocity(&mut self, id: NodeId, velocity: [f32; 2]) {
        self.nodes[id.0 as usize].velocity = velocity;
    }

    fn frame_count(&self, id: NodeId) -> usize {
        self.nodes[id.0 as usize].frames
    }

    fn set_frame(&mut self, id: NodeId, frame: usize) {
        let data = &mut self.nodes[id.0 as usize];
        if frame < data.frames {
            data.frame = frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_position_sums_ancestors() {
        let mut scene = Scene::new();
        let parent = scene.add(scene.root(), Node::rect([10.0, 20.0], [100.0, 100.0]));
        let child = scene.add(parent, Node::rect([5.0, 5.0], [10.0, 10.0]));

        assert_eq!(scene.global_position(child), [15.0, 25.0]);
        assert_eq!(scene.position(child), [5.0, 5.0]);
    }

    #[test]
    fn test_bring_to_front_reorders_children() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = scene.add(root, Node::rect([0.0, 0.0], [10.0, 10.0]));
        let b = scene.add(root, Node::rect([0.0, 0.0], [10.0, 10.0]));
        let c = scene.add(root, Node::rect([0.0, 0.0], [10.0, 10.0]));

        scene.bring_to_front(a);
        assert_eq!(scene.children(root), &[b, c, a]);
    }

    #[test]
    fn test_bring_to_front_on_root_is_noop() {
        let mut scene = Scene::new();
        scene.bring_to_front(scene.root());
        assert!(scene.children(scene.root()).is_empty());
    }

    #[test]
    fn test_set_frame_clamped_to_frame_count() {
        let mut scene = Scene::new();
        let button = scene.add(
            scene.root(),
            Node::rect([0.0, 0.0], [32.0, 32.0]).with_frames(3),
        );

        scene.set_frame(button, 2);
        assert_eq!(scene.frame(button), 2);

        // Out-of-range frames are ignored
        scene.set_frame(button, 7);
        assert_eq!(scene.frame(button), 2);
    }
}
