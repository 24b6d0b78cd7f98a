use crate::host::Surface;
use crate::layout::{self, Point, Size};
use crate::node::{HeapNode, NodeId};

/// Array-backed tree of heap nodes, index 0 being the root.
///
/// While no pass is running every node's target equals
/// `layout::position(index, len, canvas)`.
#[derive(Debug, Default)]
pub struct HeapStore {
    nodes: Vec<HeapNode>,
    canvas: Size,
    next_id: u64,
}

impl HeapStore {
    pub fn new(canvas: Size) -> Self {
        Self {
            nodes: Vec::new(),
            canvas,
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[HeapNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&HeapNode> {
        self.nodes.get(index)
    }

    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value()).collect()
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn set_canvas(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    /// Layout slot of `index` for the current length and canvas.
    pub fn slot(&self, index: usize) -> Point {
        layout::position(index, self.nodes.len(), self.canvas)
    }

    /// Appends a node holding `value` and redraws the whole tree, since the
    /// new length can shift every other slot.
    pub fn insert<S: Surface>(&mut self, value: i64, surface: &mut S) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let slot = layout::position(self.nodes.len(), self.nodes.len() + 1, self.canvas);
        let node = HeapNode::new(id, value, slot);
        surface.add_node(&node);
        self.nodes.push(node);
        debug!("Inserted {} as node {:?} at index {}", value, id, self.nodes.len() - 1);

        self.relayout_all(surface);
        id
    }

    /// Snaps every node onto its layout slot, without transitions.
    pub fn relayout_all<S: Surface>(&mut self, surface: &mut S) {
        let count = self.nodes.len();
        let canvas = self.canvas;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let slot = layout::position(i, count, canvas);
            node.place(slot);
            surface.place_node(node.id(), slot);
        }
        trace!("Relaid out {} nodes on {:?}", count, canvas);
    }

    pub fn clear<S: Surface>(&mut self, surface: &mut S) {
        surface.clear_nodes();
        self.nodes.clear();
        debug!("Cleared heap");
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [HeapNode] {
        &mut self.nodes
    }
}
