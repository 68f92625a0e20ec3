//! Arena node storage and read-only node handles
//!
//! Nodes are stored in a contiguous vector and reference each other by
//! index. Children are the owning forward edges; the parent back-edge is a
//! plain index and keeps nothing alive.

use super::{GameTree, minimax::Value};
use crate::tictactoe::{Cell, Position};

/// Index into the node arena.
///
/// A lightweight handle referencing a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the game tree.
///
/// `is_leaf` is computed once from the position at construction time. It is
/// not re-evaluated when children are attached, so a decided position keeps
/// its leaf flag even though generation expands continuation moves below it.
/// The valuation fields start unset and are written exactly once by the
/// valuation pass.
pub(crate) struct Node {
    position: Position,
    pub(crate) is_leaf: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) value: Option<Value>,
    pub(crate) best_move: Option<NodeId>,
    pub(crate) mixed_best_move: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(position: Position, parent: Option<NodeId>) -> Self {
        Node {
            is_leaf: position.is_leaf(),
            position,
            parent,
            children: Vec::new(),
            value: None,
            best_move: None,
            mixed_best_move: None,
        }
    }

    pub(crate) fn position(&self) -> &Position {
        &self.position
    }
}

/// Read-only handle to a node, borrowing the tree it lives in
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a GameTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a GameTree, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> &'a Position {
        self.tree.node(self.id).position()
    }

    /// The 9-cell board state at this node
    pub fn state(&self) -> &'a [Cell; 9] {
        self.position().cells()
    }

    pub fn depth(&self) -> usize {
        self.position().depth()
    }

    /// Leaf flag as computed at construction time
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf
    }

    /// Minimax value from X's perspective; `None` until the valuation pass
    /// has reached this node
    pub fn value(&self) -> Option<Value> {
        self.tree.node(self.id).value
    }

    /// First child attaining the extremal value, in child order
    pub fn best_move(&self) -> Option<NodeRef<'a>> {
        self.tree
            .node(self.id)
            .best_move
            .map(|id| self.tree.get(id))
    }

    /// Uniformly sampled child among all attaining the extremal value,
    /// frozen at valuation time
    pub fn mixed_best_move(&self) -> Option<NodeRef<'a>> {
        self.tree
            .node(self.id)
            .mixed_best_move
            .map(|id| self.tree.get(id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree.node(self.id).parent.map(|id| self.tree.get(id))
    }

    /// Children in ascending cell order
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> {
        let tree = self.tree;
        self.tree
            .node(self.id)
            .children
            .iter()
            .map(move |&id| tree.get(id))
    }

    /// Resolve a candidate board state against this node's children by
    /// exact cell equality. Returns `None` when no child matches.
    pub fn find_child_by_state(&self, candidate: &[Cell; 9]) -> Option<NodeRef<'a>> {
        self.children().find(|child| child.state() == candidate)
    }
}
