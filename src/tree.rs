//! Exhaustive game tree construction and minimax valuation

pub mod minimax;
pub mod node;

pub use minimax::Value;
pub use node::{NodeId, NodeRef};

use crate::tictactoe::{Player, Position};
use node::Node;

/// Number of nodes generated below the root: sum over depths 1..=9 of
/// 9 * 8 * ... * (10 - d) successor states.
const GENERATED_NODES: usize = 986_409;

/// Leaf tally produced by a single depth-first pass over the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeafCounts {
    /// Nodes where a traversal stops: decided positions or full boards
    pub leaves: usize,
    /// Leaves valued LOSS (an O win, from X's perspective)
    pub losses: usize,
}

/// The complete game tree of 3x3 Tic-Tac-Toe, rooted at the empty board.
///
/// Nodes live in an arena and reference each other by index, so the
/// parent back-edge is a plain non-owning handle. Generation expands every
/// empty cell at every node, deliberately continuing past positions that
/// are already won or lost; those continuation branches stay in the tree
/// and inflate the raw node count. Termination is still guaranteed since
/// each ply fills one more cell.
pub struct GameTree {
    pub(crate) nodes: Vec<Node>,
    node_count: usize,
}

impl GameTree {
    /// Build the full tree. Valuation is a separate pass; see
    /// [`GameTree::valuate_all`].
    pub fn new() -> Self {
        let mut tree = GameTree {
            nodes: Vec::with_capacity(GENERATED_NODES + 1),
            node_count: 0,
        };
        let root = tree.push(Position::empty(), None);
        tree.generate(root, Player::X);
        tree
    }

    fn push(&mut self, position: Position, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(position, parent));
        id
    }

    /// Expand every empty cell of `node` with `to_place`, recursing with the
    /// opposite mark. Children are attached in ascending cell order.
    fn generate(&mut self, node: NodeId, to_place: Player) {
        let position = *self.node(node).position();
        for cell in 0..9 {
            if position.is_empty(cell) {
                let child = self.push(position.place(cell, to_place), Some(node));
                self.node_count += 1;
                self.node_mut(node).children.push(child);
                self.generate(child, to_place.opponent());
            }
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Read-only handle to the root node
    pub fn root(&self) -> NodeRef<'_> {
        self.get(NodeId::ROOT)
    }

    /// Read-only handle to an arbitrary node
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    /// Number of nodes created during generation. The root is not counted;
    /// only generated children increment this tally.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Count leaves (and leaves valued LOSS) by depth-first traversal.
    ///
    /// The traversal stops descending at the first leaf on each path, so the
    /// continuation branches generated beneath decided positions are not
    /// visited. The loss tally reads leaf values assigned by
    /// [`GameTree::valuate_all`]; before valuation it is zero.
    pub fn leaf_counts(&self) -> LeafCounts {
        self.count_leaves(NodeId::ROOT)
    }

    fn count_leaves(&self, id: NodeId) -> LeafCounts {
        let node = self.node(id);
        if node.is_leaf {
            return LeafCounts {
                leaves: 1,
                losses: usize::from(node.value == Some(Value::Loss)),
            };
        }

        let mut total = LeafCounts::default();
        for &child in &node.children {
            let counts = self.count_leaves(child);
            total.leaves += counts.leaves;
            total.losses += counts.losses;
        }
        total
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_counts().leaves
    }

    pub fn loss_count(&self) -> usize {
        self.leaf_counts().losses
    }

    /// Node counts per depth over the whole arena, root included at depth 0
    pub fn depth_histogram(&self) -> [usize; 10] {
        let mut histogram = [0usize; 10];
        for node in &self.nodes {
            histogram[node.position().depth()] += 1;
        }
        histogram
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn root_expands_into_nine_children() {
        let tree = GameTree::new();
        let root = tree.root();

        assert_eq!(root.depth(), 0);
        assert_eq!(root.children().count(), 9);

        // children are ordered by cell index and carry X at that cell
        for (cell, child) in root.children().enumerate() {
            assert_eq!(child.state()[cell], Cell::X);
            assert_eq!(child.depth(), 1);
            assert_eq!(child.parent().map(|p| p.id()), Some(root.id()));
        }
    }

    #[test]
    fn generation_count_excludes_root() {
        let tree = GameTree::new();
        assert_eq!(tree.node_count(), GENERATED_NODES);
        assert_eq!(tree.node_count() + 1, tree.nodes.len());
    }

    #[test]
    fn depth_histogram_matches_falling_factorials() {
        let tree = GameTree::new();
        let histogram = tree.depth_histogram();

        assert_eq!(histogram[0], 1);
        let mut expected = 1usize;
        for depth in 1..=9 {
            expected *= 10 - depth;
            assert_eq!(histogram[depth], expected, "depth {depth}");
        }
    }
}
