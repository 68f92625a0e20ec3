//! Bottom-up minimax valuation with a uniform tie-break
//!
//! Values are always from X's perspective. The valuation pass runs once
//! over the generated tree: leaves resolve from their own position, internal
//! nodes take the extremal value over their children, with X maximizing at
//! even depth and O minimizing at odd depth.

use std::fmt;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{GameTree, NodeId};
use crate::tictactoe::Player;

/// Game-theoretic value of a position, from X's perspective.
///
/// The derived ordering is the minimax order: `Loss < Draw < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Loss,
    Draw,
    Win,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Value::Loss => "LOSS",
            Value::Draw => "DRAW",
            Value::Win => "WIN",
        };
        write!(f, "{label}")
    }
}

impl GameTree {
    /// Run the valuation pass from the root with a freshly seeded generator.
    ///
    /// Each invocation seeds its own randomness, so two trees valuated
    /// separately can disagree on `mixed_best_move` while always agreeing on
    /// values and `best_move`.
    pub fn valuate_all(&mut self) {
        self.valuate_all_with(&mut rand::rng());
    }

    /// Run the valuation pass with an injected generator, for callers that
    /// need reproducible tie-breaks.
    pub fn valuate_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.valuate(NodeId::ROOT, rng);
    }

    /// Assign value and move choices to `id`, valuating children first.
    /// Idempotent: an already-valued node returns immediately.
    fn valuate<R: Rng + ?Sized>(&mut self, id: NodeId, rng: &mut R) {
        if self.node(id).value.is_some() {
            return;
        }

        if self.node(id).is_leaf {
            let value = match self.node(id).position().winner() {
                Some(Player::X) => Value::Win,
                Some(Player::O) => Value::Loss,
                // a full board with no line
                None => Value::Draw,
            };
            self.node_mut(id).value = Some(value);
            return;
        }

        let children = self.node(id).children.clone();
        assert!(
            !children.is_empty(),
            "non-leaf node without children at depth {}",
            self.node(id).position().depth()
        );

        for &child in &children {
            self.valuate(child, rng);
        }

        let maximizing = self.node(id).position().depth().is_multiple_of(2);
        let mut best = children[0];
        let mut extremal = self.child_value(children[0]);
        for &child in &children[1..] {
            let value = self.child_value(child);
            let improves = if maximizing {
                value > extremal
            } else {
                value < extremal
            };
            if improves {
                extremal = value;
                best = child;
            }
        }

        let tied: Vec<NodeId> = children
            .iter()
            .copied()
            .filter(|&child| self.child_value(child) == extremal)
            .collect();
        let mixed = uniform_pick(rng, &tied).expect("extremal set contains at least one child");

        let node = self.node_mut(id);
        node.value = Some(extremal);
        node.best_move = Some(best);
        node.mixed_best_move = Some(mixed);
    }

    fn child_value(&self, id: NodeId) -> Value {
        self.node(id)
            .value
            .expect("children are valued before their parent")
    }
}

/// Pick one candidate uniformly at random. Returns `None` on an empty slice.
pub(crate) fn uniform_pick<R, T>(rng: &mut R, candidates: &[T]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    candidates.choose(rng).copied()
}
