//! Walking the valued tree along a strategy
//!
//! The tree is read-only here: a game is a root-to-leaf walk that follows
//! the pre-computed move fields, with the human's chosen cell overriding the
//! strategy on the human's turns. The human always controls X, so human
//! turns are the even-depth plies.

use std::fmt;

use clap::ValueEnum;

use crate::{
    error::{Error, Result},
    tictactoe::{Player, Position},
    tree::{GameTree, NodeId, NodeRef, Value},
};

/// Strategy mode for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Both sides take the first-listed optimal move; fully deterministic
    Optimal,
    /// Both sides sample uniformly among their optimal moves
    MixedOptimal,
    /// Deterministic engine, with the human playing X
    OptimalHuman,
    /// Mixed engine, with the human playing X
    MixedOptimalHuman,
}

impl Mode {
    /// Whether the engine follows `mixed_best_move` instead of `best_move`
    pub fn is_mixed(self) -> bool {
        matches!(self, Mode::MixedOptimal | Mode::MixedOptimalHuman)
    }

    /// Whether X's turns belong to a human
    pub fn with_human(self) -> bool {
        matches!(self, Mode::OptimalHuman | Mode::MixedOptimalHuman)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Optimal => "optimal",
            Mode::MixedOptimal => "mixed optimal",
            Mode::OptimalHuman => "optimal human",
            Mode::MixedOptimalHuman => "mixed optimal human",
        };
        write!(f, "{label}")
    }
}

/// A finished root-to-leaf walk
#[derive(Debug, Clone)]
pub struct Playout {
    /// Every position visited, root first, leaf last
    pub states: Vec<Position>,
    /// Value of the leaf the walk ended on
    pub outcome: Value,
}

/// The strategy-selected successor for the side to move.
///
/// Returns `None` on leaves and on trees that have not been valuated.
pub fn engine_move(node: NodeRef<'_>, mode: Mode) -> Option<NodeId> {
    let next = if mode.is_mixed() {
        node.mixed_best_move()
    } else {
        node.best_move()
    };
    next.map(|child| child.id())
}

/// Resolve a human's cell choice to the matching child.
///
/// The cell must be in range and empty; the candidate state (the human's X
/// placed on that cell) is then matched against the node's children by exact
/// state equality.
///
/// # Errors
///
/// - [`Error::PositionOutOfBounds`] when `cell` is not in 0-8
/// - [`Error::CellOccupied`] when the cell is already filled
/// - [`Error::UnmatchedMove`] when no child carries the candidate state;
///   callers are expected to re-prompt rather than abort
pub fn human_move(node: NodeRef<'_>, cell: usize) -> Result<NodeId> {
    if cell >= 9 {
        return Err(Error::PositionOutOfBounds { position: cell });
    }
    if !node.position().is_empty(cell) {
        return Err(Error::CellOccupied { position: cell });
    }

    let candidate = node.position().place(cell, Player::X);
    node.find_child_by_state(candidate.cells())
        .map(|child| child.id())
        .ok_or(Error::UnmatchedMove { position: cell })
}

/// Play a full game with both sides following the strategy, recording every
/// position. Human-override modes degrade gracefully here: the engine plays
/// both sides.
///
/// # Errors
///
/// Returns [`Error::NotValued`] when the tree has no valuation pass behind
/// it, since there are no move fields to follow.
pub fn autoplay(tree: &GameTree, mode: Mode) -> Result<Playout> {
    let mut node = tree.root();
    let mut states = vec![*node.position()];

    while !node.is_leaf() {
        let next = engine_move(node, mode).ok_or(Error::NotValued)?;
        node = tree.get(next);
        states.push(*node.position());
    }

    let outcome = node.value().ok_or(Error::NotValued)?;
    Ok(Playout { states, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_predicates() {
        assert!(!Mode::Optimal.is_mixed());
        assert!(!Mode::Optimal.with_human());
        assert!(Mode::MixedOptimal.is_mixed());
        assert!(Mode::OptimalHuman.with_human());
        assert!(Mode::MixedOptimalHuman.is_mixed());
        assert!(Mode::MixedOptimalHuman.with_human());
    }

    #[test]
    fn test_mode_display_matches_menu_labels() {
        assert_eq!(Mode::Optimal.to_string(), "optimal");
        assert_eq!(Mode::MixedOptimalHuman.to_string(), "mixed optimal human");
    }
}
