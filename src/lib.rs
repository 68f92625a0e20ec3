//! Exhaustive solver for 3x3 Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board position type with win/draw classification
//! - Full game-tree generation with no pruning at decided positions
//! - Bottom-up minimax valuation with a uniform random tie-break
//! - A traversal layer for playing games along optimal or mixed-optimal
//!   strategies, with human override on X's turns

pub mod cli;
pub mod error;
pub mod play;
pub mod tictactoe;
pub mod tree;

pub use error::{Error, Result};
pub use play::{Mode, Playout, autoplay, engine_move, human_move};
pub use tictactoe::{Cell, Player, Position};
pub use tree::{GameTree, LeafCounts, NodeId, NodeRef, Value};
