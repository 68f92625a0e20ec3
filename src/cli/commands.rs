//! CLI commands

pub mod analyze;
pub mod play;

use crate::{cli::output, tree::GameTree};

/// Build the full tree and run the valuation pass, behind a spinner.
///
/// Generation takes a moment (close to a million nodes), so both commands
/// share this decorated entry point.
pub(crate) fn build_valued_tree() -> GameTree {
    let spinner = output::create_spinner("Building and solving the game tree...");
    let mut tree = GameTree::new();
    tree.valuate_all();
    spinner.finish_and_clear();
    tree
}
