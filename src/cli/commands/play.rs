//! Play command - walk the solved tree, optionally against a human
//!
//! This is the interactive driver around the core walk: mode selection,
//! human move entry with re-prompting, board printing, and the play-again
//! loop. The human always plays X.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    play::{self, Mode},
    tree::{GameTree, NodeId, NodeRef, Value},
};

#[derive(Parser, Debug)]
#[command(about = "Play Tic-Tac-Toe along the solved tree")]
pub struct PlayArgs {
    /// Strategy mode; prompts for one interactively when omitted
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut tree = super::build_valued_tree();

    loop {
        let mode = match args.mode {
            Some(mode) => mode,
            None => prompt_mode(&mut lines)?,
        };

        let outcome = run_game(&tree, mode, &mut lines)?;
        println!("{outcome}");

        // one-shot when the mode came from the command line
        if args.mode.is_some() {
            return Ok(());
        }

        if !prompt_play_again(&mut lines)? {
            return Ok(());
        }

        // mixed tie-breaks are frozen per valuation pass; rebuild so the
        // next game samples fresh ones
        if mode.is_mixed() {
            tree = super::build_valued_tree();
        }
    }
}

/// Walk from the root to a leaf, printing every board, and report the
/// leaf's value. On the human's turns (even depth in human modes) the
/// chosen cell overrides the strategy for that ply only.
fn run_game<L>(tree: &GameTree, mode: Mode, lines: &mut L) -> Result<Value>
where
    L: Iterator<Item = io::Result<String>>,
{
    let mut node = tree.root();

    loop {
        println!(" -----");
        println!("{}", node.position());

        if node.is_leaf() {
            return node
                .value()
                .context("reached a leaf the valuation pass never assigned");
        }

        let human_turn = mode.with_human() && node.depth().is_multiple_of(2);
        let next = if human_turn {
            prompt_human_move(node, lines)?
        } else {
            play::engine_move(node, mode).context("tree has no move fields; valuation missing")?
        };
        node = tree.get(next);
    }
}

/// Ask for a cell until the input parses and resolves to a child
fn prompt_human_move<L>(node: NodeRef<'_>, lines: &mut L) -> Result<NodeId>
where
    L: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Which square do you want to fill? (0, 1, ..., 8): ");
        io::stdout().flush()?;

        let line = read_line(lines)?;
        let cell: usize = match line.trim().parse() {
            Ok(cell) => cell,
            Err(_) => {
                println!("Enter a single cell number between 0 and 8");
                continue;
            }
        };

        match play::human_move(node, cell) {
            Ok(next) => return Ok(next),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_mode<L>(lines: &mut L) -> Result<Mode>
where
    L: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("Which mode do you want to run (1, 2, 3, or 4):");
        println!("\t1. {}", Mode::Optimal);
        println!("\t2. {}", Mode::MixedOptimal);
        println!("\t3. {}", Mode::OptimalHuman);
        println!("\t4. {}", Mode::MixedOptimalHuman);

        let line = read_line(lines)?;
        match line.trim() {
            "1" => return Ok(Mode::Optimal),
            "2" => return Ok(Mode::MixedOptimal),
            "3" => return Ok(Mode::OptimalHuman),
            "4" => return Ok(Mode::MixedOptimalHuman),
            other => println!("'{other}' is not one of 1, 2, 3, 4"),
        }
    }
}

fn prompt_play_again<L>(lines: &mut L) -> Result<bool>
where
    L: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Keep playing? (Y/N): ");
        io::stdout().flush()?;

        let line = read_line(lines)?;
        match line.trim().to_ascii_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            other => println!("'{other}' is not Y or N"),
        }
    }
}

fn read_line<L>(lines: &mut L) -> Result<String>
where
    L: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?),
        None => bail!("stdin closed while waiting for input"),
    }
}
