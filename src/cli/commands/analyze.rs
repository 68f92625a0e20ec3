//! Analyze command - statistics over the generated tree

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    tree::GameTree,
};

#[derive(Parser, Debug)]
#[command(about = "Inspect the generated game tree")]
pub struct AnalyzeArgs {
    /// Export the nodes-by-depth table as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DepthRow {
    depth: usize,
    nodes: usize,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let tree = super::build_valued_tree();
    let counts = tree.leaf_counts();
    let root_value = tree
        .root()
        .value()
        .context("root carries no value after the valuation pass")?;

    print_section("Game Tree Statistics");
    print_kv("Generated nodes", &format_number(tree.node_count()));
    print_kv("Leaves", &format_number(counts.leaves));
    print_kv("Losses", &format_number(counts.losses));
    print_kv("Root value", &root_value.to_string());

    println!("\nNodes by depth:");
    for (depth, nodes) in tree.depth_histogram().iter().enumerate() {
        println!("  Depth {depth}: {} nodes", format_number(*nodes));
    }

    if let Some(path) = args.export {
        export_depth_table(&tree, &path)?;
        println!("\nDepth table exported to: {}", path.display());
    }

    Ok(())
}

/// Write the per-depth node counts as CSV
fn export_depth_table(tree: &GameTree, path: &Path) -> crate::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (depth, nodes) in tree.depth_histogram().iter().enumerate() {
        writer.serialize(DepthRow {
            depth,
            nodes: *nodes,
        })?;
    }
    writer.flush()?;
    Ok(())
}
