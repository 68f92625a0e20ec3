//! CLI infrastructure for the oxo solver
//!
//! This module provides the command-line interface for playing along the
//! solved tree and inspecting the generated tree.

pub mod commands;
pub mod output;
