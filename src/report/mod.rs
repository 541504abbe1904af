//! Statistics and rendering for built dependency graphs.
//!
//! This module turns the `(graph, cycles)` pair produced by
//! [`crate::graph::build`] into terminal output: a flat listing or an ASCII
//! tree, the detected cycle paths, and a summary statistics block.

mod render;
mod stats;
pub mod tree;

pub use render::{render_cycles, render_graph, render_stats};
pub use stats::GraphStats;
pub use tree::TreeNode;
