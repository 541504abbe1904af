//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`DependencyGraph`] storage type and the
//! depth-first [`build`] traversal that populates it from a
//! [`crate::resolver::DependencyResolver`].
//!
//! # Example
//!
//! ```rust
//! use aptgraph::graph::{build, BuildOptions};
//!
//! let mut resolve = |name: &str| match name {
//!     "python3" => vec!["libc6".to_string(), "zlib1g".to_string()],
//!     _ => Vec::new(),
//! };
//!
//! let (graph, cycles) = build(&mut resolve, "python3", &BuildOptions::new());
//! assert_eq!(graph.package_count(), 3);
//! assert!(cycles.is_empty());
//! ```

mod builder;
mod dependency_graph;

pub use builder::{build, BuildOptions};
pub use dependency_graph::{CycleInfo, DependencyGraph};
