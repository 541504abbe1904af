//! AptGraph - dependency graph visualizer for Debian-style package repositories
//!
//! This crate resolves the transitive dependency graph of a package published
//! in a Debian binary package index, with cycle detection, depth bounding,
//! name filtering, and terminal-friendly rendering.

pub mod graph;
pub mod report;
pub mod resolver;
