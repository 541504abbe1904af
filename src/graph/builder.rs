//! Depth-first dependency graph construction.
//!
//! Walks the dependency relation exposed by a [`DependencyResolver`] from a
//! start package, recording each reachable package's filtered dependency
//! list and every cycle closed along the way. The traversal is bounded by an
//! optional depth limit and an optional case-insensitive name filter.
//!
//! The walk itself never fails: resolution errors are the resolver's concern
//! and must surface as empty dependency lists, so a single unresolvable
//! package cannot abort an otherwise-successful build.

use std::collections::HashSet;

use super::dependency_graph::{CycleInfo, DependencyGraph};
use crate::resolver::DependencyResolver;

/// Traversal bounds applied during graph construction.
///
/// # Example
///
/// ```rust
/// use aptgraph::graph::BuildOptions;
///
/// let options = BuildOptions::new().with_max_depth(3).with_filter("doc");
/// assert_eq!(options.max_depth, Some(3));
/// assert_eq!(options.filter.as_deref(), Some("doc"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Maximum traversal depth. A package reached at this depth is pruned
    /// before being recorded; `None` leaves the traversal unbounded.
    pub max_depth: Option<usize>,
    /// Case-insensitive substring. A package whose name contains it is
    /// neither visited, expanded, nor listed as anyone's dependency.
    pub filter: Option<String>,
}

impl BuildOptions {
    /// Creates unbounded, unfiltered options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum traversal depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the exclusion filter substring.
    pub fn with_filter(mut self, substring: impl Into<String>) -> Self {
        self.filter = Some(substring.into());
        self
    }
}

/// One unit of work on the explicit traversal stack.
enum Frame {
    /// Visit a package reached at the given depth.
    Visit(String, usize),
    /// Pop the matching entry off the traversal path.
    Backtrack,
}

/// Builds the dependency graph reachable from `start`.
///
/// Performs a depth-first walk that expands each package at most once,
/// resolving dependencies through `resolver` in declaration order. Returns
/// the recorded graph together with every cycle detected against the current
/// traversal path.
///
/// Traversal rules, applied in order at each visited package:
///
/// 1. a package at `max_depth` is pruned silently, leaving no trace;
/// 2. a package matching `filter` is pruned silently;
/// 3. a package already on the current path closes a cycle and is not
///    re-expanded;
/// 4. a package expanded earlier in another branch is not re-expanded (its
///    parent still lists the edge);
/// 5. otherwise the package's filtered dependency list is recorded and each
///    dependency is visited one level deeper.
///
/// Because a package's list is recorded before its dependencies are visited,
/// the edge that closes a cycle does appear in the closing package's list.
///
/// # Example
///
/// ```rust
/// use aptgraph::graph::{build, BuildOptions};
///
/// let mut resolve = |name: &str| match name {
///     "a" => vec!["b".to_string()],
///     "b" => vec!["a".to_string()],
///     _ => Vec::new(),
/// };
///
/// let (graph, cycles) = build(&mut resolve, "a", &BuildOptions::new());
/// assert_eq!(graph.package_count(), 2);
/// assert_eq!(cycles[0].path(), "a -> b -> a");
/// ```
pub fn build<R>(
    resolver: &mut R,
    start: &str,
    options: &BuildOptions,
) -> (DependencyGraph, Vec<CycleInfo>)
where
    R: DependencyResolver + ?Sized,
{
    let filter = options.filter.as_ref().map(|f| f.to_lowercase());

    let mut graph = DependencyGraph::new();
    let mut cycles = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut path: Vec<String> = Vec::new();
    let mut stack = vec![Frame::Visit(start.to_string(), 0)];

    while let Some(frame) = stack.pop() {
        let (package, depth) = match frame {
            Frame::Visit(package, depth) => (package, depth),
            Frame::Backtrack => {
                path.pop();
                continue;
            }
        };

        if options.max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        if excluded(&package, filter.as_deref()) {
            continue;
        }
        if let Some(pos) = path.iter().position(|p| *p == package) {
            let mut names = path[pos..].to_vec();
            names.push(package);
            cycles.push(CycleInfo { names });
            continue;
        }
        if !visited.insert(package.clone()) {
            continue;
        }

        let dependencies: Vec<String> = resolver
            .resolve(&package)
            .into_iter()
            .filter(|dep| !excluded(dep, filter.as_deref()))
            .collect();
        graph.record(&package, &dependencies);

        path.push(package);
        stack.push(Frame::Backtrack);
        // reversed so the first declared dependency is expanded first
        for dep in dependencies.into_iter().rev() {
            stack.push(Frame::Visit(dep, depth + 1));
        }
    }

    (graph, cycles)
}

/// Filter test: `filter` is already lower-cased, the candidate name is
/// lower-cased here. Identity comparisons elsewhere stay case-sensitive.
fn excluded(name: &str, filter: Option<&str>) -> bool {
    filter.is_some_and(|f| name.to_lowercase().contains(f))
}
