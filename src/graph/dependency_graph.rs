//! Dependency graph storage built on petgraph.
//!
//! Provides a directed graph of package names where a package becomes a
//! *recorded* entry only once its dependency list has been captured by the
//! traversal. Dependencies named in a list may exist in the graph purely as
//! edge targets without ever being recorded themselves (for example when the
//! traversal prunes them at the depth bound).

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// A node in the dependency graph.
///
/// Carries the package name plus a marker distinguishing packages whose
/// dependency list was recorded from packages that are merely named as a
/// dependency of something else.
#[derive(Debug, Clone)]
pub(crate) struct PackageNode {
    /// Package name exactly as the index declares it (case-sensitive).
    name: String,
    /// True once the package's dependency list has been recorded.
    recorded: bool,
}

/// A directed graph of package dependency relationships.
///
/// Nodes are package names; edges point from a package to each of its
/// declared dependencies, in declaration order. Recorded packages iterate in
/// the order their dependency lists were captured, which for the depth-first
/// builder is first-expansion order.
///
/// # Example
///
/// ```rust
/// use aptgraph::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.record("python3", ["libc6", "zlib1g"]);
/// graph.record("libc6", ["libgcc1"]);
///
/// assert_eq!(graph.package_count(), 2);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.dependencies_of("python3"), vec!["libc6", "zlib1g"]);
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// The underlying directed graph.
    graph: DiGraph<PackageNode, ()>,
    /// Maps package names to their node indices for O(1) lookup.
    node_indices: HashMap<String, NodeIndex>,
    /// Recorded packages in the order their dependency lists were captured.
    recorded_order: Vec<NodeIndex>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptgraph::graph::DependencyGraph;
    ///
    /// let graph = DependencyGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            recorded_order: Vec::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// Use this when the approximate package and edge counts are known
    /// up front to avoid reallocations.
    pub fn with_capacity(packages: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(packages, edges),
            node_indices: HashMap::with_capacity(packages),
            recorded_order: Vec::with_capacity(packages),
        }
    }

    /// Records a package together with its ordered dependency list.
    ///
    /// The package becomes a recorded entry and one edge is added per listed
    /// dependency, preserving list order. Dependencies that are not yet in
    /// the graph are created as unrecorded nodes. Recording the same package
    /// twice is a no-op: the first recorded list wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptgraph::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.record("libssl3", ["libc6"]);
    /// graph.record("libssl3", ["other"]); // ignored
    ///
    /// assert_eq!(graph.dependencies_of("libssl3"), vec!["libc6"]);
    /// ```
    pub fn record<I, S>(&mut self, package: &str, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let idx = self.intern(package);
        if self.graph[idx].recorded {
            return;
        }
        self.graph[idx].recorded = true;
        self.recorded_order.push(idx);

        for dep in dependencies {
            let dep_idx = self.intern(dep.as_ref());
            self.graph.add_edge(idx, dep_idx, ());
        }
    }

    /// Returns the node index for `name`, creating an unrecorded node if the
    /// package is not in the graph yet.
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(PackageNode {
            name: name.to_string(),
            recorded: false,
        });
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Returns true if `name` is a recorded package.
    ///
    /// Packages that only appear as dependency targets are not recorded and
    /// yield false.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices
            .get(name)
            .is_some_and(|&idx| self.graph[idx].recorded)
    }

    /// Iterates over recorded package names in recording order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.recorded_order
            .iter()
            .map(|&idx| self.graph[idx].name.as_str())
    }

    /// Returns the recorded dependency list of `name`, in declaration order.
    ///
    /// Unrecorded or unknown packages yield an empty list.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        let mut deps: Vec<&str> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| self.graph[edge.target()].name.as_str())
            .collect();
        // petgraph walks outgoing edges most-recent-first; restore insertion order
        deps.reverse();
        deps
    }

    /// Returns the number of recorded packages.
    pub fn package_count(&self) -> usize {
        self.recorded_order.len()
    }

    /// Returns the total number of dependency edges.
    ///
    /// Equal to the sum of all recorded dependency list lengths, since edges
    /// are only ever added while recording a package.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if no package has been recorded.
    pub fn is_empty(&self) -> bool {
        self.recorded_order.is_empty()
    }
}

/// A circular dependency detected during traversal.
///
/// Holds the traversal path that closed the loop, beginning and ending with
/// the same package name, e.g. `["a", "b", "c", "a"]`. A self-dependency is
/// the two-element cycle `["a", "a"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo {
    /// The package names forming the cycle; first and last are equal.
    pub names: Vec<String>,
}

impl CycleInfo {
    /// Returns the cycle rendered as an arrow-separated path.
    ///
    /// For example: `"a -> b -> c -> a"`.
    pub fn path(&self) -> String {
        self.names.join(" -> ")
    }

    /// Returns the number of names in the cycle, closing repeat included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the cycle holds no names (does not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
