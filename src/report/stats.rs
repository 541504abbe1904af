//! Aggregate statistics over a built dependency graph.

use crate::graph::DependencyGraph;

/// Summary counts computed from a dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    /// Number of recorded packages.
    pub total_packages: usize,
    /// Sum of all recorded dependency list lengths.
    pub total_dependencies: usize,
    /// Number of recorded packages with an empty dependency list.
    pub packages_without_deps: usize,
}

impl GraphStats {
    /// Computes summary counts for `graph`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptgraph::graph::DependencyGraph;
    /// use aptgraph::report::GraphStats;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.record("a", ["b", "c"]);
    /// graph.record("b", Vec::<String>::new());
    ///
    /// let stats = GraphStats::summarize(&graph);
    /// assert_eq!(stats.total_packages, 2);
    /// assert_eq!(stats.total_dependencies, 2);
    /// assert_eq!(stats.packages_without_deps, 1);
    /// ```
    pub fn summarize(graph: &DependencyGraph) -> Self {
        let mut stats = GraphStats::default();
        for package in graph.packages() {
            stats.total_packages += 1;
            let deps = graph.dependencies_of(package);
            stats.total_dependencies += deps.len();
            if deps.is_empty() {
                stats.packages_without_deps += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        let stats = GraphStats::summarize(&graph);

        assert_eq!(stats, GraphStats::default());
    }

    #[test]
    fn test_single_leaf_package() {
        let mut graph = DependencyGraph::new();
        graph.record("lone", Vec::<String>::new());

        let stats = GraphStats::summarize(&graph);
        assert_eq!(stats.total_packages, 1);
        assert_eq!(stats.total_dependencies, 0);
        assert_eq!(stats.packages_without_deps, 1);
    }

    #[test]
    fn test_mixed_graph() {
        let mut graph = DependencyGraph::new();
        graph.record("a", ["b", "c"]);
        graph.record("b", ["c"]);
        graph.record("c", Vec::<String>::new());

        let stats = GraphStats::summarize(&graph);
        assert_eq!(stats.total_packages, 3);
        assert_eq!(stats.total_dependencies, 3);
        assert_eq!(stats.packages_without_deps, 1);
    }

    #[test]
    fn test_listed_but_unrecorded_deps_do_not_count_as_packages() {
        // depth-pruned children: listed by a, never recorded themselves
        let mut graph = DependencyGraph::new();
        graph.record("a", ["b", "c"]);

        let stats = GraphStats::summarize(&graph);
        assert_eq!(stats.total_packages, 1);
        assert_eq!(stats.total_dependencies, 2);
        assert_eq!(stats.packages_without_deps, 0);
    }
}
