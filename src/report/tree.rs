//! Tree construction for ASCII dependency rendering.
//!
//! Provides `TreeNode` for hierarchical data, built from a finished
//! dependency graph and written out with box-drawing branch prefixes.

use std::io::{self, Write};

use crate::graph::DependencyGraph;

/// A node in the dependency tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Package name
    pub name: String,
    /// Child dependencies, in recorded order
    pub children: Vec<TreeNode>,
    /// Depth in the tree (0 = root)
    pub depth: usize,
}

impl TreeNode {
    /// Create a new childless tree node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            depth: 0,
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, mut child: TreeNode) {
        child.depth = self.depth + 1;
        self.children.push(child);
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Builds the rendering tree for `start` from a finished graph.
    ///
    /// Descends only into packages recorded in the graph; a dependency that
    /// is already on the current branch stays a leaf, so cyclic graphs
    /// produce a finite tree. Shared subtrees are rendered once per parent.
    pub fn from_graph(graph: &DependencyGraph, start: &str) -> Self {
        let mut branch = Vec::new();
        Self::from_graph_inner(graph, start, &mut branch)
    }

    fn from_graph_inner(
        graph: &DependencyGraph,
        name: &str,
        branch: &mut Vec<String>,
    ) -> TreeNode {
        let mut node = TreeNode::new(name);
        if !graph.contains(name) || branch.iter().any(|ancestor| ancestor == name) {
            return node;
        }

        branch.push(name.to_string());
        for dep in graph.dependencies_of(name) {
            node.add_child(Self::from_graph_inner(graph, dep, branch));
        }
        branch.pop();
        node
    }

    /// Writes the tree using box-drawing branches:
    ///
    /// ```text
    /// python3
    /// ├── python3.10
    /// │   └── libc6
    /// └── python3-minimal
    /// ```
    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.name)?;
        self.render_children(writer, "")
    }

    fn render_children<W: Write>(&self, writer: &mut W, prefix: &str) -> io::Result<()> {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let is_last = i == count - 1;
            let branch = if is_last { "└── " } else { "├── " };
            writeln!(writer, "{}{}{}", prefix, branch, child.name)?;

            let continuation = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{}{}", prefix, continuation);
            child.render_children(writer, &child_prefix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(node: &TreeNode) -> String {
        let mut buffer = Vec::new();
        node.render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tree_node_creation() {
        let node = TreeNode::new("test");
        assert_eq!(node.name, "test");
        assert_eq!(node.depth, 0);
        assert!(!node.has_children());
    }

    #[test]
    fn test_add_child_sets_depth() {
        let mut parent = TreeNode::new("parent");
        parent.add_child(TreeNode::new("child"));

        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].depth, 1);
    }

    #[test]
    fn test_from_graph_follows_recorded_order() {
        let mut graph = DependencyGraph::new();
        graph.record("root", ["a", "b"]);
        graph.record("a", ["c"]);
        graph.record("b", Vec::<String>::new());
        graph.record("c", Vec::<String>::new());

        let tree = TreeNode::from_graph(&graph, "root");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].name, "a");
        assert_eq!(tree.children[0].children[0].name, "c");
        assert_eq!(tree.children[1].name, "b");
    }

    #[test]
    fn test_from_graph_unrecorded_dependency_is_leaf() {
        // depth-pruned child: listed but never recorded
        let mut graph = DependencyGraph::new();
        graph.record("root", ["pruned"]);

        let tree = TreeNode::from_graph(&graph, "root");
        assert_eq!(tree.children.len(), 1);
        assert!(!tree.children[0].has_children());
    }

    #[test]
    fn test_from_graph_terminates_on_cycles() {
        let mut graph = DependencyGraph::new();
        graph.record("a", ["b"]);
        graph.record("b", ["a"]);

        let tree = TreeNode::from_graph(&graph, "a");
        // a -> b -> a(leaf)
        assert_eq!(tree.children[0].name, "b");
        assert_eq!(tree.children[0].children[0].name, "a");
        assert!(!tree.children[0].children[0].has_children());
    }

    #[test]
    fn test_from_graph_missing_start_is_bare_root() {
        let graph = DependencyGraph::new();
        let tree = TreeNode::from_graph(&graph, "ghost");
        assert_eq!(tree.name, "ghost");
        assert!(!tree.has_children());
    }

    #[test]
    fn test_render_branch_prefixes() {
        let mut graph = DependencyGraph::new();
        graph.record("root", ["a", "b"]);
        graph.record("a", ["c"]);
        graph.record("b", Vec::<String>::new());
        graph.record("c", Vec::<String>::new());

        let tree = TreeNode::from_graph(&graph, "root");
        let output = rendered(&tree);

        assert_eq!(
            output,
            "root\n\
             ├── a\n\
             │   └── c\n\
             └── b\n"
        );
    }

    #[test]
    fn test_render_single_node() {
        let tree = TreeNode::new("only");
        assert_eq!(rendered(&tree), "only\n");
    }

    #[test]
    fn test_render_last_child_uses_corner() {
        let mut graph = DependencyGraph::new();
        graph.record("root", ["tail"]);
        graph.record("tail", Vec::<String>::new());

        let output = rendered(&TreeNode::from_graph(&graph, "root"));
        assert_eq!(output, "root\n└── tail\n");
    }

    #[test]
    fn test_shared_subtree_rendered_per_parent() {
        let mut graph = DependencyGraph::new();
        graph.record("root", ["a", "b"]);
        graph.record("a", ["shared"]);
        graph.record("b", ["shared"]);
        graph.record("shared", Vec::<String>::new());

        let tree = TreeNode::from_graph(&graph, "root");
        assert_eq!(tree.children[0].children[0].name, "shared");
        assert_eq!(tree.children[1].children[0].name, "shared");
    }
}
