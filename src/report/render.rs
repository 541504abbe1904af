//! Terminal rendering of dependency graphs.
//!
//! All functions write to a generic [`Write`] target so output can be
//! captured in tests and redirected by callers.

use std::io::{self, Write};

use crate::graph::{CycleInfo, DependencyGraph};

use super::stats::GraphStats;

/// Writes the flat `package -> dependencies` listing, one recorded package
/// per line in recording order.
pub fn render_graph<W: Write>(graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Dependency graph:")?;
    for package in graph.packages() {
        let deps = graph.dependencies_of(package);
        if deps.is_empty() {
            writeln!(writer, "  {} -> (no dependencies)", package)?;
        } else {
            writeln!(writer, "  {} -> {}", package, deps.join(", "))?;
        }
    }
    Ok(())
}

/// Writes the detected cycles, one arrow path per line. Writes nothing when
/// no cycles were found.
pub fn render_cycles<W: Write>(cycles: &[CycleInfo], writer: &mut W) -> io::Result<()> {
    if cycles.is_empty() {
        return Ok(());
    }
    writeln!(writer, "Detected dependency cycles:")?;
    for cycle in cycles {
        writeln!(writer, "  {}", cycle.path())?;
    }
    Ok(())
}

/// Writes the summary statistics block.
pub fn render_stats<W: Write>(
    stats: &GraphStats,
    cycle_count: usize,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Graph statistics:")?;
    writeln!(writer, "  Total packages:          {}", stats.total_packages)?;
    writeln!(writer, "  Total dependencies:      {}", stats.total_dependencies)?;
    writeln!(
        writer,
        "  Packages without deps:   {}",
        stats.packages_without_deps
    )?;
    writeln!(writer, "  Cycles detected:         {}", cycle_count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_graph_flat_listing() {
        let mut graph = DependencyGraph::new();
        graph.record("a", ["b", "c"]);
        graph.record("b", Vec::<String>::new());

        let output = capture(|w| render_graph(&graph, w));

        assert_eq!(
            output,
            "Dependency graph:\n  a -> b, c\n  b -> (no dependencies)\n"
        );
    }

    #[test]
    fn test_render_graph_empty() {
        let graph = DependencyGraph::new();
        let output = capture(|w| render_graph(&graph, w));
        assert_eq!(output, "Dependency graph:\n");
    }

    #[test]
    fn test_render_cycles() {
        let cycles = vec![
            CycleInfo {
                names: vec!["a".into(), "b".into(), "a".into()],
            },
            CycleInfo {
                names: vec!["x".into(), "x".into()],
            },
        ];

        let output = capture(|w| render_cycles(&cycles, w));

        assert_eq!(
            output,
            "Detected dependency cycles:\n  a -> b -> a\n  x -> x\n"
        );
    }

    #[test]
    fn test_render_cycles_silent_when_none() {
        let output = capture(|w| render_cycles(&[], w));
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_stats() {
        let stats = GraphStats {
            total_packages: 4,
            total_dependencies: 6,
            packages_without_deps: 1,
        };

        let output = capture(|w| render_stats(&stats, 2, w));

        assert!(output.starts_with("Graph statistics:\n"));
        assert!(output.contains("Total packages:          4"));
        assert!(output.contains("Total dependencies:      6"));
        assert!(output.contains("Packages without deps:   1"));
        assert!(output.contains("Cycles detected:         2"));
    }
}
