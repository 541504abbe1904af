use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aptgraph::graph::{build, BuildOptions};
use aptgraph::report::{render_cycles, render_graph, render_stats, GraphStats, TreeNode};
use aptgraph::resolver::{DependencyResolver, RemoteResolver, TableResolver};

#[derive(Parser)]
#[command(name = "aptgraph")]
#[command(version = "0.1.0")]
#[command(about = "Dependency graph visualizer for Debian-style package repositories", long_about = None)]
struct Cli {
    /// Package to analyze (e.g. python3, firefox)
    #[arg(short, long)]
    package: String,

    /// Repository base URL, or a path to a JSON test table in test mode
    #[arg(short, long)]
    repository: String,

    /// Resolve from a local table instead of a remote repository
    #[arg(short, long)]
    test_mode: bool,

    /// Package version (echoed in the configuration, not used for resolution)
    #[arg(long)]
    package_version: Option<String>,

    /// Render the graph as an ASCII tree instead of a flat listing
    #[arg(short, long)]
    ascii_tree: bool,

    /// Exclude packages whose name contains this substring (case-insensitive)
    #[arg(short, long)]
    filter: Option<String>,

    /// Maximum dependency depth to traverse
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let errors = validate(&cli);
    if !errors.is_empty() {
        eprintln!("Invalid arguments:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Collects every argument problem up front so they can be reported together.
fn validate(cli: &Cli) -> Vec<String> {
    let mut errors = Vec::new();
    if cli.package.trim().is_empty() {
        errors.push("package name must not be empty".to_string());
    }
    if cli.repository.trim().is_empty() {
        errors.push("repository must not be empty".to_string());
    }
    if cli
        .package_version
        .as_deref()
        .is_some_and(|v| v.trim().is_empty())
    {
        errors.push("package version must not be an empty string".to_string());
    }
    if cli.filter.as_deref().is_some_and(|f| f.trim().is_empty()) {
        errors.push("filter must not be an empty string".to_string());
    }
    errors
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_configuration(cli, &mut out)?;
    writeln!(out)?;

    let mut resolver = make_resolver(cli)?;

    let direct = resolver.resolve(&cli.package);
    writeln!(out, "Direct dependencies of {}:", cli.package)?;
    if direct.is_empty() {
        writeln!(out, "  (none found)")?;
    } else {
        for dep in &direct {
            writeln!(out, "  - {}", dep)?;
        }
    }
    writeln!(out)?;

    let mut options = BuildOptions::new();
    if let Some(depth) = cli.max_depth {
        options = options.with_max_depth(depth);
    }
    if let Some(filter) = &cli.filter {
        options = options.with_filter(filter.as_str());
    }

    let (graph, cycles) = build(resolver.as_mut(), &cli.package, &options);

    if cli.ascii_tree {
        writeln!(out, "Dependency tree:")?;
        TreeNode::from_graph(&graph, &cli.package).render(&mut out)?;
    } else {
        render_graph(&graph, &mut out)?;
    }
    if !cycles.is_empty() {
        writeln!(out)?;
        render_cycles(&cycles, &mut out)?;
    }
    writeln!(out)?;

    let stats = GraphStats::summarize(&graph);
    render_stats(&stats, cycles.len(), &mut out)?;

    Ok(())
}

/// Picks the resolver backend for this invocation.
///
/// Test mode resolves against a JSON table when the repository argument names
/// an existing file, or against the built-in demo table otherwise. Outside
/// test mode the repository argument is the mirror base URL.
fn make_resolver(cli: &Cli) -> anyhow::Result<Box<dyn DependencyResolver>> {
    if cli.test_mode {
        let path = Path::new(&cli.repository);
        if path.is_file() {
            let resolver = TableResolver::from_json_file(path)
                .with_context(|| format!("failed to load test repository {}", cli.repository))?;
            Ok(Box::new(resolver))
        } else {
            tracing::debug!(
                repository = %cli.repository,
                "test repository is not a file, using the built-in table"
            );
            Ok(Box::new(TableResolver::builtin()))
        }
    } else {
        Ok(Box::new(RemoteResolver::new(cli.repository.clone())))
    }
}

/// Echoes the parsed configuration as a key/value block.
fn print_configuration<W: Write>(cli: &Cli, writer: &mut W) -> io::Result<()> {
    let toggle = |on: bool| if on { "on" } else { "off" };

    writeln!(writer, "Configuration:")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer, "  {:<17} : {}", "Package", cli.package)?;
    writeln!(writer, "  {:<17} : {}", "Repository", cli.repository)?;
    writeln!(writer, "  {:<17} : {}", "Test mode", toggle(cli.test_mode))?;
    writeln!(
        writer,
        "  {:<17} : {}",
        "Package version",
        cli.package_version.as_deref().unwrap_or("(not set)")
    )?;
    writeln!(writer, "  {:<17} : {}", "ASCII tree", toggle(cli.ascii_tree))?;
    writeln!(
        writer,
        "  {:<17} : {}",
        "Filter",
        cli.filter.as_deref().unwrap_or("(not set)")
    )?;
    writeln!(
        writer,
        "  {:<17} : {}",
        "Max depth",
        cli.max_depth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(unbounded)".to_string())
    )?;
    Ok(())
}
