//! Parser for Debian `Packages` index text.
//!
//! The decompressed index is a sequence of stanzas, one per package. Each
//! stanza opens with a `Package:` field; an optional `Depends:` field lists
//! the package's direct dependencies as a comma-separated string with
//! version constraints in parentheses and `|`-separated alternatives.

use std::collections::HashMap;

const PACKAGE_FIELD: &str = "Package: ";
const DEPENDS_FIELD: &str = "Depends: ";

/// Parses a whole decompressed `Packages` index into a package name →
/// direct-dependencies table.
///
/// Stanzas without a `Depends:` field map to an empty list. When the index
/// declares the same package name more than once, the last stanza wins.
/// Lines that fit neither field are skipped, so a damaged stanza degrades to
/// "no dependencies" instead of poisoning the whole index.
///
/// # Example
///
/// ```rust
/// use aptgraph::resolver::parse_package_index;
///
/// let index = "Package: python3\n\
///              Version: 3.10.6-1~22.04\n\
///              Depends: python3.10 (>= 3.10.6-1~), libpython3-stdlib\n\
///              \n\
///              Package: libgcc1\n";
///
/// let table = parse_package_index(index);
/// assert_eq!(table["python3"], vec!["python3.10", "libpython3-stdlib"]);
/// assert!(table["libgcc1"].is_empty());
/// ```
pub fn parse_package_index(content: &str) -> HashMap<String, Vec<String>> {
    let mut packages = HashMap::new();
    let mut current: Option<String> = None;
    let mut dependencies: Vec<String> = Vec::new();

    for line in content.lines() {
        if let Some(name) = line.strip_prefix(PACKAGE_FIELD) {
            if let Some(package) = current.take() {
                packages.insert(package, std::mem::take(&mut dependencies));
            }
            current = Some(name.trim().to_string());
            dependencies = Vec::new();
        } else if let Some(raw) = line.strip_prefix(DEPENDS_FIELD) {
            if current.is_some() {
                dependencies = parse_depends(raw);
            }
        }
    }
    if let Some(package) = current {
        packages.insert(package, dependencies);
    }

    packages
}

/// Cleans a raw `Depends:` field value into bare package names.
///
/// Parenthesized version constraints are stripped and only the first
/// alternative of each `|`-separated choice list is kept; empty entries are
/// dropped.
///
/// # Example
///
/// ```rust
/// use aptgraph::resolver::parse_depends;
///
/// let deps = parse_depends("libc6 (>= 2.34), debconf (>= 0.5) | debconf-2.0");
/// assert_eq!(deps, vec!["libc6", "debconf"]);
/// ```
pub fn parse_depends(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| {
            let stripped = strip_version_constraints(entry);
            stripped
                .split('|')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Drops every parenthesized span from `entry`, e.g.
/// `"libc6 (>= 2.34)"` becomes `"libc6 "`.
fn strip_version_constraints(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len());
    let mut depth = 0usize;
    for ch in entry.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}
