//! Fixed-table dependency resolution for offline and test runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::DependencyResolver;

/// Errors that can occur while loading a repository table file.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Failed to read the file from disk.
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the JSON content.
    #[error("failed to parse table file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolver backed by a fixed package → dependencies table.
///
/// # Example
///
/// ```rust
/// use aptgraph::resolver::{DependencyResolver, TableResolver};
///
/// let mut resolver = TableResolver::builtin();
/// let deps = resolver.resolve("python3");
/// assert_eq!(deps[0], "python3.10");
/// assert!(resolver.resolve("unknown").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TableResolver {
    packages: HashMap<String, Vec<String>>,
}

impl TableResolver {
    /// Creates a resolver over the given table.
    pub fn new(packages: HashMap<String, Vec<String>>) -> Self {
        Self { packages }
    }

    /// Creates a resolver over the built-in demo table, a small slice of the
    /// Ubuntu `python3` dependency closure.
    pub fn builtin() -> Self {
        let entries: [(&str, &[&str]); 8] = [
            ("python3", &["python3.10", "libpython3-stdlib", "python3-minimal"]),
            ("python3.10", &["libc6", "libssl3", "zlib1g"]),
            ("libc6", &["libgcc1"]),
            ("libssl3", &["libc6"]),
            ("zlib1g", &["libc6"]),
            ("libpython3-stdlib", &["python3.10"]),
            ("python3-minimal", &["python3.10"]),
            ("libgcc1", &[]),
        ];
        let packages = entries
            .into_iter()
            .map(|(name, deps)| {
                (
                    name.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        Self { packages }
    }

    /// Loads a resolver table from a JSON file mapping package names to
    /// dependency-name arrays, e.g. `{"a": ["b", "c"], "b": []}`.
    pub fn from_json_file(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        let packages: HashMap<String, Vec<String>> = serde_json::from_str(&content)?;
        Ok(Self { packages })
    }

    /// Returns the number of packages in the table.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if the table holds no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl DependencyResolver for TableResolver {
    fn resolve(&mut self, package: &str) -> Vec<String> {
        self.packages.get(package).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table() {
        let mut resolver = TableResolver::builtin();

        assert_eq!(
            resolver.resolve("python3"),
            vec!["python3.10", "libpython3-stdlib", "python3-minimal"]
        );
        assert_eq!(resolver.resolve("libc6"), vec!["libgcc1"]);
        assert!(resolver.resolve("libgcc1").is_empty());
        assert_eq!(resolver.len(), 8);
    }

    #[test]
    fn test_unknown_package_resolves_empty() {
        let mut resolver = TableResolver::builtin();
        assert!(resolver.resolve("no-such-package").is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut resolver = TableResolver::builtin();
        assert!(resolver.resolve("Python3").is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": ["b", "c"], "b": []}}"#).unwrap();

        let mut resolver = TableResolver::from_json_file(file.path()).unwrap();
        assert_eq!(resolver.resolve("a"), vec!["b", "c"]);
        assert!(resolver.resolve("b").is_empty());
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn test_from_json_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = TableResolver::from_json_file(file.path());
        assert!(matches!(result, Err(TableError::Json(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = TableResolver::from_json_file(Path::new("/nonexistent/table.json"));
        assert!(matches!(result, Err(TableError::Io(_))));
    }

    #[test]
    fn test_empty_table() {
        let resolver = TableResolver::new(HashMap::new());
        assert!(resolver.is_empty());
    }
}
