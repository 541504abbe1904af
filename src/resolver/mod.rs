//! Dependency resolution backends.
//!
//! The graph builder consumes a single capability: given a package name,
//! return its declared direct dependencies. Two backends implement it —
//! [`TableResolver`] over a fixed in-memory table for offline and test runs,
//! and [`RemoteResolver`] over a downloaded Debian package index.

mod index;
mod remote;
mod table;

pub use index::{parse_depends, parse_package_index};
pub use remote::{fetch_package_index, FetchError, RemoteResolver};
pub use table::{TableError, TableResolver};

/// The lookup capability consumed by the graph builder.
///
/// Implementations must not fail: an unknown package, a transport error, or
/// a malformed index entry all resolve to an empty dependency list. The
/// builder has no catch or retry logic of its own, so errors have to be
/// absorbed on this side of the boundary.
pub trait DependencyResolver {
    /// Returns the declared direct dependencies of `package`, in the order
    /// the backing index declares them.
    fn resolve(&mut self, package: &str) -> Vec<String>;
}

/// Any `FnMut(&str) -> Vec<String>` closure is a resolver, which keeps
/// tests and one-off callers free of wrapper types.
impl<F> DependencyResolver for F
where
    F: FnMut(&str) -> Vec<String>,
{
    fn resolve(&mut self, package: &str) -> Vec<String> {
        self(package)
    }
}
