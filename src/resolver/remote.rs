//! Remote package index retrieval.
//!
//! Downloads the compressed `Packages.gz` index from a Debian-style
//! repository, decompresses it, and parses it once into an in-memory table
//! that serves every subsequent lookup.

use std::collections::HashMap;
use std::io::Read;
use std::time::Duration;

use flate2::read::GzDecoder;
use tracing::{debug, info, warn};

use super::index::parse_package_index;
use super::DependencyResolver;

/// Location of the binary package index within a repository, fixed to the
/// release/component/architecture triple the tool targets.
const INDEX_PATH: &str = "dists/jammy/main/binary-amd64/Packages.gz";

/// Download timeout; the index is tens of megabytes on a full mirror.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while retrieving or decoding the remote index.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed or returned an error status.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The downloaded payload is not valid gzip data.
    #[error("failed to decompress package index: {0}")]
    Decompress(#[from] std::io::Error),

    /// The decompressed index is not valid UTF-8.
    #[error("package index is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Downloads and decompresses the package index of `repository`.
///
/// `repository` is the base URL of the mirror, e.g.
/// `http://archive.ubuntu.com/ubuntu`; the index path within it is fixed.
/// Returns the decompressed index text.
pub fn fetch_package_index(repository: &str) -> Result<String, FetchError> {
    let url = format!("{}/{}", repository.trim_end_matches('/'), INDEX_PATH);
    debug!(%url, "downloading package index");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let compressed = client.get(&url).send()?.error_for_status()?.bytes()?;
    debug!(bytes = compressed.len(), "package index downloaded");

    let mut decoder = GzDecoder::new(compressed.as_ref());
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;

    Ok(String::from_utf8(decompressed)?)
}

/// Resolver backed by a remote Debian-style repository.
///
/// The index is downloaded and parsed on the first lookup; every later call
/// is served from the cached table. A failed download degrades to an empty
/// table — the failure is logged and all packages resolve to "no known
/// dependencies", so an unreachable mirror cannot abort a traversal.
pub struct RemoteResolver {
    repository: String,
    packages: Option<HashMap<String, Vec<String>>>,
}

impl RemoteResolver {
    /// Creates a resolver for the repository at `repository`. No network
    /// traffic happens until the first [`DependencyResolver::resolve`] call.
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            packages: None,
        }
    }

    /// Returns true once the index has been downloaded (or the download has
    /// failed and the empty fallback table is in place).
    pub fn is_loaded(&self) -> bool {
        self.packages.is_some()
    }
}

impl DependencyResolver for RemoteResolver {
    fn resolve(&mut self, package: &str) -> Vec<String> {
        if self.packages.is_none() {
            self.packages = Some(load_table(&self.repository));
        }
        self.packages
            .as_ref()
            .and_then(|table| table.get(package))
            .cloned()
            .unwrap_or_default()
    }
}

/// Fetches and parses the index, degrading to an empty table on failure.
fn load_table(repository: &str) -> HashMap<String, Vec<String>> {
    match fetch_package_index(repository) {
        Ok(content) => {
            let table = parse_package_index(&content);
            info!(packages = table.len(), "package index loaded");
            table
        }
        Err(err) => {
            warn!(error = %err, "failed to load package index, continuing with an empty table");
            HashMap::new()
        }
    }
}
