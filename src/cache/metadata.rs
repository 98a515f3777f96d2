//! Entry metadata sidecars
//!
//! Each cached object carries a JSON sidecar recording the size and SHA256
//! digest observed at fetch time. The sidecar is what makes an on-disk file a
//! valid cache entry; a bare file without one (e.g. an abandoned partial
//! download from an older layout) is treated as a miss.

use crate::error::{FetchError, FetchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

/// Metadata recorded for one cached object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Object size in bytes
    pub size: u64,

    /// SHA256 of the object contents, lowercase hex
    pub sha256: String,

    /// When the object was fetched from the remote store
    pub fetched_at: DateTime<Utc>,

    /// When the entry last passed a full integrity check
    pub verified_at: Option<DateTime<Utc>>,
}

impl EntryMetadata {
    /// Create metadata for a freshly fetched object
    pub fn new(size: u64, sha256: String) -> Self {
        Self {
            size,
            sha256,
            fetched_at: Utc::now(),
            verified_at: None,
        }
    }

    /// Load a sidecar, returning `None` if it does not exist
    pub fn load(path: &Path) -> FetchResult<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(FetchError::io(
                    format!("reading metadata {}", path.display()),
                    e,
                ))
            }
        };

        // A malformed sidecar invalidates the entry rather than erroring:
        // the object will simply be re-fetched.
        match serde_json::from_str(&content) {
            Ok(meta) => Ok(Some(meta)),
            Err(_) => Ok(None),
        }
    }

    /// Write the sidecar to disk
    pub fn save(&self, path: &Path) -> FetchResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| FetchError::io(format!("writing metadata {}", path.display()), e))
    }
}

/// Compute the SHA256 of a file's contents, streaming (spectra files are
/// large). Returns lowercase hex.
pub fn digest_file(path: &Path) -> FetchResult<String> {
    let mut file = fs::File::open(path)
        .map_err(|e| FetchError::io(format!("opening {} for hashing", path.display()), e))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .map_err(|e| FetchError::io(format!("hashing {}", path.display()), e))?;

    Ok(hex::encode(hasher.finalize()))
}
