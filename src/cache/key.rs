//! Cache key validation
//!
//! A key is a relative, slash-separated object path ("spectra/obj123.fits").
//! It is used verbatim as the remote object key and as the local path suffix
//! under the cache root, so traversal and absolute-path forms are rejected
//! at construction.

use crate::error::{FetchError, FetchResult};
use std::fmt;
use std::path::PathBuf;

/// A validated identifier for a remote object within a bucket.
///
/// Two distinct remote objects never share a key within the same bucket;
/// the key doubles as the relative on-disk path of the cached copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Validate and construct a cache key.
    ///
    /// Colons are allowed except as a single-letter drive prefix ("C:..."),
    /// which is rejected as a drive-relative Windows path.
    pub fn new(raw: impl Into<String>) -> FetchResult<Self> {
        let raw = raw.into();

        let reject = |reason: &str| -> FetchError {
            FetchError::InvalidKey {
                key: raw.clone(),
                reason: reason.to_string(),
            }
        };

        if raw.is_empty() {
            return Err(reject("key is empty"));
        }
        if raw.contains('\0') {
            return Err(reject("key contains a NUL byte"));
        }
        if raw.contains('\\') {
            return Err(reject("backslashes are not allowed; use '/' separators"));
        }
        if raw.starts_with('/') {
            return Err(reject("key must be a relative path"));
        }
        if raw.ends_with('/') {
            return Err(reject("key must name an object, not a directory"));
        }
        // Windows drive prefixes ("C:...") would escape the cache root there
        if raw.len() >= 2 && raw.as_bytes()[0].is_ascii_alphabetic() && raw.as_bytes()[1] == b':' {
            return Err(reject("key must be a relative path"));
        }

        for segment in raw.split('/') {
            match segment {
                "" => return Err(reject("key contains an empty path segment")),
                "." | ".." => return Err(reject("path traversal segments are not allowed")),
                _ => {}
            }
        }

        Ok(Self(raw))
    }

    /// The raw key string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as a relative filesystem path, built segment by segment
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.0.split('/') {
            path.push(segment);
        }
        path
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CacheKey {
    type Err = FetchError;

    fn from_str(s: &str) -> FetchResult<Self> {
        Self::new(s)
    }
}
