//! Remote blob store access
//!
//! The cache only ever reads from the remote store. `S3HttpStore` covers the
//! public-bucket case: objects are fetched with plain HTTPS GETs against the
//! bucket's virtual-hosted URL, no credentials involved.

use crate::cache::key::CacheKey;
use crate::error::{FetchError, FetchResult};
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// A remote object opened for reading
pub struct RemoteObject {
    /// Blocking byte stream of the object contents
    pub reader: Box<dyn Read + Send>,

    /// Object size as reported by the store, if known
    pub size: Option<u64>,
}

/// Read-only access to a bucket of immutable objects
pub trait RemoteStore: Send + Sync {
    /// The bucket or namespace this store serves
    fn namespace(&self) -> &str;

    /// Open the object at `key` for reading
    fn fetch(&self, key: &CacheKey) -> FetchResult<RemoteObject>;
}

/// HTTP GET access to a public S3 (or S3-compatible) bucket
#[derive(Debug)]
pub struct S3HttpStore {
    bucket: String,
    endpoint: Option<String>,
    agent: ureq::Agent,
}

impl S3HttpStore {
    /// Create a store for a public bucket on AWS S3
    pub fn new(bucket: impl Into<String>, timeout: Duration) -> Self {
        Self::with_endpoint(bucket, None, timeout)
    }

    /// Create a store with an explicit endpoint (S3-compatible services,
    /// local test servers). The endpoint replaces the
    /// `https://{bucket}.s3.amazonaws.com` base; keys are appended to it.
    pub fn with_endpoint(
        bucket: impl Into<String>,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();

        Self {
            bucket: bucket.into(),
            endpoint,
            agent,
        }
    }

    fn object_url(&self, key: &CacheKey) -> String {
        match &self.endpoint {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket, key),
        }
    }
}

impl RemoteStore for S3HttpStore {
    fn namespace(&self) -> &str {
        &self.bucket
    }

    fn fetch(&self, key: &CacheKey) -> FetchResult<RemoteObject> {
        let url = self.object_url(key);
        debug!("GET {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(404)) => {
                return Err(FetchError::RemoteNotFound {
                    bucket: self.bucket.clone(),
                    key: key.to_string(),
                })
            }
            Err(ureq::Error::StatusCode(code)) => {
                return Err(FetchError::transport(
                    key.to_string(),
                    format!("unexpected HTTP status {}", code),
                ))
            }
            Err(e) => return Err(FetchError::transport(key.to_string(), e.to_string())),
        };

        let size = response
            .headers()
            .get(ureq::http::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        Ok(RemoteObject {
            reader: Box::new(response.into_body().into_reader()),
            size,
        })
    }
}
