//! fitsfetch - Fetch and cache spectra data files
//!
//! A read-through local cache for immutable data files hosted in
//! S3-compatible object storage: fetch once, serve from disk forever.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod remote;
pub mod retry;

pub use cache::{BlobCache, CacheKey};
pub use error::{FetchError, FetchResult};
pub use remote::{RemoteStore, S3HttpStore};
pub use retry::RetryPolicy;
