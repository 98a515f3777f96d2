//! Local caching of remote data files
//!
//! - `key`: validated cache keys (relative object paths)
//! - `metadata`: per-entry size/digest sidecars
//! - `store`: the read-through `BlobCache` itself

pub mod key;
pub mod metadata;
pub mod store;

pub use key::CacheKey;
pub use metadata::EntryMetadata;
pub use store::{BlobCache, EntrySummary};
