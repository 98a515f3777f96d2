//! Read-through blob cache
//!
//! Maps a validated key to a local file, fetching from the remote store on
//! first access and serving every later access from disk. Downloads stream
//! into a temp file in the destination directory and are renamed into place
//! only after the byte count checks out, so a reader never observes a partial
//! object. Entries are immutable once materialized; only `evict` removes them.

use crate::cache::key::CacheKey;
use crate::cache::metadata::{digest_file, EntryMetadata};
use crate::error::{FetchError, FetchResult};
use crate::remote::RemoteStore;
use crate::retry::RetryPolicy;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

const OBJECTS_DIR: &str = "objects";
const META_DIR: &str = "meta";

/// Summary of one cached entry, for listings
#[derive(Debug, Clone)]
pub struct EntrySummary {
    /// The cache key, slash-separated
    pub key: String,
    /// Object size in bytes
    pub size: u64,
    /// When the object was fetched
    pub fetched_at: DateTime<Utc>,
}

/// A local read-through cache over a remote blob store.
///
/// Safe to share across threads: concurrent `resolve` calls for the same key
/// perform exactly one fetch, and fetches for distinct keys run in parallel.
#[derive(Debug)]
pub struct BlobCache<S: RemoteStore> {
    root: PathBuf,
    store: S,
    retry: RetryPolicy,
    // Per-key fetch leases. The outer lock is held only to look up or insert
    // a lease, never across a download.
    leases: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: RemoteStore> BlobCache<S> {
    /// Create a cache rooted at `root` with the default retry policy
    pub fn new(root: impl Into<PathBuf>, store: S) -> Self {
        Self::with_retry(root, store, RetryPolicy::default())
    }

    /// Create a cache with an explicit retry policy
    pub fn with_retry(root: impl Into<PathBuf>, store: S, retry: RetryPolicy) -> Self {
        Self {
            root: root.into(),
            store,
            retry,
            leases: Mutex::new(HashMap::new()),
        }
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path where the object for `key` lives once cached
    pub fn object_path(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(OBJECTS_DIR)
            .join(self.store.namespace())
            .join(key.relative_path())
    }

    fn meta_path(&self, key: &CacheKey) -> PathBuf {
        let mut path = self
            .root
            .join(META_DIR)
            .join(self.store.namespace())
            .join(key.relative_path());
        let name = match path.file_name() {
            Some(n) => format!("{}.json", n.to_string_lossy()),
            None => "entry.json".to_string(),
        };
        path.set_file_name(name);
        path
    }

    /// Return the local path for `key`, fetching the object on first access.
    ///
    /// The fast path (entry present and size-consistent with its sidecar)
    /// never touches the network.
    pub fn resolve(&self, key: &CacheKey) -> FetchResult<PathBuf> {
        let object_path = self.object_path(key);

        if self.entry_is_valid(key)? {
            debug!(key = %key, "cache hit");
            return Ok(object_path);
        }

        let lease = self.lease_for(key);
        let _guard = lease.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have completed the fetch while we waited
        if self.entry_is_valid(key)? {
            debug!(key = %key, "cache hit after waiting for in-flight fetch");
            return Ok(object_path);
        }

        debug!(key = %key, "cache miss");
        self.fetch_with_retry(key)?;
        Ok(object_path)
    }

    /// Whether a valid entry for `key` is already on disk
    pub fn contains(&self, key: &CacheKey) -> FetchResult<bool> {
        self.entry_is_valid(key)
    }

    /// Remove the cached entry for `key`, if present. Idempotent.
    pub fn evict(&self, key: &CacheKey) -> FetchResult<()> {
        remove_if_exists(&self.object_path(key))?;
        remove_if_exists(&self.meta_path(key))?;
        debug!(key = %key, "evicted");
        Ok(())
    }

    /// Re-check an existing entry's integrity (size and digest) without
    /// re-fetching. Returns `false` for missing or corrupt entries; a corrupt
    /// entry is invalidated so the next `resolve` repairs it.
    pub fn verify(&self, key: &CacheKey) -> FetchResult<bool> {
        let object_path = self.object_path(key);
        let meta_path = self.meta_path(key);

        let Some(mut meta) = EntryMetadata::load(&meta_path)? else {
            return Ok(false);
        };

        let size = match fs::metadata(&object_path) {
            Ok(m) if m.is_file() => m.len(),
            Ok(_) => return Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(FetchError::io(
                    format!("inspecting {}", object_path.display()),
                    e,
                ))
            }
        };

        let ok = size == meta.size && digest_file(&object_path)? == meta.sha256;

        if ok {
            meta.verified_at = Some(Utc::now());
            meta.save(&meta_path)?;
        } else {
            warn!(key = %key, "cached entry failed integrity check, invalidating");
            remove_if_exists(&meta_path)?;
        }

        Ok(ok)
    }

    /// Enumerate all valid cached entries in this store's namespace
    pub fn entries(&self) -> FetchResult<Vec<EntrySummary>> {
        let base = self.root.join(OBJECTS_DIR).join(self.store.namespace());
        let mut out = Vec::new();
        if base.is_dir() {
            self.collect_entries(&base, &base, &mut out)?;
        }
        out.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(out)
    }

    fn collect_entries(
        &self,
        base: &Path,
        dir: &Path,
        out: &mut Vec<EntrySummary>,
    ) -> FetchResult<()> {
        let entries = fs::read_dir(dir)
            .map_err(|e| FetchError::io(format!("listing {}", dir.display()), e))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| FetchError::io(format!("listing {}", dir.display()), e))?;
            let path = entry.path();

            if path.is_dir() {
                self.collect_entries(base, &path, out)?;
                continue;
            }

            let Ok(rel) = path.strip_prefix(base) else {
                continue;
            };
            let key_str = rel
                .iter()
                .map(|s| s.to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let Ok(key) = CacheKey::new(key_str.clone()) else {
                continue;
            };

            // Files without a sidecar (abandoned temp files, foreign files)
            // are not entries
            if let Some(meta) = EntryMetadata::load(&self.meta_path(&key))? {
                out.push(EntrySummary {
                    key: key_str,
                    size: meta.size,
                    fetched_at: meta.fetched_at,
                });
            }
        }

        Ok(())
    }

    fn lease_for(&self, key: &CacheKey) -> Arc<Mutex<()>> {
        let mut leases = self.leases.lock().unwrap_or_else(PoisonError::into_inner);
        leases
            .entry(key.as_str().to_string())
            .or_default()
            .clone()
    }

    fn entry_is_valid(&self, key: &CacheKey) -> FetchResult<bool> {
        let Some(meta) = EntryMetadata::load(&self.meta_path(key))? else {
            return Ok(false);
        };

        let object_path = self.object_path(key);
        match fs::metadata(&object_path) {
            Ok(m) if m.is_file() => Ok(m.len() == meta.size),
            Ok(_) => Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FetchError::io(
                format!("inspecting {}", object_path.display()),
                e,
            )),
        }
    }

    fn fetch_with_retry(&self, key: &CacheKey) -> FetchResult<()> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.download(key) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_retryable() && attempt < self.retry.attempts() => {
                    let delay = self.retry.delay_after(attempt);
                    warn!(
                        key = %key,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "fetch failed, retrying"
                    );
                    thread::sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One download attempt: stream to a temp file next to the destination,
    /// check the byte count, rename into place, then write the sidecar.
    fn download(&self, key: &CacheKey) -> FetchResult<()> {
        let object_path = self.object_path(key);
        let meta_path = self.meta_path(key);

        let object_dir = parent_dir(&object_path)?;
        fs::create_dir_all(object_dir)
            .map_err(|e| FetchError::io(format!("creating {}", object_dir.display()), e))?;
        let meta_dir = parent_dir(&meta_path)?;
        fs::create_dir_all(meta_dir)
            .map_err(|e| FetchError::io(format!("creating {}", meta_dir.display()), e))?;

        let remote = self.store.fetch(key)?;

        // Temp file in the destination directory: rename stays on one volume
        let mut tmp = NamedTempFile::new_in(object_dir)
            .map_err(|e| FetchError::io(format!("creating temp file in {}", object_dir.display()), e))?;

        let mut reader = remote.reader;
        let mut hasher = Sha256::new();
        let mut written: u64 = 0;
        let mut buf = [0u8; 64 * 1024];

        loop {
            let n = reader
                .read(&mut buf)
                .map_err(|e| FetchError::transport(key.to_string(), e.to_string()))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            tmp.as_file_mut()
                .write_all(&buf[..n])
                .map_err(|e| FetchError::io(format!("writing {}", object_path.display()), e))?;
            written += n as u64;
        }

        if let Some(expected) = remote.size {
            if written != expected {
                return Err(FetchError::IntegrityMismatch {
                    key: key.to_string(),
                    expected: format!("{} bytes", expected),
                    actual: format!("{} bytes", written),
                });
            }
        }

        tmp.as_file()
            .sync_all()
            .map_err(|e| FetchError::io(format!("syncing {}", object_path.display()), e))?;

        // Rename before the sidecar: a crash between the two leaves
        // object-without-sidecar, which reads as a miss. The reverse order
        // could pair a fresh sidecar with a stale file at the final path.
        tmp.persist(&object_path).map_err(|e| {
            FetchError::io(
                format!("renaming download into {}", object_path.display()),
                e.error,
            )
        })?;

        let meta = EntryMetadata::new(written, hex::encode(hasher.finalize()));
        meta.save(&meta_path)?;

        info!(key = %key, bytes = written, "fetched object into cache");
        Ok(())
    }
}

fn parent_dir(path: &Path) -> FetchResult<&Path> {
    path.parent().ok_or_else(|| {
        FetchError::io(
            format!("resolving parent of {}", path.display()),
            io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"),
        )
    })
}

fn remove_if_exists(path: &Path) -> FetchResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FetchError::io(format!("removing {}", path.display()), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteObject;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    /// How the fake store should misbehave
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fault {
        None,
        /// The body stream dies halfway through
        DropHalfway,
        /// Reported content length disagrees with the body
        WrongLength,
    }

    struct FakeStore {
        objects: HashMap<String, Vec<u8>>,
        fetches: Arc<AtomicUsize>,
        fault: Fault,
        /// Transport failures to inject before succeeding
        transient_failures: AtomicUsize,
        /// Delay per fetch, to widen concurrency windows
        latency: Duration,
    }

    impl FakeStore {
        fn new(objects: Vec<(&str, Vec<u8>)>) -> Self {
            Self {
                objects: objects
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                fetches: Arc::new(AtomicUsize::new(0)),
                fault: Fault::None,
                transient_failures: AtomicUsize::new(0),
                latency: Duration::ZERO,
            }
        }

        fn fetch_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.fetches)
        }
    }

    /// Reader that yields a prefix of the data, then a connection error
    struct TruncatedReader {
        data: Vec<u8>,
        pos: usize,
        limit: usize,
    }

    impl Read for TruncatedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.limit {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset mid-body",
                ));
            }
            let n = buf.len().min(self.limit - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl RemoteStore for FakeStore {
        fn namespace(&self) -> &str {
            "test-bucket"
        }

        fn fetch(&self, key: &CacheKey) -> FetchResult<RemoteObject> {
            self.fetches.fetch_add(1, Ordering::SeqCst);

            if !self.latency.is_zero() {
                thread::sleep(self.latency);
            }

            if self
                .transient_failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(FetchError::transport(key.to_string(), "injected failure"));
            }

            let data = self
                .objects
                .get(key.as_str())
                .ok_or_else(|| FetchError::RemoteNotFound {
                    bucket: self.namespace().to_string(),
                    key: key.to_string(),
                })?
                .clone();

            let len = data.len() as u64;
            match self.fault {
                Fault::None => Ok(RemoteObject {
                    reader: Box::new(io::Cursor::new(data)),
                    size: Some(len),
                }),
                Fault::DropHalfway => {
                    let limit = data.len() / 2;
                    Ok(RemoteObject {
                        reader: Box::new(TruncatedReader {
                            data,
                            pos: 0,
                            limit,
                        }),
                        size: Some(len),
                    })
                }
                Fault::WrongLength => Ok(RemoteObject {
                    reader: Box::new(io::Cursor::new(data)),
                    size: Some(len + 1),
                }),
            }
        }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            initial_delay_ms: 1,
            max_delay_ms: 2,
        }
    }

    fn key(s: &str) -> CacheKey {
        CacheKey::new(s).unwrap()
    }

    #[test]
    fn resolve_fetches_then_serves_from_disk() {
        let dir = TempDir::new().unwrap();
        let payload = vec![7u8; 4096];
        let store = FakeStore::new(vec![("spectra/obj123.fits", payload.clone())]);
        let fetches = store.fetch_counter();
        let cache = BlobCache::new(dir.path(), store);

        let k = key("spectra/obj123.fits");
        let path = cache.resolve(&k).unwrap();
        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 4096);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        // Second call: same path, no network
        let again = cache.resolve(&k).unwrap();
        assert_eq!(again, path);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        // Evicting forces a re-fetch
        cache.evict(&k).unwrap();
        assert!(!path.exists());
        cache.resolve(&k).unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn resolved_bytes_match_remote() {
        let dir = TempDir::new().unwrap();
        let payload = b"SIMPLE  =                    T".to_vec();
        let store = FakeStore::new(vec![("img.fits", payload.clone())]);
        let cache = BlobCache::new(dir.path(), store);

        let path = cache.resolve(&key("img.fits")).unwrap();
        assert_eq!(fs::read(path).unwrap(), payload);
    }

    #[test]
    fn concurrent_resolves_fetch_once() {
        let dir = TempDir::new().unwrap();
        let payload = vec![1u8; 65_536];
        let mut store = FakeStore::new(vec![("spectra/shared.fits", payload.clone())]);
        store.latency = Duration::from_millis(50);
        let fetches = store.fetch_counter();
        let cache = BlobCache::new(dir.path(), store);

        let k = key("spectra/shared.fits");
        thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let cache = &cache;
                    let k = &k;
                    s.spawn(move || cache.resolve(k).unwrap())
                })
                .collect();
            for handle in handles {
                let path = handle.join().unwrap();
                assert!(path.exists());
            }
        });

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("a/b", b"one".to_vec()), ("a/b2", b"two".to_vec())]);
        let cache = BlobCache::new(dir.path(), store);

        let p1 = cache.resolve(&key("a/b")).unwrap();
        let p2 = cache.resolve(&key("a/b2")).unwrap();

        assert_ne!(p1, p2);
        assert_eq!(fs::read(p1).unwrap(), b"one");
        assert_eq!(fs::read(p2).unwrap(), b"two");
    }

    #[test]
    fn truncated_download_leaves_no_artifact() {
        let dir = TempDir::new().unwrap();
        let payload = vec![9u8; 8192];
        let mut store = FakeStore::new(vec![("big.fits", payload.clone())]);
        store.fault = Fault::DropHalfway;
        let cache = BlobCache::with_retry(dir.path(), store, RetryPolicy::none());

        let k = key("big.fits");
        let err = cache.resolve(&k).unwrap_err();
        assert!(err.is_retryable());
        assert!(!cache.object_path(&k).exists());

        // A healthy store against the same root recovers cleanly
        let store = FakeStore::new(vec![("big.fits", payload.clone())]);
        let cache = BlobCache::new(dir.path(), store);
        let path = cache.resolve(&k).unwrap();
        assert_eq!(fs::metadata(path).unwrap().len(), 8192);
    }

    #[test]
    fn length_mismatch_is_integrity_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FakeStore::new(vec![("short.fits", b"abc".to_vec())]);
        store.fault = Fault::WrongLength;
        let cache = BlobCache::with_retry(dir.path(), store, RetryPolicy::none());

        let k = key("short.fits");
        let err = cache.resolve(&k).unwrap_err();
        assert!(matches!(err, FetchError::IntegrityMismatch { .. }));
        assert!(!err.is_retryable());
        assert!(!cache.object_path(&k).exists());
    }

    #[test]
    fn missing_object_is_not_retried() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![]);
        let fetches = store.fetch_counter();
        let cache = BlobCache::with_retry(dir.path(), store, fast_retry());

        let err = cache.resolve(&key("nope.fits")).unwrap_err();
        assert!(matches!(err, FetchError::RemoteNotFound { .. }));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transient_failures_are_retried() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("flaky.fits", b"data".to_vec())]);
        store.transient_failures.store(2, Ordering::SeqCst);
        let fetches = store.fetch_counter();
        let cache = BlobCache::with_retry(dir.path(), store, fast_retry());

        let path = cache.resolve(&key("flaky.fits")).unwrap();
        assert!(path.exists());
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn retries_are_bounded() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("down.fits", b"data".to_vec())]);
        store.transient_failures.store(100, Ordering::SeqCst);
        let fetches = store.fetch_counter();
        let cache = BlobCache::with_retry(dir.path(), store, fast_retry());

        let err = cache.resolve(&key("down.fits")).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn verify_detects_and_invalidates_corruption() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("obj.fits", b"original-bytes!!".to_vec())]);
        let fetches = store.fetch_counter();
        let cache = BlobCache::new(dir.path(), store);

        let k = key("obj.fits");
        let path = cache.resolve(&k).unwrap();
        assert!(cache.verify(&k).unwrap());

        // Same-length corruption slips past the size fast path
        fs::write(&path, b"corrupted-bytes!").unwrap();
        assert!(!cache.verify(&k).unwrap());

        // Next resolve repairs the entry
        let path = cache.resolve(&k).unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(fs::read(path).unwrap(), b"original-bytes!!");
        assert!(cache.verify(&k).unwrap());
    }

    #[test]
    fn verify_missing_entry_is_false() {
        let dir = TempDir::new().unwrap();
        let cache = BlobCache::new(dir.path(), FakeStore::new(vec![]));
        assert!(!cache.verify(&key("ghost.fits")).unwrap());
    }

    #[test]
    fn size_change_invalidates_fast_path() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("obj.fits", b"0123456789".to_vec())]);
        let fetches = store.fetch_counter();
        let cache = BlobCache::new(dir.path(), store);

        let k = key("obj.fits");
        let path = cache.resolve(&k).unwrap();

        fs::write(&path, b"0123").unwrap();
        cache.resolve(&k).unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(fs::metadata(&path).unwrap().len(), 10);
    }

    #[test]
    fn evict_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let cache = BlobCache::new(dir.path(), FakeStore::new(vec![]));

        let k = key("never/cached.fits");
        cache.evict(&k).unwrap();
        cache.evict(&k).unwrap();
    }

    #[test]
    fn entries_lists_cached_objects() {
        let dir = TempDir::new().unwrap();
        let store = FakeStore::new(vec![("a/one.fits", b"11".to_vec()), ("b/two.fits", b"2222".to_vec())]);
        let cache = BlobCache::new(dir.path(), store);

        assert!(cache.entries().unwrap().is_empty());

        cache.resolve(&key("b/two.fits")).unwrap();
        cache.resolve(&key("a/one.fits")).unwrap();

        let entries = cache.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "a/one.fits");
        assert_eq!(entries[0].size, 2);
        assert_eq!(entries[1].key, "b/two.fits");
        assert_eq!(entries[1].size, 4);
    }

    #[test]
    fn sidecar_less_files_are_not_entries() {
        let dir = TempDir::new().unwrap();
        let cache = BlobCache::new(dir.path(), FakeStore::new(vec![]));

        // Simulate an abandoned partial download in the objects tree
        let stray = dir.path().join(OBJECTS_DIR).join("test-bucket").join("stray.part");
        fs::create_dir_all(stray.parent().unwrap()).unwrap();
        fs::write(&stray, b"partial").unwrap();

        assert!(cache.entries().unwrap().is_empty());
    }

    #[test]
    fn object_without_sidecar_is_a_miss_and_refetched() {
        let dir = TempDir::new().unwrap();
        let payload = b"good bytes".to_vec();
        let store = FakeStore::new(vec![("img.fits", payload.clone())]);
        let fetches = store.fetch_counter();
        let cache = BlobCache::new(dir.path(), store);
        let k = key("img.fits");

        // A fetch killed after the rename leaves the object with no sidecar;
        // the same shape as a corrupt entry whose sidecar verify() removed.
        // Either way the entry must read as a miss, never as a hit on the
        // bytes already at the final path.
        let object_path = cache.object_path(&k);
        fs::create_dir_all(object_path.parent().unwrap()).unwrap();
        fs::write(&object_path, b"stale corrupt bytes").unwrap();

        assert!(!cache.contains(&k).unwrap());
        let path = cache.resolve(&k).unwrap();
        assert_eq!(fs::read(&path).unwrap(), payload);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(cache.verify(&k).unwrap());
    }

    #[test]
    fn object_and_meta_paths_are_namespaced() {
        let dir = TempDir::new().unwrap();
        let cache = BlobCache::new(dir.path(), FakeStore::new(vec![]));
        let k = key("a/b.fits");

        let object = cache.object_path(&k);
        assert!(object.starts_with(dir.path().join("objects").join("test-bucket")));

        let meta = cache.meta_path(&k);
        assert!(meta.starts_with(dir.path().join("meta").join("test-bucket")));
        assert!(meta.to_string_lossy().ends_with("b.fits.json"));
    }
}
