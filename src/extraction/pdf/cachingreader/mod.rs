//! Optional caching layer over a [PageReader], for repeated loads.

use std::{
    collections::HashMap,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::extraction::pdf::{DocumentPages, PageReader};


const MAX_FILE_HASH_LRU: usize = 100;
const MAX_DOCUMENTS_LRU: usize = 64;
const PERSIST_CACHE_VERSION: &str = "1";

/// Wraps a delegate [PageReader], keyed by the PDF's content hash so that a
/// byte-identical copy at a different path still hits.
pub struct CachingPageReader<T> {
    delegate: T,
    pages_cache_path: PathBuf,
    pages_cache: PagesCache,
    file_hashes_cache: FileHashesCache,
}

impl<T> CachingPageReader<T> {
    pub fn load(delegate: T, pages_cache_path: PathBuf) -> Result<Self> {
        let pages_cache = PagesCache::new();
        match Self::read_cache_file(&pages_cache_path) {
            Ok(Some(loaded_cache)) => {
                pages_cache.load(loaded_cache.entries.into_iter());
                let num_entries = pages_cache.len();
                log::debug!("Loaded {num_entries} entries from existing page cache.");
            }
            Ok(None) => {
                log::info!("Did not find existing page cache.");
            }
            Err(err) => {
                log::warn!("Failed to read existing page cache: {err}");
            }
        };

        Ok(Self {
            delegate,
            pages_cache_path,
            pages_cache,
            file_hashes_cache: FileHashesCache::new(),
        })
    }

    fn read_cache_file(cache_path: &Path) -> Result<Option<PersistedCache>> {
        let cache_file = match File::open(cache_path) {
            Ok(cache_file) => cache_file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(err) => {
                Err(err).with_context(|| format!("opening file {:?} to read cache", cache_path))?
            }
        };
        let cache: PersistedCache = serde_json::from_reader(cache_file)
            .with_context(|| format!("reading cache as JSON from file {:?}", cache_path))?;
        if cache.version != PERSIST_CACHE_VERSION {
            return Ok(None);
        }
        Ok(Some(cache))
    }

    /// Writes the cache contents out for a later `load` to pick up.
    pub fn store(self) -> Result<()> {
        let dumped_cache = PersistedCache {
            version: PERSIST_CACHE_VERSION.to_owned(),
            entries: self.pages_cache.dump(),
        };

        let cache_file = File::create(&self.pages_cache_path)
            .with_context(|| format!("opening file {:?} to write cache", self.pages_cache_path))?;
        serde_json::to_writer(cache_file, &dumped_cache)
            .with_context(|| format!("writing cache as JSON to file {:?}", self.pages_cache_path))?;

        Ok(())
    }

    fn hash_file(&self, path: &Path) -> Result<HashDigest> {
        let canonical_path = std::fs::canonicalize(path)
            .with_context(|| format!("resolving canonical path for file {:?}", path))?;

        let stat = std::fs::metadata(&canonical_path)
            .with_context(|| format!("reading metadata for file {:?}", canonical_path))?;
        let size = stat.len();
        let mtime = stat
            .modified()
            .with_context(|| format!("reading modified time for file {:?}", canonical_path))?
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .with_context(|| format!("resolving UNIX timestamp for file {:?}", canonical_path))?;

        if let Some(hash_entry) = self.file_hashes_cache.get(&canonical_path) {
            // Cache hit.
            if hash_entry.st_mtime == mtime && hash_entry.st_size == size {
                // Cache entry likely valid.
                return Ok(hash_entry.digest);
            }
        }

        // Cache miss.

        let mut f = std::fs::File::open(path)
            .with_context(|| format!("opening file {:?} for hashing", path))?;
        let mut hash = HashAlgo::default();
        std::io::copy(&mut f, &mut hash)
            .with_context(|| format!("reading file {:?} for hashing", path))?;
        let digest = hash_digest(&mut hash).with_context(|| "generating PDF content hash")?;

        self.file_hashes_cache.put(
            path.to_owned(),
            FileHashEntry {
                digest,
                st_size: size,
                st_mtime: mtime,
            },
        );

        Ok(digest)
    }
}

impl<T> PageReader for CachingPageReader<T>
where
    T: PageReader,
{
    fn read_pages(&self, pdf_path: &Path) -> Result<DocumentPages> {
        let pdf_hash = self.hash_file(pdf_path)?;

        if let Some(pages) = self.pages_cache.get(&pdf_hash) {
            // Cache hit.
            return Ok(pages);
        }

        // Cache miss.
        let pages = self.delegate.read_pages(pdf_path)?;

        self.pages_cache.put(pdf_hash, pages.clone());

        Ok(pages)
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.store()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct PersistedCache {
    version: String,
    entries: HashMap<HashDigest, DocumentPages>,
}

struct PagesCache {
    pages_cache: Mutex<lru::LruCache<HashDigest, DocumentPages>>,
}

impl PagesCache {
    fn new() -> Self {
        Self {
            pages_cache: Mutex::new(lru::LruCache::new(
                MAX_DOCUMENTS_LRU.try_into().expect("should never be zero"),
            )),
        }
    }

    fn len(&self) -> usize {
        self.pages_cache
            .lock()
            .expect("failed to lock pages_cache for len")
            .len()
    }

    fn load(&self, entries: impl Iterator<Item = (HashDigest, DocumentPages)>) {
        let mut guard = self
            .pages_cache
            .lock()
            .expect("failed to lock pages_cache for load");
        for entry in entries {
            guard.put(entry.0, entry.1);
        }
    }

    fn dump(self) -> HashMap<HashDigest, DocumentPages> {
        self.pages_cache
            .into_inner()
            .expect("failed to lock pages_cache for dump")
            .into_iter()
            .collect()
    }

    fn get(&self, hash: &HashDigest) -> Option<DocumentPages> {
        self.pages_cache
            .lock()
            .expect("failed to lock pages_cache for get")
            .get(hash)
            .cloned()
    }

    fn put(&self, hash: HashDigest, pages: DocumentPages) {
        self.pages_cache
            .lock()
            .expect("failed to lock pages_cache for put")
            .put(hash, pages);
    }
}

#[derive(Clone, Copy)]
struct FileHashEntry {
    digest: HashDigest,
    st_size: u64,
    st_mtime: std::time::Duration,
}

struct FileHashesCache {
    file_hash_cache: Mutex<lru::LruCache<PathBuf, FileHashEntry>>,
}

impl FileHashesCache {
    fn new() -> Self {
        Self {
            file_hash_cache: Mutex::new(lru::LruCache::new(
                MAX_FILE_HASH_LRU.try_into().expect("should never be zero"),
            )),
        }
    }

    fn get(&self, canonical_path: &Path) -> Option<FileHashEntry> {
        self.file_hash_cache
            .lock()
            .expect("failed to lock file_hash_cache for get")
            .get(canonical_path)
            .copied()
    }

    fn put(&self, canonical_path: PathBuf, entry: FileHashEntry) {
        self.file_hash_cache
            .lock()
            .expect("failed to lock file_hash_cache for put")
            .put(canonical_path, entry);
    }
}

type HashAlgo = sha::sha256::Sha256;

const HASH_DIGEST_LEN: usize = 32;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "OwnString")]
struct HashDigest([u8; HASH_DIGEST_LEN]);

impl TryFrom<String> for HashDigest {
    type Error = anyhow::Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let mut digest = HashDigest::default();
        hex::decode_to_slice(value, &mut digest.0)?;
        Ok(digest)
    }
}

#[derive(Serialize)]
struct OwnString(String);

impl From<HashDigest> for OwnString {
    fn from(value: HashDigest) -> Self {
        OwnString(hex::encode(value.0))
    }
}

fn hash_digest(hash: &mut HashAlgo) -> Result<HashDigest> {
    hash.flush().with_context(|| "flushing hash")?;
    let digest_vec = sha::utils::DigestExt::to_bytes(hash);
    let mut digest = HashDigest::default();
    digest.0.copy_from_slice(&digest_vec);
    Ok(digest)
}
