//! Strategy selection and digest assembly.

use crate::digest::{ContentHash, FileDigest, Strategy};
use crate::error::{DigestError, ReadPhase, Result};
use crate::fs_utils::{file_extension, non_regular_kind};
use crate::hashing::{Blake3, ContentHasher, Xxh3Fast};
use crate::sampler::{sample_crucial_bytes, THRESHOLD_FILE_SIZE};
use std::fs::{self, File, Metadata};
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Read size for full-content hashing (1 MiB).
const FULL_READ_CHUNK: usize = 1024 * 1024;

/// Computes file digests with a strong hasher for thorough mode and a fast one otherwise.
#[derive(Debug, Default, Clone)]
pub struct Digester<S = Blake3, F = Xxh3Fast> {
    strong: S,
    fast: F,
}

impl<S: ContentHasher, F: ContentHasher> Digester<S, F> {
    pub fn new(strong: S, fast: F) -> Self {
        Self { strong, fast }
    }

    /// Tagged hash of the file at `path`.
    ///
    /// Thorough mode streams the whole file through the strong hasher. Otherwise
    /// files up to [`THRESHOLD_FILE_SIZE`] are hashed whole and larger ones
    /// through their crucial bytes, both with the fast hasher.
    pub fn compute_file_hash(&self, path: &Path, is_thorough: bool) -> Result<ContentHash> {
        let meta = lstat(path)?;
        self.hash_with_metadata(path, &meta, is_thorough)
    }

    /// Extension, size and tagged hash of the file at `path`. Stats the file once.
    pub fn get_digest(&self, path: &Path, is_thorough: bool) -> Result<FileDigest> {
        let meta = lstat(path)?;
        let hash = self.hash_with_metadata(path, &meta, is_thorough)?;
        Ok(FileDigest {
            extension: file_extension(path),
            size: meta.len(),
            hash,
        })
    }

    fn hash_with_metadata(
        &self,
        path: &Path,
        meta: &Metadata,
        is_thorough: bool,
    ) -> Result<ContentHash> {
        if let Some(kind) = non_regular_kind(meta) {
            return Err(DigestError::UnsupportedFileType {
                path: path.to_path_buf(),
                kind,
            });
        }

        let size = meta.len();
        let strategy = select_strategy(size, is_thorough);
        debug!(path = %path.display(), size, ?strategy, "digesting");

        let hasher: &dyn ContentHasher = match strategy {
            Strategy::FullStrong => &self.strong,
            Strategy::FullFast | Strategy::SampledFast => &self.fast,
        };
        let raw = match strategy {
            Strategy::FullStrong | Strategy::FullFast => hash_full(path, size, hasher)?,
            Strategy::SampledFast => hasher.hash(&sample_crucial_bytes(path, size)?)?,
        };

        let hash = ContentHash::new(strategy, &raw);
        trace!(path = %path.display(), algorithm = hasher.name(), %hash, "digest ready");
        Ok(hash)
    }
}

/// Strategy for a regular file of `size` bytes.
pub fn select_strategy(size: u64, is_thorough: bool) -> Strategy {
    if is_thorough {
        Strategy::FullStrong
    } else if size <= THRESHOLD_FILE_SIZE {
        Strategy::FullFast
    } else {
        Strategy::SampledFast
    }
}

/// [`Digester::compute_file_hash`] with BLAKE3 and XXH3-64.
pub fn compute_file_hash(path: &Path, is_thorough: bool) -> Result<ContentHash> {
    Digester::<Blake3, Xxh3Fast>::default().compute_file_hash(path, is_thorough)
}

/// [`Digester::get_digest`] with BLAKE3 and XXH3-64.
pub fn get_digest(path: &Path, is_thorough: bool) -> Result<FileDigest> {
    Digester::<Blake3, Xxh3Fast>::default().get_digest(path, is_thorough)
}

fn lstat(path: &Path) -> Result<Metadata> {
    fs::symlink_metadata(path).map_err(|source| DigestError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}

/// Stream the whole file through `hasher`, one chunk at a time.
fn hash_full(path: &Path, size: u64, hasher: &dyn ContentHasher) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut state = hasher.start();
    // small files don't need the full chunk; size is only a hint here
    let cap = usize::try_from(size)
        .unwrap_or(FULL_READ_CHUNK)
        .clamp(1, FULL_READ_CHUNK);
    let mut buf = vec![0u8; cap];
    loop {
        let n = file.read(&mut buf).map_err(|source| DigestError::Read {
            path: path.to_path_buf(),
            phase: ReadPhase::Full,
            source,
        })?;
        if n == 0 {
            break;
        }
        state.update(&buf[..n]);
    }
    Ok(state.finalize()?)
}
