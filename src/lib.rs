//! Content fingerprints for duplicate file detection.
//!
//! [`get_digest`] stats a file once and returns its extension, size and a
//! tagged [`ContentHash`]. The tag ([`Strategy`]) records how the hash was made:
//!
//! * `""` full content, BLAKE3 (thorough mode)
//! * `"f"` full content, XXH3-64 (files up to [`THRESHOLD_FILE_SIZE`])
//! * `"s"` head, middle and tail windows, XXH3-64 (larger files)
//!
//! Hashes from different strategies are never equal. Callers that group files
//! should also key on size, since sampled hashes ignore most of the content.

pub mod digest;
pub mod digester;
pub mod error;
pub mod fs_utils;
pub mod hashing;
pub mod sampler;

pub use digest::{ContentHash, FileDigest, Strategy};
pub use digester::{compute_file_hash, get_digest, select_strategy, Digester};
pub use error::{DigestError, HashError, ReadPhase, Result};
pub use hashing::{Blake3, ContentHasher, HashState, Xxh3Fast};
pub use sampler::{crucial_windows, sample_crucial_bytes, Window, THRESHOLD_FILE_SIZE};
