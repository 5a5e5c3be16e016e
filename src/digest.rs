//! Data model: digest strategies, tagged content hashes and the per-file record.

use serde::{Serialize, Serializer};
use std::fmt;

/// How a [`ContentHash`] was produced. Hashes are only comparable within one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Whole file, strong cryptographic hash (thorough mode).
    FullStrong,
    /// Whole file, fast checksum. Small files only.
    FullFast,
    /// Head, middle and tail windows, fast checksum. Large files only.
    SampledFast,
}

impl Strategy {
    /// Tag written in front of the hex payload.
    pub fn prefix(self) -> &'static str {
        match self {
            Strategy::FullStrong => "",
            Strategy::FullFast => "f",
            Strategy::SampledFast => "s",
        }
    }
}

/// A hex-encoded hash tagged with the strategy that produced it.
///
/// Equality includes the strategy, so an `"f"` and an `"s"` hash never compare
/// equal even when their hex payloads happen to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    strategy: Strategy,
    hex: String,
}

impl ContentHash {
    pub fn new(strategy: Strategy, raw: &[u8]) -> Self {
        Self {
            strategy,
            hex: hex::encode(raw),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Lowercase hex of the raw hash bytes, without the strategy prefix.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// True when both hashes were produced the same way and equality means something.
    pub fn is_comparable_with(&self, other: &ContentHash) -> bool {
        self.strategy == other.strategy
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.strategy.prefix(), self.hex)
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Digest of one file: extension, size at read time and the tagged hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileDigest {
    pub extension: String,
    pub size: u64,
    pub hash: ContentHash,
}
