//! Hashing backends: BLAKE3 for thorough digests, XXH3-64 for fast ones.

use crate::error::HashError;
use xxhash_rust::xxh3::Xxh3;

/// An in-progress hash, fed in chunks.
pub trait HashState {
    fn update(&mut self, chunk: &[u8]);

    /// Consume the state and return the raw digest bytes.
    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HashError>;
}

/// A hash algorithm that can digest a payload in one or more chunks.
pub trait ContentHasher {
    /// Short algorithm name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fresh state for one digest.
    fn start(&self) -> Box<dyn HashState>;

    /// Hash an in-memory `payload` in one pass.
    fn hash(&self, payload: &[u8]) -> Result<Vec<u8>, HashError> {
        let mut state = self.start();
        state.update(payload);
        state.finalize()
    }
}

/// BLAKE3, 256-bit output. Strong enough to treat equal digests as equal content.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3;

impl ContentHasher for Blake3 {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn start(&self) -> Box<dyn HashState> {
        Box::new(blake3::Hasher::new())
    }
}

impl HashState for blake3::Hasher {
    fn update(&mut self, chunk: &[u8]) {
        blake3::Hasher::update(self, chunk);
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HashError> {
        Ok(blake3::Hasher::finalize(&self).as_bytes().to_vec())
    }
}

/// XXH3, 64-bit output, big-endian bytes. Non-cryptographic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Fast;

impl ContentHasher for Xxh3Fast {
    fn name(&self) -> &'static str {
        "xxh3-64"
    }

    fn start(&self) -> Box<dyn HashState> {
        Box::new(Xxh3::new())
    }
}

impl HashState for Xxh3 {
    fn update(&mut self, chunk: &[u8]) {
        Xxh3::update(self, chunk);
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HashError> {
        Ok(self.digest().to_be_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake3_matches_reference() {
        let out = Blake3.hash(b"abc").unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(hex::encode(&out), blake3::hash(b"abc").to_hex().to_string());
    }

    #[test]
    fn xxh3_matches_one_shot() {
        let out = Xxh3Fast.hash(b"hello world").unwrap();
        assert_eq!(out, xxhash_rust::xxh3::xxh3_64(b"hello world").to_be_bytes());
    }

    #[test]
    fn xxh3_empty_input() {
        let out = Xxh3Fast.hash(&[]).unwrap();
        assert_eq!(hex::encode(out), format!("{:016x}", xxhash_rust::xxh3::xxh3_64(&[])));
    }

    #[test]
    fn chunked_updates_match_one_shot() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 97) as u8).collect();
        for hasher in [&Blake3 as &dyn ContentHasher, &Xxh3Fast] {
            let mut state = hasher.start();
            for chunk in data.chunks(333) {
                state.update(chunk);
            }
            assert_eq!(state.finalize().unwrap(), hasher.hash(&data).unwrap(), "{}", hasher.name());
        }
    }
}
