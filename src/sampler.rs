//! Crucial-bytes sampling: a fixed-size stand-in for the content of large files.
//!
//! Three windows are read from a file larger than [`THRESHOLD_FILE_SIZE`]:
//!
//! | window | offset          | length |
//! |--------|-----------------|--------|
//! | head   | 0               | T/2    |
//! | middle | size / 2        | T/4    |
//! | tail   | size - T/4      | T/4    |
//!
//! Offsets are used as computed, without clamping. For any size above the
//! threshold the three windows are disjoint and inside the file, so a short
//! read means the file changed after it was stat'd.

use crate::error::{DigestError, ReadPhase, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Files at or below this size are hashed in full by the fast strategy.
/// Also the exact length of a sampled payload.
pub const THRESHOLD_FILE_SIZE: u64 = 16 * 1024;

const HEAD_LEN: u64 = THRESHOLD_FILE_SIZE / 2;
const MIDDLE_LEN: u64 = THRESHOLD_FILE_SIZE / 4;
const TAIL_LEN: u64 = THRESHOLD_FILE_SIZE / 4;

/// One byte range to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub phase: ReadPhase,
    pub offset: u64,
    pub len: u64,
}

/// Head, middle and tail windows for a file of `file_size` bytes.
pub fn crucial_windows(file_size: u64) -> [Window; 3] {
    [
        Window {
            phase: ReadPhase::Head,
            offset: 0,
            len: HEAD_LEN,
        },
        Window {
            phase: ReadPhase::Middle,
            offset: file_size / 2,
            len: MIDDLE_LEN,
        },
        Window {
            phase: ReadPhase::Tail,
            offset: file_size.saturating_sub(TAIL_LEN),
            len: TAIL_LEN,
        },
    ]
}

/// Read head ∥ middle ∥ tail of the file, exactly [`THRESHOLD_FILE_SIZE`] bytes.
///
/// `file_size` should come from a stat of the same file and be larger than the
/// threshold. Any window that can't be filled completely fails the whole call.
pub fn sample_crucial_bytes(path: &Path, file_size: u64) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut payload = vec![0u8; THRESHOLD_FILE_SIZE as usize];
    let mut at = 0usize;
    for w in crucial_windows(file_size) {
        let len = w.len as usize;
        debug!(path = %path.display(), phase = %w.phase, offset = w.offset, len, "reading window");
        read_window(&mut file, w.offset, &mut payload[at..at + len]).map_err(|source| {
            DigestError::Read {
                path: path.to_path_buf(),
                phase: w.phase,
                source,
            }
        })?;
        at += len;
    }
    Ok(payload)
}

fn read_window(file: &mut File, offset: u64, buf: &mut [u8]) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf)
}
