//! Filesystem helpers: extension parsing and file-type classification.

use std::fs::Metadata;
use std::path::Path;

/// Lowercased lexical extension of `path`, without the dot.
///
/// Examples:
/// - "IMG_001.JPG" -> "jpg"
/// - "archive.tar.gz" -> "gz"
/// - "Makefile", ".bashrc" -> ""
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Short description of what a non-regular file is, `None` for regular files.
/// Expects metadata from `symlink_metadata` so links are seen as links.
pub fn non_regular_kind(meta: &Metadata) -> Option<&'static str> {
    let ft = meta.file_type();
    if ft.is_file() {
        None
    } else if ft.is_dir() {
        Some("directory")
    } else if ft.is_symlink() {
        Some("symlink")
    } else {
        Some("special file")
    }
}
