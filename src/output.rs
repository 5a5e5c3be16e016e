//! Output: per-file digest lines, human and JSON printers.

use bytesize::ByteSize;
use dupdigest::{FileDigest, Strategy};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize, Clone)]
pub struct DigestRow {
    pub path: PathBuf,
    pub extension: String,
    pub size: u64,
    pub strategy: Strategy,
    pub digest: String,
}

impl DigestRow {
    pub fn new(path: PathBuf, d: &FileDigest) -> Self {
        Self {
            path,
            extension: d.extension.clone(),
            size: d.size,
            strategy: d.hash.strategy(),
            digest: d.hash.to_string(),
        }
    }

    /// `digest  size  .ext  path`, extension column left empty when there is none.
    pub fn human_line(&self) -> String {
        let ext = if self.extension.is_empty() {
            String::new()
        } else {
            format!(".{}", self.extension)
        };
        format!(
            "{}  {}  {}  {}",
            self.digest,
            ByteSize(self.size),
            ext,
            self.path.display()
        )
    }
}

/// Print one line per digested file, then a summary.
pub fn print_human(rows: &[DigestRow], failed: usize, quiet: bool) {
    if !quiet {
        for r in rows {
            println!("{}", r.human_line());
        }
    }
    let total: u64 = rows.iter().map(|r| r.size).sum();
    println!(
        "Digested {} files ({} failed) totaling {}",
        rows.len(),
        failed,
        ByteSize(total)
    );
}

/// Print stable, pretty JSON in input order.
pub fn print_json(rows: &[DigestRow]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dupdigest::ContentHash;

    fn row(ext: &str) -> DigestRow {
        let d = FileDigest {
            extension: ext.into(),
            size: 2048,
            hash: ContentHash::new(Strategy::FullFast, &[0x0a, 0x0b]),
        };
        DigestRow::new(PathBuf::from("/tmp/x"), &d)
    }

    #[test]
    fn human_line_layout() {
        let line = row("png").human_line();
        assert!(line.starts_with("f0a0b  "), "{line}");
        assert!(line.contains(".png"), "{line}");
        assert!(line.ends_with("/tmp/x"), "{line}");
    }

    #[test]
    fn json_fields() {
        let v = serde_json::to_value(row("")).unwrap();
        assert_eq!(v["digest"], "f0a0b");
        assert_eq!(v["strategy"], "full-fast");
        assert_eq!(v["extension"], "");
        assert_eq!(v["size"], 2048);
    }
}
