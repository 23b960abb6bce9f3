//! Report persistence.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;

/// Resolve a configured report path against the repository root. Absolute paths are kept.
pub fn resolve_out(repo_root: &Utf8Path, out: &Utf8Path) -> Utf8PathBuf {
    repo_root.join(out)
}

/// Create the parent directory if needed and overwrite `path`.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

/// Write `text` only when it differs byte-for-byte from what is on disk.
///
/// A missing file counts as different. Returns whether a write happened.
pub fn write_if_changed(path: &Utf8Path, text: &str) -> anyhow::Result<bool> {
    match std::fs::read(path) {
        Ok(existing) if existing == text.as_bytes() => return Ok(false),
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err).with_context(|| format!("read existing: {}", path)),
    }
    write_text(path, text)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn write_text_creates_parent_and_overwrites() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8_root(&tmp).join("reports/health.md");

        write_text(&path, "one").expect("first write");
        write_text(&path, "two").expect("second write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "two");
    }

    #[test]
    fn write_if_changed_skips_identical_content() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8_root(&tmp).join("reports/weekly.md");

        assert!(write_if_changed(&path, "same\n").expect("first"));
        let before = std::fs::metadata(&path).expect("meta").modified().expect("mtime");

        assert!(!write_if_changed(&path, "same\n").expect("second"));
        let after = std::fs::metadata(&path).expect("meta").modified().expect("mtime");
        assert_eq!(before, after);

        assert!(write_if_changed(&path, "different\n").expect("third"));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "different\n");
    }

    #[cfg(unix)]
    #[test]
    fn resolve_out_keeps_absolute_paths() {
        let root = Utf8Path::new("/repo");
        assert_eq!(
            resolve_out(root, Utf8Path::new("reports/weekly.md")),
            "/repo/reports/weekly.md"
        );
        assert_eq!(resolve_out(root, Utf8Path::new("/tmp/x.md")), "/tmp/x.md");
    }
}
