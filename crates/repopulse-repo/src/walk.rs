use anyhow::Context;
use camino::Utf8Path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use repopulse_domain::HistogramBuilder;
use repopulse_types::ExtensionHistogram;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from the working-tree walk, at any depth, plus individual files
/// left out of the count (the report being written, so a rerun sees the same tree).
#[derive(Clone, Debug)]
pub struct ExcludeSet {
    set: GlobSet,
    files: Vec<PathBuf>,
}

impl ExcludeSet {
    pub fn new(patterns: &[String]) -> anyhow::Result<Self> {
        let mut b = GlobSetBuilder::new();
        for p in patterns {
            b.add(Glob::new(p).with_context(|| format!("invalid exclude glob: {p}"))?);
        }
        Ok(Self {
            set: b.build().context("compile exclude globset")?,
            files: Vec::new(),
        })
    }

    /// Leave `path` out of the count, however the walk reaches it.
    ///
    /// A file that does not exist yet is kept as given; the walk cannot meet it either.
    pub fn skip_file(mut self, path: &Utf8Path) -> Self {
        let path = path.as_std_path();
        self.files
            .push(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    // Only entries whose name matches a skipped file pay for a canonicalize.
    fn is_skipped_file(&self, path: &Path) -> bool {
        let candidates = self
            .files
            .iter()
            .filter(|f| f.file_name() == path.file_name());
        let mut resolved = None;
        for f in candidates {
            let actual = resolved.get_or_insert_with(|| path.canonicalize().ok());
            if actual.as_deref() == Some(f.as_path()) {
                return true;
            }
        }
        false
    }

    pub fn is_excluded(&self, dir_name: &OsStr) -> bool {
        self.set.is_match(dir_name)
    }
}

/// Count every file under `root` by extension label, skipping excluded directories.
///
/// Symlinks are not followed; a link to a directory is neither descended into nor counted.
/// Entries that cannot be read are skipped.
pub fn count_extensions(
    root: &Utf8Path,
    exclude: &ExcludeSet,
) -> anyhow::Result<ExtensionHistogram> {
    if !root.is_dir() {
        anyhow::bail!("repo root is not a directory: {}", root);
    }

    let mut builder = HistogramBuilder::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, exclude));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!("skip unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }
        if exclude.is_skipped_file(entry.path()) {
            continue;
        }
        builder.add_file_name(&entry.file_name().to_string_lossy());
    }

    Ok(builder.finish())
}

// The root itself is never pruned, whatever its name. Symlinks are never descended, so only
// real directories need checking.
fn is_pruned(entry: &DirEntry, exclude: &ExcludeSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && exclude.is_excluded(entry.file_name())
}
