use repopulse_types::ExtensionHistogram;
use repopulse_types::ids::NO_EXTENSION;
use std::collections::BTreeMap;

/// Histogram label for a file name.
///
/// The suffix is everything from the last dot, lowercased, provided the dot is neither the first
/// nor the last character. So `README`, `.gitignore` and `notes.` have no extension, while
/// `archive.tar.GZ` maps to `.gz`.
pub fn extension_label(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(i) if i > 0 && i + 1 < file_name.len() => file_name[i..].to_lowercase(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Tallies file names into an [`ExtensionHistogram`].
#[derive(Clone, Debug, Default)]
pub struct HistogramBuilder {
    counts: BTreeMap<String, u64>,
}

impl HistogramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file_name(&mut self, file_name: &str) {
        *self.counts.entry(extension_label(file_name)).or_insert(0) += 1;
    }

    pub fn finish(self) -> ExtensionHistogram {
        ExtensionHistogram::from_counts(self.counts)
    }
}

impl<'a> FromIterator<&'a str> for HistogramBuilder {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut builder = Self::new();
        for name in iter {
            builder.add_file_name(name);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_suffix_rules() {
        assert_eq!(extension_label("main.rs"), ".rs");
        assert_eq!(extension_label("README"), "(none)");
        assert_eq!(extension_label(".gitignore"), "(none)");
        assert_eq!(extension_label("notes."), "(none)");
        assert_eq!(extension_label("archive.tar.GZ"), ".gz");
        assert_eq!(extension_label("Photo.JPEG"), ".jpeg");
    }

    #[test]
    fn builder_counts_and_orders() {
        let h = ["a.rs", "b.RS", "README", "LICENSE", "c.md", "Cargo.toml"]
            .into_iter()
            .collect::<HistogramBuilder>()
            .finish();

        let pairs: Vec<(&str, u64)> = h
            .entries()
            .iter()
            .map(|e| (e.label.as_str(), e.files))
            .collect();
        assert_eq!(
            pairs,
            vec![("(none)", 2), (".rs", 2), (".md", 1), (".toml", 1)]
        );
        assert_eq!(h.total_files(), 6);
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(HistogramBuilder::new().finish().is_empty());
    }
}
