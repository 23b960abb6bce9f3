use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionCount {
    /// Lowercased suffix including the leading dot, or [`crate::ids::NO_EXTENSION`].
    pub label: String,
    pub files: u64,
}

/// File counts grouped by extension label.
///
/// Entries are ordered by count descending, then label ascending. Counts are always positive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionHistogram(Vec<ExtensionCount>);

impl ExtensionHistogram {
    pub fn from_counts(counts: BTreeMap<String, u64>) -> Self {
        let mut entries: Vec<ExtensionCount> = counts
            .into_iter()
            .filter(|(_, files)| *files > 0)
            .map(|(label, files)| ExtensionCount { label, files })
            .collect();
        entries.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.label.cmp(&b.label)));
        Self(entries)
    }

    pub fn entries(&self) -> &[ExtensionCount] {
        &self.0
    }

    /// The first `n` entries in histogram order.
    pub fn top(&self, n: usize) -> &[ExtensionCount] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.iter().find(|e| e.label == label).map(|e| e.files)
    }

    pub fn total_files(&self) -> u64 {
        self.0.iter().map(|e| e.files).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
