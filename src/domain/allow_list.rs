//! Inclusion filters used while enumerating asset files.

use std::path::Path;

/// Ordered, de-duplicated set of exact names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for entry in entries {
            let entry = entry.into();
            if !list.entries.contains(&entry) {
                list.entries.push(entry);
            }
        }
        list
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File extension filter. Extensions are stored without the leading dot and
/// compared exactly, so `DDS` does not match `dds`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter {
    extensions: AllowList,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty());
        Self { extensions: AllowList::new(normalized) }
    }

    /// True when the path has an extension present in the filter.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
