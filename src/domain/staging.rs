//! Upload staging domain models.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Leave the existing file untouched and warn.
    #[default]
    Skip,
    /// Replace the existing file with the source content.
    Overwrite,
}

/// How a staged file is materialized in the destination tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransferMethod {
    #[default]
    HardLink,
    Copy,
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Skip => write!(f, "skip"),
            ConflictPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMethod::HardLink => write!(f, "hard-link"),
            TransferMethod::Copy => write!(f, "copy"),
        }
    }
}

/// A file selected for staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEntry {
    /// Absolute or working-directory-relative source path.
    pub source: PathBuf,
    /// Path relative to the source root; reproduced under the destination.
    pub relative: PathBuf,
}

impl StageEntry {
    pub fn destination_in(&self, destination_root: &Path) -> PathBuf {
        destination_root.join(&self.relative)
    }
}

/// Files selected from a source tree, with the destination they map into.
#[derive(Debug, Clone)]
pub struct StagePlan {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub entries: Vec<StageEntry>,
}

impl StagePlan {
    /// Source/destination pairs in collection order.
    pub fn transfers(&self) -> impl Iterator<Item = (&StageEntry, PathBuf)> {
        self.entries.iter().map(|entry| (entry, entry.destination_in(&self.destination_root)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of staging a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    Linked,
    Copied,
    /// Existing destination replaced (overwrite policy).
    Overwritten,
    /// Existing destination left alone (skip policy).
    Skipped,
}

/// Per-file actions of a completed staging run.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    pub actions: Vec<(StageEntry, PathBuf, StageAction)>,
}

impl StageReport {
    pub fn record(&mut self, entry: StageEntry, destination: PathBuf, action: StageAction) {
        self.actions.push((entry, destination, action));
    }

    pub fn transferred(&self) -> usize {
        self.actions.iter().filter(|(_, _, action)| *action != StageAction::Skipped).count()
    }

    pub fn skipped(&self) -> usize {
        self.actions.iter().filter(|(_, _, action)| *action == StageAction::Skipped).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(relative: &str) -> StageEntry {
        StageEntry {
            source: Path::new("/mods/accel").join(relative),
            relative: PathBuf::from(relative),
        }
    }

    #[test]
    fn destination_is_source_with_prefix_substituted() {
        let plan = StagePlan {
            source_root: PathBuf::from("/mods/accel"),
            destination_root: PathBuf::from("/upload"),
            entries: vec![entry("Data/Scripts/Session.cs"), entry("LICENSE")],
        };

        let destinations: Vec<PathBuf> = plan.transfers().map(|(_, dest)| dest).collect();
        assert_eq!(
            destinations,
            vec![PathBuf::from("/upload/Data/Scripts/Session.cs"), PathBuf::from("/upload/LICENSE")]
        );
    }

    #[test]
    fn report_counts_skips_separately() {
        let mut report = StageReport::default();
        report.record(entry("a.cs"), PathBuf::from("/u/a.cs"), StageAction::Linked);
        report.record(entry("b.cs"), PathBuf::from("/u/b.cs"), StageAction::Skipped);
        report.record(entry("c.cs"), PathBuf::from("/u/c.cs"), StageAction::Overwritten);

        assert_eq!(report.transferred(), 2);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn policies_parse_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            conflict: ConflictPolicy,
            method: TransferMethod,
        }
        let parsed: Wrapper =
            toml::from_str("conflict = \"overwrite\"\nmethod = \"hard-link\"").unwrap();
        assert_eq!(parsed.conflict, ConflictPolicy::Overwrite);
        assert_eq!(parsed.method, TransferMethod::HardLink);
    }
}
