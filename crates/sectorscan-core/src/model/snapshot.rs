/// Point-in-time shape of a sector tree and the store that persists them.
///
/// Both collections are ordered (`BTreeMap`/`BTreeSet`) so that the
/// serialised state is deterministic and `dirs` comes out sorted, while the
/// in-memory semantics stay those of a plain map and set.
use super::timestamp::Timestamp;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap, BTreeSet};

/// Path relative to the project root, components joined with `/`.
pub type RelPath = CompactString;

/// Files (with modification time) and directories observed in one sector.
///
/// A snapshot produced by a walk is never patched afterwards; the next run
/// produces a fresh one that replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    files: BTreeMap<RelPath, Timestamp>,
    #[serde(default)]
    dirs: BTreeSet<RelPath>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a file entry.
    pub fn with_file(
        mut self,
        path: impl Into<RelPath>,
        modified: impl Into<Timestamp>,
    ) -> Self {
        self.insert_file(path.into(), modified.into());
        self
    }

    /// Builder-style insert of a directory entry.
    pub fn with_dir(mut self, path: impl Into<RelPath>) -> Self {
        self.insert_dir(path.into());
        self
    }

    pub(crate) fn insert_file(&mut self, path: RelPath, modified: Timestamp) {
        self.files.insert(path, modified);
    }

    pub(crate) fn insert_dir(&mut self, path: RelPath) {
        self.dirs.insert(path);
    }

    pub fn files(&self) -> &BTreeMap<RelPath, Timestamp> {
        &self.files
    }

    pub fn dirs(&self) -> &BTreeSet<RelPath> {
        &self.dirs
    }

    /// Modification time recorded for `path`, if it was a file.
    pub fn modified(&self, path: &str) -> Option<Timestamp> {
        self.files.get(path).copied()
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn contains_dir(&self, path: &str) -> bool {
        self.dirs.contains(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// Sector name → latest snapshot. The unit of load and save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalStore {
    sectors: BTreeMap<String, Snapshot>,
}

impl GlobalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sector: &str) -> Option<&Snapshot> {
        self.sectors.get(sector)
    }

    /// Store `snapshot` for `sector`, returning the one it replaced.
    pub fn insert(
        &mut self,
        sector: impl Into<String>,
        snapshot: Snapshot,
    ) -> Option<Snapshot> {
        self.sectors.insert(sector.into(), snapshot)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Snapshot> {
        self.sectors.iter()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
