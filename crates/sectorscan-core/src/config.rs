/// Scanner configuration — root, state file, ignore set and sector naming.
///
/// A single [`ScanConfig`] is built once at startup and passed by reference
/// into every component, so the whole scanner can be pointed at an arbitrary
/// root (tests use temporary directories).
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directory names pruned, with their whole subtree, from every walk.
pub const DEFAULT_IGNORE: &[&str] = &[".git", ".venv", "__pycache__"];

/// Directory under the root that holds the state file by default.
pub const STATE_DIR_NAME: &str = ".sectorscan";

/// File name of the persisted store inside [`STATE_DIR_NAME`].
pub const STATE_FILE_NAME: &str = "state.json";

/// How top-level directory names map to sector names.
///
/// A directory qualifies as a sector when its name contains
/// `prefix_separator`. Everything up to and including the first occurrence
/// is dropped, and every `word_separator` in the remainder becomes a space:
/// `b_Software-Development` → `Software Development`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectorNaming {
    pub prefix_separator: char,
    pub word_separator: char,
}

impl Default for SectorNaming {
    fn default() -> Self {
        Self {
            prefix_separator: '_',
            word_separator: '-',
        }
    }
}

impl SectorNaming {
    /// Derive the sector name for a directory, or `None` if the directory
    /// does not follow the naming convention.
    pub fn sector_name(&self, dir_name: &str) -> Option<String> {
        let (_, rest) = dir_name.split_once(self.prefix_separator)?;
        Some(rest.replace(self.word_separator, " "))
    }
}

/// Everything the scanner needs to know about where and what to scan.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Project root. Sectors are its immediate children and every snapshot
    /// path is relative to it.
    pub root: PathBuf,
    /// Location of the persisted [`GlobalStore`](crate::model::GlobalStore).
    pub state_file: PathBuf,
    /// Entry names excluded from walks together with their subtrees.
    pub ignore: BTreeSet<String>,
    pub naming: SectorNaming,
}

impl ScanConfig {
    /// Defaults for `root`: built-in ignore set, `_`/`-` naming, and the
    /// state file at `<root>/.sectorscan/state.json`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let state_file = root.join(STATE_DIR_NAME).join(STATE_FILE_NAME);
        Self {
            root,
            state_file,
            ignore: DEFAULT_IGNORE.iter().map(|s| (*s).to_owned()).collect(),
            naming: SectorNaming::default(),
        }
    }

    pub fn with_state_file(mut self, state_file: impl Into<PathBuf>) -> Self {
        self.state_file = state_file.into();
        self
    }

    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_naming(mut self, naming: SectorNaming) -> Self {
        self.naming = naming;
        self
    }

    /// `true` if an entry with this name must be skipped with its subtree.
    #[inline]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// `true` if any component of `path` is in the ignore set.
    pub fn has_ignored_component(&self, path: &Path) -> bool {
        path.components()
            .any(|c| self.is_ignored(&c.as_os_str().to_string_lossy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_name_strips_prefix_and_spaces_words() {
        let naming = SectorNaming::default();
        assert_eq!(
            naming.sector_name("b_Software-Development").as_deref(),
            Some("Software Development")
        );
        assert_eq!(
            naming.sector_name("c_Data-Science-AI").as_deref(),
            Some("Data Science AI")
        );
    }

    #[test]
    fn test_sector_name_requires_prefix_separator() {
        let naming = SectorNaming::default();
        assert_eq!(naming.sector_name("acompany"), None);
        assert_eq!(naming.sector_name("Data-Science"), None);
    }

    #[test]
    fn test_sector_name_splits_on_first_separator_only() {
        let naming = SectorNaming::default();
        assert_eq!(naming.sector_name("x_a_b").as_deref(), Some("a_b"));
        assert_eq!(naming.sector_name("_lead").as_deref(), Some("lead"));
        assert_eq!(naming.sector_name("trail_").as_deref(), Some(""));
    }

    #[test]
    fn test_custom_word_separator() {
        let naming = SectorNaming {
            prefix_separator: '.',
            word_separator: '_',
        };
        assert_eq!(
            naming.sector_name("01.Sales_Ops").as_deref(),
            Some("Sales Ops")
        );
    }

    #[test]
    fn test_default_config_layout() {
        let cfg = ScanConfig::new("/srv/company");
        assert_eq!(
            cfg.state_file,
            PathBuf::from("/srv/company/.sectorscan/state.json")
        );
        assert!(cfg.is_ignored(".git"));
        assert!(cfg.is_ignored("__pycache__"));
        assert!(!cfg.is_ignored("src"));
    }

    #[test]
    fn test_has_ignored_component() {
        let cfg = ScanConfig::new("/r").with_ignore(["node_modules"]);
        assert!(cfg.has_ignored_component(Path::new("b_Web/node_modules/x/y.js")));
        assert!(!cfg.has_ignored_component(Path::new("b_Web/src/.git")));
    }
}
