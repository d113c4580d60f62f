/// Sector discovery — which top-level directories are tracked, and under
/// what name.
///
/// The rule is positional and content-blind: any immediate child directory
/// of the root whose name contains the prefix separator is a sector. A
/// directory that contains the separator for unrelated reasons is picked up
/// too; see [`SectorNaming`](crate::config::SectorNaming).
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Map of sector name → sector directory, ordered by sector name.
pub type SectorMap = BTreeMap<String, PathBuf>;

/// Enumerate the sectors directly under `config.root`.
///
/// Directories are visited in name order. When two directories derive the
/// same sector name, the later one wins and a warning is logged.
pub fn discover_sectors(config: &ScanConfig) -> Result<SectorMap> {
    let read_dir = fs::read_dir(&config.root).map_err(|e| ScanError::fs(&config.root, e))?;

    let mut children: Vec<(String, PathBuf)> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::fs(&config.root, e))?;
        let path = entry.path();
        // Follows symlinks, so a linked directory counts as a directory.
        if !path.is_dir() {
            continue;
        }
        children.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    children.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    let mut sectors = SectorMap::new();
    for (dir_name, path) in children {
        let Some(name) = config.naming.sector_name(&dir_name) else {
            debug!("Skipping {dir_name}: no sector prefix");
            continue;
        };
        if let Some(previous) = sectors.insert(name.clone(), path) {
            warn!(
                "Sector name {name:?} derived from both {} and {dir_name}; keeping {dir_name}",
                previous.display()
            );
        }
    }

    debug!(
        "Discovered {} sectors under {}",
        sectors.len(),
        config.root.display()
    );
    Ok(sectors)
}
