/// Scanner module — discovers sectors, walks and diffs each one, and builds
/// the next [`GlobalStore`].
///
/// - [`discovery`] — top-level directories → sector names.
/// - [`walker`] — one sector tree → fresh [`Snapshot`].
/// - [`diff`] — old vs new snapshot → ordered [`ChangeEvent`]s.
///
/// Sectors are processed one at a time on the calling thread. A filesystem
/// error in one sector is recorded against that sector and the run moves on;
/// the failed sector keeps its previous snapshot in the new store so the
/// next clean run still diffs against the last good observation.
pub mod diff;
pub mod discovery;
pub mod walker;

pub use diff::compare;
pub use discovery::{discover_sectors, SectorMap};
pub use walker::walk_sector;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::model::{ChangeEvent, GlobalStore, Snapshot};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What happened to one sector during a run.
#[derive(Debug)]
pub enum SectorOutcome {
    /// The sector was walked; `events` may be empty.
    Scanned { events: Vec<ChangeEvent> },
    /// The walk failed. The previous snapshot was carried forward.
    Failed { reason: String },
}

#[derive(Debug)]
pub struct SectorReport {
    pub name: String,
    pub outcome: SectorOutcome,
}

impl SectorReport {
    pub fn events(&self) -> &[ChangeEvent] {
        match &self.outcome {
            SectorOutcome::Scanned { events } => events,
            SectorOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, SectorOutcome::Failed { .. })
    }
}

/// Result of a complete run: per-sector reports in sector-name order and the
/// store to persist.
#[derive(Debug)]
pub struct ScanRun {
    pub sectors: Vec<SectorReport>,
    pub store: GlobalStore,
}

impl ScanRun {
    pub fn failed_count(&self) -> usize {
        self.sectors.iter().filter(|s| s.is_failed()).count()
    }

    pub fn event_count(&self) -> usize {
        self.sectors.iter().map(|s| s.events().len()).sum()
    }
}

/// Run one walk-and-compare pass over every sector under `config.root`.
///
/// Only failure to enumerate the root itself is returned as an error.
/// Sectors that were tracked before but are no longer discovered keep their
/// last snapshot in the returned store.
pub fn run_scan(config: &ScanConfig, previous: &GlobalStore) -> Result<ScanRun> {
    run_scan_with(config, previous, walk_sector)
}

/// [`run_scan`] with the per-sector walk supplied by the caller.
pub fn run_scan_with<W>(
    config: &ScanConfig,
    previous: &GlobalStore,
    mut walk: W,
) -> Result<ScanRun>
where
    W: FnMut(&ScanConfig, &Path) -> Result<Snapshot>,
{
    let start = Instant::now();
    let sectors = discover_sectors(config)?;
    info!(
        "Scanning {} sectors under {}",
        sectors.len(),
        config.root.display()
    );

    let mut store = GlobalStore::new();
    let mut reports = Vec::with_capacity(sectors.len());
    let empty = Snapshot::new();

    for (name, path) in &sectors {
        let old = previous.get(name).unwrap_or(&empty);
        let outcome = match walk(config, path) {
            Ok(snapshot) => {
                let events = compare(old, &snapshot);
                debug!("Sector {name:?}: {} changes", events.len());
                store.insert(name.clone(), snapshot);
                SectorOutcome::Scanned { events }
            }
            Err(err) if err.is_filesystem_access() => {
                warn!("Sector {name:?} failed, keeping previous snapshot: {err}");
                if let Some(prev) = previous.get(name) {
                    store.insert(name.clone(), prev.clone());
                }
                SectorOutcome::Failed {
                    reason: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };
        reports.push(SectorReport {
            name: name.clone(),
            outcome,
        });
    }

    for (name, snapshot) in previous.iter() {
        if !sectors.contains_key(name) {
            debug!("Sector {name:?} not found this run, keeping its snapshot");
            store.insert(name.clone(), snapshot.clone());
        }
    }

    let run = ScanRun {
        sectors: reports,
        store,
    };
    info!(
        "Scan finished: {} changes, {} failed sectors in {:?}",
        run.event_count(),
        run.failed_count(),
        start.elapsed()
    );
    Ok(run)
}
