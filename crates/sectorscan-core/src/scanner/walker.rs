/// Single-sector tree walk using `jwalk` in serial mode.
///
/// Produces a fresh [`Snapshot`]: every reachable directory, and every file
/// with its modification time, keyed by its path relative to the project
/// root. Ignored names are pruned inside `process_read_dir`, so an ignored
/// directory's subtree is never read at all.
///
/// The walk reads live filesystem state with no isolation: an entry changed
/// while the walk is running may be recorded before or after the change.
/// The snapshot is approximately point-in-time, not transactional.
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::model::{RelPath, Snapshot, Timestamp};
use std::fs;
use std::io;
use std::path::{Component, Path};
use std::time::Instant;
use tracing::debug;

/// Walk `sector_path` (a directory under `config.root`) and snapshot it.
///
/// Any entry that cannot be listed or stat'ed aborts this sector's walk with
/// [`ScanError::FilesystemAccess`]. Dangling symlinks are skipped.
pub fn walk_sector(config: &ScanConfig, sector_path: &Path) -> Result<Snapshot> {
    let start = Instant::now();
    let mut snapshot = Snapshot::new();

    let sector_rel = sector_path
        .strip_prefix(&config.root)
        .map_err(|_| {
            ScanError::fs(
                sector_path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not under scan root {}", config.root.display()),
                ),
            )
        })?;

    // A sector whose own name is ignored contributes nothing.
    if config.has_ignored_component(sector_rel) {
        debug!("Sector {} is ignored, empty snapshot", sector_path.display());
        return Ok(snapshot);
    }

    let ignore = config.ignore.clone();
    let walker = jwalk::WalkDir::new(sector_path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |_depth, _dir, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => !ignore.contains(&*entry.file_name.to_string_lossy()),
                // Keep errors so they surface to the caller.
                Err(_) => true,
            });
        });

    for entry_result in walker {
        let mut entry = entry_result.map_err(|err| walk_error(err, sector_path))?;
        let path = entry.path();
        if let Some(err) = entry.read_children_error.take() {
            return Err(walk_error(err, &path));
        }
        if entry.depth == 0 {
            continue;
        }

        let rel = relative_key(&config.root, &path)?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            snapshot.insert_dir(rel);
        } else if file_type.is_file() {
            let meta = fs::metadata(&path).map_err(|e| ScanError::fs(&path, e))?;
            snapshot.insert_file(rel, modified_of(&meta, &path)?);
        } else if file_type.is_symlink() {
            // Classified by target, but never descended into.
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => snapshot.insert_dir(rel),
                Ok(meta) if meta.is_file() => {
                    snapshot.insert_file(rel, modified_of(&meta, &path)?);
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping unresolvable symlink {}: {e}", path.display()),
            }
        }
    }

    debug!(
        "Walked {}: {} files, {} dirs in {:?}",
        sector_path.display(),
        snapshot.file_count(),
        snapshot.dir_count(),
        start.elapsed()
    );

    Ok(snapshot)
}

fn modified_of(meta: &fs::Metadata, path: &Path) -> Result<Timestamp> {
    meta.modified()
        .map(Timestamp::from)
        .map_err(|e| ScanError::fs(path, e))
}

/// Root-relative key for `path`, components joined with `/`.
pub(crate) fn relative_key(root: &Path, path: &Path) -> Result<RelPath> {
    let rel = path.strip_prefix(root).map_err(|_| {
        ScanError::fs(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "entry escaped the scan root"),
        )
    })?;

    let mut key = RelPath::default();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(&part.to_string_lossy());
        }
    }
    Ok(key)
}

/// Convert a `jwalk` error into a filesystem-access error, keeping the
/// offending path and the underlying I/O error kind where available.
fn walk_error(err: jwalk::Error, fallback: &Path) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    let source = match err.io_error() {
        Some(io_err) => io::Error::new(io_err.kind(), io_err.to_string()),
        None => io::Error::other(err.to_string()),
    };
    ScanError::fs(path, source)
}
