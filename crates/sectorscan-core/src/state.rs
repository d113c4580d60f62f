/// Persisted state — the [`GlobalStore`] as pretty-printed JSON on disk.
///
/// Saves go through a temporary file in the target's directory which is
/// synced and then renamed over the target, so a crash mid-write leaves the
/// previous state intact. The temporary file is removed by its drop guard on
/// every failure path.
///
/// There is no locking. Two concurrent runs against the same state file race
/// and the last save wins.
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::model::GlobalStore;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Load the store from `config.state_file`.
///
/// A missing file is an empty store. A file that exists but does not parse
/// is [`ScanError::StateCorrupt`] and must abort the run.
pub fn load(config: &ScanConfig) -> Result<GlobalStore> {
    load_from(&config.state_file)
}

/// Write `store` to `config.state_file`, replacing it atomically.
pub fn save(config: &ScanConfig, store: &GlobalStore) -> Result<()> {
    save_to(&config.state_file, store)
}

pub fn load_from(path: &Path) -> Result<GlobalStore> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No state at {}, starting fresh", path.display());
            return Ok(GlobalStore::new());
        }
        Err(e) => return Err(ScanError::state_io(path, e)),
    };

    let store: GlobalStore =
        serde_json::from_slice(&bytes).map_err(|source| ScanError::StateCorrupt {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Loaded {} sectors from {}", store.len(), path.display());
    Ok(store)
}

pub fn save_to(path: &Path, store: &GlobalStore) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ScanError::state_io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ScanError::state_io(dir, e))?;
    write_store(tmp.as_file_mut(), store).map_err(|e| ScanError::state_io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ScanError::state_io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| ScanError::state_io(path, e.error))?;

    debug!("Saved {} sectors to {}", store.len(), path.display());
    Ok(())
}

fn write_store(file: &mut fs::File, store: &GlobalStore) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, store)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
