/// Sectorscan Core — snapshot, diff, and state engine.
///
/// This crate contains all scanning logic with zero CLI dependencies.
/// A run is: [`state::load`] → [`scanner::run_scan`] → [`report::write_report`]
/// → [`state::save`].
///
/// # Modules
///
/// - [`config`] — Root, state-file location, ignore set and sector naming.
/// - [`model`] — Snapshots, the persisted store, timestamps and change events.
/// - [`scanner`] — Sector discovery, tree walking and snapshot diffing.
/// - [`state`] — Loading and atomically saving the persisted store.
/// - [`report`] — Plain-text run transcript.
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;
pub mod state;

pub use config::{ScanConfig, SectorNaming};
pub use error::{Result, ScanError};
