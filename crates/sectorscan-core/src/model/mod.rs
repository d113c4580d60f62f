/// Data model: snapshots of sector trees, the persisted store, and the
/// change events produced by diffing two snapshots.
pub mod event;
pub mod snapshot;
pub mod timestamp;

pub use event::{ChangeEvent, ChangeKind};
pub use snapshot::{GlobalStore, RelPath, Snapshot};
pub use timestamp::Timestamp;
