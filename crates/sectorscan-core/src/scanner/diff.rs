/// Snapshot comparison — turns two snapshots of one sector into an ordered
/// list of [`ChangeEvent`]s.
///
/// Ordering contract:
/// 1. Forward pass over the new snapshot, directories and files interleaved
///    in ascending path order, emitting `NewDir`, `NewFile` and
///    `ModifiedFile`.
/// 2. Deletion pass: every `DeletedFile` in ascending path order, then every
///    `DeletedDir` in ascending path order.
///
/// Unchanged paths produce nothing, and no path yields more than one event
/// per collection it appears in.
use crate::model::{ChangeEvent, RelPath, Snapshot, Timestamp};
use std::cmp::Ordering;
use std::collections::{btree_map, btree_set};
use std::iter::Peekable;

/// Compare `old` against `new`. Pure and deterministic.
pub fn compare(old: &Snapshot, new: &Snapshot) -> Vec<ChangeEvent> {
    let mut events = Vec::new();

    for entry in NewSideEntries::new(new) {
        match entry {
            Entry::Dir(path) => {
                if !old.contains_dir(path) {
                    events.push(ChangeEvent::NewDir(path.clone()));
                }
            }
            Entry::File(path, modified) => match old.modified(path) {
                None => events.push(ChangeEvent::NewFile(path.clone())),
                // Exact comparison: see `model::timestamp` for the policy.
                Some(prev) if prev != modified => {
                    events.push(ChangeEvent::ModifiedFile(path.clone()))
                }
                Some(_) => {}
            },
        }
    }

    events.extend(
        old.files()
            .keys()
            .filter(|path| !new.contains_file(path))
            .map(|path| ChangeEvent::DeletedFile(path.clone())),
    );
    events.extend(
        old.dirs()
            .iter()
            .filter(|path| !new.contains_dir(path))
            .map(|path| ChangeEvent::DeletedDir(path.clone())),
    );

    events
}

enum Entry<'a> {
    Dir(&'a RelPath),
    File(&'a RelPath, Timestamp),
}

/// Merges the already-sorted directory and file keys of a snapshot into one
/// sequence in ascending byte order of the path. On an exact tie the
/// directory comes first.
struct NewSideEntries<'a> {
    dirs: Peekable<btree_set::Iter<'a, RelPath>>,
    files: Peekable<btree_map::Iter<'a, RelPath, Timestamp>>,
}

impl<'a> NewSideEntries<'a> {
    fn new(snap: &'a Snapshot) -> Self {
        Self {
            dirs: snap.dirs().iter().peekable(),
            files: snap.files().iter().peekable(),
        }
    }
}

impl<'a> Iterator for NewSideEntries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let take_dir = match (self.dirs.peek(), self.files.peek()) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(d), Some((f, _))) => d.as_str().cmp(f.as_str()) != Ordering::Greater,
        };
        if take_dir {
            self.dirs.next().map(Entry::Dir)
        } else {
            self.files.next().map(|(path, ts)| Entry::File(path, *ts))
        }
    }
}
