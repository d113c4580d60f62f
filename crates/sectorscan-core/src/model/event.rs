/// Classified differences between two snapshots of the same sector.
use super::snapshot::RelPath;
use std::fmt;

/// One change detected in a sector, carrying its root-relative path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    NewDir(RelPath),
    NewFile(RelPath),
    ModifiedFile(RelPath),
    DeletedFile(RelPath),
    DeletedDir(RelPath),
}

/// The kind of a [`ChangeEvent`] without its path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeKind {
    NewDir,
    NewFile,
    ModifiedFile,
    DeletedFile,
    DeletedDir,
}

impl ChangeKind {
    /// Fixed report tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::NewDir => "NEW DIR",
            Self::NewFile => "NEW FILE",
            Self::ModifiedFile => "MODIFIED",
            Self::DeletedFile => "DELETED FILE",
            Self::DeletedDir => "DELETED DIR",
        }
    }

    /// Glyph shown in front of the tag in the text report.
    pub fn icon(self) -> &'static str {
        match self {
            Self::NewDir => "📁",
            Self::NewFile => "🆕",
            Self::ModifiedFile => "✏️",
            Self::DeletedFile | Self::DeletedDir => "🗑️",
        }
    }
}

impl ChangeEvent {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::NewDir(_) => ChangeKind::NewDir,
            Self::NewFile(_) => ChangeKind::NewFile,
            Self::ModifiedFile(_) => ChangeKind::ModifiedFile,
            Self::DeletedFile(_) => ChangeKind::DeletedFile,
            Self::DeletedDir(_) => ChangeKind::DeletedDir,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::NewDir(p)
            | Self::NewFile(p)
            | Self::ModifiedFile(p)
            | Self::DeletedFile(p)
            | Self::DeletedDir(p) => p.as_str(),
        }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().tag(), self.path())
    }
}
