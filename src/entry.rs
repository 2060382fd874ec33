use std::path::{Path, PathBuf};

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    path: Box<Path>,
    name: Box<str>,
    is_dir: bool,
    is_symlink: bool,
}

impl DirEntry {
    /// Returns `None` when the file name is not valid unicode,
    /// such an entry can never be named by a specifier.
    pub fn new(path: PathBuf, is_dir: bool, is_symlink: bool) -> Option<Self> {
        let name = path.file_name()?.to_str()?.into();
        Some(Self {
            path: path.into(),
            name,
            is_dir,
            is_symlink,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// For a symbolic link this is the kind of its target once
    /// it has been resolved, `false` before that.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    pub(crate) fn with_dir(self, is_dir: bool) -> Self {
        Self { is_dir, ..self }
    }
}

/// What `metadata` tells about a path after following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    is_dir: bool,
}

impl EntryStat {
    pub fn new(is_dir: bool) -> Self {
        Self { is_dir }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

impl From<std::fs::Metadata> for EntryStat {
    fn from(meta: std::fs::Metadata) -> Self {
        Self::new(meta.is_dir())
    }
}
