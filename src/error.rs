use std::{io, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern '{0}': {1}")]
    InvalidPattern(Box<str>, glob::PatternError),
    #[error("Can't access starting directory '{}': {1}", .0.display())]
    InaccessibleStart(Box<Path>, io::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn inaccessible(path: &Path, error: io::Error) -> Self {
        Self::InaccessibleStart(path.into(), error)
    }
}
