use std::{io, path::PathBuf};

use crate::{
    entry::DirEntry, ignore::Boundary, kind::Specifier, matcher, Error, MatchInfo,
    MatchResult, Matchup, RResult,
};

/// Position of the walk: the directory being looked at and how many
/// levels were examined before it.
#[derive(Debug, Clone)]
struct Cursor {
    dir: PathBuf,
    steps: usize,
}

impl Cursor {
    fn start(dir: PathBuf) -> Self {
        Self { dir, steps: 0 }
    }

    /// `None` at the filesystem root.
    fn parent(&self) -> Option<Self> {
        self.dir.parent().map(|parent| Self {
            dir: parent.to_path_buf(),
            steps: self.steps + 1,
        })
    }

    fn is_start(&self) -> bool {
        self.steps == 0
    }
}

impl Matchup {
    pub(crate) async fn ascend(&self, specifier: &Specifier, start: PathBuf) -> RResult<MatchResult> {
        let stat = self
            .fs
            .metadata(&start)
            .await
            .map_err(|error| Error::inaccessible(&start, error))?;
        if !stat.is_dir() {
            let error = io::Error::new(io::ErrorKind::InvalidInput, "not a directory");
            return Err(Error::inaccessible(&start, error));
        }

        let boundary = Boundary::locate(&start, &self.options.ignore);
        let scans_start = self.options.max != Some(0)
            && !boundary.as_ref().map_or(false, |b| b.ignores(&start));
        if !scans_start {
            // the start must still be listable
            self.fs
                .read_dir(&start)
                .await
                .map_err(|error| Error::inaccessible(&start, error))?;
        }
        let mut cursor = Cursor::start(start);
        loop {
            if self.options.max.map_or(false, |max| cursor.steps >= max) {
                tracing::debug!(step = cursor.steps, "depth limit reached");
                return Ok(MatchResult::Empty);
            }

            if boundary.as_ref().map_or(false, |b| b.ignores(&cursor.dir)) {
                tracing::debug!(step = cursor.steps, dir = %cursor.dir.display(), "skip ignored");
            } else if let Some(info) = self.scan(&cursor, specifier, boundary.as_ref()).await? {
                return Ok(MatchResult::Found(info));
            }

            if boundary.as_ref().map_or(false, |b| b.is_ceiling(&cursor.dir)) {
                tracing::debug!(dir = %cursor.dir.display(), "stop at ignore boundary");
                return Ok(MatchResult::Empty);
            }
            cursor = match cursor.parent() {
                Some(parent) => parent,
                None => return Ok(MatchResult::Empty),
            };
        }
    }

    async fn scan(
        &self,
        cursor: &Cursor,
        specifier: &Specifier,
        boundary: Option<&Boundary>,
    ) -> RResult<Option<MatchInfo>> {
        tracing::debug!(step = cursor.steps, dir = %cursor.dir.display(), "scan");
        let listing = match self.fs.read_dir(&cursor.dir).await {
            Ok(listing) => listing,
            Err(error) if cursor.is_start() => return Err(Error::inaccessible(&cursor.dir, error)),
            Err(error) => {
                tracing::debug!(dir = %cursor.dir.display(), %error, "can't list");
                return Ok(None);
            }
        };

        let mut entries = Vec::with_capacity(listing.len());
        for entry in listing {
            if !specifier.matches_name(entry.name())
                || boundary.map_or(false, |b| b.ignores(entry.path()))
            {
                continue;
            }
            entries.push(self.resolve_symlink(entry).await);
        }

        let found = matcher::find(&entries, specifier, self.options.symlinks);
        Ok(found.map(|entry| MatchInfo::new(&cursor.dir, entry.name())))
    }

    /// A link to a directory counts as a directory. Links that can't be
    /// followed stay non-directories.
    async fn resolve_symlink(&self, entry: DirEntry) -> DirEntry {
        if !entry.is_symlink() || !self.options.symlinks {
            return entry;
        }
        let is_dir = match self.fs.metadata(entry.path()).await {
            Ok(stat) => stat.is_dir(),
            Err(error) => {
                tracing::debug!(link = %entry.path().display(), %error, "dangling link");
                false
            }
        };
        entry.with_dir(is_dir)
    }
}
