use crate::entry::{DirEntry, EntryStat};
use std::{fmt::Debug, io, path::Path};

/// Read-only view of the filesystem used by the search.
#[async_trait::async_trait]
pub trait FileSystem: Sync + Send + Debug {
    /// Lists `dir` in the order the platform returns entries.
    /// Symbolic links are reported as links and not followed.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;
    /// Follows symbolic links.
    async fn metadata(&self, path: &Path) -> io::Result<EntryStat>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFs;

#[async_trait::async_trait]
impl FileSystem for TokioFs {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            // gone since `readdir` returned it
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };
            if let Some(entry) =
                DirEntry::new(entry.path(), file_type.is_dir(), file_type.is_symlink())
            {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryStat> {
        tokio::fs::metadata(path).await.map(EntryStat::from)
    }
}
