use std::path::{Component, Path, PathBuf};

/// Where the `ignore` segments sit in the ancestry of the starting directory.
///
/// Everything inside `prefix` is skipped. `ceiling` is the directory holding
/// the first ignored segment: it is still scanned, but never left upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    ceiling: Option<PathBuf>,
    prefix: PathBuf,
}

impl Boundary {
    /// `start` must be absolute. Returns `None` when `ignore` is empty or its
    /// segments don't occur, as whole components, in `start`.
    pub fn locate(start: &Path, ignore: &[String]) -> Option<Self> {
        let segments: Vec<Component> = ignore
            .iter()
            .flat_map(|segment| Path::new(segment).components())
            .collect();
        let first = segments.first()?;
        if matches!(first, Component::RootDir | Component::Prefix(_)) {
            let prefix = PathBuf::from_iter(&segments);
            return start.starts_with(&prefix).then(|| Self {
                ceiling: prefix.parent().map(Path::to_path_buf),
                prefix,
            });
        }

        let segments: Vec<Component> = segments
            .into_iter()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        if segments.is_empty() {
            return None;
        }
        let components: Vec<Component> = start.components().collect();
        let position = components
            .windows(segments.len())
            .position(|window| window == segments.as_slice())?;
        let ceiling = PathBuf::from_iter(&components[..position]);
        let prefix = ceiling.join(PathBuf::from_iter(&segments));
        Some(Self {
            ceiling: Some(ceiling),
            prefix,
        })
    }

    pub fn ignores(&self, path: &Path) -> bool {
        path.starts_with(&self.prefix)
    }

    pub fn is_ceiling(&self, dir: &Path) -> bool {
        self.ceiling.as_deref() == Some(dir)
    }
}
