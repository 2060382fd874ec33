use serde::{ser::SerializeMap, Serialize, Serializer};
use std::path::{Component, Path, PathBuf};

/// The decomposed path of a matched entry, laid out like node's `path.parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchInfo {
    pub root: PathBuf,
    /// The directory the entry was found in.
    pub dir: PathBuf,
    pub base: String,
    /// `base` without `ext`.
    pub name: String,
    /// The extension with its leading dot, or empty.
    pub ext: String,
}

impl MatchInfo {
    /// `dir` must be absolute.
    #[must_use]
    pub fn new(dir: &Path, base: &str) -> Self {
        let root = dir
            .components()
            .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();
        let file = Path::new(base);
        let ext = file
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or_else(String::new, |ext| format!(".{ext}"));
        let name = base[..base.len() - ext.len()].to_string();
        Self {
            root,
            dir: dir.to_path_buf(),
            base: base.to_string(),
            name,
            ext,
        }
    }

    /// The absolute path of the matched entry.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.base)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Found(MatchInfo),
    /// Nothing matched before the root, the depth limit or the ignore
    /// boundary was reached.
    Empty,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, MatchResult::Empty)
    }

    pub fn info(&self) -> Option<&MatchInfo> {
        match self {
            MatchResult::Found(info) => Some(info),
            MatchResult::Empty => None,
        }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.info().map(MatchInfo::path)
    }
}

/// `Empty` is written as `{}`.
impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchResult::Found(info) => info.serialize(serializer),
            MatchResult::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[test]
fn test_decompose() {
    let info = MatchInfo::new(Path::new("/a/b"), "file.ext");
    assert_eq!(info.base, "file.ext");
    assert_eq!(info.name, "file");
    assert_eq!(info.ext, ".ext");
    assert_eq!(info.path(), Path::new("/a/b/file.ext"));
    #[cfg(unix)]
    assert_eq!(info.root, Path::new("/"));

    let info = MatchInfo::new(Path::new("/a"), "archive.tar.gz");
    assert_eq!((info.name.as_str(), info.ext.as_str()), ("archive.tar", ".gz"));

    let info = MatchInfo::new(Path::new("/a"), ".bashrc");
    assert_eq!((info.name.as_str(), info.ext.as_str()), (".bashrc", ""));

    let info = MatchInfo::new(Path::new("/a"), "sub");
    assert_eq!((info.name.as_str(), info.ext.as_str()), ("sub", ""));

    let info = MatchInfo::new(Path::new("/a"), "file.");
    assert_eq!((info.name.as_str(), info.ext.as_str()), ("file", "."));
}

#[test]
fn test_serialize() {
    assert_eq!(serde_json::to_string(&MatchResult::Empty).unwrap(), "{}");
    let found = MatchResult::Found(MatchInfo::new(Path::new("/a"), "file.ext"));
    let value = serde_json::to_value(&found).unwrap();
    assert_eq!(value["base"], "file.ext");
    assert_eq!(value["name"], "file");
    assert_eq!(value["ext"], ".ext");
}
