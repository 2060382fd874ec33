use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Directory the search starts from.
    /// When it is `None`, the directory of the consuming project
    /// (or the process working directory) is used, see [`crate::origin`].
    /// Default is `None`.
    pub cwd: Option<PathBuf>,
    /// Leading path segments of a boundary. Directories inside
    /// `<boundary>/<ignore..>` are not scanned and the walk
    /// never climbs above the boundary.
    /// Default is `vec![]`.
    pub ignore: Vec<String>,
    /// The number of directory levels examined, the starting
    /// directory included.
    /// Default is `None`, which means no limit.
    pub max: Option<usize>,
    /// Whether symbolic links take part in matching.
    /// Default is `true`.
    pub symlinks: bool,
}

impl Default for Options {
    fn default() -> Self {
        let cwd = None;
        let ignore = vec![];
        let max = None;
        let symlinks = true;
        Self {
            cwd,
            ignore,
            max,
            symlinks,
        }
    }
}

#[test]
fn deserialize_partial_options() {
    let options: Options = serde_json::from_str(r#"{ "max": 2, "symlinks": false }"#).unwrap();
    assert_eq!(
        options,
        Options {
            max: Some(2),
            symlinks: false,
            ..Default::default()
        }
    );
    let options: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(options, Options::default());
}
