//! Where a search starts when the caller gives no `cwd`.
//!
//! A binary or library installed as a dependency lives somewhere below
//! `<project>/node_modules/`. Searching from there would find the
//! dependency's own marker files, so the search starts from the project
//! that installed it instead.

use std::path::{Path, PathBuf};

pub(crate) static MODULE: &str = "node_modules";

/// Given the path of the invoking module, returns the directory holding the
/// nearest enclosing `node_modules`, or `None` when it is not inside one.
pub fn from_module(module: &Path) -> Option<PathBuf> {
    module
        .ancestors()
        .skip(1)
        .find(|dir| dir.file_name().map_or(false, |name| name == MODULE))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

/// The location of the running executable mapped through [`from_module`],
/// falling back to the process working directory.
pub fn default_cwd() -> std::io::Result<PathBuf> {
    let from_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| from_module(&exe));
    match from_exe {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "start from consuming project");
            Ok(dir)
        }
        None => std::env::current_dir(),
    }
}

#[test]
fn test_from_module() {
    assert_eq!(
        from_module(Path::new("/p/node_modules/@scope/package/index.js")),
        Some(PathBuf::from("/p"))
    );
    assert_eq!(
        from_module(Path::new("/p/node_modules/.bin/matchup")),
        Some(PathBuf::from("/p"))
    );
    assert_eq!(
        from_module(Path::new("/p/node_modules/a/node_modules/b/index.js")),
        Some(PathBuf::from("/p/node_modules/a"))
    );
    assert_eq!(from_module(Path::new("/p/src/index.js")), None);
    assert_eq!(from_module(Path::new("/p/node_modules")), None);
}
