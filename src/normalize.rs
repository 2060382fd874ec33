use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::RResult;

/// Makes `path` absolute against the process working directory and
/// removes `.` and `..` without touching the filesystem, so symbolic
/// links on the way to it are kept as written.
pub fn normalize_start(path: &Path) -> RResult<PathBuf> {
    let absolute = path.absolutize()?;
    // Eliminate `\\?\` prefix in windows.
    Ok(dunce::simplified(&absolute).to_path_buf())
}

#[test]
fn test_normalize_start() {
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(normalize_start(Path::new("a/../b/./c")).unwrap(), cwd.join("b").join("c"));
    #[cfg(unix)]
    assert_eq!(
        normalize_start(Path::new("/x/y/../z")).unwrap(),
        Path::new("/x/z")
    );
}
