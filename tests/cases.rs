use matchup::{matchup, origin, Error, MatchResult, Matchup, Options};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

static FILE: &str = "file.ext";
static SUBPATH: &str = "sub/folder";

struct Fixture {
    dir: TempDir,
    stamp: String,
}

impl Fixture {
    /// ```text
    /// file.ext
    /// sub/file.ext -> ..file.ext (dangling)
    /// sub/folder/<stamp>
    /// ```
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
            .to_string();
        fs::write(dir.path().join(FILE), "utf-8").unwrap();
        fs::create_dir_all(dir.path().join(SUBPATH)).unwrap();
        fs::write(dir.path().join(SUBPATH).join(&stamp), "utf-8").unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(format!("..{FILE}"), dir.path().join("sub").join(FILE))
            .unwrap();
        Self { dir, stamp }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn p(&self, paths: Vec<&str>) -> PathBuf {
        paths.iter().fold(self.root().to_path_buf(), |acc, path| acc.join(path))
    }

    fn cwd(&self) -> PathBuf {
        self.p(vec!["sub", "folder"])
    }

    fn options(&self) -> Options {
        Options {
            cwd: Some(self.cwd()),
            ..Default::default()
        }
    }
}

async fn should_find(specifier: &str, options: Options) -> matchup::MatchInfo {
    match matchup(specifier, options).await {
        Ok(MatchResult::Found(info)) => info,
        other => panic!("expected a match for {specifier}, got {other:?}"),
    }
}

async fn should_be_empty(specifier: &str, options: Options) {
    match matchup(specifier, options).await {
        Ok(MatchResult::Empty) => {}
        other => panic!("expected no match for {specifier}, got {other:?}"),
    }
}

#[tokio::test]
async fn returns_a_path_info_for_the_match() {
    let fixture = Fixture::new();
    let info = should_find(FILE, fixture.options()).await;
    let path = info.path();
    assert!(path.is_absolute());
    assert!(fs::symlink_metadata(&path).is_ok());
    assert_eq!(path, info.dir.join(&info.base));
    assert!(info.dir.starts_with(&info.root));
}

#[tokio::test]
async fn empty_result_if_no_match() {
    let fixture = Fixture::new();
    let random = format!(".{}-missing", fixture.stamp);
    should_be_empty(&random, fixture.options()).await;
    let json = serde_json::to_string(&matchup(&random, fixture.options()).await.unwrap()).unwrap();
    assert_eq!(json, "{}");
}

#[tokio::test]
async fn finds_nearest_matching_file() {
    let fixture = Fixture::new();
    let info = should_find(FILE, fixture.options()).await;
    assert_eq!(info.base, FILE);
    assert_eq!(info.name, "file");
    assert_eq!(info.ext, ".ext");
    if cfg!(unix) {
        assert_eq!(info.dir, fixture.p(vec!["sub"]));
    } else {
        assert_eq!(info.dir, fixture.root());
    }
}

#[tokio::test]
async fn finds_file_in_starting_directory() {
    let fixture = Fixture::new();
    let info = should_find(&fixture.stamp, fixture.options()).await;
    assert_eq!(info.dir, fixture.cwd());
}

#[tokio::test]
async fn finds_matching_directory() {
    let fixture = Fixture::new();
    let info = should_find("sub", fixture.options()).await;
    assert_eq!(info.name, "sub");
    assert_eq!(info.dir, fixture.root());

    let info = should_find("sub/", fixture.options()).await;
    assert_eq!(info.base, "sub");
}

#[tokio::test]
async fn directory_specifier_skips_files() {
    let fixture = Fixture::new();
    let stamp = format!("{}/", fixture.stamp);
    should_be_empty(&stamp, fixture.options()).await;
}

#[tokio::test]
async fn finds_matching_glob_pattern() {
    let fixture = Fixture::new();
    let pattern = FILE.replace(".ext", ".*");
    let glob = should_find(&pattern, fixture.options()).await;
    let literal = should_find(FILE, fixture.options()).await;
    assert_eq!(glob.base, FILE);
    assert_eq!(glob, literal);
}

#[tokio::test]
async fn glob_does_not_match_directories() {
    let fixture = Fixture::new();
    let name = format!("dir-{}", fixture.stamp);
    fs::create_dir(fixture.root().join(&name)).unwrap();
    let literal = should_find(&name, fixture.options()).await;
    assert_eq!(literal.dir, fixture.root());
    should_be_empty(&format!("{name}*"), fixture.options()).await;
}

#[tokio::test]
async fn invalid_pattern_fails_before_touching_the_filesystem() {
    let options = Options {
        cwd: Some(PathBuf::from("/definitely/not/here")),
        ..Default::default()
    };
    match matchup("***", options).await {
        Err(Error::InvalidPattern(pattern, _)) => assert_eq!(&*pattern, "***"),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn finds_match_up_from_dependency() {
    let fixture = Fixture::new();
    let module = fixture.p(vec!["node_modules", "@scope", "package", "index.js"]);
    fs::create_dir_all(module.parent().unwrap()).unwrap();
    fs::write(&module, "").unwrap();
    fs::write(module.parent().unwrap().join(FILE), "").unwrap();

    let cwd = origin::from_module(&module).unwrap();
    assert_eq!(cwd, fixture.root());
    let info = should_find(
        FILE,
        Options {
            cwd: Some(cwd),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(info.base, FILE);
    assert_eq!(info.dir, fixture.root());
}

#[tokio::test]
async fn ignores_entries_matching_the_given_ignore_patterns() {
    let fixture = Fixture::new();
    let ignore = SUBPATH.split('/').take(1).map(String::from).collect();
    let info = should_find(
        FILE,
        Options {
            ignore,
            ..fixture.options()
        },
    )
    .await;
    assert_eq!(info.dir, fixture.root());
}

#[tokio::test]
async fn ignore_boundary_stops_the_ascent() {
    let fixture = Fixture::new();
    let cwd = fixture.p(vec!["a", "b", "c"]);
    fs::create_dir_all(&cwd).unwrap();
    let marker = format!("{}.marker", fixture.stamp);
    fs::write(fixture.root().join(&marker), "").unwrap();

    let options = Options {
        cwd: Some(cwd),
        ..Default::default()
    };
    should_find(&marker, options.clone()).await;
    should_be_empty(
        &marker,
        Options {
            ignore: vec!["b".to_string()],
            ..options.clone()
        },
    )
    .await;
    // the directory holding the ignored segment is still scanned
    fs::write(fixture.p(vec!["a", marker.as_str()]), "").unwrap();
    let info = should_find(
        &marker,
        Options {
            ignore: vec!["b".to_string()],
            ..options
        },
    )
    .await;
    assert_eq!(info.dir, fixture.p(vec!["a"]));
}

#[tokio::test]
async fn ignored_entries_are_not_matched() {
    let fixture = Fixture::new();
    let options = Options {
        ignore: vec!["sub".to_string()],
        ..fixture.options()
    };
    should_be_empty("sub", options).await;
}

#[tokio::test]
async fn finds_no_match_limited_by_depth() {
    let fixture = Fixture::new();
    should_be_empty(
        FILE,
        Options {
            max: Some(1),
            ..fixture.options()
        },
    )
    .await;
    should_be_empty(
        &fixture.stamp,
        Options {
            max: Some(0),
            ..fixture.options()
        },
    )
    .await;
    let info = should_find(
        FILE,
        Options {
            max: Some(3),
            ..fixture.options()
        },
    )
    .await;
    assert_eq!(info.base, FILE);
}

#[cfg(unix)]
#[tokio::test]
async fn matches_symbolic_links_unless_symlinks_false() {
    let fixture = Fixture::new();
    let read = fs::read_link(fixture.p(vec!["sub", FILE])).unwrap();
    assert_eq!(read, Path::new("..file.ext"));

    let matched = should_find(FILE, fixture.options()).await;
    let root = should_find(
        FILE,
        Options {
            symlinks: false,
            ..fixture.options()
        },
    )
    .await;
    assert_ne!(matched, root);
    assert_eq!(matched.dir, fixture.p(vec!["sub"]));
    assert_eq!(root.dir, fixture.root());

    let limited = Options {
        max: Some(2),
        symlinks: false,
        ..fixture.options()
    };
    should_be_empty(FILE, limited).await;
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_directory_matches_as_directory() {
    let fixture = Fixture::new();
    let real = format!("real-{}", fixture.stamp);
    let link = format!("link-{}", fixture.stamp);
    fs::create_dir(fixture.root().join(&real)).unwrap();
    std::os::unix::fs::symlink(fixture.root().join(&real), fixture.root().join(&link)).unwrap();

    let info = should_find(&format!("{link}/"), fixture.options()).await;
    assert_eq!(info.dir, fixture.root());
    should_be_empty(&format!("{link}*"), fixture.options()).await;
    should_be_empty(
        &format!("{link}/"),
        Options {
            symlinks: false,
            ..fixture.options()
        },
    )
    .await;
}

#[tokio::test]
async fn inaccessible_start_is_an_error() {
    let fixture = Fixture::new();
    let missing = fixture.p(vec!["missing"]);
    let result = matchup(
        FILE,
        Options {
            cwd: Some(missing.clone()),
            ..Default::default()
        },
    )
    .await;
    match result {
        Err(Error::InaccessibleStart(path, _)) => assert_eq!(&*path, missing.as_path()),
        other => panic!("unexpected {other:?}"),
    }

    let file = fixture.p(vec![FILE]);
    let result = matchup(
        FILE,
        Options {
            cwd: Some(file),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(Error::InaccessibleStart(..))));
}

#[tokio::test]
async fn relative_cwd_is_resolved_against_process_directory() {
    let cwd = std::env::current_dir().unwrap();
    let info = should_find(
        "Cargo.toml",
        Options {
            cwd: Some(PathBuf::from("src/../tests")),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(info.dir, cwd);
}

#[tokio::test]
async fn repeated_searches_are_equal() {
    let fixture = Fixture::new();
    let finder = Matchup::new(fixture.options());
    for specifier in [FILE, "sub", "file.*", "nothing-here-at-all.none"] {
        let first = finder.search(specifier).await.unwrap();
        let second = finder.search(specifier).await.unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_searches_are_independent() {
    let fixture = Fixture::new();
    let (file, dir) = tokio::join!(
        matchup(FILE, fixture.options()),
        matchup("sub", fixture.options())
    );
    assert_eq!(file.unwrap().info().unwrap().base, FILE);
    assert_eq!(dir.unwrap().info().unwrap().name, "sub");

    let finder = std::sync::Arc::new(Matchup::new(fixture.options()));
    let task = {
        let finder = finder.clone();
        tokio::spawn(async move { finder.search(FILE).await })
    };
    let here = finder.search(FILE).await.unwrap();
    assert_eq!(task.await.unwrap().unwrap(), here);
}
