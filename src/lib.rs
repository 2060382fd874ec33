//! # matchup
//!
//! Finds the nearest entry, in the starting directory or one of its
//! ancestors, whose name matches a literal, a directory name or a glob.
//!
//! ## How to use?
//!
//! ```rust,no_run
//! // |-- file.ext
//! // |-- sub
//! // |---- folder  <- cwd
//!
//! use matchup::{matchup, MatchResult, Options};
//!
//! # async fn run() -> matchup::RResult<()> {
//! let cwd = std::env::current_dir()?.join("sub/folder");
//! let options = Options { cwd: Some(cwd), ..Default::default() };
//!
//! match matchup("file.*", options).await? {
//!     // -> MatchInfo { dir: "<cwd>/../..", base: "file.ext", name: "file", ext: ".ext", .. }
//!     MatchResult::Found(info) => println!("{}", info.path().display()),
//!     MatchResult::Empty => println!("not found"),
//! }
//! # Ok(())
//! # }
//! ```
//!

mod ascend;
mod entry;
mod error;
mod fs;
mod ignore;
mod info;
mod kind;
pub mod log;
mod matcher;
mod normalize;
mod options;
pub mod origin;

pub use entry::{DirEntry, EntryStat};
pub use error::*;
pub use fs::{FileSystem, TokioFs};
pub use info::{MatchInfo, MatchResult};
pub use kind::Specifier;
pub use options::Options;

use normalize::normalize_start;
use std::sync::Arc;

pub type RResult<T> = Result<T, Error>;

#[derive(Debug)]
pub struct Matchup {
    pub options: Options,
    pub(crate) fs: Arc<dyn FileSystem>,
}

impl Matchup {
    pub fn new(options: Options) -> Self {
        Self::with_fs(options, Arc::new(TokioFs))
    }

    pub fn with_fs(options: Options, fs: Arc<dyn FileSystem>) -> Self {
        Self { options, fs }
    }

    /// Resolves to [`MatchResult::Empty`] when nothing matches; an error
    /// means the pattern or the starting directory is unusable.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, specifier: &str) -> RResult<MatchResult> {
        let specifier = Specifier::parse(specifier)?;
        let start = match self.options.cwd.as_ref() {
            Some(cwd) => normalize_start(cwd)?,
            None => normalize_start(&origin::default_cwd()?)?,
        };
        self.ascend(&specifier, start).await
    }
}

pub async fn matchup(specifier: &str, options: Options) -> RResult<MatchResult> {
    Matchup::new(options).search(specifier).await
}
