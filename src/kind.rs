use crate::{Error, RResult};
use glob::{MatchOptions, Pattern};

const GLOB_META: [char; 3] = ['*', '?', '['];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled search target.
#[derive(Debug, Clone)]
pub enum Specifier {
    /// Matches a file or a directory with exactly this name.
    Literal(Box<str>),
    /// Written with a trailing separator, matches directories only.
    Directory(Box<str>),
    /// Matches file names only.
    Glob(Pattern),
}

impl Specifier {
    pub fn parse(target: &str) -> RResult<Self> {
        if target.contains(GLOB_META) {
            return Pattern::new(target)
                .map(Specifier::Glob)
                .map_err(|error| Error::InvalidPattern(target.into(), error));
        }
        let trimmed = target.trim_end_matches(is_separator);
        if trimmed.len() != target.len() && !trimmed.is_empty() {
            Ok(Specifier::Directory(trimmed.into()))
        } else {
            Ok(Specifier::Literal(target.into()))
        }
    }

    /// Whether a single path segment satisfies the specifier,
    /// regardless of what kind of entry it names.
    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            Specifier::Literal(literal) | Specifier::Directory(literal) => **literal == *name,
            Specifier::Glob(pattern) => pattern.matches_with(name, MATCH_OPTIONS),
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

#[test]
fn test_specifier_kind() {
    assert!(matches!(
        Specifier::parse("file.ext").unwrap(),
        Specifier::Literal(s) if &*s == "file.ext"
    ));
    assert!(matches!(
        Specifier::parse("sub/").unwrap(),
        Specifier::Directory(s) if &*s == "sub"
    ));
    assert!(matches!(Specifier::parse("/").unwrap(), Specifier::Literal(_)));
    assert!(matches!(Specifier::parse("file.*").unwrap(), Specifier::Glob(_)));
    assert!(matches!(Specifier::parse("?.rs").unwrap(), Specifier::Glob(_)));
    assert!(matches!(Specifier::parse("[ab].rs").unwrap(), Specifier::Glob(_)));
}

#[test]
fn test_invalid_pattern() {
    match Specifier::parse("***") {
        Err(Error::InvalidPattern(pattern, _)) => assert_eq!(&*pattern, "***"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_star_matches_runs_within_segment() {
    let star = Specifier::parse("file.*").unwrap();
    assert!(star.matches_name("file.ext"));
    assert!(star.matches_name("file."));
    assert!(star.matches_name("file.tar.gz"));
    assert!(!star.matches_name("file"));
    assert!(!star.matches_name("a/file.ext"));
    assert!(!star.matches_name("file.a/b"));

    let any = Specifier::parse("*").unwrap();
    assert!(any.matches_name(""));
    assert!(any.matches_name(".env"));
    assert!(!any.matches_name("a/b"));
}

#[test]
fn test_question_and_class() {
    let question = Specifier::parse("?.rs").unwrap();
    assert!(question.matches_name("a.rs"));
    assert!(!question.matches_name("ab.rs"));
    assert!(!question.matches_name(".rs"));

    let class = Specifier::parse("[ab].rs").unwrap();
    assert!(class.matches_name("a.rs"));
    assert!(!class.matches_name("c.rs"));

    let negated = Specifier::parse("[!ab].rs").unwrap();
    assert!(negated.matches_name("c.rs"));
    assert!(!negated.matches_name("a.rs"));
}

#[test]
fn test_literal_is_exact() {
    let literal = Specifier::parse("Cargo.toml").unwrap();
    assert!(literal.matches_name("Cargo.toml"));
    assert!(!literal.matches_name("cargo.toml"));
    assert!(!literal.matches_name("Cargo.toml.bak"));
}
