use crate::{entry::DirEntry, kind::Specifier};

/// Returns the first entry of `entries`, in listing order, that the
/// specifier selects. Symbolic links are passed over unless `symlinks`.
pub fn find<'a>(
    entries: &'a [DirEntry],
    specifier: &Specifier,
    symlinks: bool,
) -> Option<&'a DirEntry> {
    entries
        .iter()
        .filter(|entry| symlinks || !entry.is_symlink())
        .find(|entry| is_eligible(entry, specifier) && specifier.matches_name(entry.name()))
}

fn is_eligible(entry: &DirEntry, specifier: &Specifier) -> bool {
    match specifier {
        Specifier::Literal(_) => true,
        Specifier::Directory(_) => entry.is_dir(),
        Specifier::Glob(_) => !entry.is_dir(),
    }
}
