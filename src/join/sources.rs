use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::JoinError;

/// Directories skipped by default: .NET build output.
pub const DEFAULT_EXCLUDED: [&str; 2] = ["bin", "obj"];

/// Collects the source files below `root`.
///
/// Walks `root` recursively and returns every file whose extension equals
/// `extension` (without the dot), except files lying below `root/<name>` for
/// any `name` in `excluded`. Entries are visited in file name order so the
/// result is stable across platforms.
///
/// # Parameters
/// - `root`: Directory to scan.
/// - `extension`: Source extension, e.g. `cs`.
/// - `excluded`: Directory names under `root` to skip.
///
/// # Errors
/// Returns `JoinError::Walk` if a directory cannot be read.
pub fn collect_sources<S>(root: &Path, extension: &str, excluded: &[S]) -> Result<Vec<PathBuf>, JoinError>
    where S: AsRef<str>
{
    let excluded: Vec<PathBuf> = excluded.iter().map(|name| root.join(name.as_ref())).collect();

    let mut sources = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name()
                                   .into_iter()
                                   .filter_entry(|entry| {
                                       !excluded.iter().any(|dir| entry.path() == dir)
                                   });
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
           && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            log::debug!("found source {}", entry.path().display());
            sources.push(entry.into_path());
        }
    }

    Ok(sources)
}
