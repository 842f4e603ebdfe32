use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::Error;
use crate::token::FileRecord;

/// Matcher applied when none is configured.
pub const DEFAULT_MATCHER: &str = r"\.js$";

/// Compile a file name matcher.
///
/// # Errors
///
/// Returns `Error::Pattern` when `pattern` is not a valid regex.
pub fn compile_matcher(pattern: &str) -> Result<Regex, Error> {
    Ok(Regex::new(pattern)?)
}

/// List the regular files directly inside `dir` whose base name matches
/// `matcher`, sorted by name.
///
/// Subdirectories are neither returned nor descended into. Symlinks
/// count when they point at a regular file. Entries that resolve to a
/// file already selected (symlinks, hard links) are dropped; the first
/// name in sorted order wins.
///
/// # Errors
///
/// Returns `Error::Io` when the directory or one of its entries cannot
/// be read, and `Error::NotADirectory` when `dir` is something else.
pub fn select_files(dir: &Path, matcher: &Regex) -> Result<Vec<FileRecord>, Error> {
    let metadata = fs::metadata(dir).map_err(|source| Error::io(dir, source))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| Error::io(dir, source))? {
        let entry = entry.map_err(|source| Error::io(dir, source))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if !matcher.is_match(&name) {
            continue;
        }

        let path = entry.path();
        // Follows symlinks; a dangling link is simply skipped.
        let Some(metadata) = fs::metadata(&path).ok().filter(fs::Metadata::is_file) else {
            tracing::trace!(path = %path.display(), "skipping non-file entry");
            continue;
        };

        let id = FileId::of(&path, &metadata);
        entries.push((name.into_owned(), path, id));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut seen = HashSet::new();
    entries.retain(|(_, path, id)| {
        let first = seen.insert(id.clone());
        if !first {
            tracing::debug!(path = %path.display(), "skipping alias of a selected file");
        }
        first
    });

    tracing::debug!(
        dir = %dir.display(),
        matched = entries.len(),
        "selected files"
    );

    Ok(entries
        .into_iter()
        .map(|(_, path, _)| FileRecord::new(path))
        .collect())
}

/// Identity of the file an entry resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum FileId {
    #[cfg(unix)]
    Inode { dev: u64, ino: u64 },
    #[cfg(not(unix))]
    Path(std::path::PathBuf),
}

impl FileId {
    #[cfg(unix)]
    fn of(_path: &Path, metadata: &fs::Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self::Inode {
            dev: metadata.dev(),
            ino: metadata.ino(),
        }
    }

    #[cfg(not(unix))]
    fn of(path: &Path, _metadata: &fs::Metadata) -> Self {
        Self::Path(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
    }
}
