use std::path::{Path, PathBuf};

/// Literal text that introduces every placeholder token.
pub const PREFIX: &str = "__reactenv.";

/// Byte range `[start, end)` of a token within a file's original contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single placeholder occurrence: where it is and which variable it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    /// Variable name, i.e. the text after [`PREFIX`].
    pub name: String,
}

/// One candidate file and the tokens found in it.
///
/// Records come out of the selector with no tokens; the engine fills
/// them in and drops the ones that stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub tokens: Vec<Token>,
}

impl FileRecord {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name used in reports.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
