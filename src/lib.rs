//! Inject environment variables into already-built front-end bundles.
//!
//! Build tooling leaves placeholders of the form `__reactenv.NAME` in the
//! emitted JavaScript. This crate finds them, checks that every referenced
//! variable is set, and only then rewrites the files with the values.
//!
//! # Quick start
//!
//! ```
//! use reactenv::{tokenize, substitute, VariableRegistry};
//! use std::collections::HashMap;
//!
//! let source = br#"fetch("__reactenv.API_URL")"#;
//! let tokens = tokenize(source);
//! let env = HashMap::from([("API_URL".to_string(), "https://api.example.com".to_string())]);
//!
//! let mut registry = VariableRegistry::new();
//! for token in &tokens {
//!     registry.resolve_with(&token.name, &env);
//! }
//!
//! let output = substitute(source, &tokens, &registry);
//! assert_eq!(output, br#"fetch("https://api.example.com")"#);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod engine;
pub mod env;
pub mod lexer;
pub mod logging;
pub mod registry;
pub mod report;
pub mod selector;
pub mod token;

use std::io;
use std::path::{Path, PathBuf};

pub use config::Config;
pub use engine::{MissingVariableError, ReplaceSummary, Scan, replace, scan, substitute};
pub use env::{Environment, ProcessEnv};
pub use lexer::tokenize;
pub use registry::VariableRegistry;
pub use report::{ConsoleReporter, Level, MemoryReporter, Reporter};
pub use selector::{DEFAULT_MATCHER, compile_matcher, select_files};
pub use token::{FileRecord, PREFIX, Span, Token};

/// Unified error type for a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory or file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The path to process is not a directory.
    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The file name matcher is not a valid regex.
    #[error("invalid file matcher: {0}")]
    Pattern(#[from] regex::Error),
    /// Referenced variables are not set.
    #[error(transparent)]
    MissingVariables(#[from] MissingVariableError),
    /// A file was modified between scanning and replacing.
    #[error("{}: contents changed since scan", .0.display())]
    Changed(PathBuf),
    /// Arguments parsed but cannot be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Files were rewritten.
    Injected(ReplaceSummary),
    /// Everything resolved; nothing was written on request.
    DryRun {
        files: usize,
        occurrences: usize,
        variables: usize,
    },
    /// No placeholder was found in any selected file.
    NothingToDo,
}

const NOTHING_TO_DO_HINT: &str = "\
No environment variable placeholders were found.
This usually means one of:
  - the files were already processed by a previous run
  - the build did not inject `__reactenv.*` placeholders
  - the matcher does not select the built script files";

/// Select, scan, validate and (unless dry-running) rewrite the files
/// under `config.dir`, reporting progress to `reporter`.
///
/// Nothing is written unless every referenced variable is set.
///
/// # Errors
///
/// Returns the first error hit; see [`Error`].
pub fn run<E, R>(config: &Config, env: &E, reporter: &mut R) -> Result<Outcome, Error>
where
    E: Environment + ?Sized,
    R: Reporter + ?Sized,
{
    let matcher = compile_matcher(&config.matcher)?;
    let files = select_files(&config.dir, &matcher)?;
    tracing::info!(dir = %config.dir.display(), files = files.len(), "scanning");

    let scan = scan(files, env)?;

    reporter.info(&format!(
        "{} file(s) matched `{}`, {} with placeholders",
        scan.files_matched,
        config.matcher,
        scan.files_with_occurrences()
    ));

    if scan.is_empty() {
        reporter.warn(NOTHING_TO_DO_HINT);
        return Ok(Outcome::NothingToDo);
    }

    reporter.info(&format!(
        "Found {} occurrence(s) of {} variable(s)",
        scan.occurrence_count(),
        scan.registry.len()
    ));
    for file in &scan.files {
        reporter.info(&format!(
            "  {:>4}  {}",
            file.tokens.len(),
            file.display_name()
        ));
    }

    report_checklist(&scan.registry, reporter);

    scan.validate()?;

    if config.dry_run {
        reporter.success("Dry run: all variables are set, no files written");
        return Ok(Outcome::DryRun {
            files: scan.files_with_occurrences(),
            occurrences: scan.occurrence_count(),
            variables: scan.registry.len(),
        });
    }

    let summary = replace(&scan)?;
    tracing::info!(
        files = summary.files_written,
        occurrences = summary.occurrences_replaced,
        "replaced"
    );
    reporter.success(&format!(
        "Injected {} variable(s) into {} file(s)",
        summary.variables_injected, summary.files_written
    ));

    Ok(Outcome::Injected(summary))
}

fn report_checklist<R: Reporter + ?Sized>(registry: &VariableRegistry, reporter: &mut R) {
    for (name, resolved) in registry.iter() {
        if resolved {
            reporter.info(&format!("  ✓ {name}"));
        } else {
            reporter.error(&format!("  ✗ {name}"));
        }
    }
}
