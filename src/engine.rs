use std::fs;

use crate::env::Environment;
use crate::lexer::tokenize;
use crate::registry::VariableRegistry;
use crate::token::{FileRecord, PREFIX, Token};
use crate::Error;

/// One or more referenced variables have no value in the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{} environment {} not set: {}",
    .names.len(),
    plural(.names.len(), "variable", "variables"),
    .names.join(", ")
)]
pub struct MissingVariableError {
    /// Every unresolved name, sorted.
    pub names: Vec<String>,
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Result of the scan phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Files with at least one token, in selector order.
    pub files: Vec<FileRecord>,
    pub registry: VariableRegistry,
    /// Number of files handed to the scan, before empty ones were dropped.
    pub files_matched: usize,
}

impl Scan {
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.files.iter().map(|f| f.tokens.len()).sum()
    }

    #[must_use]
    pub fn files_with_occurrences(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check that every referenced variable resolved.
    ///
    /// # Errors
    ///
    /// Returns `MissingVariableError` naming all unresolved variables.
    pub fn validate(&self) -> Result<(), MissingVariableError> {
        let names = self.registry.missing();
        if names.is_empty() {
            Ok(())
        } else {
            Err(MissingVariableError { names })
        }
    }
}

/// Totals from a completed replace pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceSummary {
    pub files_written: usize,
    pub occurrences_replaced: usize,
    pub variables_injected: usize,
}

/// Read each file, record its tokens, and resolve every distinct name
/// against `env`.
///
/// Files without tokens are dropped from the result. The registry is
/// built fresh on every call.
///
/// # Errors
///
/// Returns `Error::Io` on the first file that cannot be read.
pub fn scan<E: Environment + ?Sized>(files: Vec<FileRecord>, env: &E) -> Result<Scan, Error> {
    let files_matched = files.len();
    let mut registry = VariableRegistry::new();
    let mut kept = Vec::with_capacity(files.len());

    for mut file in files {
        let contents = fs::read(&file.path).map_err(|source| Error::io(&file.path, source))?;
        file.tokens = tokenize(&contents);

        tracing::debug!(
            path = %file.path.display(),
            bytes = contents.len(),
            occurrences = file.tokens.len(),
            "scanned file"
        );

        if file.tokens.is_empty() {
            continue;
        }

        for token in &file.tokens {
            tracing::trace!(
                path = %file.path.display(),
                name = %token.name,
                start = token.span.start,
                end = token.span.end,
                "occurrence"
            );
            registry.resolve_with(&token.name, env);
        }
        kept.push(file);
    }

    Ok(Scan {
        files: kept,
        registry,
        files_matched,
    })
}

/// Build the rewritten contents for one file.
///
/// `tokens` must be in ascending, non-overlapping span order and refer
/// to `contents` as read. Tokens whose name has no value are left as is;
/// callers validate first.
#[must_use]
pub fn substitute(contents: &[u8], tokens: &[Token], registry: &VariableRegistry) -> Vec<u8> {
    let mut out = Vec::with_capacity(contents.len());
    let mut last = 0;

    for token in tokens {
        let Some(value) = registry.value(&token.name) else {
            continue;
        };
        out.extend_from_slice(&contents[last..token.span.start]);
        out.extend_from_slice(value.as_bytes());
        last = token.span.end;
    }
    out.extend_from_slice(&contents[last..]);

    out
}

fn tokens_still_present(contents: &[u8], tokens: &[Token]) -> bool {
    tokens.iter().all(|token| {
        contents
            .get(token.span.start..token.span.end)
            .and_then(|text| text.strip_prefix(PREFIX.as_bytes()))
            .is_some_and(|name| name == token.name.as_bytes())
    })
}

/// Rewrite every scanned file with its tokens replaced.
///
/// Files are processed in scan order. A write failure stops the pass;
/// files written before it stay written.
///
/// # Errors
///
/// Returns `Error::MissingVariables` without touching any file if the
/// scan did not validate, `Error::Changed` if a file no longer holds the
/// tokens it was scanned with, and `Error::Io` on read or write failure.
pub fn replace(scan: &Scan) -> Result<ReplaceSummary, Error> {
    scan.validate()?;

    let mut summary = ReplaceSummary {
        variables_injected: scan.registry.len(),
        ..ReplaceSummary::default()
    };

    for file in &scan.files {
        let contents = fs::read(&file.path).map_err(|source| Error::io(&file.path, source))?;
        if !tokens_still_present(&contents, &file.tokens) {
            return Err(Error::Changed(file.path.clone()));
        }

        let rewritten = substitute(&contents, &file.tokens, &scan.registry);
        fs::write(&file.path, &rewritten).map_err(|source| Error::io(&file.path, source))?;

        tracing::debug!(
            path = %file.path.display(),
            replaced = file.tokens.len(),
            before = contents.len(),
            after = rewritten.len(),
            "wrote file"
        );

        summary.files_written += 1;
        summary.occurrences_replaced += file.tokens.len();
    }

    Ok(summary)
}
