use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::Error;
use crate::selector::DEFAULT_MATCHER;

#[derive(Debug, Parser)]
#[command(
    name = "reactenv",
    version,
    about = "Inject environment variables into a built front-end app."
)]
pub struct Cli {
    /// Directory holding the built assets.
    pub path: PathBuf,

    /// Regex that file names must match to be processed.
    #[arg(short, long, env = "REACTENV_MATCHER", default_value = DEFAULT_MATCHER)]
    pub matcher: String,

    /// Stop after any errors or warnings.
    #[arg(short, long, env = "REACTENV_STRICT")]
    pub strict: bool,

    /// Scan and check variables without writing any file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    pub matcher: String,
    pub strict: bool,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl Config {
    /// Settings for `dir` with every option at its default.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            matcher: DEFAULT_MATCHER.to_string(),
            strict: false,
            dry_run: false,
            quiet: false,
            verbose: 0,
        }
    }

    /// Parse the process arguments. Exits on usage errors.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the arguments parse but are unusable.
    pub fn from_cli() -> Result<Self, Error> {
        Self::from_parts(Cli::parse())
    }

    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on an empty path or matcher.
    pub fn from_parts(cli: Cli) -> Result<Self, Error> {
        if cli.path.as_os_str().is_empty() {
            return Err(Error::Config("path must not be empty".to_string()));
        }

        if cli.matcher.trim().is_empty() {
            return Err(Error::Config("matcher must not be empty".to_string()));
        }

        Ok(Self {
            dir: cli.path,
            matcher: cli.matcher,
            strict: cli.strict,
            dry_run: cli.dry_run,
            quiet: cli.quiet,
            verbose: cli.verbose,
        })
    }

    #[must_use]
    pub fn matcher(mut self, pattern: impl Into<String>) -> Self {
        self.matcher = pattern.into();
        self
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
