//! Generation options resolved from the command line.
//!
//! There is no config file and no environment lookup: every setting comes
//! from [`Cli`] and lives for a single invocation.

use crate::cli::Cli;

/// Package clause used when `--package` is not given.
pub const DEFAULT_PACKAGE: &str = "main";

/// Options controlling how input paths become descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Literal prefix stripped from each input path (at most once).
    pub prefix: Option<String>,
    /// Keep `.map` source maps in the generated table.
    pub debug: bool,
    /// Go package clause of the generated file.
    pub package: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            debug: false,
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Resolve options from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            prefix: cli.prefix.clone(),
            debug: cli.debug,
            package: cli.package.clone(),
        }
    }
}

#[cfg(test)]
impl GenerateOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
