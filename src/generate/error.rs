//! Generation error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting the generated source
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to write to stdout")]
    Stdout(#[source] io::Error),
}
