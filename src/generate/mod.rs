//! Go source generation for asset descriptor tables.
//!
//! The pipeline is a single pass:
//!
//! ```text
//! files → scan_descriptors (strip prefix, drop maps, infer MIME) → render → emit
//! ```

mod error;
mod render;

pub use error::GenerateError;
pub use render::render;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::asset::scan_descriptors;
use crate::config::GenerateOptions;
use crate::{debug, log};

/// Produce the Go source describing `files`.
pub fn generate<S: AsRef<str>>(files: &[S], options: &GenerateOptions) -> String {
    let descriptors = scan_descriptors(files, options);
    debug!("generate"; "{} of {} file(s) described", descriptors.len(), files.len());
    render(&descriptors, options)
}

/// Write `source` verbatim, without a trailing newline.
///
/// A reader that hung up early (`BrokenPipe`) is not an error.
pub fn emit<W: Write>(source: &str, writer: &mut W) -> io::Result<()> {
    match writer.write_all(source.as_bytes()).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Write `source` to `output`, or to stdout when no path is given.
pub fn write_output(source: &str, output: Option<&Path>) -> Result<(), GenerateError> {
    match output {
        Some(path) => {
            fs::write(path, source).map_err(|e| GenerateError::Write(path.to_path_buf(), e))?;
            log!("generate"; "wrote {}", path.display());
            Ok(())
        }
        None => emit(source, &mut io::stdout().lock()).map_err(GenerateError::Stdout),
    }
}
