//! Descriptor collection from the input file list.

use crate::config::GenerateOptions;
use crate::debug;

use super::AssetDescriptor;
use super::path::normalize;

/// Build descriptors for `files`, preserving argument order.
///
/// Entries dropped by [`normalize`] (source maps outside debug mode) leave
/// no gap; the relative order of the rest is unchanged.
pub fn scan_descriptors<S: AsRef<str>>(
    files: &[S],
    options: &GenerateOptions,
) -> Vec<AssetDescriptor> {
    let mut descriptors = Vec::with_capacity(files.len());

    for file in files {
        let file = file.as_ref();
        let Some(path) = normalize(file, options) else {
            debug!("scan"; "skipping source map {}", file);
            continue;
        };

        let descriptor = AssetDescriptor::new(path);
        match descriptor.mime {
            Some(mime) => debug!("scan"; "{} -> {}", descriptor.path, mime),
            None => debug!("scan"; "{} -> unknown type", descriptor.path),
        }
        descriptors.push(descriptor);
    }

    descriptors
}
