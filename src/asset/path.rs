//! Input path normalization.
//!
//! Prefix stripping is a literal string operation, not a path operation:
//! prefix `build` turns `buildxyz.js` into `xyz.js`. Callers rely on this,
//! so it must not become segment-aware.

use crate::config::GenerateOptions;

/// Suffix of source map files, dropped unless debug mode is on.
pub const SOURCE_MAP_SUFFIX: &str = ".map";

/// Strip `prefix` from the front of `path` once, if it matches exactly.
#[inline]
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Whether a (stripped) path names a source map.
#[inline]
pub fn is_source_map(path: &str) -> bool {
    path.ends_with(SOURCE_MAP_SUFFIX)
}

/// Map an input path to its logical path, or `None` if it should be skipped.
pub fn normalize<'a>(path: &'a str, options: &GenerateOptions) -> Option<&'a str> {
    let path = match &options.prefix {
        Some(prefix) => strip_prefix(path, prefix),
        None => path,
    };

    if !options.debug && is_source_map(path) {
        return None;
    }

    Some(path)
}
