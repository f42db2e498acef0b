//! Embedded Go scaffold for the descriptor table.
//!
//! `go/descriptors.go.tmpl` declares the `AssetDescriptor` type and the
//! `AssetDescriptors()` function. It has two substitution points:
//!
//! - `__PACKAGE__` - package clause
//! - `__ASSET_DESCRIPTORS__` - table entries, one per line
//!
//! ```ignore
//! let source = embed::render_descriptors_go("main", "\t\t{\"app.js\", \"text/javascript\"},");
//! ```

/// Raw scaffold text.
pub const DESCRIPTORS_GO: &str = include_str!("go/descriptors.go.tmpl");

const PACKAGE_SLOT: &str = "__PACKAGE__";
const ENTRIES_SLOT: &str = "__ASSET_DESCRIPTORS__";

/// Fill the scaffold. `entries` must not end with a newline.
///
/// The result is trimmed and ends at the closing brace. Entries are
/// substituted last, so their text is never scanned for slots.
pub fn render_descriptors_go(package: &str, entries: &str) -> String {
    DESCRIPTORS_GO
        .trim()
        .replace(PACKAGE_SLOT, package)
        .replace(ENTRIES_SLOT, entries)
}
