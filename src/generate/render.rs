//! Descriptor table rendering.

use std::fmt::Write as _;

use crate::asset::AssetDescriptor;
use crate::config::GenerateOptions;
use crate::embed::render_descriptors_go;

/// Rendered in place of a MIME type that could not be inferred.
///
/// Existing consumers of the generated table compare against this exact
/// string, so it stays `"None"` rather than becoming `""`.
pub const ABSENT_MIME: &str = "None";

/// Quote `s` as a Go interpreted string literal.
///
/// Ordinary paths pass through untouched; only `"` and `\` and control
/// characters are escaped.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Render one table line: `\t\t{"<path>", "<mime>"},`
pub fn render_entry(descriptor: &AssetDescriptor) -> String {
    format!(
        "\t\t{{{}, {}}},",
        go_quote(&descriptor.path),
        go_quote(descriptor.mime.unwrap_or(ABSENT_MIME)),
    )
}

/// Render the complete Go source for `descriptors`.
///
/// The result ends at the closing brace; callers must not append a newline.
pub fn render(descriptors: &[AssetDescriptor], options: &GenerateOptions) -> String {
    let entries = descriptors
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n");

    render_descriptors_go(&options.package, &entries)
}
