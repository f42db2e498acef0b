//! Asset descriptor: logical path → MIME type.

use crate::utils::mime;

/// One bundled static file as it appears in the generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Logical path after prefix stripping (e.g., "js/app.js")
    pub path: String,
    /// Inferred content type, `None` if the name gives no hint
    pub mime: Option<&'static str>,
}

impl AssetDescriptor {
    /// Describe a logical path, inferring its MIME type from the name.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let mime = mime::infer(&path);
        Self { path, mime }
    }
}
