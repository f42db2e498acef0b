//! Asset descriptors and input path mapping.

mod descriptor;
pub mod path;
mod scan;

// Types
pub use descriptor::AssetDescriptor;

// Scanning (pure functions)
pub use scan::scan_descriptors;
