mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from rgba_icon for tests
pub use rgba_icon::{FormatNormalizer, ImageAsset, NormalizeError, NormalizeReport};
