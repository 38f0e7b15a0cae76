pub mod error;
pub mod logger;
pub mod models;
pub mod normalize;

pub use error::{NormalizeError, NormalizeResult};
pub use models::{ImageAsset, NormalizeReport};
pub use normalize::{DEFAULT_ICON_PATH, FormatNormalizer};
