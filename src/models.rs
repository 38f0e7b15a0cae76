use image::{ColorType, ImageFormat};
use std::path::{Path, PathBuf};

use crate::error::format_name;

/// An image file on disk together with its resolved container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub format: ImageFormat,
}

impl ImageAsset {
    pub fn new(path: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the original bytes go when a backup is requested (`icon.png.bak`).
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    pub fn format_name(&self) -> String {
        format_name(&self.format)
    }
}

/// Outcome of a successful normalization.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub asset: ImageAsset,
    pub color_before: ColorType,
    pub color_after: ColorType,
    pub width: u32,
    pub height: u32,
    pub backup: Option<PathBuf>,
}

impl NormalizeReport {
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} converted to RGBA ({:?} -> {:?}, {}x{} {})",
            self.asset.path.display(),
            self.color_before,
            self.color_after,
            self.width,
            self.height,
            self.asset.format_name(),
        );
        if let Some(backup) = &self.backup {
            line.push_str(&format!(", original kept at {}", backup.display()));
        }
        line
    }
}
