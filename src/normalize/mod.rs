pub mod codec;
pub mod conversion;
pub mod storage;

use image::ImageReader;
use log::{debug, info};
use std::io::Cursor;
use std::path::PathBuf;

use crate::error::{NormalizeError, NormalizeResult};
use crate::models::{ImageAsset, NormalizeReport};

/// Path used when the tool is run without arguments.
pub const DEFAULT_ICON_PATH: &str = "icon.png";

/// Rewrites an image file in place so its pixels carry an alpha channel
pub struct FormatNormalizer {
    pub path: PathBuf,
    pub backup: bool,
}

impl FormatNormalizer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: false,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Work out the container format and make sure this build can handle it.
    ///
    /// A known extension is resolved without touching the file, so a missing
    /// codec is reported before any I/O. Unknown extensions fall back to
    /// sniffing the file header.
    pub fn resolve_asset(&self) -> NormalizeResult<ImageAsset> {
        let format = match codec::format_from_extension(&self.path) {
            Some(format) => format,
            None => {
                debug!("No known extension on {}, sniffing header", self.path.display());
                codec::format_from_content(&self.path)?
            }
        };
        codec::ensure_supported(format)?;
        Ok(ImageAsset::new(&self.path, format))
    }

    /// Run the full read, convert, write cycle.
    pub fn run(&self) -> NormalizeResult<NormalizeReport> {
        let asset = self.resolve_asset()?;
        info!("Normalizing {} as {}", asset.path.display(), asset.format_name());

        let original = storage::read_bytes(asset.path())?;
        let mut reader = ImageReader::new(Cursor::new(original.as_slice()));
        reader.set_format(asset.format);
        let reader = reader
            .with_guessed_format()
            .map_err(|source| NormalizeError::Read {
                path: asset.path.clone(),
                source,
            })?;
        if let Some(found) = reader.format().filter(|found| *found != asset.format) {
            return Err(NormalizeError::FormatMismatch {
                path: asset.path.clone(),
                expected: asset.format,
                found,
            });
        }
        let img = reader.decode()?;

        let color_before = img.color();
        let (width, height) = (img.width(), img.height());
        if conversion::is_normalized(&img) {
            debug!("{} is already RGBA8, re-encoding unchanged", asset.path.display());
        } else if conversion::has_alpha(&img) {
            debug!("Rescaling {:?} alpha to Rgba8 ({}x{})", color_before, width, height);
        } else {
            debug!("Converting {:?} to Rgba8 ({}x{})", color_before, width, height);
        }

        let rgba = conversion::to_rgba(img);

        let backup = if self.backup {
            Some(storage::write_backup(&asset, &original)?)
        } else {
            None
        };
        storage::replace_with(&asset, &rgba)?;

        Ok(NormalizeReport {
            asset,
            color_before,
            color_after: rgba.color(),
            width,
            height,
            backup,
        })
    }
}

impl Default for FormatNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_PATH)
    }
}
