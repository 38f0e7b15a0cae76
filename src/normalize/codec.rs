use image::{ImageFormat, ImageReader};
use std::path::Path;

use crate::error::{NormalizeError, NormalizeResult};

/// Resolve the container format from the file extension alone (no I/O).
pub fn format_from_extension(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path).ok()
}

/// Sniff the container format from the file header.
pub fn format_from_content(path: &Path) -> NormalizeResult<ImageFormat> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| NormalizeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    reader.format().ok_or_else(|| NormalizeError::UnknownFormat {
        path: path.to_path_buf(),
    })
}

/// Containers that can hold 8-bit RGBA pixel data
pub fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::Gif
            | ImageFormat::Tga
            | ImageFormat::Qoi
            | ImageFormat::Avif
    )
}

/// Fail unless this build can decode and re-encode `format` with an alpha channel.
pub fn ensure_supported(format: ImageFormat) -> NormalizeResult<()> {
    if !format.reading_enabled() {
        return Err(NormalizeError::MissingCodec {
            format,
            codec: "decoder",
        });
    }
    if !format.writing_enabled() {
        return Err(NormalizeError::MissingCodec {
            format,
            codec: "encoder",
        });
    }
    if !supports_alpha(format) {
        return Err(NormalizeError::AlphaUnsupported { format });
    }
    Ok(())
}
