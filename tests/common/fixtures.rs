use image::{ImageBuffer, ImageFormat, LumaA, Rgb, Rgba};
use std::path::{Path, PathBuf};

/// Writes a 16x16 opaque RGB gradient to `dir/name` in the given format.
pub fn write_rgb_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let img = ImageBuffer::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128u8]));
    let path = dir.join(name);
    img.save_with_format(&path, format)
        .expect("Failed to save RGB test image");
    path
}

/// Writes a 16x16 RGBA image with varying transparency to `dir/name` as PNG.
pub fn write_rgba_png(dir: &Path, name: &str) -> PathBuf {
    let img = ImageBuffer::from_fn(16, 16, |x, y| Rgba([255u8, 0, 0, (x * 16 + y) as u8]));
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png)
        .expect("Failed to save RGBA test image");
    path
}

/// Writes a 4x4 16-bit RGBA PNG, fully transparent red at (0, 0).
pub fn write_rgba16_png(dir: &Path, name: &str) -> PathBuf {
    let img: ImageBuffer<Rgba<u16>, Vec<u16>> =
        ImageBuffer::from_fn(4, 4, |x, y| Rgba([65535, 0, 0, ((x + y) * 4096) as u16]));
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png)
        .expect("Failed to save RGBA16 test image");
    path
}

/// Writes a 4x4 grey-plus-alpha PNG (LA8).
pub fn write_luma_alpha_png(dir: &Path, name: &str) -> PathBuf {
    let img: ImageBuffer<LumaA<u8>, Vec<u8>> =
        ImageBuffer::from_fn(4, 4, |x, _| LumaA([90u8, (x * 10) as u8]));
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png)
        .expect("Failed to save LA8 test image");
    path
}

/// Writes raw bytes to `dir/name`, for files the tool must refuse.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write test file");
    path
}
