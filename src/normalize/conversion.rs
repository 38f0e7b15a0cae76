use image::{ColorType, DynamicImage};

/// Convert any colour type to 8-bit RGBA.
/// Opaque sources get alpha 255; deeper sources are rescaled to 8 bits.
pub fn to_rgba(img: DynamicImage) -> DynamicImage {
    match img {
        rgba @ DynamicImage::ImageRgba8(_) => rgba,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

/// Whether the pixel layout already carries an alpha channel
pub fn has_alpha(img: &DynamicImage) -> bool {
    img.color().has_alpha()
}

/// Whether the image already is in the exact layout we normalize to
pub fn is_normalized(img: &DynamicImage) -> bool {
    img.color() == ColorType::Rgba8
}
