use image::ImageFormat;
use std::path::PathBuf;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    /// The codec for this container was not compiled into the build.
    #[error("no {codec} for {} images is available in this build", format_name(.format))]
    MissingCodec {
        format: ImageFormat,
        codec: &'static str,
    },

    #[error("{} images cannot store an alpha channel", format_name(.format))]
    AlphaUnsupported { format: ImageFormat },

    #[error(
        "{} has a {} extension but contains {} data",
        .path.display(),
        format_name(.expected),
        format_name(.found)
    )]
    FormatMismatch {
        path: PathBuf,
        expected: ImageFormat,
        found: ImageFormat,
    },

    #[error("unrecognized image format: {}", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl NormalizeError {
    /// True when the failure is a missing codec rather than a problem with the file.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, NormalizeError::MissingCodec { .. })
    }
}

/// Human-readable name of a container format, e.g. "PNG".
pub fn format_name(format: &ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| ext.to_uppercase())
        .unwrap_or_else(|| format!("{:?}", format))
}
