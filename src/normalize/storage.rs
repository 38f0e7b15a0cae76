use image::DynamicImage;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{NormalizeError, NormalizeResult};
use crate::models::ImageAsset;

pub fn read_bytes(path: &Path) -> NormalizeResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| NormalizeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy the original bytes next to the asset and return the backup path.
pub fn write_backup(asset: &ImageAsset, original: &[u8]) -> NormalizeResult<PathBuf> {
    let backup = asset.backup_path();
    std::fs::write(&backup, original).map_err(|source| NormalizeError::Write {
        path: backup.clone(),
        source,
    })?;
    debug!("Backup written to {}", backup.display());
    Ok(backup)
}

/// Encode `img` in the asset's container format and replace the file.
///
/// The image is encoded into a temporary file in the same directory, which is
/// then renamed over the original. If encoding fails the original is untouched
/// and the temporary file is removed when it is dropped.
pub fn replace_with(asset: &ImageAsset, img: &DynamicImage) -> NormalizeResult<()> {
    let path = asset.path();
    let write_err = |source: std::io::Error| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Write through symlinks so the link keeps pointing at the converted file.
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        img.write_to(&mut writer, asset.format)?;
        writer.flush().map_err(write_err)?;
    }

    // Keep the original file's permissions on the replacement.
    if let Ok(meta) = std::fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    debug!("Replaced {}", target.display());
    Ok(())
}
