use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageReader;
use rayon::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::method::CompressionMethod;
use crate::result::{CompressionResult, ComponentLevel};

/// A reconstruction written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedLevel {
    pub path: PathBuf,
    pub num_components: u32,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Decode the base64 PNG payload of a level.
pub fn decode_level(level: &ComponentLevel) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(level.image_data().trim())?)
}

/// Width and height of an encoded image, read from its header only.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

/// File name for a level, e.g. `svd-064.png`.
pub fn level_file_name(method: CompressionMethod, num_components: u32) -> String {
    format!(
        "{}-{:03}.png",
        method.as_str().to_ascii_lowercase(),
        num_components
    )
}

/// Decode a level and write it to `path`.
pub fn export_level(level: &ComponentLevel, path: &Path) -> Result<ExportedLevel> {
    let bytes = decode_level(level)?;
    let (width, height) = probe_dimensions(&bytes)?;
    std::fs::write(path, &bytes)?;

    Ok(ExportedLevel {
        path: path.to_path_buf(),
        num_components: level.num_components(),
        width,
        height,
        bytes: bytes.len(),
    })
}

/// Write every level of `result` into `dir`, decoding in parallel.
/// Returned entries follow the level order.
pub fn export_all(result: &CompressionResult, dir: &Path) -> Result<Vec<ExportedLevel>> {
    std::fs::create_dir_all(dir)?;

    let exported = result
        .levels()
        .par_iter()
        .map(|level| {
            let path = dir.join(level_file_name(result.method(), level.num_components()));
            export_level(level, &path)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(count = exported.len(), dir = %dir.display(), "Exported all levels");
    Ok(exported)
}
