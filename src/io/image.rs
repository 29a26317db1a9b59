//! PNG and JPEG export of composed canvases

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{CollagerError, Result, unsupported_type};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::buffer::ConvertBuffer;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output encodings a canvas can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Lossless PNG
    Png,
    /// JPEG at maximum quality
    Jpeg,
}

impl FileType {
    /// Pick the output type from a path's extension
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::UnsupportedType`] if the extension is missing
    /// or is not `png`, `jpg` or `jpeg`
    pub fn from_extension(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| unsupported_type("output extension", &path.display()))?;
        extension.parse()
    }
}

impl FromStr for FileType {
    type Err = CollagerError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(unsupported_type("output format", &tag)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => f.write_str("png"),
            Self::Jpeg => f.write_str("jpeg"),
        }
    }
}

/// Destination and encoding for a saved canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    /// File to create, relative paths resolve against the working directory
    pub name: PathBuf,
    /// Encoding to write
    pub file_type: FileType,
}

impl SaveTarget {
    /// Pair a destination with an output type
    pub fn new(name: impl Into<PathBuf>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            file_type,
        }
    }
}

/// Encode `canvas` and write it to `target`
///
/// The destination file is created (or truncated) only after the name has
/// been validated, and is closed on every return path.
///
/// # Errors
///
/// Returns an error if:
/// - The destination name is empty
/// - The destination file cannot be created
/// - Encoding fails
/// - The buffered output cannot be flushed
pub fn save_to(canvas: &RgbaImage, target: &SaveTarget) -> Result<()> {
    if target.name.as_os_str().is_empty() {
        return Err(CollagerError::NoName);
    }

    let file = File::create(&target.name).map_err(|e| CollagerError::FileSystem {
        path: target.name.clone(),
        operation: "create",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let (width, height) = canvas.dimensions();
    let encoded = match target.file_type {
        FileType::Png => PngEncoder::new(&mut writer).write_image(
            canvas.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        FileType::Jpeg => {
            // Baseline JPEG carries no alpha; unpainted pixels come out black
            let rgb: RgbImage = canvas.convert();
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
    };
    encoded.map_err(|e| CollagerError::ImageExport {
        path: target.name.clone(),
        source: e,
    })?;

    writer.flush().map_err(|e| CollagerError::FileSystem {
        path: target.name.clone(),
        operation: "flush",
        source: e,
    })?;

    log::debug!(
        "saved {width}x{height} {} to '{}'",
        target.file_type,
        target.name.display()
    );
    Ok(())
}
