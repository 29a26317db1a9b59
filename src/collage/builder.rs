//! Incremental collection of source images and collage entry point

use crate::codec::decode::{
    decode_detected, decode_jpeg, decode_png, decode_registered, decode_webp,
};
use crate::collage::compose::{Canvas, compose};
use crate::io::error::{CollagerError, Result};
use crate::io::image::{SaveTarget, save_to};
use crate::spatial::Advance;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Collects decoded images in order and composes them into a collage
///
/// Every `add_*` call either appends exactly one image or fails and leaves
/// the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct CollageBuilder {
    images: Vec<DynamicImage>,
    advance: Advance,
}

impl CollageBuilder {
    /// Create an empty builder using natural-size cursor advance
    pub const fn new() -> Self {
        Self {
            images: Vec::new(),
            advance: Advance::Natural,
        }
    }

    /// Choose how the cursor advances between images
    #[must_use]
    pub const fn with_advance(mut self, advance: Advance) -> Self {
        self.advance = advance;
        self
    }

    /// Cursor advance policy in use
    pub const fn advance(&self) -> Advance {
        self.advance
    }

    /// Images collected so far, in compositing order
    pub fn images(&self) -> &[DynamicImage] {
        &self.images
    }

    /// Number of images collected
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no image has been added yet
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append an already decoded image
    pub fn push(&mut self, image: DynamicImage) {
        let (width, height) = image.dimensions();
        log::debug!("added image #{} ({width}x{height})", self.images.len());
        self.images.push(image);
    }

    fn append_with(
        &mut self,
        bytes: &[u8],
        decode: fn(&[u8]) -> Result<DynamicImage>,
    ) -> Result<()> {
        let image = decode(bytes)?;
        self.push(image);
        Ok(())
    }

    /// Decode PNG bytes and append the image
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::Decode`] if the bytes are not a valid PNG
    pub fn add_png(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_with(bytes, decode_png)
    }

    /// Decode JPEG bytes and append the image
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::Decode`] if the bytes are not a valid JPEG
    pub fn add_jpeg(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_with(bytes, decode_jpeg)
    }

    /// Decode `WebP` bytes and append the image
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::Decode`] if the bytes are not a valid `WebP`
    pub fn add_webp(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_with(bytes, decode_webp)
    }

    /// Decode through the registered decoders and append the image
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::Decode`] if no registered decoder accepts the
    /// bytes or decoding fails
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_with(bytes, decode_registered)
    }

    /// Sniff the content type, decode accordingly and append the image
    ///
    /// # Errors
    ///
    /// Returns [`CollagerError::UnsupportedType`] if the bytes are not PNG,
    /// JPEG or `WebP`, and [`CollagerError::Decode`] if decoding fails
    pub fn add_detected(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_with(bytes, decode_detected)
    }

    /// Read an image file and append it using content sniffing
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read, otherwise the
    /// same errors as [`CollageBuilder::add_detected`]
    pub fn add_path(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).map_err(|e| CollagerError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source: e,
        })?;
        self.add_detected(&bytes)
    }

    /// Compose the collected images into a `columns` x `rows` collage
    ///
    /// When `target` is given the canvas is also saved. A failed save is
    /// reported as [`CollagerError::SaveFailed`], which still carries the
    /// composed canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No images have been added
    /// - The canvas size overflows
    /// - Saving to `target` fails
    pub fn collage(&self, columns: u32, rows: u32, target: Option<&SaveTarget>) -> Result<Canvas> {
        let canvas = compose(&self.images, columns, rows, self.advance)?;

        if let Some(target) = target
            && let Err(source) = save_to(&canvas, target)
        {
            return Err(CollagerError::SaveFailed {
                canvas: Box::new(canvas),
                source: Box::new(source),
            });
        }

        Ok(canvas)
    }
}
