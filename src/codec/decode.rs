//! Format-specific decoding and the static decoder registry

use crate::codec::signature::{RIFF_MASK, Signature, SourceFormat, sniff};
use crate::io::configuration::SIGNATURE_PREVIEW_LEN;
use crate::io::error::{CollagerError, Result, unsupported_type};
use image::DynamicImage;
use image::error::{ImageError, ImageFormatHint, UnsupportedError, UnsupportedErrorKind};

/// A decoder entry: the magic number it accepts and how to decode
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    /// Format this entry decodes
    pub format: SourceFormat,
    /// Leading bytes the decoder accepts
    pub magic: Signature,
    /// Decoding function
    pub decode: fn(&[u8]) -> Result<DynamicImage>,
}

/// Registered decoders, consulted in order by [`decode_registered`]
pub static REGISTRY: [Registration; 3] = [
    Registration {
        format: SourceFormat::Png,
        magic: Signature::exact(b"\x89PNG\r\n\x1a\n"),
        decode: decode_png,
    },
    Registration {
        format: SourceFormat::Jpeg,
        magic: Signature::exact(b"\xFF\xD8"),
        decode: decode_jpeg,
    },
    Registration {
        format: SourceFormat::WebP,
        magic: Signature::masked(b"RIFF\0\0\0\0WEBPVP8", RIFF_MASK),
        decode: decode_webp,
    },
];

/// Decode `bytes` as the given format
///
/// # Errors
///
/// Returns [`CollagerError::Decode`] if the bytes do not parse as `format`
pub fn decode_as(bytes: &[u8], format: SourceFormat) -> Result<DynamicImage> {
    image::load_from_memory_with_format(bytes, format.image_format()).map_err(|source| {
        CollagerError::Decode {
            format: Some(format),
            source,
        }
    })
}

/// Decode `bytes` as PNG
///
/// # Errors
///
/// Returns [`CollagerError::Decode`] on malformed or truncated PNG data
pub fn decode_png(bytes: &[u8]) -> Result<DynamicImage> {
    decode_as(bytes, SourceFormat::Png)
}

/// Decode `bytes` as JPEG
///
/// # Errors
///
/// Returns [`CollagerError::Decode`] on malformed or truncated JPEG data
pub fn decode_jpeg(bytes: &[u8]) -> Result<DynamicImage> {
    decode_as(bytes, SourceFormat::Jpeg)
}

/// Decode `bytes` as `WebP`
///
/// # Errors
///
/// Returns [`CollagerError::Decode`] on malformed or truncated `WebP` data
pub fn decode_webp(bytes: &[u8]) -> Result<DynamicImage> {
    decode_as(bytes, SourceFormat::WebP)
}

/// Find the registered decoder whose magic number prefixes `bytes`
pub fn lookup(bytes: &[u8]) -> Option<&'static Registration> {
    REGISTRY.iter().find(|entry| entry.magic.matches(bytes))
}

/// Decode through the first registered decoder that accepts `bytes`
///
/// # Errors
///
/// Returns [`CollagerError::Decode`] if no decoder accepts the signature or
/// the chosen decoder fails
pub fn decode_registered(bytes: &[u8]) -> Result<DynamicImage> {
    let entry = lookup(bytes).ok_or_else(|| CollagerError::Decode {
        format: None,
        source: ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Unknown,
            UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
        )),
    })?;
    (entry.decode)(bytes)
}

/// Sniff the content type of `bytes` and decode accordingly
///
/// # Errors
///
/// Returns [`CollagerError::UnsupportedType`] if the signature is not PNG,
/// JPEG or `WebP`, and [`CollagerError::Decode`] if decoding then fails
pub fn decode_detected(bytes: &[u8]) -> Result<DynamicImage> {
    let format = sniff(bytes).ok_or_else(|| {
        unsupported_type(
            "input signature",
            &crate::codec::signature::preview(bytes, SIGNATURE_PREVIEW_LEN),
        )
    })?;
    log::trace!("sniffed {} ({})", format, format.mime_type());
    decode_as(bytes, format)
}
