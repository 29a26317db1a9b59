//! Byte-signature matching for input image formats
//!
//! Content sniffing uses the strict content-type signatures below. The decoder
//! registry in [`crate::codec::decode`] carries its own, shorter magic numbers.

use std::fmt;

/// Input encodings the decoder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG / JFIF
    Jpeg,
    /// `WebP` (lossy or lossless)
    WebP,
}

impl SourceFormat {
    /// All supported input formats in sniffing order
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpeg, Self::WebP];

    /// The matching `image` crate format
    pub const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::WebP => image::ImageFormat::WebP,
        }
    }

    /// Content-type name of the format
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::WebP => "WebP",
        };
        f.write_str(name)
    }
}

/// A masked byte prefix
///
/// A byte `b` at position `i` matches when `b & mask[i] == pattern[i]`.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pattern: &'static [u8],
    mask: &'static [u8],
}

impl Signature {
    /// Prefix that must match exactly
    pub const fn exact(pattern: &'static [u8]) -> Self {
        Self {
            pattern,
            mask: FULL_MASK,
        }
    }

    /// Prefix with per-byte masks; a zero mask byte is a wildcard
    pub const fn masked(pattern: &'static [u8], mask: &'static [u8]) -> Self {
        Self { pattern, mask }
    }

    /// Number of leading bytes this signature inspects
    pub const fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether the signature inspects no bytes at all
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Check whether `bytes` starts with this signature
    pub fn matches(&self, bytes: &[u8]) -> bool {
        bytes.len() >= self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(self.mask.iter().chain(std::iter::repeat(&0xFF)))
                .zip(bytes)
                .all(|((&expected, &mask), &actual)| actual & mask == expected)
    }
}

const FULL_MASK: &[u8] = &[0xFF; 16];

/// Mask for RIFF containers: the four chunk-size bytes are wildcards
pub const RIFF_MASK: &[u8] = &[
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Strict content-type signatures, in sniffing order
pub static CONTENT_SIGNATURES: [(SourceFormat, Signature); 3] = [
    (SourceFormat::Png, Signature::exact(b"\x89PNG\r\n\x1a\n")),
    (SourceFormat::Jpeg, Signature::exact(b"\xFF\xD8\xFF")),
    (
        SourceFormat::WebP,
        Signature::masked(b"RIFF\0\0\0\0WEBPVP", RIFF_MASK),
    ),
];

/// Identify the format of `bytes` from its content-type signature
pub fn sniff(bytes: &[u8]) -> Option<SourceFormat> {
    CONTENT_SIGNATURES
        .iter()
        .find(|(_, signature)| signature.matches(bytes))
        .map(|&(format, _)| format)
}

/// Render the leading bytes of an unrecognised buffer for error messages
pub fn preview(bytes: &[u8], limit: usize) -> String {
    if bytes.is_empty() {
        return "<empty>".to_string();
    }
    let shown = bytes.get(..limit).unwrap_or(bytes);
    let mut out = shown
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if shown.len() < bytes.len() {
        out.push_str(" ..");
    }
    out
}
