//! Error types for decoding, compositing and persistence

use crate::codec::SourceFormat;
use image::RgbaImage;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollagerError {
    /// Bytes did not decode as the requested (or any registered) format
    Decode {
        /// Format the bytes were decoded as, `None` when no registered decoder accepted them
        format: Option<SourceFormat>,
        /// Underlying codec error
        source: image::ImageError,
    },

    /// Input signature or output tag does not name a supported codec
    UnsupportedType {
        /// What was being classified
        context: &'static str,
        /// The offending value, rendered for display
        found: String,
    },

    /// Compositing was attempted before any image was added
    NoImages,

    /// Save requested with an empty destination name
    NoName,

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Encoder failed while writing the canvas
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The canvas was composed but persisting it failed
    ///
    /// The finished canvas travels with the error so callers can still use it.
    SaveFailed {
        /// The composed canvas
        canvas: Box<RgbaImage>,
        /// Why the save failed
        source: Box<CollagerError>,
    },
}

impl CollagerError {
    /// Borrow the composed canvas carried by a [`CollagerError::SaveFailed`]
    pub fn canvas(&self) -> Option<&RgbaImage> {
        match self {
            Self::SaveFailed { canvas, .. } => Some(&**canvas),
            _ => None,
        }
    }

    /// Take the composed canvas out of a [`CollagerError::SaveFailed`]
    pub fn into_canvas(self) -> Option<RgbaImage> {
        match self {
            Self::SaveFailed { canvas, .. } => Some(*canvas),
            _ => None,
        }
    }
}

impl fmt::Display for CollagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode {
                format: Some(format),
                source,
            } => {
                write!(f, "Failed to decode {format} image: {source}")
            }
            Self::Decode {
                format: None,
                source,
            } => {
                write!(f, "Failed to decode image: {source}")
            }
            Self::UnsupportedType { context, found } => {
                write!(f, "Unsupported {context}: {found}")
            }
            Self::NoImages => {
                write!(f, "At least one image must be added before composing a collage")
            }
            Self::NoName => write!(f, "Destination name is empty"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SaveFailed { canvas, source } => {
                write!(
                    f,
                    "Collage of {}x{} was composed but not saved: {source}",
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl std::error::Error for CollagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::SaveFailed { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollagerError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollagerError {
    CollagerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unsupported type error
pub fn unsupported_type(context: &'static str, found: &impl ToString) -> CollagerError {
    CollagerError::UnsupportedType {
        context,
        found: found.to_string(),
    }
}
