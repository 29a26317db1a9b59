//! Encoder settings and command-line defaults

// Encoder settings
/// JPEG quality used for every save (top of the 1-100 range)
pub const JPEG_QUALITY: u8 = 100;

// Diagnostics
/// Number of leading bytes shown when an input signature is not recognised
pub const SIGNATURE_PREVIEW_LEN: usize = 12;

// Default values for configurable parameters
/// Destination used when no output path is given
pub const DEFAULT_OUTPUT: &str = "collage.png";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
