/// Command-line arguments and the collage runner
pub mod cli;
/// Fixed defaults and encoder settings
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// PNG and JPEG export of composed canvases
pub mod image;
/// Terminal progress display
pub mod progress;
