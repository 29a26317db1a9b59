/// Format-specific decoding and the decoder registry
pub mod decode;
/// Byte-signature matching for input formats
pub mod signature;

pub use signature::SourceFormat;
