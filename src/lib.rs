//! Grid collage composition from PNG, JPEG and `WebP` images
//!
//! Images are decoded into a [`CollageBuilder`], laid out left to right on a
//! grid whose cells are as large as the largest input, and painted onto a
//! single RGBA canvas that can be saved as PNG or JPEG.

#![forbid(unsafe_code)]

/// Input decoding and format detection
pub mod codec;
/// Image collection and compositing
pub mod collage;
/// Input/output operations and error handling
pub mod io;
/// Grid geometry and image placement
pub mod spatial;

pub use collage::{Canvas, CollageBuilder};
pub use io::error::{CollagerError, Result};
pub use io::image::{FileType, SaveTarget, save_to};
pub use spatial::Advance;
