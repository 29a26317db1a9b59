//! Grid geometry and image placement
//!
//! This module contains the layout arithmetic, independent of pixels:
//! - Shared cell size and canvas dimensions
//! - Cursor movement and per-image placement

/// Cell and canvas geometry
pub mod grid;
/// Cursor-driven image placement
pub mod placement;

pub use grid::{CellSize, GridSpec};
pub use placement::{Advance, Placement};
