//! Painting decoded images onto a fresh canvas

use crate::io::error::{CollagerError, Result};
use crate::spatial::placement::{self, Advance, Placement};
use crate::spatial::{CellSize, GridSpec};
use image::{DynamicImage, GenericImageView, RgbaImage, imageops};

/// The composed RGBA raster
pub type Canvas = RgbaImage;

/// Work out the grid a set of images would be composed on
///
/// # Errors
///
/// Returns [`CollagerError::NoImages`] for an empty slice, or an invalid
/// parameter error if the canvas size overflows
pub fn grid_for(images: &[DynamicImage], columns: u32, rows: u32) -> Result<GridSpec> {
    let cell = CellSize::fit(images.iter().map(GenericImageView::dimensions))
        .ok_or(CollagerError::NoImages)?;
    GridSpec::new(columns, rows, cell)
}

/// Compose `images` into a `columns` x `rows` collage
///
/// The canvas starts fully transparent. Each image is copied over the canvas
/// at its placement, replacing whatever is underneath; pixels outside the
/// canvas are dropped.
///
/// # Errors
///
/// Returns [`CollagerError::NoImages`] for an empty slice, or an invalid
/// parameter error if the canvas size overflows
pub fn compose(
    images: &[DynamicImage],
    columns: u32,
    rows: u32,
    advance: Advance,
) -> Result<Canvas> {
    let grid = grid_for(images, columns, rows)?;
    let (canvas_width, canvas_height) = grid.canvas_dimensions();
    log::debug!(
        "composing {} images on {columns}x{rows} grid of {}x{} cells ({canvas_width}x{canvas_height} canvas)",
        images.len(),
        grid.cell.width,
        grid.cell.height,
    );

    let sizes = images.iter().map(GenericImageView::dimensions);
    let placements = placement::plan(sizes, &grid, advance);

    let mut canvas = Canvas::new(canvas_width, canvas_height);
    for (image, placement) in images.iter().zip(&placements) {
        paint(&mut canvas, image, placement);
    }

    Ok(canvas)
}

/// Copy `image` onto `canvas` at `placement`, clipping to the canvas bounds
pub fn paint(canvas: &mut Canvas, image: &DynamicImage, placement: &Placement) {
    let (canvas_width, canvas_height) = canvas.dimensions();
    if placement.is_clipped(canvas_width, canvas_height) {
        log::trace!(
            "image at ({}, {}) exceeds {canvas_width}x{canvas_height} canvas, clipping",
            placement.x,
            placement.y
        );
    }
    if placement.is_visible(canvas_width, canvas_height) {
        imageops::replace(canvas, image, placement.x, placement.y);
    }
}
