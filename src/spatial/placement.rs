//! Cursor-driven placement of images onto the canvas
//!
//! Images are laid out left to right. After each image the cursor moves
//! right; once it reaches the canvas width it returns to the left edge and
//! moves down. Placement never checks against the requested row count, so
//! surplus images keep flowing below the canvas where painting clips them.

use crate::spatial::grid::{CellSize, GridSpec};

/// How far the cursor moves after an image is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advance {
    /// Move by the painted image's own width and height
    ///
    /// Images smaller than the cell under-advance, so later images drift
    /// off the nominal grid lines.
    #[default]
    Natural,
    /// Move by the shared cell size, keeping a regular grid
    UniformCell,
}

/// Where a single image is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Left edge on the canvas
    pub x: i64,
    /// Top edge on the canvas
    pub y: i64,
    /// Painted width (the image's natural width)
    pub width: u32,
    /// Painted height (the image's natural height)
    pub height: u32,
}

impl Placement {
    /// Whether part of the image falls outside a canvas of the given size
    pub fn is_clipped(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.x < 0
            || self.y < 0
            || self.x + i64::from(self.width) > i64::from(canvas_width)
            || self.y + i64::from(self.height) > i64::from(canvas_height)
    }

    /// Whether any pixel of the image lands on a canvas of the given size
    pub fn is_visible(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.x < i64::from(canvas_width)
            && self.y < i64::from(canvas_height)
            && self.x + i64::from(self.width) > 0
            && self.y + i64::from(self.height) > 0
    }
}

/// Running paint offset
#[derive(Debug, Clone)]
pub struct Cursor {
    dx: i64,
    dy: i64,
    wrap_at: i64,
    cell: CellSize,
    advance: Advance,
}

impl Cursor {
    /// Cursor at the top-left corner of `grid`
    pub const fn new(grid: &GridSpec, advance: Advance) -> Self {
        Self {
            dx: 0,
            dy: 0,
            wrap_at: grid.canvas_width() as i64,
            cell: grid.cell,
            advance,
        }
    }

    /// Current `(dx, dy)` offset
    pub const fn position(&self) -> (i64, i64) {
        (self.dx, self.dy)
    }

    /// Place an image of the given size at the cursor, then advance past it
    pub fn place(&mut self, width: u32, height: u32) -> Placement {
        let placement = Placement {
            x: self.dx,
            y: self.dy,
            width,
            height,
        };

        let (step_x, step_y) = match self.advance {
            Advance::Natural => (width, height),
            Advance::UniformCell => (self.cell.width, self.cell.height),
        };

        self.dx += i64::from(step_x);
        if self.dx >= self.wrap_at {
            self.dx = 0;
            self.dy += i64::from(step_y);
        }

        placement
    }
}

/// Lay out images of the given sizes, in order, on `grid`
pub fn plan<I>(sizes: I, grid: &GridSpec, advance: Advance) -> Vec<Placement>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut cursor = Cursor::new(grid, advance);
    sizes
        .into_iter()
        .map(|(width, height)| cursor.place(width, height))
        .collect()
}
