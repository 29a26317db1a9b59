//! Cell and canvas geometry for collage grids
//!
//! Every grid uses a single shared cell size: the largest width and the
//! largest height found among the input images. Smaller images are never
//! scaled up, so they leave part of their cell unpainted.

use crate::io::error::{Result, invalid_parameter};

const RGBA_CHANNELS: u64 = 4;

/// Shared size of every cell in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Widest input width in pixels
    pub width: u32,
    /// Tallest input height in pixels
    pub height: u32,
}

impl CellSize {
    /// Fit a cell around every `(width, height)` pair
    ///
    /// Width and height are maximised independently, so the cell may be
    /// larger than any single input. Returns `None` for an empty input.
    pub fn fit<I>(sizes: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        sizes.into_iter().fold(None, |cell, (width, height)| {
            Some(match cell {
                None => Self { width, height },
                Some(Self {
                    width: max_width,
                    height: max_height,
                }) => Self {
                    width: max_width.max(width),
                    height: max_height.max(height),
                },
            })
        })
    }
}

/// Requested grid together with the canvas size it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of columns requested
    pub columns: u32,
    /// Number of rows requested
    pub rows: u32,
    /// Shared cell size
    pub cell: CellSize,
    canvas_width: u32,
    canvas_height: u32,
}

impl GridSpec {
    /// Derive the canvas size for a `columns` x `rows` grid of `cell`
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension overflows `u32`, or if
    /// the RGBA pixel buffer for the canvas would not fit in memory
    pub fn new(columns: u32, rows: u32, cell: CellSize) -> Result<Self> {
        let canvas_width = columns.checked_mul(cell.width).ok_or_else(|| {
            invalid_parameter(
                "columns",
                &columns,
                &format!("canvas width overflows with {} px cells", cell.width),
            )
        })?;
        let canvas_height = rows.checked_mul(cell.height).ok_or_else(|| {
            invalid_parameter(
                "rows",
                &rows,
                &format!("canvas height overflows with {} px cells", cell.height),
            )
        })?;
        let buffer_len = u64::from(canvas_width)
            .checked_mul(u64::from(canvas_height))
            .and_then(|pixels| pixels.checked_mul(RGBA_CHANNELS))
            .and_then(|len| usize::try_from(len).ok());
        if buffer_len.is_none() {
            return Err(invalid_parameter(
                "grid",
                &format!("{columns}x{rows}"),
                &format!("{canvas_width}x{canvas_height} RGBA canvas overflows addressable memory"),
            ));
        }

        Ok(Self {
            columns,
            rows,
            cell,
            canvas_width,
            canvas_height,
        })
    }

    /// Canvas width in pixels (`columns * cell.width`)
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels (`rows * cell.height`)
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Canvas `(width, height)` in pixels
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Number of nominal cells in the grid
    pub const fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}
