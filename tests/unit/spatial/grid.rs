//! Tests for shared cell sizing and canvas dimension arithmetic

#[cfg(test)]
mod tests {
    use collager::CollagerError;
    use collager::spatial::{CellSize, GridSpec};

    // Tests an empty input has no cell
    // Verified by defaulting to a zero-sized cell
    #[test]
    fn test_fit_empty() {
        assert_eq!(CellSize::fit(std::iter::empty()), None);
    }

    // Tests width and height are maximised independently
    // Verified by keeping the first image's height
    #[test]
    fn test_fit_independent_maxima() {
        let cell = CellSize::fit([(100, 20), (30, 80), (50, 50)]).unwrap();

        assert_eq!(
            cell,
            CellSize {
                width: 100,
                height: 80
            }
        );
    }

    // Tests canvas size is grid size times cell size
    // Verified by swapping columns and rows
    #[test]
    fn test_canvas_dimensions() {
        let cell = CellSize {
            width: 100,
            height: 50,
        };

        let grid = GridSpec::new(3, 2, cell).unwrap();

        assert_eq!(grid.canvas_width(), 300);
        assert_eq!(grid.canvas_height(), 100);
        assert_eq!(grid.canvas_dimensions(), (300, 100));
        assert_eq!(grid.cell_count(), 6);
    }

    // Tests a zero-column grid yields an empty canvas rather than an error
    // Verified by rejecting zero dimensions
    #[test]
    fn test_zero_columns() {
        let cell = CellSize {
            width: 10,
            height: 10,
        };

        let grid = GridSpec::new(0, 1, cell).unwrap();

        assert_eq!(grid.canvas_dimensions(), (0, 10));
    }

    // Tests overflowing canvas dimensions are reported
    // Verified by using wrapping multiplication
    #[test]
    fn test_canvas_overflow() {
        let cell = CellSize {
            width: u32::MAX / 2,
            height: 1,
        };

        let wide = GridSpec::new(3, 1, cell);
        let tall = GridSpec::new(
            1,
            u32::MAX,
            CellSize {
                width: 1,
                height: 2,
            },
        );

        assert!(matches!(
            wide,
            Err(CollagerError::InvalidParameter {
                parameter: "columns",
                ..
            })
        ));
        assert!(matches!(
            tall,
            Err(CollagerError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests a canvas whose pixel buffer cannot be addressed is rejected
    // Verified by checking only the per-axis u32 products
    #[test]
    fn test_canvas_buffer_overflow() {
        let cell = CellSize {
            width: 1,
            height: 1,
        };

        let result = GridSpec::new(u32::MAX, u32::MAX, cell);

        assert!(matches!(
            result,
            Err(CollagerError::InvalidParameter {
                parameter: "grid",
                ..
            })
        ));
    }
}
