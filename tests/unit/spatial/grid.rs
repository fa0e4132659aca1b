//! Tests for monotonic grid slot filling

#[cfg(test)]
mod tests {
    use puzzlestitch::io::error::PuzzleError;
    use puzzlestitch::spatial::Grid;

    // Tests a new grid has the requested shape and no filled slots
    // Verified by swapping rows and columns in the array shape
    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.filled(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.get(3, 2), None);
    }

    // Tests filled slots are readable by (column, row)
    // Verified by storing at [column, row] instead of [row, column]
    #[test]
    fn test_fill_and_get_use_column_row_order() {
        let mut grid = Grid::new(3, 2);

        assert!(grid.fill(2, 0, 7).is_ok());
        assert!(grid.fill(0, 1, 9).is_ok());

        assert_eq!(grid.get(2, 0), Some(7));
        assert_eq!(grid.get(0, 1), Some(9));
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.filled(), 2);
        assert_eq!(
            grid.to_rows(),
            vec![vec![None, None, Some(7)], vec![Some(9), None, None]]
        );
    }

    // Tests a slot can't be overwritten once filled
    // Verified by removing the occupancy check
    #[test]
    fn test_fill_refuses_occupied_slot() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.fill(1, 1, 0).is_ok());

        let result = grid.fill(1, 1, 3);
        assert!(matches!(
            result,
            Err(PuzzleError::GridConflict {
                column: 1,
                row: 1,
                ..
            })
        ));
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.filled(), 1);
    }

    // Tests positions outside the grid are rejected
    // Verified by clamping coordinates into range
    #[test]
    fn test_fill_refuses_out_of_range() {
        let mut grid = Grid::new(2, 2);

        assert!(grid.fill(2, 0, 1).is_err());
        assert!(grid.fill(0, 5, 1).is_err());
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.get(9, 9), None);
    }

    // Tests completion is reached exactly when every slot is filled
    // Verified by comparing against rows instead of total slots
    #[test]
    fn test_grid_completion() {
        let mut grid = Grid::new(2, 2);
        for (index, (column, row)) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            assert!(!grid.is_complete());
            assert!(grid.fill(column, row, index).is_ok());
        }
        assert!(grid.is_complete());
    }
}
