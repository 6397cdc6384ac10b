//! Test data generators for coordinate vectors and velocity grids.
//!
//! All grids are `Vec<f64>` in latitude-major order (row 0 first) unless a
//! function says otherwise. These generators create predictable, verifiable
//! patterns that can be checked after reorientation.

/// Creates an evenly spaced coordinate vector.
///
/// # Example
///
/// ```
/// use test_utils::create_coords;
///
/// assert_eq!(create_coords(10.0, 10.0, 3), vec![10.0, 20.0, 30.0]);
/// assert_eq!(create_coords(30.0, -10.0, 3), vec![30.0, 20.0, 10.0]);
/// ```
pub fn create_coords(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `row * 1000 + col`
///
/// This makes it easy to verify that rows were reordered correctly
/// by checking that grid[row][col] == row * 1000 + col.
///
/// # Arguments
///
/// * `nx` - Number of columns (longitude)
/// * `ny` - Number of rows (latitude)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);   // 10 * 5
/// assert_eq!(grid[0], 0.0);     // row=0, col=0
/// assert_eq!(grid[1], 1.0);     // row=0, col=1
/// assert_eq!(grid[10], 1000.0); // row=1, col=0
/// ```
pub fn create_test_grid(nx: usize, ny: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nx * ny);
    for row in 0..ny {
        for col in 0..nx {
            data.push((row * 1000 + col) as f64);
        }
    }
    data
}

/// Creates a U-component (eastward) velocity grid in m/s.
///
/// U varies by latitude row, simulating a trade-wind/westerlies pattern:
/// -20 m/s in the first row up to +20 m/s towards the last.
pub fn create_u_velocity_grid(nx: usize, ny: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nx * ny);
    for row in 0..ny {
        for _col in 0..nx {
            let lat_factor = (row as f64 / ny as f64 - 0.5) * 2.0; // -1 to 1
            data.push(lat_factor * 20.0);
        }
    }
    data
}

/// Creates a V-component (northward) velocity grid in m/s.
///
/// V varies by longitude column: -15 m/s in the west up to +15 m/s.
pub fn create_v_velocity_grid(nx: usize, ny: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nx * ny);
    for _row in 0..ny {
        for col in 0..nx {
            let lon_factor = (col as f64 / nx as f64 - 0.5) * 2.0; // -1 to 1
            data.push(lon_factor * 15.0);
        }
    }
    data
}

/// Creates a grid with NaN values at specified positions.
///
/// Useful for testing missing data handling.
///
/// # Arguments
///
/// * `nx` - Number of columns
/// * `ny` - Number of rows
/// * `nan_positions` - List of (row, col) positions that should be NaN
///
/// # Returns
///
/// [`create_test_grid`] values with NaN at the given positions.
pub fn create_grid_with_nans(nx: usize, ny: usize, nan_positions: &[(usize, usize)]) -> Vec<f64> {
    let mut data = create_test_grid(nx, ny);
    for &(row, col) in nan_positions {
        if col < nx && row < ny {
            data[row * nx + col] = f64::NAN;
        }
    }
    data
}

/// Transposes a latitude-major grid into longitude-major order.
///
/// Useful for building variables stored as `(longitude, latitude)`.
pub fn transpose_grid(data: &[f64], nx: usize, ny: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len());
    for col in 0..nx {
        for row in 0..ny {
            out.push(data[row * nx + col]);
        }
    }
    out
}

/// Reverses the row order of a latitude-major grid.
pub fn reverse_rows(data: &[f64], nx: usize) -> Vec<f64> {
    data.chunks(nx).rev().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0); // row=0, col=0
        assert_eq!(grid[1], 1.0); // row=0, col=1
        assert_eq!(grid[10], 1000.0); // row=1, col=0
        assert_eq!(grid[11], 1001.0); // row=1, col=1
    }

    #[test]
    fn test_create_coords() {
        assert_eq!(create_coords(-10.0, 5.0, 5), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert!(create_coords(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_velocity_grids_range() {
        let u = create_u_velocity_grid(20, 10);
        let v = create_v_velocity_grid(20, 10);
        assert_eq!(u.len(), 200);
        assert_eq!(v.len(), 200);
        assert!(u.iter().all(|x| (-20.0..=20.0).contains(x)));
        assert!(v.iter().all(|x| (-15.0..=15.0).contains(x)));
        // U constant along a row, V constant along a column
        assert_eq!(u[0], u[19]);
        assert_eq!(v[0], v[20]);
    }

    #[test]
    fn test_create_grid_with_nans() {
        let grid = create_grid_with_nans(10, 10, &[(5, 5), (0, 0)]);
        assert!(grid[0].is_nan()); // (0, 0)
        assert!(grid[55].is_nan()); // row 5 * 10 + col 5
        assert_eq!(grid[1], 1.0);
    }

    #[test]
    fn test_transpose_and_reverse() {
        let grid = create_test_grid(3, 2);
        assert_eq!(
            transpose_grid(&grid, 3, 2),
            vec![0.0, 1000.0, 1.0, 1001.0, 2.0, 1002.0]
        );
        assert_eq!(
            reverse_rows(&grid, 3),
            vec![1000.0, 1001.0, 1002.0, 0.0, 1.0, 2.0]
        );
    }
}
