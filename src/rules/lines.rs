//! Precomputed win lines.
//!
//! Lines are listed rows first, then columns, then the main diagonal and the
//! anti-diagonal. `Board::winning_line` reports the first complete line in
//! this order.

/// Side length of the default board.
pub const DEFAULT_SIZE: usize = 3;

/// Side length of the large board.
pub const MAX_SIZE: usize = 4;

/// Win lines of the 3×3 board.
pub static LINES_3X3: [&[usize]; 8] = [
    &[0, 1, 2],
    &[3, 4, 5],
    &[6, 7, 8],
    &[0, 3, 6],
    &[1, 4, 7],
    &[2, 5, 8],
    &[0, 4, 8],
    &[2, 4, 6],
];

/// Win lines of the 4×4 board. Only the two full diagonals count.
pub static LINES_4X4: [&[usize]; 10] = [
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[8, 9, 10, 11],
    &[12, 13, 14, 15],
    &[0, 4, 8, 12],
    &[1, 5, 9, 13],
    &[2, 6, 10, 14],
    &[3, 7, 11, 15],
    &[0, 5, 10, 15],
    &[3, 6, 9, 12],
];

/// Map a requested size onto a supported one. Anything but 4 becomes 3.
#[must_use]
pub const fn normalize_size(size: usize) -> usize {
    if size == MAX_SIZE {
        MAX_SIZE
    } else {
        DEFAULT_SIZE
    }
}

/// Win lines for a board of the given (normalized) size.
#[must_use]
pub fn win_lines(size: usize) -> &'static [&'static [usize]] {
    match normalize_size(size) {
        MAX_SIZE => &LINES_4X4,
        _ => &LINES_3X3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_size() {
        assert_eq!(normalize_size(3), 3);
        assert_eq!(normalize_size(4), 4);
        assert_eq!(normalize_size(0), 3);
        assert_eq!(normalize_size(5), 3);
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(win_lines(3).len(), 8);
        assert_eq!(win_lines(4).len(), 10);
        assert_eq!(win_lines(7).len(), 8);
    }

    /// Every line has `size` distinct in-range cells.
    #[test]
    fn test_lines_well_formed() {
        for size in [3, 4] {
            for line in win_lines(size) {
                assert_eq!(line.len(), size);
                assert!(line.iter().all(|&i| i < size * size));
                let mut sorted = line.to_vec();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), size);
            }
        }
    }

    /// Rows and columns are generated from the grid, diagonals are the two long ones.
    #[test]
    fn test_lines_match_grid() {
        for size in [3, 4] {
            let lines = win_lines(size);
            for r in 0..size {
                let row: Vec<usize> = (0..size).map(|c| r * size + c).collect();
                assert_eq!(lines[r], row.as_slice());
                let col: Vec<usize> = (0..size).map(|c| c * size + r).collect();
                assert_eq!(lines[size + r], col.as_slice());
            }
            let main: Vec<usize> = (0..size).map(|i| i * size + i).collect();
            let anti: Vec<usize> = (0..size).map(|i| i * size + size - 1 - i).collect();
            assert_eq!(lines[2 * size], main.as_slice());
            assert_eq!(lines[2 * size + 1], anti.as_slice());
        }
    }
}
