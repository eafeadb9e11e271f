// rules.rs - Neighbor counting and the generation transition

use crate::grid::Grid;

/// Live cells in the 3x3 block around `(row, col)`, center excluded.
/// The block is clipped at the board edge; there is no wraparound.
///
/// # Panics
/// If `(row, col)` is outside the grid.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    if let Err(err) = grid.check(row, col) {
        panic!("{err}");
    }
    let row_start = row.saturating_sub(1);
    let row_end = (row + 1).min(grid.rows() - 1);
    let col_start = col.saturating_sub(1);
    let col_end = (col + 1).min(grid.cols() - 1);

    let mut count = 0;
    for r in row_start..=row_end {
        for c in col_start..=col_end {
            if (r, c) != (row, col) && grid.get(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Computes the next generation from `grid` alone. The input is never
/// written to, so every cell sees the same snapshot.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let alive = match count_live_neighbors(grid, row, col) {
                2 => grid.get(row, col), // Survival only, never birth
                3 => true,               // Birth or survival
                _ => false,              // Under/overpopulation
            };
            next.set(row, col, alive);
        }
    }
    next
}
