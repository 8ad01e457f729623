use crate::{Coord, Grid};

/// Moore neighborhood of `cell`, clipped at the field edges.
///
/// Corner cells have 3 neighbors, other edge cells 5, inner cells 8.
pub fn neighbors(height: usize, width: usize, cell: Coord) -> impl Iterator<Item = Coord> {
    let (row, col) = cell;
    let rows = row.saturating_sub(1)..(row + 2).min(height);
    let cols = col.saturating_sub(1)..(col + 2).min(width);
    rows.flat_map(move |i| cols.clone().map(move |j| (i, j)))
        .filter(move |&nbr| nbr != cell)
}

pub fn live_neighbors(grid: &Grid, cell: Coord) -> usize {
    neighbors(grid.height(), grid.width(), cell)
        .filter(|&(i, j)| grid.get(i, j))
        .count()
}

/// B3/S23: survival with 2 or 3 live neighbors, birth with exactly 3.
pub fn fate(alive: bool, live_neighbors: usize) -> bool {
    if alive {
        live_neighbors == 2 || live_neighbors == 3
    } else {
        live_neighbors == 3
    }
}
