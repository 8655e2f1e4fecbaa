//! Square-grid transposition. One-directional: the space padding makes the
//! original length unrecoverable, so there is no decode.

use tracing::debug;

/// Pads `text` with spaces up to the next perfect square, lays it out row by
/// row on a square grid and reads it back column by column.
pub fn encode(text: &str) -> String {
    let mut grid: Vec<char> = text.chars().collect();
    let side = side_for(grid.len());
    debug!(cipher = "column_transpose", len = grid.len(), side, "encoding");
    grid.resize(side * side, ' ');

    let mut out = String::with_capacity(grid.len());
    for col in 0..side {
        for row in 0..side {
            out.push(grid[row * side + col]);
        }
    }
    out
}

/// Smallest `side` with `side * side >= len`.
fn side_for(len: usize) -> usize {
    let mut side = (len as f64).sqrt() as usize;
    while side * side < len {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= len {
        side -= 1;
    }
    side
}
