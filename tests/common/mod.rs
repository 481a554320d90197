#![allow(dead_code)]

use life_seed::{CellState, Coord, ToroidalGrid};

pub fn grid_with(width: i64, height: i64, alive: &[(i64, i64)]) -> ToroidalGrid<CellState> {
    let mut grid = ToroidalGrid::new(width, height, CellState::Dead).unwrap();
    for &(x, y) in alive {
        grid.set(x, y, CellState::Alive);
    }
    grid
}

pub fn alive_cells(grid: &ToroidalGrid<CellState>) -> Vec<Coord> {
    grid.iter()
        .filter(|(_, s)| s.is_alive())
        .map(|(c, _)| c)
        .collect()
}

/// Live cells shifted so the top-left of their bounding box is the origin.
pub fn normalized(cells: &[Coord]) -> Vec<Coord> {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let mut out: Vec<Coord> = cells
        .iter()
        .map(|c| Coord::new(c.x - min_x, c.y - min_y))
        .collect();
    out.sort();
    out
}

/// ASCII picture of the grid, one row per line, `#` alive and `.` dead.
pub fn render(grid: &ToroidalGrid<CellState>) -> String {
    let mut out = String::new();
    for (c, s) in grid.iter() {
        out.push(if s.is_alive() { '#' } else { '.' });
        if c.x as usize == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}
