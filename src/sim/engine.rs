use crate::grid::ToroidalGrid;
use crate::model::{CellState, Coord};

use super::rule::LifeRule;

/// Applies a [`LifeRule`] to a grid one generation at a time.
///
/// Every neighbor count in a step is taken from the generation being
/// replaced: the engine scans the untouched grid, collects the cells whose
/// state changes, and only then writes them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifeEngine {
    rule: LifeRule,
}

impl LifeEngine {
    pub fn new(rule: LifeRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> LifeRule {
        self.rule
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    pub fn live_neighbors(grid: &ToroidalGrid<CellState>, x: i64, y: i64) -> u8 {
        grid.neighbors(x, y)
            .into_iter()
            .filter(|s| s.is_alive())
            .count() as u8
    }

    /// Number of live cells in the grid.
    pub fn population(grid: &ToroidalGrid<CellState>) -> usize {
        grid.iter().filter(|(_, s)| s.is_alive()).count()
    }

    /// Advance `grid` by one generation. Returns how many cells changed state.
    pub fn step(&self, grid: &mut ToroidalGrid<CellState>) -> usize {
        let changes: Vec<(Coord, CellState)> = grid
            .iter()
            .filter_map(|(c, &state)| {
                let next = self
                    .rule
                    .next_state(state, Self::live_neighbors(grid, c.x, c.y));
                (next != state).then_some((c, next))
            })
            .collect();

        for &(c, state) in &changes {
            grid.set(c.x, c.y, state);
        }
        changes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: i64, height: i64, alive: &[(i64, i64)]) -> ToroidalGrid<CellState> {
        let mut grid = ToroidalGrid::new(width, height, CellState::Dead).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, CellState::Alive);
        }
        grid
    }

    fn alive_cells(grid: &ToroidalGrid<CellState>) -> Vec<Coord> {
        grid.iter()
            .filter(|(_, s)| s.is_alive())
            .map(|(c, _)| c)
            .collect()
    }

    #[test]
    fn empty_grid_stays_empty() {
        let engine = LifeEngine::default();
        let mut grid = grid_with(8, 8, &[]);
        assert_eq!(engine.step(&mut grid), 0);
        assert_eq!(LifeEngine::population(&grid), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let engine = LifeEngine::default();
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let mut grid = grid_with(5, 5, &horizontal);

        assert_eq!(engine.step(&mut grid), 4);
        assert_eq!(
            alive_cells(&grid),
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );

        engine.step(&mut grid);
        assert_eq!(grid, grid_with(5, 5, &horizontal));
    }

    #[test]
    fn block_is_still() {
        let engine = LifeEngine::default();
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut grid = grid_with(6, 6, &block);
        assert_eq!(engine.step(&mut grid), 0);
        assert_eq!(grid, grid_with(6, 6, &block));
    }

    #[test]
    fn lone_cell_dies() {
        let engine = LifeEngine::default();
        let mut grid = grid_with(4, 4, &[(1, 1)]);
        assert_eq!(engine.step(&mut grid), 1);
        assert_eq!(LifeEngine::population(&grid), 0);
    }

    #[test]
    fn update_uses_previous_generation() {
        // Writing cells back during the scan would bring (2,1) alive before
        // (1,2) is counted, giving (1,2) two live neighbors so it survives.
        let engine = LifeEngine::default();
        let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        engine.step(&mut grid);
        assert!(!grid.get(1, 2).is_alive());
        assert!(!grid.get(3, 2).is_alive());
        assert_eq!(LifeEngine::population(&grid), 3);
    }

    #[test]
    fn tromino_becomes_block() {
        let engine = LifeEngine::default();
        let mut grid = grid_with(6, 6, &[(2, 1), (1, 2), (2, 2)]);
        engine.step(&mut grid);
        assert_eq!(grid, grid_with(6, 6, &[(1, 1), (2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn live_neighbors_wrap() {
        let grid = grid_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(LifeEngine::live_neighbors(&grid, 0, 0), 3);
        assert_eq!(LifeEngine::live_neighbors(&grid, 3, 3), 2);
    }

    #[test]
    fn custom_rule() {
        // B1/S: every dead neighbor of a lone cell is born, the cell dies.
        let engine = LifeEngine::new(LifeRule::parse("B1/S").unwrap());
        let mut grid = grid_with(5, 5, &[(2, 2)]);
        engine.step(&mut grid);
        assert_eq!(LifeEngine::population(&grid), 8);
        assert!(!grid.get(2, 2).is_alive());
    }
}
