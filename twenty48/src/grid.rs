use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Cell, Direction, EmptyGridExhausted};

pub const GRID_SIZE: usize = 4;
pub const CELLS_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// One directional traversal order of the grid: a sequence of groups
/// (columns or rows), each group ordered so that index 0 is the cell the
/// tiles slide towards.
pub type Grouping = [[usize; GRID_SIZE]; GRID_SIZE];

/// The fixed 4x4 playing field.
///
/// Cells are stored row-major and never added or removed; only their
/// contents mutate. The four traversal groupings are precomputed here so
/// that a single movement algorithm serves all four directions.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    by_column: Grouping,
    by_column_reversed: Grouping,
    by_row: Grouping,
    by_row_reversed: Grouping,
}

fn cell_index(x: usize, y: usize) -> usize {
    y * GRID_SIZE + x
}

impl Grid {
    pub(crate) fn new() -> Self {
        let mut cells = Vec::with_capacity(CELLS_COUNT);
        for idx in 0..CELLS_COUNT {
            cells.push(Cell::new((idx % GRID_SIZE) as u8, (idx / GRID_SIZE) as u8));
        }

        let mut by_column = [[0; GRID_SIZE]; GRID_SIZE];
        let mut by_row = [[0; GRID_SIZE]; GRID_SIZE];
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                // Within a column, index 0 is the topmost cell; within a
                // row, the leftmost.
                by_column[x][y] = cell_index(x, y);
                by_row[y][x] = cell_index(x, y);
            }
        }
        // Reversal only changes traversal order within a group, not which
        // cells belong to it.
        let mut by_column_reversed = by_column;
        let mut by_row_reversed = by_row;
        for group in by_column_reversed.iter_mut().chain(by_row_reversed.iter_mut()) {
            group.reverse();
        }

        Grid {
            cells,
            by_column,
            by_column_reversed,
            by_row,
            by_row_reversed,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: u8, y: u8) -> &Cell {
        &self.cells[cell_index(x as usize, y as usize)]
    }

    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    pub fn num_tiles(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The traversal grouping that makes the movement pass slide tiles
    /// towards the given direction.
    pub(crate) fn grouping(&self, direction: Direction) -> Grouping {
        match direction {
            Direction::Up => self.by_column,
            Direction::Down => self.by_column_reversed,
            Direction::Left => self.by_row,
            Direction::Right => self.by_row_reversed,
        }
    }

    /// Picks uniformly among the empty cells, returning the cell's index.
    ///
    /// Callers must check the terminal condition first; a full grid is a
    /// sequencing error, not undefined behavior.
    pub fn random_empty_cell<R: Rng>(&self, rng: &mut R) -> Result<usize, EmptyGridExhausted> {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect();
        empty.choose(rng).copied().ok_or(EmptyGridExhausted)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{Tile, TileId};

    #[test]
    fn every_coordinate_appears_exactly_once() {
        let grid = Grid::new();
        assert_eq!(grid.cells().len(), CELLS_COUNT);
        for x in 0..GRID_SIZE as u8 {
            for y in 0..GRID_SIZE as u8 {
                let matches = grid
                    .cells()
                    .iter()
                    .filter(|cell| cell.x() == x && cell.y() == y)
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn groupings_traverse_towards_the_move_direction() {
        let grid = Grid::new();

        // "Up" slides towards y == 0, so each group is a column starting
        // at the topmost row.
        let up = grid.grouping(Direction::Up);
        for (x, group) in up.iter().enumerate() {
            for (pos, &idx) in group.iter().enumerate() {
                let cell = &grid.cells()[idx];
                assert_eq!((cell.x(), cell.y()), (x as u8, pos as u8));
            }
        }

        // "Right" slides towards x == GRID_SIZE - 1, so each group is a
        // row starting at the rightmost column.
        let right = grid.grouping(Direction::Right);
        for (y, group) in right.iter().enumerate() {
            for (pos, &idx) in group.iter().enumerate() {
                let cell = &grid.cells()[idx];
                assert_eq!(
                    (cell.x(), cell.y()),
                    ((GRID_SIZE - 1 - pos) as u8, y as u8)
                );
            }
        }
    }

    #[test]
    fn reversed_groupings_contain_the_same_cells() {
        let grid = Grid::new();
        for (group, reversed) in grid
            .grouping(Direction::Up)
            .iter()
            .zip(grid.grouping(Direction::Down).iter())
        {
            let mut flipped = *reversed;
            flipped.reverse();
            assert_eq!(*group, flipped);
        }
    }

    #[test]
    fn random_empty_cell_skips_occupied_cells() {
        let mut grid = Grid::new();
        let mut rng = StdRng::seed_from_u64(7);
        // Occupy everything except one cell
        for idx in 0..CELLS_COUNT - 1 {
            let (x, y) = (grid.cells()[idx].x(), grid.cells()[idx].y());
            grid.cell_mut(idx)
                .set_resident(Tile::new(TileId(idx as u32), 2, x, y));
        }
        for _ in 0..10 {
            assert_eq!(grid.random_empty_cell(&mut rng), Ok(CELLS_COUNT - 1));
        }
    }

    #[test]
    fn random_empty_cell_fails_on_a_full_grid() {
        let mut grid = Grid::new();
        let mut rng = StdRng::seed_from_u64(7);
        for idx in 0..CELLS_COUNT {
            let (x, y) = (grid.cells()[idx].x(), grid.cells()[idx].y());
            grid.cell_mut(idx)
                .set_resident(Tile::new(TileId(idx as u32), 2, x, y));
        }
        assert_eq!(grid.random_empty_cell(&mut rng), Err(EmptyGridExhausted));
    }
}
