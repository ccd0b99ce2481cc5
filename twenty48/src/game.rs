use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    movement, CellSnapshot, Direction, EmptyGridExhausted, Grid, MoveOutcome, SpawnEvent, Tile,
    TileId, Transition, TurnError, GRID_SIZE,
};

/// The ordering barrier between the slide and the merge phase of a move.
///
/// A rendering collaborator that animates tile movement blocks inside
/// [`awaiting_slides`](Self::awaiting_slides) until all slide transitions
/// have visually completed; only then does the engine mutate the displayed
/// values by applying the merges. Without an animation layer the barrier is
/// a synchronous no-op.
pub trait TransitionObserver {
    fn awaiting_slides(&mut self, transitions: &[Transition]);
}

/// The no-op barrier for frontends without an animation layer.
pub struct NoAnimation;

impl TransitionObserver for NoAnimation {
    fn awaiting_slides(&mut self, _transitions: &[Transition]) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// No move underway. The only state in which board state should be read.
    Idle,
    /// A move is between its slide and its commit; directional commands are
    /// rejected until it completes.
    MoveInProgress,
    /// No direction has a legal move left.
    GameOver,
}

/// Orchestrates the turn lifecycle: validate the direction, slide, merge,
/// spawn, re-check legality of all four directions.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    rng: StdRng,
    next_tile_id: u32,
    state: GameState,
}

impl Game {
    /// Starts a new game with two spawned tiles.
    pub fn new(seed: u64) -> Self {
        let mut game = Game {
            grid: Grid::new(),
            rng: StdRng::seed_from_u64(seed),
            next_tile_id: 0,
            state: GameState::Idle,
        };
        for _ in 0..2 {
            game.spawn_tile().unwrap(); // Can't fail, the grid is fresh
        }
        game
    }

    /// Builds a game from per-row tile values, 0 meaning an empty cell.
    ///
    /// Mainly useful for frontends restoring a known position and for
    /// exercising specific board shapes in tests.
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE], seed: u64) -> Self {
        let mut grid = Grid::new();
        let mut next_tile_id = 0;
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let tile = Tile::new(TileId(next_tile_id), value, x as u8, y as u8);
                next_tile_id += 1;
                grid.cell_mut(y * GRID_SIZE + x).set_resident(tile);
            }
        }
        Game {
            grid,
            rng: StdRng::seed_from_u64(seed),
            next_tile_id,
            state: GameState::Idle,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True iff sliding in this direction would shift at least one tile.
    pub fn can_move(&self, direction: Direction) -> bool {
        movement::can_move(&self.grid, direction)
    }

    fn any_move_possible(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.can_move(direction))
    }

    /// Performs one turn without an animation barrier.
    pub fn attempt_move(&mut self, direction: Direction) -> Result<MoveOutcome, TurnError> {
        self.attempt_move_with(direction, &mut NoAnimation)
    }

    /// Performs one turn: slide, await the observer, merge, spawn, terminal
    /// check.
    ///
    /// An illegal direction is not an error; it reports `moved: false` and
    /// leaves the board untouched. `Err` is only returned for invariant
    /// violations, after which the board state must not be trusted.
    pub fn attempt_move_with<O: TransitionObserver>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> Result<MoveOutcome, TurnError> {
        match self.state {
            GameState::Idle => {}
            GameState::MoveInProgress => return Ok(MoveOutcome::rejected(false)),
            GameState::GameOver => return Ok(MoveOutcome::rejected(true)),
        }

        if !self.can_move(direction) {
            // The terminal condition does not require a full grid, only
            // that no direction has a legal move.
            let game_over = !self.any_move_possible();
            if game_over {
                self.state = GameState::GameOver;
            }
            return Ok(MoveOutcome::rejected(game_over));
        }

        self.state = GameState::MoveInProgress;
        let mut transitions = Vec::new();
        movement::slide_tiles(&mut self.grid, direction, &mut transitions);

        // All slides of this move must be acknowledged before any merge
        // mutates a value. On Err the state deliberately stays
        // MoveInProgress: the board is corrupt and further moves are
        // rejected.
        observer.awaiting_slides(&transitions);
        movement::apply_pending_merges(&mut self.grid)?;

        // A legal move always frees at least the moved tile's source cell,
        // so the spawn cannot exhaust the grid.
        let spawned = self.spawn_tile()?;

        let game_over = !self.any_move_possible();
        self.state = if game_over {
            GameState::GameOver
        } else {
            GameState::Idle
        };

        Ok(MoveOutcome {
            moved: true,
            transitions,
            spawned: Some(spawned),
            game_over,
        })
    }

    fn spawn_tile(&mut self) -> Result<SpawnEvent, EmptyGridExhausted> {
        let idx = self.grid.random_empty_cell(&mut self.rng)?;
        let value = if self.rng.gen::<bool>() { 2 } else { 4 };
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;

        let cell = self.grid.cell_mut(idx);
        let (x, y) = (cell.x(), cell.y());
        cell.set_resident(Tile::new(id, value, x, y));
        Ok(SpawnEvent { tile: id, x, y, value })
    }

    /// A read-only view of the full board, one entry per cell.
    pub fn snapshot(&self) -> Vec<CellSnapshot> {
        self.grid
            .cells()
            .iter()
            .map(|cell| CellSnapshot {
                x: cell.x(),
                y: cell.y(),
                tile: cell.resident().map(|tile| (tile.id(), tile.value())),
            })
            .collect()
    }

    /// The value of the highest tile on the board.
    pub fn highest_tile(&self) -> u32 {
        self.grid
            .cells()
            .iter()
            .filter_map(|cell| cell.resident().map(Tile::value))
            .max()
            .unwrap_or(0)
    }
}
