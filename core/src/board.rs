use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::*;

/// Lights Out game state: the lit/unlit grid plus the derived win flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Array2<bool>,
    size: Coord2,
    won: bool,
    post_win: PostWinPolicy,
}

impl Board {
    pub fn new(config: GameConfig, generator: impl LightsGenerator) -> Result<Self> {
        config.validate()?;

        let grid = generator.generate(config)?;
        if grid.dim() != (config.size.0.into(), config.size.1.into()) {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self::from_parts(grid, config.size, config.post_win))
    }

    /// Builds a `rows` x `cols` board where every cell is lit with `light_chance`, one draw from
    /// `rng` per cell.
    pub fn create<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        light_chance: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let config = GameConfig::new((rows, cols), light_chance)?;
        Self::new(config, RandomLightsGenerator::new(rng))
    }

    pub fn from_grid(grid: Array2<bool>, post_win: PostWinPolicy) -> Result<Self> {
        let (rows, cols) = grid.dim();
        let size = match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(rows), Ok(cols)) if rows > 0 && cols > 0 => (rows, cols),
            _ => return Err(GameError::InvalidBoardShape),
        };

        Ok(Self::from_parts(grid, size, post_win))
    }

    pub fn from_lit_coords(
        size: Coord2,
        lit_coords: &[Coord2],
        post_win: PostWinPolicy,
    ) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut grid: Array2<bool> = Array2::default(size.to_grid_index());
        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            grid[coords.to_grid_index()] = true;
        }

        Ok(Self::from_parts(grid, size, post_win))
    }

    fn from_parts(grid: Array2<bool>, size: Coord2, post_win: PostWinPolicy) -> Self {
        let won = check_for_win(&grid);
        let board = Self {
            grid,
            size,
            won,
            post_win,
        };
        log::debug!(
            "New {}x{} board, {} lit, already won: {}",
            size.0,
            size.1,
            board.lit_count(),
            won
        );
        board
    }

    /// Flips the cell at `(row, col)` and its orthogonal neighbors, skipping any that fall outside
    /// the board. Total over all inputs.
    pub fn activate(&mut self, row: isize, col: isize) -> ActivateOutcome {
        if self.won && !self.post_win.accepts_moves_after_win() {
            log::debug!("Board already won, ignoring activation at ({row}, {col})");
            return ActivateOutcome::NoChange;
        }

        let mut toggled = 0;
        for coords in self.grid.iter_toggled((row, col)) {
            let cell = &mut self.grid[coords.to_grid_index()];
            *cell = !*cell;
            toggled += 1;
        }

        if toggled == 0 {
            log::trace!("Activation at ({row}, {col}) is off the board");
            return ActivateOutcome::NoChange;
        }

        self.won = check_for_win(&self.grid);
        log::trace!("Activated ({row}, {col}), toggled {toggled} cells");

        if self.won {
            log::debug!("All lights off after activating ({row}, {col})");
            ActivateOutcome::Won
        } else {
            ActivateOutcome::Toggled
        }
    }

    pub fn activate_key(&mut self, key: CellKey) -> ActivateOutcome {
        let (row, col) = key.coords();
        self.activate(row, col)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn state(&self) -> BoardState {
        if self.won {
            BoardState::Won
        } else {
            BoardState::Active
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn post_win_policy(&self) -> PostWinPolicy {
        self.post_win
    }

    pub fn get(&self, coords: Coord2) -> Option<bool> {
        self.grid.get(coords.to_grid_index()).copied()
    }

    pub fn lit_count(&self) -> CellCount {
        // at most 255 * 255 cells
        self.grid.iter().filter(|&&lit| lit).count() as CellCount
    }

    pub fn grid(&self) -> ArrayView2<'_, bool> {
        self.grid.view()
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_grid_index()]
    }
}

fn check_for_win(grid: &Array2<bool>) -> bool {
    grid.iter().all(|&lit| !lit)
}
