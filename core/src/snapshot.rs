use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of a board's cells, handed to whatever renders the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub cells: Array2<bool>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.grid().to_owned(),
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> Option<bool> {
        self.cells.get(coords.to_grid_index()).copied()
    }

    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Rows in top to bottom order, each as its cells from left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().collect()
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_board_copies_cells() {
        let mut board = Board::from_lit_coords((2, 3), &[(1, 0)], PostWinPolicy::Freeze).unwrap();

        let snapshot = board.snapshot();
        board.activate(0, 2);

        assert_eq!(snapshot.size, (2, 3));
        assert_eq!(snapshot.is_lit((1, 0)), Some(true));
        assert_eq!(snapshot.is_lit((0, 2)), Some(false));
        assert_eq!(snapshot.is_lit((2, 0)), None);
        assert!(!snapshot.is_won());
        assert_ne!(board.snapshot(), snapshot);
    }

    #[test]
    fn rows_follow_row_col_layout() {
        let board =
            Board::from_lit_coords((3, 3), &[(1, 0), (1, 1)], PostWinPolicy::Freeze).unwrap();

        assert_eq!(
            board.snapshot().to_rows(),
            vec![
                vec![false, false, false],
                vec![true, true, false],
                vec![false, false, false],
            ]
        );
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let snapshot = BoardSnapshot {
            size: (2, 2),
            cells: Array2::from_elem([1, 2], false),
        };

        assert_eq!(snapshot.validate(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn snapshot_survives_json() {
        let board = Board::from_lit_coords((2, 2), &[(0, 1)], PostWinPolicy::Freeze).unwrap();
        let snapshot = board.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.validate(), Ok(()));
    }
}
