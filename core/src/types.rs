use core::fmt;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts.
pub type CellCount = u16;

/// Two-dimensional board coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Unchecked `(row, col)` pair as produced by `row ± 1` style arithmetic at the board edges.
pub type SignedCoord2 = (isize, isize);

/// Conversion from board coordinates to an ndarray `[row, col]` index.
pub trait ToGridIndex {
    fn to_grid_index(self) -> [usize; 2];
}

impl ToGridIndex for Coord2 {
    fn to_grid_index(self) -> [usize; 2] {
        let (row, col) = self;
        [row.into(), col.into()]
    }
}

pub trait ToggleIterExt {
    /// Iterates the in-bounds cells flipped by activating `center`.
    fn iter_toggled(&self, center: SignedCoord2) -> ToggleIter;
}

impl<T> ToggleIterExt for Array2<T> {
    fn iter_toggled(&self, center: SignedCoord2) -> ToggleIter {
        ToggleIter::new(center, self.dim())
    }
}

/// The activated cell itself followed by its four orthogonal neighbors.
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it lands inside `bounds`.
fn apply_delta(
    coords: SignedCoord2,
    delta: (isize, isize),
    bounds: (usize, usize),
) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = usize::try_from(row.checked_add(dr)?).ok()?;
    if next_row >= max_row {
        return None;
    }

    let next_col = usize::try_from(col.checked_add(dc)?).ok()?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row.try_into().ok()?, next_col.try_into().ok()?))
}

#[derive(Debug)]
pub struct ToggleIter {
    center: SignedCoord2,
    bounds: (usize, usize),
    pending: core::array::IntoIter<(isize, isize), 5>,
}

impl ToggleIter {
    fn new(center: SignedCoord2, bounds: (usize, usize)) -> Self {
        Self {
            center,
            bounds,
            pending: DISPLACEMENTS.into_iter(),
        }
    }
}

impl Iterator for ToggleIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, bounds) = (self.center, self.bounds);
        self.pending.find_map(|delta| apply_delta(center, delta, bounds))
    }
}

/// Textual `row-col` cell identifier, as attached to rendered cells.
///
/// Components are signed so keys derived at the board edges still parse; they are bounds checked
/// only when used for activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub row: isize,
    pub col: isize,
}

impl CellKey {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub const fn coords(self) -> SignedCoord2 {
        (self.row, self.col)
    }
}

impl From<Coord2> for CellKey {
    fn from((row, col): Coord2) -> Self {
        Self::new(row.into(), col.into())
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        // skip the first char so a leading minus sign is not taken as the separator
        let (sep, _) = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .ok_or(GameError::InvalidCellKey)?;

        let row = s[..sep].parse().map_err(|_| GameError::InvalidCellKey)?;
        let col = s[sep + 1..]
            .parse()
            .map_err(|_| GameError::InvalidCellKey)?;

        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn toggle_iter_yields_center_and_orthogonal_neighbors() {
        let grid: Array2<bool> = Array2::default([3, 3]);

        let toggled: Vec<_> = grid.iter_toggled((1, 1)).collect();

        assert_eq!(toggled, [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn toggle_iter_clips_at_corner() {
        let grid: Array2<bool> = Array2::default([3, 3]);

        let toggled: Vec<_> = grid.iter_toggled((0, 0)).collect();

        assert_eq!(toggled, [(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn toggle_iter_reaches_into_grid_from_outside() {
        let grid: Array2<bool> = Array2::default([2, 2]);

        assert_eq!(grid.iter_toggled((-1, 0)).collect::<Vec<_>>(), [(0, 0)]);
        assert_eq!(grid.iter_toggled((-1, -1)).count(), 0);
        assert_eq!(grid.iter_toggled((isize::MAX, isize::MIN)).count(), 0);
    }

    #[test]
    fn cell_key_parses_and_formats() {
        let key: CellKey = "3-4".parse().unwrap();
        assert_eq!(key, CellKey::new(3, 4));
        assert_eq!(key.to_string(), "3-4");

        let edge: CellKey = "-1--1".parse().unwrap();
        assert_eq!(edge.coords(), (-1, -1));
        assert_eq!(edge.to_string(), "-1--1");

        assert_eq!(CellKey::from((2, 0)).to_string(), "2-0");
    }

    #[test]
    fn cell_key_rejects_malformed_text() {
        for text in ["", "12", "1-", "-3", "a-b", "1-2-3"] {
            assert_eq!(
                text.parse::<CellKey>(),
                Err(GameError::InvalidCellKey),
                "{text:?}"
            );
        }
    }
}
