use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be between 1 and 255")]
    InvalidSize,
    #[error("Light chance must be within [0, 1]")]
    InvalidLightChance,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Cell key must look like `row-col`")]
    InvalidCellKey,
}

pub type Result<T> = core::result::Result<T, GameError>;
